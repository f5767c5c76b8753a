//! Mapping between slider values and screen positions.

use kurbo::{Point, Rect};

use crate::range::SliderRange;

/// Inset from the control bounds to the trackpad body.
pub const BODY_INSET: f64 = 1.0;

/// Padding between the trackpad body and the drawable interior.
pub const INTERIOR_PADDING: f64 = 5.0;

/// Direction in which increasing y values are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAxis {
    /// Larger y values appear higher on screen.
    #[default]
    Up,
    /// Larger y values appear lower on screen.
    Down,
}

/// Normalize `value` into `[0, 1]` along `[min, max]`.
///
/// Returns `None` for zero-width, inverted or non-finite intervals.
pub fn normalize_axis(value: f64, min: f64, max: f64) -> Option<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return None;
    }
    let t = (value - min) / span;
    t.is_finite().then(|| t.clamp(0.0, 1.0))
}

/// Maps slider values into the drawable interior of the control bounds.
///
/// Screen coordinates have y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderMapping {
    bounds: Rect,
    range: SliderRange,
    vertical: VerticalAxis,
}

impl SliderMapping {
    /// Create a mapping for a control occupying `bounds`.
    pub fn new(bounds: Rect, range: SliderRange) -> Self {
        Self {
            bounds,
            range,
            vertical: VerticalAxis::Up,
        }
    }

    /// Set the vertical axis direction.
    pub fn with_vertical_axis(mut self, vertical: VerticalAxis) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn vertical_axis(&self) -> VerticalAxis {
        self.vertical
    }

    /// The trackpad body rectangle.
    pub fn body(&self) -> Rect {
        shrink(self.bounds, BODY_INSET)
    }

    /// The padded interior the crosshair spans.
    pub fn interior(&self) -> Rect {
        shrink(self.body(), INTERIOR_PADDING)
    }

    /// Screen position of a slider value.
    ///
    /// An axis that cannot be mapped (frozen range) places the marker at the
    /// centre of the interior on that axis.
    pub fn value_to_screen(&self, value: Point) -> Point {
        let inner = self.interior();
        let tx = normalize_axis(value.x, self.range.min_x, self.range.max_x).unwrap_or(0.5);
        let ty = normalize_axis(value.y, self.range.min_y, self.range.max_y).unwrap_or(0.5);

        let x = inner.x0 + tx * inner.width();
        let y = match self.vertical {
            VerticalAxis::Up => inner.y1 - ty * inner.height(),
            VerticalAxis::Down => inner.y0 + ty * inner.height(),
        };
        Point::new(x, y)
    }

    /// Convert a screen-space drag translation (y down) into the slider's
    /// translation convention (y along increasing values).
    pub fn screen_translation(&self, dx: f64, dy: f64) -> kurbo::Vec2 {
        match self.vertical {
            VerticalAxis::Up => kurbo::Vec2::new(dx, -dy),
            VerticalAxis::Down => kurbo::Vec2::new(dx, dy),
        }
    }
}

/// Shrink a rectangle on all sides, collapsing to its centre when too small.
fn shrink(rect: Rect, amount: f64) -> Rect {
    let rect = rect.abs();
    let dx = amount.min(rect.width() / 2.0);
    let dy = amount.min(rect.height() / 2.0);
    Rect::new(rect.x0 + dx, rect.y0 + dy, rect.x1 - dx, rect.y1 - dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        // Interior becomes (6, 6) - (106, 206)
        Rect::new(0.0, 0.0, 112.0, 212.0)
    }

    #[test]
    fn test_interior_insets() {
        let mapping = SliderMapping::new(bounds(), SliderRange::default());
        assert_eq!(mapping.body(), Rect::new(1.0, 1.0, 111.0, 211.0));
        assert_eq!(mapping.interior(), Rect::new(6.0, 6.0, 106.0, 206.0));
    }

    #[test]
    fn test_value_to_screen_y_up() {
        let mapping = SliderMapping::new(bounds(), SliderRange::new(0.0, 100.0, 0.0, 100.0));
        let min = mapping.value_to_screen(Point::new(0.0, 0.0));
        assert!((min.x - 6.0).abs() < f64::EPSILON);
        assert!((min.y - 206.0).abs() < f64::EPSILON);

        let mid = mapping.value_to_screen(Point::new(50.0, 50.0));
        assert!((mid.x - 56.0).abs() < f64::EPSILON);
        assert!((mid.y - 106.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_value_to_screen_y_down() {
        let mapping = SliderMapping::new(bounds(), SliderRange::new(0.0, 100.0, 0.0, 100.0))
            .with_vertical_axis(VerticalAxis::Down);
        let p = mapping.value_to_screen(Point::new(100.0, 25.0));
        assert!((p.x - 106.0).abs() < f64::EPSILON);
        assert!((p.y - 56.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_range() {
        let range = SliderRange::new(-1000.0, 1000.0, -1000.0, 1000.0);
        let mapping = SliderMapping::new(bounds(), range);
        let origin = mapping.value_to_screen(Point::ZERO);
        assert_eq!(origin, mapping.interior().center());
    }

    #[test]
    fn test_zero_width_axis_is_centred() {
        let mapping = SliderMapping::new(bounds(), SliderRange::new(1000.0, 1000.0, 0.0, 100.0));
        let p = mapping.value_to_screen(Point::new(1000.0, 100.0));
        assert!((p.x - 56.0).abs() < f64::EPSILON);
        assert!((p.y - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inverted_axis_is_centred() {
        let mapping = SliderMapping::new(bounds(), SliderRange::new(0.0, 100.0, 100.0, 0.0));
        let p = mapping.value_to_screen(Point::new(0.0, 50.0));
        assert!(p.y.is_finite());
        assert!((p.y - 106.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_axis_guards() {
        assert_eq!(normalize_axis(5.0, 0.0, 10.0), Some(0.5));
        assert_eq!(normalize_axis(50.0, 0.0, 10.0), Some(1.0));
        assert_eq!(normalize_axis(5.0, 3.0, 3.0), None);
        assert_eq!(normalize_axis(5.0, 0.0, f64::INFINITY), None);
        assert_eq!(normalize_axis(f64::NAN, 0.0, 1.0), None);
    }

    #[test]
    fn test_tiny_bounds_collapse() {
        let mapping = SliderMapping::new(Rect::new(0.0, 0.0, 4.0, 4.0), SliderRange::default());
        let inner = mapping.interior();
        assert!(inner.width() >= 0.0);
        assert_eq!(inner.center(), Point::new(2.0, 2.0));
    }

    #[test]
    fn test_screen_translation_flips_y() {
        let mapping = SliderMapping::new(bounds(), SliderRange::default());
        assert_eq!(mapping.screen_translation(3.0, 4.0), kurbo::Vec2::new(3.0, -4.0));
        let down = mapping.with_vertical_axis(VerticalAxis::Down);
        assert_eq!(down.screen_translation(3.0, 4.0), kurbo::Vec2::new(3.0, 4.0));
    }
}
