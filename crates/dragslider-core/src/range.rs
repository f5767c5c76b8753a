//! Value range and drag scaling for the slider.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Clamp `value` into `[min, max]`.
///
/// An inverted interval (`min > max`) pins the value at `min`. NaN input
/// collapses to `min` as well, so the result is always a bound or a value
/// inside the interval.
pub fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if min > max {
        return min;
    }
    min.max(value).min(max)
}

/// The pair of closed intervals bounding the slider position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: 1000.0,
            min_y: 0.0,
            max_y: 1000.0,
        }
    }
}

impl SliderRange {
    /// Create a range from per-axis bounds.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Create a range from an origin/size rectangle.
    ///
    /// A negative width or height is kept as-is, which produces an inverted
    /// (frozen) axis rather than silently swapping the bounds.
    pub fn from_origin_size(origin: Point, width: f64, height: f64) -> Self {
        Self {
            min_x: origin.x,
            max_x: origin.x + width,
            min_y: origin.y,
            max_y: origin.y + height,
        }
    }

    /// Create a range spanning a rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x0, rect.x1, rect.y0, rect.y1)
    }

    /// The range as a rectangle (`x0 = min_x`, `y0 = min_y`).
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }

    /// Width of the horizontal interval (may be zero or negative).
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the vertical interval (may be zero or negative).
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether the x axis has positive width.
    pub fn can_change_x(&self) -> bool {
        self.width() > 0.0
    }

    /// Whether the y axis has positive width.
    pub fn can_change_y(&self) -> bool {
        self.height() > 0.0
    }

    pub fn clamp_x(&self, x: f64) -> f64 {
        clamp_axis(x, self.min_x, self.max_x)
    }

    pub fn clamp_y(&self, y: f64) -> f64 {
        clamp_axis(y, self.min_y, self.max_y)
    }

    /// Clamp a point into the range.
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(self.clamp_x(point.x), self.clamp_y(point.y))
    }

    /// Check whether a point lies inside both intervals.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Centre of the range.
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }
}

/// Per-axis factor converting one unit of screen drag into value change.
///
/// Values are not validated: zero disables an axis, negative inverts it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderDelta {
    pub x: f64,
    pub y: f64,
}

impl Default for SliderDelta {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

impl SliderDelta {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same factor on both axes.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Multiply both factors.
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Apply the factors to a screen-space translation.
    pub fn apply(self, translation: Vec2) -> Vec2 {
        Vec2::new(translation.x * self.x, translation.y * self.y)
    }
}

impl From<Vec2> for SliderDelta {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<SliderDelta> for Vec2 {
    fn from(d: SliderDelta) -> Self {
        Vec2::new(d.x, d.y)
    }
}
