//! Backend-agnostic drawing of the slider.

use dragslider_core::{InteractionPhase, SliderMapping, SliderRange, SliderState, VerticalAxis};
use kurbo::{Affine, BezPath, Circle, Point, Rect, Vec2};
use peniko::Color;
use thiserror::Error;

use crate::palette::{Appearance, SliderPalette, DISABLED_OPACITY};

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Corner radius of the trackpad body.
pub const BODY_RADIUS: f64 = 4.0;
/// Width of the trackpad border.
pub const BODY_BORDER_WIDTH: f64 = 2.0;
/// Corner radius of the focus ring.
pub const FOCUS_RING_RADIUS: f64 = 4.5;
/// Radius of the position handle.
pub const HANDLE_RADIUS: f64 = 3.0;
/// Side length of the arrow badge glyph.
pub const BADGE_SIZE: f64 = 12.0;
/// Distance of the badge from the right and bottom edges.
pub const BADGE_MARGIN: f64 = 3.5;
/// Dash pattern of the crosshair.
pub const CROSSHAIR_DASH: [f64; 2] = [1.0, 1.0];

/// Drawing primitives a backend provides.
pub trait SliderPainter {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color);

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, width: f64, color: Color);

    /// Soft shadow under a rounded rectangle.
    fn shadow_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f64,
        offset: Vec2,
        blur: f64,
        color: Color,
    );

    /// Stroke an open path, optionally dashed with `[on, off]` lengths.
    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Color, dash: Option<[f64; 2]>);

    fn fill_circle(&mut self, circle: Circle, color: Color);

    fn stroke_circle(&mut self, circle: Circle, width: f64, color: Color);
}

/// Everything needed to draw one frame of the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderFrame {
    /// Control bounds in screen space (y down).
    pub bounds: Rect,
    pub range: SliderRange,
    pub position: Point,
    pub phase: InteractionPhase,
    pub enabled: bool,
    /// Draw the keyboard focus ring.
    pub focused: bool,
    pub appearance: Appearance,
    pub vertical: VerticalAxis,
}

impl SliderFrame {
    /// Snapshot a slider state for drawing into `bounds`.
    pub fn from_state(state: &SliderState, bounds: Rect) -> Self {
        Self {
            bounds,
            range: state.range(),
            position: state.position(),
            phase: state.phase(),
            enabled: state.is_enabled(),
            focused: false,
            appearance: Appearance::default(),
            vertical: VerticalAxis::Up,
        }
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn with_vertical_axis(mut self, vertical: VerticalAxis) -> Self {
        self.vertical = vertical;
        self
    }

    /// Value-to-screen mapping for this frame.
    pub fn mapping(&self) -> SliderMapping {
        SliderMapping::new(self.bounds, self.range).with_vertical_axis(self.vertical)
    }

    /// Palette for this frame, dimmed when disabled.
    pub fn palette(&self) -> SliderPalette {
        let palette = SliderPalette::resolve(self.appearance, self.phase);
        if self.enabled {
            palette
        } else {
            palette.with_opacity(DISABLED_OPACITY)
        }
    }

    /// The badge is hidden while dragging and when disabled.
    pub fn shows_badge(&self) -> bool {
        self.enabled && !self.phase.is_panning()
    }
}

/// The four-way arrow glyph, in a `BADGE_SIZE` square with y down.
pub fn badge_path() -> BezPath {
    let mut path = BezPath::new();
    // Up arrow head and vertical shaft
    path.move_to((4.0, 3.0));
    path.line_to((6.0, 1.0));
    path.line_to((8.0, 3.0));
    path.move_to((6.0, 1.0));
    path.line_to((6.0, 11.0));
    // Down arrow head
    path.move_to((4.0, 9.0));
    path.line_to((6.0, 11.0));
    path.line_to((8.0, 9.0));
    // Horizontal shaft and side heads
    path.move_to((1.0, 6.0));
    path.line_to((11.0, 6.0));
    path.move_to((3.0, 4.0));
    path.line_to((1.0, 6.0));
    path.line_to((3.0, 8.0));
    path.move_to((9.0, 4.0));
    path.line_to((11.0, 6.0));
    path.line_to((9.0, 8.0));
    path
}

/// Crosshair through `center`, spanning `interior`.
pub fn crosshair_path(interior: Rect, center: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((interior.x0, center.y));
    path.line_to((interior.x1, center.y));
    path.move_to((center.x, interior.y0));
    path.line_to((center.x, interior.y1));
    path
}

/// Draw the slider through a painter.
pub fn draw_slider(painter: &mut dyn SliderPainter, frame: &SliderFrame) -> RenderResult<()> {
    let bounds = frame.bounds;
    if !(bounds.x0.is_finite()
        && bounds.y0.is_finite()
        && bounds.x1.is_finite()
        && bounds.y1.is_finite())
    {
        return Err(RendererError::InvalidBounds(format!("{:?}", bounds)));
    }
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return Err(RendererError::InvalidBounds(format!(
            "{}x{}",
            bounds.width(),
            bounds.height()
        )));
    }

    let palette = frame.palette();
    let mapping = frame.mapping();
    let body = mapping.body();

    // Trackpad
    if let Some(shadow) = palette.shadow {
        painter.shadow_rounded_rect(body, BODY_RADIUS, Vec2::new(0.5, 0.5), 2.0, shadow);
    }
    painter.fill_rounded_rect(body, BODY_RADIUS, palette.body_fill);
    painter.stroke_rounded_rect(body, BODY_RADIUS, BODY_BORDER_WIDTH, palette.body_stroke);

    if frame.shows_badge() {
        let origin = Vec2::new(
            bounds.x1 - BADGE_MARGIN - BADGE_SIZE,
            bounds.y1 - BADGE_MARGIN - BADGE_SIZE,
        );
        let badge = Affine::translate(origin) * badge_path();
        painter.stroke_path(&badge, 1.0, palette.badge_stroke, None);
    }

    // Crosshair and handle
    let center = mapping.value_to_screen(frame.position);
    painter.stroke_path(
        &crosshair_path(mapping.interior(), center),
        palette.line_width,
        palette.crosshair_stroke,
        Some(CROSSHAIR_DASH),
    );
    let handle = Circle::new(center, HANDLE_RADIUS);
    painter.fill_circle(handle, palette.handle_fill);
    painter.stroke_circle(handle, palette.line_width, palette.handle_stroke);

    if frame.focused && frame.enabled {
        painter.stroke_rounded_rect(bounds, FOCUS_RING_RADIUS, 2.0, palette.focus_ring);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragslider_core::{SliderConfig, SliderDelta, SliderEvent};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        FillRect(Rect),
        StrokeRect(Rect),
        Shadow,
        Path { dashed: bool, bounds: Rect },
        FillCircle(Point),
        StrokeCircle(Point),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl SliderPainter for Recorder {
        fn fill_rounded_rect(&mut self, rect: Rect, _radius: f64, _color: Color) {
            self.ops.push(Op::FillRect(rect));
        }

        fn stroke_rounded_rect(&mut self, rect: Rect, _radius: f64, _width: f64, _color: Color) {
            self.ops.push(Op::StrokeRect(rect));
        }

        fn shadow_rounded_rect(
            &mut self,
            _rect: Rect,
            _radius: f64,
            _offset: Vec2,
            _blur: f64,
            _color: Color,
        ) {
            self.ops.push(Op::Shadow);
        }

        fn stroke_path(
            &mut self,
            path: &BezPath,
            _width: f64,
            _color: Color,
            dash: Option<[f64; 2]>,
        ) {
            use kurbo::Shape;
            self.ops.push(Op::Path {
                dashed: dash.is_some(),
                bounds: path.bounding_box(),
            });
        }

        fn fill_circle(&mut self, circle: Circle, _color: Color) {
            self.ops.push(Op::FillCircle(circle.center));
        }

        fn stroke_circle(&mut self, circle: Circle, _width: f64, _color: Color) {
            self.ops.push(Op::StrokeCircle(circle.center));
        }
    }

    fn frame(state: &SliderState) -> SliderFrame {
        SliderFrame::from_state(state, Rect::new(0.0, 0.0, 112.0, 212.0))
    }

    fn has_badge(ops: &[Op]) -> bool {
        ops.iter().any(|op| matches!(op, Op::Path { dashed: false, .. }))
    }

    #[test]
    fn test_draw_order_and_handle_position() {
        let state = SliderState::with_config(SliderConfig::new(
            SliderRange::new(0.0, 100.0, 0.0, 100.0),
            SliderDelta::default(),
        ));
        let mut recorder = Recorder::default();
        draw_slider(&mut recorder, &frame(&state)).unwrap();

        assert_eq!(recorder.ops[0], Op::Shadow);
        assert_eq!(recorder.ops[1], Op::FillRect(Rect::new(1.0, 1.0, 111.0, 211.0)));
        assert!(has_badge(&recorder.ops));
        // Position clamps to (100, 100): top right of the interior
        assert!(recorder.ops.contains(&Op::FillCircle(Point::new(106.0, 6.0))));
        assert!(recorder.ops.contains(&Op::Path {
            dashed: true,
            bounds: Rect::new(6.0, 6.0, 106.0, 206.0),
        }));
    }

    #[test]
    fn test_badge_hidden_while_panning() {
        let mut state = SliderState::new();
        state.apply(SliderEvent::PointerDown);
        let mut recorder = Recorder::default();
        draw_slider(&mut recorder, &frame(&state)).unwrap();
        assert!(!has_badge(&recorder.ops));
    }

    #[test]
    fn test_badge_hidden_when_disabled() {
        let mut state = SliderState::new();
        state.set_enabled(false);
        let frame = frame(&state);
        assert!(!frame.shows_badge());
        let mut recorder = Recorder::default();
        draw_slider(&mut recorder, &frame).unwrap();
        assert!(!has_badge(&recorder.ops));
    }

    #[test]
    fn test_badge_sits_in_bottom_right() {
        let mut recorder = Recorder::default();
        draw_slider(&mut recorder, &frame(&SliderState::new())).unwrap();
        let badge = recorder
            .ops
            .iter()
            .find_map(|op| match op {
                Op::Path { dashed: false, bounds } => Some(*bounds),
                _ => None,
            })
            .unwrap();
        assert!((badge.x1 - (112.0 - 3.5 - 1.0)).abs() < 1e-9);
        assert!((badge.y1 - (212.0 - 3.5 - 1.0)).abs() < 1e-9);
    }

    #[test]
    fn test_focus_ring_only_when_focused() {
        let state = SliderState::new();
        let mut recorder = Recorder::default();
        draw_slider(&mut recorder, &frame(&state).with_focus(true)).unwrap();
        assert!(recorder.ops.contains(&Op::StrokeRect(Rect::new(0.0, 0.0, 112.0, 212.0))));

        let mut recorder = Recorder::default();
        draw_slider(&mut recorder, &frame(&state)).unwrap();
        assert!(!recorder.ops.contains(&Op::StrokeRect(Rect::new(0.0, 0.0, 112.0, 212.0))));
    }

    #[test]
    fn test_zero_width_range_draws_centred_marker() {
        let state = SliderState::with_config(SliderConfig::new(
            SliderRange::new(1000.0, 1000.0, 1000.0, 1000.0),
            SliderDelta::default(),
        ));
        let mut recorder = Recorder::default();
        draw_slider(&mut recorder, &frame(&state)).unwrap();
        assert!(recorder.ops.contains(&Op::FillCircle(Point::new(56.0, 106.0))));
    }

    #[test]
    fn test_no_shadow_with_increased_contrast() {
        let appearance = Appearance::DARK.with_increased_contrast(true);
        let mut recorder = Recorder::default();
        let contrast = frame(&SliderState::new()).with_appearance(appearance);
        draw_slider(&mut recorder, &contrast).unwrap();
        assert!(!recorder.ops.contains(&Op::Shadow));
    }

    #[test]
    fn test_invalid_bounds() {
        let state = SliderState::new();
        let mut recorder = Recorder::default();
        let empty = SliderFrame::from_state(&state, Rect::new(10.0, 10.0, 10.0, 40.0));
        assert!(matches!(
            draw_slider(&mut recorder, &empty),
            Err(RendererError::InvalidBounds(_))
        ));
        let nan = SliderFrame::from_state(&state, Rect::new(0.0, 0.0, f64::NAN, 10.0));
        assert!(draw_slider(&mut recorder, &nan).is_err());
        assert!(recorder.ops.is_empty());
    }
}
