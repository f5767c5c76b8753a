//! Slider drawing onto an egui painter.

use dragslider_render::SliderPainter;
use egui::{pos2, Color32, CornerRadius, Painter, Pos2, Shadow, Shape, Stroke, StrokeKind};
use kurbo::{BezPath, Circle, PathEl, Rect, Vec2};
use peniko::Color;

/// Convert a peniko color to an egui color.
pub fn to_color32(color: Color) -> Color32 {
    let c = color.to_rgba8();
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn to_pos(x: f64, y: f64) -> Pos2 {
    pos2(x as f32, y as f32)
}

fn to_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_max(to_pos(rect.x0, rect.y0), to_pos(rect.x1, rect.y1))
}

fn to_corner_radius(radius: f64) -> CornerRadius {
    CornerRadius::same(radius.round().clamp(0.0, u8::MAX as f64) as u8)
}

/// Split a path into flattened polylines, one per subpath.
fn polylines(path: &BezPath) -> Vec<Vec<Pos2>> {
    let mut lines: Vec<Vec<Pos2>> = Vec::new();
    kurbo::flatten(path.elements().iter().copied(), 0.25, |el| match el {
        PathEl::MoveTo(p) => lines.push(vec![to_pos(p.x, p.y)]),
        PathEl::LineTo(p) => {
            if let Some(line) = lines.last_mut() {
                line.push(to_pos(p.x, p.y));
            }
        }
        PathEl::ClosePath => {
            if let Some(line) = lines.last_mut() {
                if let Some(&first) = line.first() {
                    line.push(first);
                }
            }
        }
        _ => {}
    });
    lines.retain(|line| line.len() > 1);
    lines
}

/// [`SliderPainter`] backed by an egui [`Painter`].
pub struct EguiPainter<'a> {
    painter: &'a Painter,
}

impl<'a> EguiPainter<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

impl SliderPainter for EguiPainter<'_> {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        self.painter
            .rect_filled(to_rect(rect), to_corner_radius(radius), to_color32(color));
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, width: f64, color: Color) {
        self.painter.rect_stroke(
            to_rect(rect),
            to_corner_radius(radius),
            Stroke::new(width as f32, to_color32(color)),
            StrokeKind::Middle,
        );
    }

    fn shadow_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f64,
        offset: Vec2,
        blur: f64,
        color: Color,
    ) {
        let shadow = Shadow {
            offset: [offset.x.round() as i8, offset.y.round() as i8],
            blur: blur.round().clamp(0.0, u8::MAX as f64) as u8,
            spread: 0,
            color: to_color32(color),
        };
        self.painter
            .add(shadow.as_shape(to_rect(rect), to_corner_radius(radius)));
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Color, dash: Option<[f64; 2]>) {
        let stroke = Stroke::new(width as f32, to_color32(color));
        for line in polylines(path) {
            match dash {
                Some([on, off]) => {
                    self.painter
                        .extend(Shape::dashed_line(&line, stroke, on as f32, off as f32));
                }
                None => {
                    self.painter.add(Shape::line(line, stroke));
                }
            }
        }
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.painter.circle_filled(
            to_pos(circle.center.x, circle.center.y),
            circle.radius as f32,
            to_color32(color),
        );
    }

    fn stroke_circle(&mut self, circle: Circle, width: f64, color: Color) {
        self.painter.circle_stroke(
            to_pos(circle.center.x, circle.center.y),
            circle.radius as f32,
            Stroke::new(width as f32, to_color32(color)),
        );
    }
}
