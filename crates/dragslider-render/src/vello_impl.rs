//! Vello-based renderer implementation.

use kurbo::{Affine, BezPath, Circle, Rect, RoundedRect, Stroke, Vec2};
use peniko::{Color, Fill};
use vello::Scene;

use crate::renderer::{draw_slider, RenderResult, SliderFrame, SliderPainter};

/// Vello-based renderer for the slider.
pub struct VelloSliderRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Transform applied to everything drawn (e.g. the display scale).
    transform: Affine,
}

impl Default for VelloSliderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloSliderRenderer {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            transform: Affine::IDENTITY,
        }
    }

    /// Set the transform used for subsequent frames.
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Rebuild the scene for one frame.
    pub fn render(&mut self, frame: &SliderFrame) -> RenderResult<()> {
        self.scene.reset();
        draw_slider(self, frame)
    }
}

impl SliderPainter for VelloSliderRenderer {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        let shape = RoundedRect::from_rect(rect, radius);
        self.scene.fill(Fill::NonZero, self.transform, color, None, &shape);
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, width: f64, color: Color) {
        let shape = RoundedRect::from_rect(rect, radius);
        self.scene
            .stroke(&Stroke::new(width), self.transform, color, None, &shape);
    }

    fn shadow_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f64,
        offset: Vec2,
        blur: f64,
        color: Color,
    ) {
        self.scene.draw_blurred_rounded_rect(
            self.transform * Affine::translate(offset),
            rect,
            color,
            radius,
            blur,
        );
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Color, dash: Option<[f64; 2]>) {
        let stroke = match dash {
            Some(pattern) => Stroke::new(width).with_dashes(0.0, pattern),
            None => Stroke::new(width),
        };
        self.scene.stroke(&stroke, self.transform, color, None, path);
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.scene.fill(Fill::NonZero, self.transform, color, None, &circle);
    }

    fn stroke_circle(&mut self, circle: Circle, width: f64, color: Color) {
        self.scene
            .stroke(&Stroke::new(width), self.transform, color, None, &circle);
    }
}
