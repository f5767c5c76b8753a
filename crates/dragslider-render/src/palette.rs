//! Colors for the slider under the current appearance.

use dragslider_core::InteractionPhase;
use peniko::Color;

/// Opacity of the whole control when disabled.
pub const DISABLED_OPACITY: f32 = 0.4;

/// System appearance the control is drawn under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Appearance {
    /// Dark mode is active.
    pub dark_mode: bool,
    /// The user asked for increased contrast.
    pub increase_contrast: bool,
}

impl Appearance {
    pub const LIGHT: Self = Self {
        dark_mode: false,
        increase_contrast: false,
    };

    pub const DARK: Self = Self {
        dark_mode: true,
        increase_contrast: false,
    };

    pub fn with_increased_contrast(mut self, increase_contrast: bool) -> Self {
        self.increase_contrast = increase_contrast;
        self
    }
}

/// Opaque gray with the given white level in `[0, 1]`.
fn gray(white: f64) -> Color {
    let v = (white.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::from_rgba8(v, v, v, 255)
}

/// Resolved colors and line widths for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPalette {
    /// Trackpad fill.
    pub body_fill: Color,
    /// Trackpad border.
    pub body_stroke: Color,
    /// Drop shadow under the trackpad, if drawn.
    pub shadow: Option<Color>,
    /// Arrow badge stroke.
    pub badge_stroke: Color,
    /// Dashed crosshair lines.
    pub crosshair_stroke: Color,
    /// Handle fill.
    pub handle_fill: Color,
    /// Handle outline.
    pub handle_stroke: Color,
    /// Keyboard focus ring.
    pub focus_ring: Color,
    /// Width of crosshair and handle outlines.
    pub line_width: f64,
}

impl SliderPalette {
    /// Resolve the palette for an appearance and interaction phase.
    pub fn resolve(appearance: Appearance, phase: InteractionPhase) -> Self {
        let Appearance {
            dark_mode: dark,
            increase_contrast: contrast,
        } = appearance;

        let text = if dark { gray(0.9) } else { gray(0.0) };
        let window_background = if dark { gray(0.2) } else { gray(0.93) };

        let body_fill = match phase {
            InteractionPhase::Panning => window_background,
            InteractionPhase::Hovering if dark => gray(0.35),
            InteractionPhase::Hovering => window_background,
            InteractionPhase::Idle if dark => gray(0.2),
            InteractionPhase::Idle => gray(0.85),
        };

        let body_stroke = if contrast {
            text
        } else if dark {
            gray(0.5)
        } else {
            gray(1.0)
        };

        let (handle_fill, crosshair_stroke) = if dark {
            (gray(0.7), gray(1.0))
        } else if contrast {
            (gray(1.0), text)
        } else {
            (gray(1.0), gray(0.1))
        };

        Self {
            body_fill,
            body_stroke,
            shadow: (!contrast).then(|| Color::from_rgba8(0, 0, 0, 77)),
            badge_stroke: if dark { gray(0.4) } else { gray(0.7) },
            crosshair_stroke,
            handle_fill,
            handle_stroke: if dark {
                gray(1.0)
            } else {
                Color::from_rgba8(142, 142, 147, 255)
            },
            focus_ring: Color::from_rgba8(59, 130, 246, 200),
            line_width: if contrast { 1.0 } else { 0.5 },
        }
    }

    /// Multiply every color's alpha.
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            body_fill: self.body_fill.multiply_alpha(opacity),
            body_stroke: self.body_stroke.multiply_alpha(opacity),
            shadow: self.shadow.map(|c| c.multiply_alpha(opacity)),
            badge_stroke: self.badge_stroke.multiply_alpha(opacity),
            crosshair_stroke: self.crosshair_stroke.multiply_alpha(opacity),
            handle_fill: self.handle_fill.multiply_alpha(opacity),
            handle_stroke: self.handle_stroke.multiply_alpha(opacity),
            focus_ring: self.focus_ring.multiply_alpha(opacity),
            line_width: self.line_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(color: Color) -> [u8; 4] {
        let c = color.to_rgba8();
        [c.r, c.g, c.b, c.a]
    }

    #[test]
    fn test_idle_fill_differs_by_mode() {
        let light = SliderPalette::resolve(Appearance::LIGHT, InteractionPhase::Idle);
        let dark = SliderPalette::resolve(Appearance::DARK, InteractionPhase::Idle);
        assert_eq!(rgba(light.body_fill), [217, 217, 217, 255]);
        assert_eq!(rgba(dark.body_fill), [51, 51, 51, 255]);
    }

    #[test]
    fn test_phase_changes_fill() {
        let idle = SliderPalette::resolve(Appearance::DARK, InteractionPhase::Idle);
        let hover = SliderPalette::resolve(Appearance::DARK, InteractionPhase::Hovering);
        assert_ne!(rgba(idle.body_fill), rgba(hover.body_fill));
    }

    #[test]
    fn test_increased_contrast() {
        let appearance = Appearance::LIGHT.with_increased_contrast(true);
        let palette = SliderPalette::resolve(appearance, InteractionPhase::Idle);
        assert!(palette.shadow.is_none());
        assert!((palette.line_width - 1.0).abs() < f64::EPSILON);
        assert_eq!(rgba(palette.body_stroke), [0, 0, 0, 255]);

        let normal = SliderPalette::resolve(Appearance::LIGHT, InteractionPhase::Idle);
        assert!(normal.shadow.is_some());
        assert!((normal.line_width - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_disabled_opacity() {
        let palette = SliderPalette::resolve(Appearance::LIGHT, InteractionPhase::Idle)
            .with_opacity(DISABLED_OPACITY);
        assert_eq!(rgba(palette.body_fill)[3], 102);
    }
}
