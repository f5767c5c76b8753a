//! egui widget for the two-dimensional drag slider.
//!
//! - **Slider**: [`DragSliderUi`] for bound values, [`DragSliderControl`] for
//!   a host-owned control with a listener
//! - **Input**: egui input to slider events
//! - **Painter**: slider drawing through the egui painter
//! - **Layout**: panel frame, readout and value fields

pub mod input;
pub mod layout;
pub mod painter;
pub mod slider;

pub use input::{modifiers_from_egui, DragTracker, FrameInput};
pub use layout::{
    format_position, panel_frame, parse_field, position_readout, section_label, value_field,
};
pub use painter::{to_color32, EguiPainter};
pub use slider::{
    sync_from_binding, sync_to_binding, DragSliderControl, DragSliderUi, ACCESSIBLE_LABEL,
};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Default side length of the slider
    pub const SLIDER: f32 = 200.0;
    /// Side length of the compact slider
    pub const SLIDER_SMALL: f32 = 51.0;
    /// Width of numeric text fields
    pub const FIELD_WIDTH: f32 = 64.0;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
