//! DragSlider Render Library
//!
//! Drawing of the slider behind a small painter abstraction.
//! The default implementation uses Vello for GPU-accelerated rendering.

pub mod palette;
mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use palette::{Appearance, SliderPalette, DISABLED_OPACITY};
pub use renderer::{
    badge_path, crosshair_path, draw_slider, RenderResult, RendererError, SliderFrame,
    SliderPainter, BADGE_MARGIN, BADGE_SIZE, BODY_BORDER_WIDTH, BODY_RADIUS, CROSSHAIR_DASH,
    FOCUS_RING_RADIUS, HANDLE_RADIUS,
};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloSliderRenderer;
