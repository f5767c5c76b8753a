//! DragSlider Demo Application
//!
//! Native window with the bound and listener-driven sliders, and a
//! Vello-drawn preview of the main slider.

mod app;
mod compositor;
mod demo;

pub use app::{App, AppConfig, AppError, AppResult};
pub use demo::{
    default_presets, render_demo_ui, small_config, DemoAction, DemoState, ValueFields,
};
