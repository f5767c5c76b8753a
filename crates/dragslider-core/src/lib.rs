//! DragSlider Core Library
//!
//! Platform-agnostic model and interaction logic for a two-dimensional drag
//! slider: value range and drag scaling, the pointer/keyboard state machine,
//! listener notifications and value-to-screen mapping.

pub mod config;
pub mod input;
pub mod mapping;
pub mod range;
pub mod slider;

pub use config::{ConfigError, ConfigResult, NamedConfig, PresetList, SliderConfig};
pub use input::{Modifiers, NudgeDirection, SliderEvent};
pub use mapping::{SliderMapping, VerticalAxis};
pub use range::{SliderDelta, SliderRange};
pub use slider::{
    dispatch, CursorAffordance, DragSession, DragSlider, DragSliderListener, EventOutcome,
    InteractionPhase, SliderNotification, SliderState,
};
