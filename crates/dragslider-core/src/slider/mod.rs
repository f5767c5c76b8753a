//! Slider interaction: state machine, drag sessions and listener dispatch.
//!
//! - [`SliderState`] is plain data and handles one [`SliderEvent`] at a time.
//! - [`DragSlider`] wraps the state and forwards notifications to a listener.
//!
//! [`SliderEvent`]: crate::input::SliderEvent

mod control;
mod listener;
mod machine;
mod session;
mod state;

pub use control::DragSlider;
pub use listener::{dispatch, DragSliderListener, EventOutcome, SliderNotification};
pub use machine::{SliderState, DEFAULT_POSITION};
pub use session::DragSession;
pub use state::{CursorAffordance, InteractionPhase};
