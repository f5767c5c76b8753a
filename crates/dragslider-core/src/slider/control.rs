//! The slider control with its registered listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use kurbo::{Point, Rect};

use super::listener::{dispatch, DragSliderListener, EventOutcome};
use super::machine::SliderState;
use super::state::{CursorAffordance, InteractionPhase};
use crate::config::SliderConfig;
use crate::input::SliderEvent;
use crate::range::{SliderDelta, SliderRange};

/// A two-dimensional drag slider.
///
/// Wraps a [`SliderState`] and forwards the notifications it produces to a
/// listener. The listener is held weakly: the slider never keeps it alive,
/// and once the host drops it notifications are silently discarded.
///
/// The control is single-threaded. It holds `Rc` references and is therefore
/// neither `Send` nor `Sync`; create and drive it on the UI thread.
#[derive(Default)]
pub struct DragSlider {
    state: SliderState,
    listener: Option<Weak<RefCell<dyn DragSliderListener>>>,
}

impl DragSlider {
    /// Create a slider with the default range, delta and position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slider with the given configuration.
    pub fn with_config(config: SliderConfig) -> Self {
        Self {
            state: SliderState::with_config(config),
            listener: None,
        }
    }

    /// Register the listener. Replaces any previous one.
    pub fn set_listener<L: DragSliderListener + 'static>(&mut self, listener: &Rc<RefCell<L>>) {
        let listener: Rc<RefCell<dyn DragSliderListener>> = listener.clone();
        self.listener = Some(Rc::downgrade(&listener));
    }

    /// Remove the registered listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Whether a live listener is registered.
    pub fn has_listener(&self) -> bool {
        self.listener
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Deliver one input event and notify the listener.
    pub fn handle_event(&mut self, event: SliderEvent) -> EventOutcome {
        let outcome = self.state.apply(event);
        self.notify(outcome);
        outcome
    }

    fn notify(&self, outcome: EventOutcome) {
        if matches!(outcome, EventOutcome::Ignored | EventOutcome::Updated) {
            return;
        }
        let Some(listener) = self.listener.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        match listener.try_borrow_mut() {
            Ok(mut listener) => dispatch(&mut *listener, outcome),
            Err(_) => log::warn!("Slider listener is busy, dropped {:?}", outcome),
        };
    }

    /// The underlying state.
    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn range(&self) -> SliderRange {
        self.state.range()
    }

    pub fn set_range(&mut self, range: SliderRange) {
        self.state.set_range(range);
    }

    pub fn rect(&self) -> Rect {
        self.state.rect()
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.state.set_rect(rect);
    }

    pub fn delta(&self) -> SliderDelta {
        self.state.delta()
    }

    pub fn set_delta(&mut self, delta: SliderDelta) {
        self.state.set_delta(delta);
    }

    pub fn config(&self) -> SliderConfig {
        self.state.config()
    }

    pub fn apply_config(&mut self, config: SliderConfig) {
        self.state.apply_config(config);
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.set_enabled(enabled);
    }

    /// Whether the control accepts keyboard focus.
    pub fn accepts_focus(&self) -> bool {
        self.state.accepts_focus()
    }

    pub fn position(&self) -> Point {
        self.state.position()
    }

    pub fn set_position(&mut self, position: Point) {
        self.state.set_position(position);
    }

    pub fn x(&self) -> f64 {
        self.state.x()
    }

    pub fn set_x(&mut self, x: f64) {
        self.state.set_x(x);
    }

    pub fn y(&self) -> f64 {
        self.state.y()
    }

    pub fn set_y(&mut self, y: f64) {
        self.state.set_y(y);
    }

    pub fn phase(&self) -> InteractionPhase {
        self.state.phase()
    }

    pub fn cursor(&self) -> CursorAffordance {
        self.state.cursor()
    }
}
