//! The slider interaction state machine.

use kurbo::{Point, Rect, Vec2};

use super::listener::{EventOutcome, SliderNotification};
use super::session::DragSession;
use super::state::{CursorAffordance, InteractionPhase};
use crate::config::SliderConfig;
use crate::input::{Modifiers, NudgeDirection, SliderEvent, NUDGE_STEP};
use crate::range::{SliderDelta, SliderRange};

/// Default position of a new slider.
pub const DEFAULT_POSITION: Point = Point::new(500.0, 500.0);

/// Complete state of one slider, independent of any UI toolkit.
///
/// The position is kept inside the range on every mutation. Events are
/// handled one at a time through [`SliderState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    range: SliderRange,
    delta: SliderDelta,
    enabled: bool,
    position: Point,
    hovered: bool,
    session: Option<DragSession>,
}

impl Default for SliderState {
    fn default() -> Self {
        let range = SliderRange::default();
        Self {
            range,
            delta: SliderDelta::default(),
            enabled: true,
            position: range.clamp(DEFAULT_POSITION),
            hovered: false,
            session: None,
        }
    }
}

impl SliderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slider with the given configuration.
    pub fn with_config(config: SliderConfig) -> Self {
        let mut state = Self::default();
        state.apply_config(config);
        state
    }

    pub fn range(&self) -> SliderRange {
        self.range
    }

    /// Replace the range. The position is re-clamped silently.
    pub fn set_range(&mut self, range: SliderRange) {
        self.range = range;
        self.position = range.clamp(self.position);
    }

    /// The range as a rectangle.
    pub fn rect(&self) -> Rect {
        self.range.to_rect()
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.set_range(SliderRange::from_rect(rect));
    }

    pub fn delta(&self) -> SliderDelta {
        self.delta
    }

    pub fn set_delta(&mut self, delta: SliderDelta) {
        self.delta = delta;
    }

    /// Current range and delta.
    pub fn config(&self) -> SliderConfig {
        SliderConfig::new(self.range, self.delta)
    }

    /// Apply range and delta together.
    pub fn apply_config(&mut self, config: SliderConfig) {
        self.set_delta(config.delta);
        self.set_range(config.range);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the control accepts keyboard focus.
    pub fn accepts_focus(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the control.
    ///
    /// Disabling abandons any drag in progress without notifications and
    /// clears the hover flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            if self.session.take().is_some() {
                log::debug!("Slider disabled mid-drag, session abandoned");
            }
            self.hovered = false;
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Assign the position, clamped to the range. No notification is emitted.
    pub fn set_position(&mut self, position: Point) {
        self.position = self.range.clamp(position);
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn set_x(&mut self, x: f64) {
        self.position.x = self.range.clamp_x(x);
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn set_y(&mut self, y: f64) {
        self.position.y = self.range.clamp_y(y);
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_panning(&self) -> bool {
        self.session.is_some()
    }

    /// The active drag session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Current interaction phase.
    pub fn phase(&self) -> InteractionPhase {
        if self.session.is_some() {
            InteractionPhase::Panning
        } else if self.hovered {
            InteractionPhase::Hovering
        } else {
            InteractionPhase::Idle
        }
    }

    /// Cursor the host should display.
    pub fn cursor(&self) -> CursorAffordance {
        if !self.enabled {
            return CursorAffordance::Default;
        }
        self.phase().cursor()
    }

    /// Handle one input event.
    pub fn apply(&mut self, event: SliderEvent) -> EventOutcome {
        if !self.enabled {
            return EventOutcome::Ignored;
        }

        match event {
            SliderEvent::PointerEntered => self.set_hovered(true),
            SliderEvent::PointerExited => self.set_hovered(false),
            SliderEvent::PointerDown => self.begin_drag(),
            SliderEvent::DragSample {
                translation,
                modifiers,
            } => self.drag_to(translation, modifiers),
            SliderEvent::PointerUp => self.end_drag(),
            SliderEvent::Cancel => self.cancel_drag(),
            SliderEvent::Nudge {
                direction,
                modifiers,
            } => self.nudge(direction, modifiers),
        }
    }

    fn set_hovered(&mut self, hovered: bool) -> EventOutcome {
        if self.hovered == hovered {
            return EventOutcome::Ignored;
        }
        self.hovered = hovered;
        EventOutcome::Updated
    }

    fn begin_drag(&mut self) -> EventOutcome {
        if self.session.is_some() {
            return EventOutcome::Ignored;
        }
        self.session = Some(DragSession::begin(self.position));
        log::debug!("Drag started at ({:.2}, {:.2})", self.position.x, self.position.y);
        EventOutcome::Notified(SliderNotification::DragStarted(self.position))
    }

    fn drag_to(&mut self, translation: Vec2, modifiers: Modifiers) -> EventOutcome {
        let Some(session) = self.session.as_mut() else {
            return EventOutcome::Ignored;
        };

        let previous = session.last_translation;
        let Some(increment) = session.advance(translation) else {
            return EventOutcome::Updated;
        };

        let scale = self.delta.scaled(modifiers.step_factor());
        let next = self.range.clamp(self.position + scale.apply(increment));
        if next == self.position {
            return if previous == Some(translation) {
                EventOutcome::Ignored
            } else {
                EventOutcome::Updated
            };
        }

        self.position = next;
        log::trace!("Drag moved to ({:.2}, {:.2})", next.x, next.y);
        EventOutcome::Notified(SliderNotification::PositionChanged(next))
    }

    fn end_drag(&mut self) -> EventOutcome {
        if self.session.take().is_none() {
            return EventOutcome::Ignored;
        }
        log::debug!("Drag ended at ({:.2}, {:.2})", self.position.x, self.position.y);
        EventOutcome::Notified(SliderNotification::DragEnded(self.position))
    }

    fn cancel_drag(&mut self) -> EventOutcome {
        let Some(session) = self.session.take() else {
            return EventOutcome::Ignored;
        };
        // The range may have changed during the drag.
        self.position = self.range.clamp(session.original_position);
        log::debug!(
            "Drag cancelled, restored ({:.2}, {:.2})",
            self.position.x,
            self.position.y
        );
        EventOutcome::Notified(SliderNotification::DragCancelled(self.position))
    }

    fn nudge(&mut self, direction: NudgeDirection, modifiers: Modifiers) -> EventOutcome {
        let step = NUDGE_STEP * modifiers.step_factor() * direction.sign();

        if direction.is_horizontal() {
            if !self.range.can_change_x() {
                log::debug!("Nudge {:?} rejected, x axis is frozen", direction);
                return EventOutcome::Rejected(direction);
            }
            self.position.x = self.range.clamp_x(self.position.x + step);
        } else {
            if !self.range.can_change_y() {
                log::debug!("Nudge {:?} rejected, y axis is frozen", direction);
                return EventOutcome::Rejected(direction);
            }
            self.position.y = self.range.clamp_y(self.position.y + step);
        }

        EventOutcome::Notified(SliderNotification::PositionChanged(self.position))
    }
}
