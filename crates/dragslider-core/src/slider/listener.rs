//! Notifications emitted by the slider and the listener that receives them.

use kurbo::Point;

use crate::input::NudgeDirection;

/// A notification produced while handling an input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderNotification {
    /// A drag began at the given position.
    DragStarted(Point),
    /// The position changed during a drag or nudge.
    PositionChanged(Point),
    /// The drag was cancelled and the position restored.
    DragCancelled(Point),
    /// The drag completed at the given position.
    DragEnded(Point),
}

impl SliderNotification {
    /// The position carried by the notification.
    pub fn position(&self) -> Point {
        match *self {
            Self::DragStarted(p)
            | Self::PositionChanged(p)
            | Self::DragCancelled(p)
            | Self::DragEnded(p) => p,
        }
    }
}

/// Result of delivering one event to the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// The event had no effect (disabled, wrong phase, or no movement).
    Ignored,
    /// Internal state changed but nothing observable to listeners.
    Updated,
    /// A nudge targeted a frozen axis; the host should play the rejection cue.
    Rejected(NudgeDirection),
    /// State changed and a notification was produced.
    Notified(SliderNotification),
}

impl EventOutcome {
    /// The notification, if one was produced.
    pub fn notification(&self) -> Option<SliderNotification> {
        match self {
            Self::Notified(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Whether the host needs to repaint.
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Receives slider notifications.
///
/// Callbacks are delivered synchronously on the UI thread while the
/// originating event is handled. All methods default to no-ops.
pub trait DragSliderListener {
    fn drag_started(&mut self, _position: Point) {}

    fn position_changed(&mut self, _position: Point) {}

    fn drag_cancelled(&mut self, _position: Point) {}

    fn drag_ended(&mut self, _position: Point) {}

    /// A nudge hit a frozen axis. Hosts typically beep here.
    fn nudge_rejected(&mut self, _direction: NudgeDirection) {}
}

/// Route an outcome to the matching listener callback.
pub fn dispatch(listener: &mut dyn DragSliderListener, outcome: EventOutcome) {
    match outcome {
        EventOutcome::Notified(SliderNotification::DragStarted(p)) => listener.drag_started(p),
        EventOutcome::Notified(SliderNotification::PositionChanged(p)) => {
            listener.position_changed(p)
        }
        EventOutcome::Notified(SliderNotification::DragCancelled(p)) => {
            listener.drag_cancelled(p)
        }
        EventOutcome::Notified(SliderNotification::DragEnded(p)) => listener.drag_ended(p),
        EventOutcome::Rejected(direction) => listener.nudge_rejected(direction),
        EventOutcome::Ignored | EventOutcome::Updated => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl DragSliderListener for Recorder {
        fn drag_started(&mut self, _position: Point) {
            self.calls.push("started");
        }

        fn drag_ended(&mut self, _position: Point) {
            self.calls.push("ended");
        }

        fn nudge_rejected(&mut self, _direction: NudgeDirection) {
            self.calls.push("rejected");
        }
    }

    #[test]
    fn test_dispatch_routes_to_callbacks() {
        let mut recorder = Recorder::default();
        dispatch(
            &mut recorder,
            EventOutcome::Notified(SliderNotification::DragStarted(Point::ZERO)),
        );
        dispatch(&mut recorder, EventOutcome::Updated);
        dispatch(&mut recorder, EventOutcome::Rejected(NudgeDirection::Left));
        dispatch(
            &mut recorder,
            EventOutcome::Notified(SliderNotification::DragEnded(Point::ZERO)),
        );
        // Not overridden, must be a no-op
        dispatch(
            &mut recorder,
            EventOutcome::Notified(SliderNotification::PositionChanged(Point::ZERO)),
        );

        assert_eq!(recorder.calls, vec!["started", "rejected", "ended"]);
    }

    #[test]
    fn test_outcome_helpers() {
        let outcome = EventOutcome::Notified(SliderNotification::DragEnded(Point::new(1.0, 2.0)));
        assert_eq!(outcome.notification().map(|n| n.position()), Some(Point::new(1.0, 2.0)));
        assert!(outcome.needs_redraw());
        assert!(!EventOutcome::Ignored.needs_redraw());
        assert!(EventOutcome::Rejected(NudgeDirection::Up).is_rejected());
    }
}
