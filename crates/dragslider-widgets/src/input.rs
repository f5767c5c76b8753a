//! Translation of egui input into slider events.

use dragslider_core::{Modifiers, NudgeDirection, SliderEvent, SliderMapping};
use egui::{Key, Response, Ui};
use kurbo::{Point, Vec2};

/// Map egui modifier keys onto slider modifiers.
pub fn modifiers_from_egui(modifiers: egui::Modifiers) -> Modifiers {
    Modifiers {
        shift: modifiers.shift,
        ctrl: modifiers.ctrl,
        alt: modifiers.alt,
        meta: modifiers.mac_cmd,
    }
}

const NUDGE_KEYS: [(Key, NudgeDirection); 4] = [
    (Key::ArrowLeft, NudgeDirection::Left),
    (Key::ArrowRight, NudgeDirection::Right),
    (Key::ArrowUp, NudgeDirection::Up),
    (Key::ArrowDown, NudgeDirection::Down),
];

/// Pointer press being tracked between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    active: bool,
    origin: Option<Point>,
    translation: Vec2,
}

impl DragTracker {
    /// Whether a press that started on the control is still held.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Screen-space translation from the press origin.
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    fn start(&mut self, pointer: Option<Point>) {
        *self = Self {
            active: true,
            origin: pointer,
            translation: Vec2::ZERO,
        };
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record the pointer position. Returns the new translation if it moved.
    fn advance(&mut self, pointer: Option<Point>) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        let pointer = pointer?;
        let origin = *self.origin.get_or_insert(pointer);
        let translation = pointer - origin;
        if translation == self.translation {
            return None;
        }
        self.translation = translation;
        Some(translation)
    }
}

/// Input relevant to the slider, captured once per frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    pub hovered: bool,
    /// Primary button went down over the control.
    pub pressed: bool,
    /// Primary button went up, wherever the pointer is.
    pub released: bool,
    /// Pointer position in screen space (y down).
    pub pointer: Option<Point>,
    pub escape: bool,
    /// Arrow keys pressed this frame.
    pub nudges: Vec<NudgeDirection>,
    pub modifiers: Modifiers,
}

impl FrameInput {
    /// Read this frame's input for a widget response.
    pub fn collect(ui: &Ui, response: &Response) -> Self {
        let hovered = response.hovered();
        let senses_press = response.sense.senses_drag();
        ui.input(|i| Self {
            hovered,
            pressed: senses_press && hovered && i.pointer.primary_pressed(),
            released: i.pointer.primary_released(),
            pointer: i
                .pointer
                .interact_pos()
                .map(|pos| Point::new(pos.x as f64, pos.y as f64)),
            escape: i.key_pressed(Key::Escape),
            nudges: NUDGE_KEYS
                .iter()
                .filter(|(key, _)| i.key_pressed(*key))
                .map(|(_, direction)| *direction)
                .collect(),
            modifiers: modifiers_from_egui(i.modifiers),
        })
    }

    /// Events for this frame, in delivery order.
    ///
    /// `was_hovered` is the hover flag the slider currently holds.
    pub fn to_events(
        &self,
        was_hovered: bool,
        tracker: &mut DragTracker,
        mapping: &SliderMapping,
    ) -> Vec<SliderEvent> {
        let mut events = Vec::new();

        if self.hovered != was_hovered {
            events.push(if self.hovered {
                SliderEvent::PointerEntered
            } else {
                SliderEvent::PointerExited
            });
        }

        if self.pressed {
            tracker.start(self.pointer);
            events.push(SliderEvent::PointerDown);
            // Baseline sample, the first translation never moves the slider
            events.push(SliderEvent::DragSample {
                translation: Vec2::ZERO,
                modifiers: self.modifiers,
            });
        }

        if let Some(Vec2 { x, y }) = tracker.advance(self.pointer) {
            events.push(SliderEvent::DragSample {
                translation: mapping.screen_translation(x, y),
                modifiers: self.modifiers,
            });
        }

        if self.escape {
            tracker.reset();
            events.push(SliderEvent::Cancel);
        }

        if self.released && tracker.is_active() {
            tracker.reset();
            events.push(SliderEvent::PointerUp);
        }

        events.extend(self.nudges.iter().map(|&direction| SliderEvent::Nudge {
            direction,
            modifiers: self.modifiers,
        }));

        events
    }
}
