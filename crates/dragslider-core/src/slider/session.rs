//! Per-drag bookkeeping.

use kurbo::{Point, Vec2};

/// State that only exists while a drag is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Position when the drag began, restored on cancel.
    pub original_position: Point,
    /// Cumulative translation seen at the previous sample.
    pub last_translation: Option<Vec2>,
}

impl DragSession {
    /// Start a session at `position`.
    pub fn begin(position: Point) -> Self {
        Self {
            original_position: position,
            last_translation: None,
        }
    }

    /// Record a translation sample and return the increment since the
    /// previous one. The first sample only establishes the reference.
    pub fn advance(&mut self, translation: Vec2) -> Option<Vec2> {
        self.last_translation
            .replace(translation)
            .map(|last| translation - last)
    }
}
