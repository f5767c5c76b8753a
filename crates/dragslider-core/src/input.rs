//! Input events consumed by the slider state machine.

use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Multiplier applied by the fast modifier; the precise modifier divides by it.
pub const MODIFIER_SCALE: f64 = 10.0;

/// Base increment of a keyboard nudge, in value units.
pub const NUDGE_STEP: f64 = 1.0;

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Only the fast modifier (Shift).
    pub const FAST: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Only the precise modifier (Alt / Option).
    pub const PRECISE: Self = Self {
        alt: true,
        ..Self::NONE
    };

    /// Shift speeds up dragging and nudging.
    pub fn is_fast(&self) -> bool {
        self.shift
    }

    /// Alt slows down dragging and nudging.
    pub fn is_precise(&self) -> bool {
        self.alt
    }

    /// Scale factor for this modifier combination. Fast wins over precise.
    pub fn step_factor(&self) -> f64 {
        if self.is_fast() {
            MODIFIER_SCALE
        } else if self.is_precise() {
            1.0 / MODIFIER_SCALE
        } else {
            1.0
        }
    }
}

/// Direction of a keyboard nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NudgeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl NudgeDirection {
    /// Whether the nudge targets the horizontal axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Sign of the change in value space. Up increases y.
    pub fn sign(self) -> f64 {
        match self {
            Self::Left | Self::Down => -1.0,
            Self::Right | Self::Up => 1.0,
        }
    }
}

/// A serialized input event delivered to the slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SliderEvent {
    /// Pointer entered the control bounds.
    PointerEntered,
    /// Pointer left the control bounds.
    PointerExited,
    /// Primary button / touch went down on the control.
    PointerDown,
    /// Cumulative drag translation since the pointer went down, in screen units
    /// with y pointing up.
    DragSample {
        translation: Vec2,
        modifiers: Modifiers,
    },
    /// Primary button / touch released.
    PointerUp,
    /// Abort the active drag (Escape).
    Cancel,
    /// Arrow-key nudge.
    Nudge {
        direction: NudgeDirection,
        modifiers: Modifiers,
    },
}

impl SliderEvent {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PointerEntered => "pointer-entered",
            Self::PointerExited => "pointer-exited",
            Self::PointerDown => "pointer-down",
            Self::DragSample { .. } => "drag-sample",
            Self::PointerUp => "pointer-up",
            Self::Cancel => "cancel",
            Self::Nudge { .. } => "nudge",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_factor() {
        assert!((Modifiers::NONE.step_factor() - 1.0).abs() < f64::EPSILON);
        assert!((Modifiers::FAST.step_factor() - 10.0).abs() < f64::EPSILON);
        assert!((Modifiers::PRECISE.step_factor() - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fast_beats_precise() {
        let both = Modifiers {
            shift: true,
            alt: true,
            ..Modifiers::NONE
        };
        assert!((both.step_factor() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ctrl_and_meta_do_not_scale() {
        let mods = Modifiers {
            ctrl: true,
            meta: true,
            ..Modifiers::NONE
        };
        assert!((mods.step_factor() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nudge_direction() {
        assert!(NudgeDirection::Left.is_horizontal());
        assert!(!NudgeDirection::Up.is_horizontal());
        assert!(NudgeDirection::Up.sign() > 0.0);
        assert!(NudgeDirection::Down.sign() < 0.0);
    }
}
