//! Interaction phase and cursor affordance of the slider.

/// The interaction phase of the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionPhase {
    /// No pointer over the control and no drag in progress.
    #[default]
    Idle,
    /// Pointer is over the control.
    Hovering,
    /// A drag is in progress.
    Panning,
}

impl InteractionPhase {
    /// Check if a drag is in progress.
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning)
    }

    /// Check if the pointer is hovering without dragging.
    pub fn is_hovering(&self) -> bool {
        matches!(self, Self::Hovering)
    }

    /// The cursor the host should show for this phase.
    pub fn cursor(&self) -> CursorAffordance {
        match self {
            Self::Idle => CursorAffordance::Default,
            Self::Hovering => CursorAffordance::OpenHand,
            Self::Panning => CursorAffordance::ClosedHand,
        }
    }
}

/// Cursor shape requested by the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorAffordance {
    /// Platform default arrow.
    #[default]
    Default,
    /// Grab affordance while hovering.
    OpenHand,
    /// Grabbing affordance while dragging.
    ClosedHand,
}
