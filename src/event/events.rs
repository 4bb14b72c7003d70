//! Change-kind events emitted by the observable entities.
//!
//! Every entity broadcasts a field-specific variant so observers can
//! react selectively instead of diffing the whole object on a generic
//! "changed" notification.

/// Emitted by [`Text`](crate::entity::Text) whenever a field changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEvent {
    UuidChanged,
    LayerChanged,
    TextChanged,
    PositionChanged,
    RotationChanged,
    HeightChanged,
    AlignChanged,
}

/// Emitted by [`TextList`](crate::entity::TextList) on membership changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextListEvent {
    ElementAdded { index: usize },
    ElementRemoved { index: usize },
}

/// Emitted by [`ComponentSignal`](crate::entity::ComponentSignal)
/// whenever a field changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentSignalEvent {
    UuidChanged,
    NameChanged,
    RoleChanged,
    RequiredChanged,
}

/// Emitted by [`UndoStack`](crate::command::UndoStack) after every
/// successful state transition, for undo-history UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoStackEvent {
    /// The cursor moved or history content changed.
    StateModified,
    CanUndoChanged(bool),
    CanRedoChanged(bool),
    CleanChanged(bool),
    /// An open command group was discarded without being committed.
    CommandGroupAborted,
}
