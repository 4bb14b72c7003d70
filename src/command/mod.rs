mod group;
mod signal_edit;
mod stack;
mod text_edit;
mod text_insert;
mod text_remove;

pub use group::UndoCommandGroup;
pub use signal_edit::CmdComponentSignalEdit;
pub use stack::UndoStack;
pub use text_edit::CmdTextEdit;
pub use text_insert::CmdTextInsert;
pub use text_remove::{CmdTextRemove, remove_texts};

use thiserror::Error;
use uuid::Uuid;

/// Result type for command operations
pub type CommandResult<T = ()> = Result<T, CommandError>;

/// Recoverable domain errors raised while executing, undoing or redoing
/// a command.
///
/// Invariant violations (staging after execution, nesting command
/// groups) are caller bugs and panic instead.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("element {0} is not in the list")]
    ElementNotFound(Uuid),

    #[error("element {0} is already in the list")]
    ElementAlreadyPresent(Uuid),
}

/// One undoable change against one or more entities.
///
/// The [`UndoStack`] drives the lifecycle: `execute` runs exactly once,
/// then `undo`/`redo` replay the change in either direction. Commands
/// that stage values in immediate mode must restore the entity in their
/// `Drop` implementation if they are discarded before ever being
/// executed.
pub trait UndoCommand {
    /// Human-readable description for the undo-history UI
    fn description(&self) -> &str;

    /// Applies the staged changes to the target entities.
    ///
    /// Returns whether a net change happened; commands reporting `false`
    /// are silently discarded by the stack. On error the command must
    /// not be left partially applied.
    fn execute(&mut self) -> CommandResult<bool>;

    /// Reverts the change. Valid only after a successful `execute`.
    fn undo(&mut self) -> CommandResult;

    /// Re-applies the change, idempotent with `execute`'s apply step.
    fn redo(&mut self) -> CommandResult;
}
