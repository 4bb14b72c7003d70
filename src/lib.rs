#![warn(clippy::all, rust_2018_idioms)]

pub mod command;
pub mod document;
pub mod entity;
pub mod event;
pub mod geometry;
pub mod layer;

pub use command::{
    CmdComponentSignalEdit, CmdTextEdit, CmdTextInsert, CmdTextRemove, CommandError,
    CommandResult, UndoCommand, UndoCommandGroup, UndoStack, remove_texts,
};
pub use document::{Document, DocumentError};
pub use entity::{ComponentSignal, SignalRole, SignalRoleRegistry, Text, TextList};
pub use event::{Signal, Subscription};
pub use layer::LayerName;
