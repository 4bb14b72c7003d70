//! The observable domain entities edited through the undo engine.

mod component_signal;
mod signal_role;
mod text;
mod text_list;

pub use component_signal::{ComponentSignal, ComponentSignalRef};
pub use signal_role::{SignalRole, SignalRoleRegistry};
pub use text::{Text, TextRef};
pub use text_list::{TextList, TextListRef};
