mod events;
mod signal;

pub use events::{ComponentSignalEvent, TextEvent, TextListEvent, UndoStackEvent};
pub use signal::{Signal, Subscription};
