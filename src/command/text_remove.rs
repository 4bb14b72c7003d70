use super::{CommandError, CommandResult, UndoCommand, UndoCommandGroup};
use crate::entity::{TextListRef, TextRef};
use uuid::Uuid;

/// Removes a text element from a [`TextList`](crate::entity::TextList).
///
/// The removal index is captured on execute so undo restores the
/// element at its original position.
pub struct CmdTextRemove {
    list: TextListRef,
    text: TextRef,
    index: usize,
    executed: bool,
}

impl CmdTextRemove {
    pub fn new(list: TextListRef, text: TextRef) -> Self {
        Self {
            list,
            text,
            index: 0,
            executed: false,
        }
    }

    fn remove(&mut self) -> CommandResult {
        let mut list = self.list.borrow_mut();
        let uuid = self.text.borrow().uuid();
        let index = list.index_of(uuid).ok_or(CommandError::ElementNotFound(uuid))?;
        list.remove(index);
        self.index = index;
        Ok(())
    }

    fn reinsert(&mut self) -> CommandResult {
        let mut list = self.list.borrow_mut();
        let uuid = self.text.borrow().uuid();
        if list.contains(uuid) {
            return Err(CommandError::ElementAlreadyPresent(uuid));
        }
        let index = self.index.min(list.len());
        list.insert(index, self.text.clone());
        Ok(())
    }
}

impl UndoCommand for CmdTextRemove {
    fn description(&self) -> &str {
        "Remove Text"
    }

    fn execute(&mut self) -> CommandResult<bool> {
        assert!(!self.executed, "command executed twice");
        self.remove()?;
        self.executed = true;
        Ok(true)
    }

    fn undo(&mut self) -> CommandResult {
        assert!(self.executed, "undo before execution");
        self.reinsert()
    }

    fn redo(&mut self) -> CommandResult {
        assert!(self.executed, "redo before execution");
        self.remove()
    }
}

/// Builds a composite command removing every listed element as one
/// atomic undo/redo unit.
///
/// Children are built eagerly from the elements present right now;
/// uuids no longer in the list are skipped.
pub fn remove_texts(list: &TextListRef, uuids: &[Uuid]) -> UndoCommandGroup {
    let mut group = UndoCommandGroup::new("Remove Texts");
    for &uuid in uuids {
        if let Some(text) = list.borrow().find(uuid) {
            group.append(Box::new(CmdTextRemove::new(list.clone(), text)));
        }
    }
    group
}
