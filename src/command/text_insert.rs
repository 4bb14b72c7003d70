use super::{CommandError, CommandResult, UndoCommand};
use crate::entity::{TextListRef, TextRef};

/// Inserts a text element into a [`TextList`](crate::entity::TextList).
pub struct CmdTextInsert {
    list: TextListRef,
    text: TextRef,
    /// Insertion position; `None` appends at the end.
    index: Option<usize>,
    executed: bool,
}

impl CmdTextInsert {
    pub fn new(list: TextListRef, text: TextRef) -> Self {
        Self {
            list,
            text,
            index: None,
            executed: false,
        }
    }

    pub fn at_index(list: TextListRef, text: TextRef, index: usize) -> Self {
        Self {
            list,
            text,
            index: Some(index),
            executed: false,
        }
    }

    fn insert(&mut self) -> CommandResult {
        let mut list = self.list.borrow_mut();
        let uuid = self.text.borrow().uuid();
        if list.contains(uuid) {
            return Err(CommandError::ElementAlreadyPresent(uuid));
        }
        let index = self.index.unwrap_or(list.len()).min(list.len());
        list.insert(index, self.text.clone());
        self.index = Some(index);
        Ok(())
    }

    fn remove(&mut self) -> CommandResult {
        let mut list = self.list.borrow_mut();
        let uuid = self.text.borrow().uuid();
        let index = list.index_of(uuid).ok_or(CommandError::ElementNotFound(uuid))?;
        list.remove(index);
        Ok(())
    }
}

impl UndoCommand for CmdTextInsert {
    fn description(&self) -> &str {
        "Add Text"
    }

    fn execute(&mut self) -> CommandResult<bool> {
        assert!(!self.executed, "command executed twice");
        self.insert()?;
        self.executed = true;
        // Membership changes are always a net change
        Ok(true)
    }

    fn undo(&mut self) -> CommandResult {
        assert!(self.executed, "undo before execution");
        self.remove()
    }

    fn redo(&mut self) -> CommandResult {
        assert!(self.executed, "redo before execution");
        self.insert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Text, TextList};
    use crate::geometry::{Alignment, Angle, Point, PositiveLength};
    use crate::layer::LayerName;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn create_text() -> TextRef {
        Text::new_ref(
            LayerName::top_legend(),
            "A",
            Point::ORIGIN,
            Angle::ZERO,
            PositiveLength::from_mm(1.0).unwrap(),
            Alignment::default(),
        )
    }

    #[test]
    fn test_insert_undo_redo() {
        let list: TextListRef = Rc::new(RefCell::new(TextList::new()));
        let text = create_text();
        let uuid = text.borrow().uuid();

        let mut cmd = CmdTextInsert::new(list.clone(), text);
        assert!(cmd.execute().unwrap());
        assert!(list.borrow().contains(uuid));

        cmd.undo().unwrap();
        assert!(list.borrow().is_empty());

        cmd.redo().unwrap();
        assert_eq!(list.borrow().index_of(uuid), Some(0));
    }

    #[test]
    fn test_duplicate_insert_fails() {
        let list: TextListRef = Rc::new(RefCell::new(TextList::new()));
        let text = create_text();
        list.borrow_mut().push(text.clone());

        let mut cmd = CmdTextInsert::new(list.clone(), text);
        assert!(matches!(
            cmd.execute(),
            Err(CommandError::ElementAlreadyPresent(_))
        ));
        assert_eq!(list.borrow().len(), 1);
    }
}
