use crate::command::{CommandResult, UndoCommand, UndoStack};
use crate::entity::{Text, TextListRef};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

/// Errors that can occur while flattening or reconstructing a document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid document data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

/// One open, editable document: the text elements plus their undo
/// history.
///
/// Every edit goes through [`execute_cmd`](Self::execute_cmd) (or the
/// group transaction methods on the stack) so the history always
/// matches the entity state. Saving flattens the entities to JSON and
/// marks the current history position clean.
#[derive(Debug, Default)]
pub struct Document {
    texts: TextListRef,
    undo_stack: UndoStack,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs a document from its flattened representation
    pub fn load_from_string(json: &str) -> Result<Self, DocumentError> {
        let texts: Vec<Text> = serde_json::from_str(json)?;
        let document = Self::new();
        {
            let mut list = document.texts.borrow_mut();
            for text in texts {
                list.push(Rc::new(RefCell::new(text)));
            }
        }
        debug!("loaded document with {} texts", document.texts.borrow().len());
        Ok(document)
    }

    /// Flattens the entities and marks the history position clean
    pub fn save_to_string(&mut self) -> Result<String, DocumentError> {
        let texts: Vec<Text> = self.texts.borrow().iter().map(|t| t.borrow().clone()).collect();
        let json = serde_json::to_string_pretty(&texts)?;
        self.undo_stack.set_clean();
        debug!("saved document with {} texts", texts.len());
        Ok(json)
    }

    pub fn texts(&self) -> &TextListRef {
        &self.texts
    }

    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo_stack
    }

    pub fn undo_stack_mut(&mut self) -> &mut UndoStack {
        &mut self.undo_stack
    }

    pub fn execute_cmd(&mut self, cmd: Box<dyn UndoCommand>) -> CommandResult {
        self.undo_stack.exec_cmd(cmd)
    }

    pub fn undo(&mut self) -> CommandResult {
        self.undo_stack.undo()
    }

    pub fn redo(&mut self) -> CommandResult {
        self.undo_stack.redo()
    }

    /// True if there are unsaved changes
    pub fn is_modified(&self) -> bool {
        !self.undo_stack.is_clean()
    }
}
