use super::{CommandResult, UndoCommand};

/// An ordered sequence of child commands treated as one atomic
/// undo/redo unit.
///
/// Children execute in insertion order, undo in reverse order and redo
/// forward again, so children with data dependencies (insert an element,
/// then edit something referencing it) stay consistent. If a child fails
/// during execute, earlier children stay applied and the error
/// propagates; the stack then refuses to record the group.
pub struct UndoCommandGroup {
    description: String,
    children: Vec<Box<dyn UndoCommand>>,
    executed: bool,
}

impl UndoCommandGroup {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            children: Vec::new(),
            executed: false,
        }
    }

    /// Takes ownership of a child command. Valid only before the group
    /// itself has been executed.
    pub fn append(&mut self, cmd: Box<dyn UndoCommand>) {
        assert!(!self.executed, "appending to an executed group is a caller bug");
        self.children.push(cmd);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl UndoCommand for UndoCommandGroup {
    fn description(&self) -> &str {
        &self.description
    }

    fn execute(&mut self) -> CommandResult<bool> {
        assert!(!self.executed, "command executed twice");
        self.executed = true;
        let mut any_change = false;
        for child in &mut self.children {
            any_change |= child.execute()?;
        }
        Ok(any_change)
    }

    fn undo(&mut self) -> CommandResult {
        assert!(self.executed, "undo before execution");
        for child in self.children.iter_mut().rev() {
            child.undo()?;
        }
        Ok(())
    }

    fn redo(&mut self) -> CommandResult {
        assert!(self.executed, "redo before execution");
        for child in &mut self.children {
            child.redo()?;
        }
        Ok(())
    }
}

impl Drop for UndoCommandGroup {
    fn drop(&mut self) {
        // Drop children in reverse insertion order so that an abandoned
        // group unwinds dependent immediate-mode edits last-in-first-out
        // (each never-executed child rolls itself back on drop).
        while self.children.pop().is_some() {}
    }
}
