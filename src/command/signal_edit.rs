use super::{CommandResult, UndoCommand};
use crate::entity::{ComponentSignalRef, SignalRole};

/// Edits the fields of one [`ComponentSignal`](crate::entity::ComponentSignal)
/// as a single undoable step.
///
/// Same contract as [`CmdTextEdit`](crate::command::CmdTextEdit):
/// old/new snapshots per field, optional immediate application for live
/// preview, rollback on drop if never executed.
pub struct CmdComponentSignalEdit {
    signal: ComponentSignalRef,
    executed: bool,
    old_name: String,
    new_name: String,
    old_role: SignalRole,
    new_role: SignalRole,
    old_required: bool,
    new_required: bool,
}

impl CmdComponentSignalEdit {
    pub fn new(signal: ComponentSignalRef) -> Self {
        let snapshot = signal.borrow().clone();
        Self {
            signal,
            executed: false,
            old_name: snapshot.name().to_owned(),
            new_name: snapshot.name().to_owned(),
            old_role: snapshot.role().clone(),
            new_role: snapshot.role().clone(),
            old_required: snapshot.is_required(),
            new_required: snapshot.is_required(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>, immediate: bool) {
        assert!(!self.executed, "staging after execution is a caller bug");
        self.new_name = name.into();
        if immediate {
            self.signal.borrow_mut().set_name(self.new_name.clone());
        }
    }

    pub fn set_role(&mut self, role: SignalRole, immediate: bool) {
        assert!(!self.executed, "staging after execution is a caller bug");
        self.new_role = role.clone();
        if immediate {
            self.signal.borrow_mut().set_role(role);
        }
    }

    pub fn set_required(&mut self, required: bool, immediate: bool) {
        assert!(!self.executed, "staging after execution is a caller bug");
        self.new_required = required;
        if immediate {
            self.signal.borrow_mut().set_required(required);
        }
    }

    fn apply_old(&self) {
        let mut signal = self.signal.borrow_mut();
        signal.set_name(self.old_name.clone());
        signal.set_role(self.old_role.clone());
        signal.set_required(self.old_required);
    }

    fn apply_new(&self) {
        let mut signal = self.signal.borrow_mut();
        signal.set_name(self.new_name.clone());
        signal.set_role(self.new_role.clone());
        signal.set_required(self.new_required);
    }

    fn any_change(&self) -> bool {
        self.old_name != self.new_name
            || self.old_role != self.new_role
            || self.old_required != self.new_required
    }
}

impl UndoCommand for CmdComponentSignalEdit {
    fn description(&self) -> &str {
        "Edit Component Signal"
    }

    fn execute(&mut self) -> CommandResult<bool> {
        assert!(!self.executed, "command executed twice");
        self.executed = true;
        self.apply_new();
        Ok(self.any_change())
    }

    fn undo(&mut self) -> CommandResult {
        assert!(self.executed, "undo before execution");
        self.apply_old();
        Ok(())
    }

    fn redo(&mut self) -> CommandResult {
        assert!(self.executed, "redo before execution");
        self.apply_new();
        Ok(())
    }
}

impl Drop for CmdComponentSignalEdit {
    fn drop(&mut self) {
        if !self.executed {
            self.apply_old();
        }
    }
}
