use super::{CommandResult, UndoCommand, UndoCommandGroup};
use crate::event::{Signal, UndoStackEvent};
use log::{debug, warn};

/// The undo/redo history of one open document.
///
/// Holds the executed top-level commands, a cursor separating the
/// undoable past from the redoable future, and a clean marker pointing
/// at the last saved position. At most one command group can be open at
/// a time; while it is, executed commands accumulate in the group
/// instead of the history.
///
/// History bookkeeping only moves after a command step succeeded, so a
/// failing command can never desynchronize the history from the actual
/// entity state.
pub struct UndoStack {
    commands: Vec<Box<dyn UndoCommand>>,
    current_index: usize,
    /// `None` once the saved position was truncated out of history.
    clean_index: Option<usize>,
    open_group: Option<UndoCommandGroup>,
    on_modified: Signal<UndoStackEvent>,
}

/// Observable state before a mutation, for delta notifications.
#[derive(Clone, Copy, PartialEq)]
struct StackState {
    can_undo: bool,
    can_redo: bool,
    is_clean: bool,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoStack {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            current_index: 0,
            clean_index: Some(0),
            open_group: None,
            on_modified: Signal::new(),
        }
    }

    /// The state-notification channel of this stack
    pub fn on_modified(&self) -> &Signal<UndoStackEvent> {
        &self.on_modified
    }

    pub fn can_undo(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current_index < self.commands.len()
    }

    /// True while the cursor sits at the last saved position
    pub fn is_clean(&self) -> bool {
        self.clean_index == Some(self.current_index)
    }

    pub fn is_command_group_open(&self) -> bool {
        self.open_group.is_some()
    }

    /// Description of the command `undo` would revert next
    pub fn undo_text(&self) -> Option<&str> {
        self.current_index
            .checked_sub(1)
            .map(|i| self.commands[i].description())
    }

    /// Description of the command `redo` would re-apply next
    pub fn redo_text(&self) -> Option<&str> {
        self.commands.get(self.current_index).map(|c| c.description())
    }

    /// Executes a command and appends it to the history.
    ///
    /// While a command group is open the command is appended to the
    /// group unexecuted instead (it runs when the group is committed).
    /// Commands reporting no net change are discarded silently. On
    /// error, history and cursor are left untouched.
    pub fn exec_cmd(&mut self, cmd: Box<dyn UndoCommand>) -> CommandResult {
        if let Some(group) = &mut self.open_group {
            group.append(cmd);
            return Ok(());
        }
        self.exec_and_push(cmd)
    }

    /// Opens a command group accumulating subsequent commands.
    ///
    /// Panics if a group is already open.
    pub fn begin_cmd_group(&mut self, description: impl Into<String>) {
        assert!(
            self.open_group.is_none(),
            "a command group is already open"
        );
        self.open_group = Some(UndoCommandGroup::new(description));
    }

    /// Appends a command to the open group without executing it yet.
    ///
    /// Panics if no group is open.
    pub fn append_to_cmd_group(&mut self, cmd: Box<dyn UndoCommand>) {
        self.open_group
            .as_mut()
            .expect("no command group is open")
            .append(cmd);
    }

    /// Executes the open group as one atomic history entry.
    ///
    /// An empty or no-op group is discarded like any other no-op
    /// command. Panics if no group is open.
    pub fn commit_cmd_group(&mut self) -> CommandResult {
        let group = self.open_group.take().expect("no command group is open");
        self.exec_and_push(Box::new(group))
    }

    /// Discards the open group without applying it.
    ///
    /// Children that staged immediate-mode edits roll themselves back
    /// when dropped. Panics if no group is open.
    pub fn abort_cmd_group(&mut self) {
        let group = self.open_group.take().expect("no command group is open");
        warn!("aborting command group \"{}\"", group.description());
        drop(group);
        self.on_modified.emit(&UndoStackEvent::CommandGroupAborted);
    }

    /// Reverts the newest executed command. No-op at the boundary.
    ///
    /// Panics while a command group is open.
    pub fn undo(&mut self) -> CommandResult {
        assert!(
            self.open_group.is_none(),
            "undo while a command group is open"
        );
        if self.current_index == 0 {
            return Ok(());
        }
        let before = self.state();
        self.commands[self.current_index - 1].undo()?;
        self.current_index -= 1;
        debug!("undone \"{}\"", self.commands[self.current_index].description());
        self.notify_state(before);
        Ok(())
    }

    /// Re-applies the next undone command. No-op at the boundary.
    ///
    /// Panics while a command group is open.
    pub fn redo(&mut self) -> CommandResult {
        assert!(
            self.open_group.is_none(),
            "redo while a command group is open"
        );
        if self.current_index >= self.commands.len() {
            return Ok(());
        }
        let before = self.state();
        self.commands[self.current_index].redo()?;
        debug!("redone \"{}\"", self.commands[self.current_index].description());
        self.current_index += 1;
        self.notify_state(before);
        Ok(())
    }

    /// Marks the current position as saved
    pub fn set_clean(&mut self) {
        let before = self.state();
        self.clean_index = Some(self.current_index);
        self.notify_deltas(before);
    }

    /// Drops the whole history and marks the empty state as saved
    pub fn clear(&mut self) {
        let before = self.state();
        self.commands.clear();
        self.current_index = 0;
        self.clean_index = Some(0);
        self.notify_state(before);
    }

    fn exec_and_push(&mut self, mut cmd: Box<dyn UndoCommand>) -> CommandResult {
        let before = self.state();
        if !cmd.execute()? {
            debug!("discarding no-op command \"{}\"", cmd.description());
            return Ok(());
        }
        // The redoable future is gone now; if the saved position was in
        // it, no cursor position is clean anymore until the next save.
        self.commands.truncate(self.current_index);
        if self.clean_index.is_some_and(|i| i > self.current_index) {
            self.clean_index = None;
        }
        debug!("executed \"{}\"", cmd.description());
        self.commands.push(cmd);
        self.current_index += 1;
        self.notify_state(before);
        Ok(())
    }

    fn state(&self) -> StackState {
        StackState {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            is_clean: self.is_clean(),
        }
    }

    fn notify_state(&self, before: StackState) {
        self.on_modified.emit(&UndoStackEvent::StateModified);
        self.notify_deltas(before);
    }

    fn notify_deltas(&self, before: StackState) {
        let after = self.state();
        if after.can_undo != before.can_undo {
            self.on_modified
                .emit(&UndoStackEvent::CanUndoChanged(after.can_undo));
        }
        if after.can_redo != before.can_redo {
            self.on_modified
                .emit(&UndoStackEvent::CanRedoChanged(after.can_redo));
        }
        if after.is_clean != before.is_clean {
            self.on_modified
                .emit(&UndoStackEvent::CleanChanged(after.is_clean));
        }
    }
}

impl std::fmt::Debug for UndoStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoStack")
            .field("commands", &format!("<{} commands>", self.commands.len()))
            .field("current_index", &self.current_index)
            .field("clean_index", &self.clean_index)
            .field("group_open", &self.open_group.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandError, CommandResult};

    /// Minimal command flipping a shared flag, configurable to fail.
    struct Toggle {
        tag: &'static str,
        net_change: bool,
        fail: bool,
    }

    impl Toggle {
        fn boxed(tag: &'static str) -> Box<dyn UndoCommand> {
            Box::new(Toggle {
                tag,
                net_change: true,
                fail: false,
            })
        }
    }

    impl UndoCommand for Toggle {
        fn description(&self) -> &str {
            self.tag
        }

        fn execute(&mut self) -> CommandResult<bool> {
            if self.fail {
                return Err(CommandError::ElementNotFound(uuid::Uuid::nil()));
            }
            Ok(self.net_change)
        }

        fn undo(&mut self) -> CommandResult {
            Ok(())
        }

        fn redo(&mut self) -> CommandResult {
            Ok(())
        }
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut stack = UndoStack::new();
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
        stack.undo().unwrap();
        stack.redo().unwrap();
        assert!(stack.is_clean());
    }

    #[test]
    fn test_noop_command_not_recorded() {
        let mut stack = UndoStack::new();
        stack
            .exec_cmd(Box::new(Toggle {
                tag: "noop",
                net_change: false,
                fail: false,
            }))
            .unwrap();
        assert!(!stack.can_undo());
        assert!(stack.is_clean());
    }

    #[test]
    fn test_failed_command_leaves_history_untouched() {
        let mut stack = UndoStack::new();
        stack.exec_cmd(Toggle::boxed("ok")).unwrap();
        let result = stack.exec_cmd(Box::new(Toggle {
            tag: "bad",
            net_change: true,
            fail: true,
        }));
        assert!(result.is_err());
        assert_eq!(stack.undo_text(), Some("ok"));
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_undo_redo_texts() {
        let mut stack = UndoStack::new();
        stack.exec_cmd(Toggle::boxed("first")).unwrap();
        stack.exec_cmd(Toggle::boxed("second")).unwrap();
        assert_eq!(stack.undo_text(), Some("second"));
        assert_eq!(stack.redo_text(), None);

        stack.undo().unwrap();
        assert_eq!(stack.undo_text(), Some("first"));
        assert_eq!(stack.redo_text(), Some("second"));
    }

    #[test]
    #[should_panic(expected = "a command group is already open")]
    fn test_nested_group_panics() {
        let mut stack = UndoStack::new();
        stack.begin_cmd_group("one");
        stack.begin_cmd_group("two");
    }

    #[test]
    #[should_panic(expected = "undo while a command group is open")]
    fn test_undo_with_open_group_panics() {
        let mut stack = UndoStack::new();
        stack.exec_cmd(Toggle::boxed("cmd")).unwrap();
        stack.begin_cmd_group("group");
        let _ = stack.undo();
    }

    #[test]
    fn test_exec_cmd_with_open_group_appends() {
        let mut stack = UndoStack::new();
        stack.begin_cmd_group("group");
        stack.exec_cmd(Toggle::boxed("child")).unwrap();
        // Not in history yet
        assert!(!stack.can_undo());
        stack.commit_cmd_group().unwrap();
        assert_eq!(stack.undo_text(), Some("group"));
    }

    #[test]
    fn test_empty_group_commit_is_discarded() {
        let mut stack = UndoStack::new();
        stack.begin_cmd_group("empty");
        stack.commit_cmd_group().unwrap();
        assert!(!stack.can_undo());
        assert!(stack.is_clean());
    }

    #[test]
    fn test_clear_resets_to_clean() {
        let mut stack = UndoStack::new();
        stack.exec_cmd(Toggle::boxed("cmd")).unwrap();
        assert!(!stack.is_clean());
        stack.clear();
        assert!(stack.is_clean());
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
    }
}
