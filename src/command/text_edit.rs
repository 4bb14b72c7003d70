use super::{CommandResult, UndoCommand};
use crate::entity::TextRef;
use crate::geometry::{Alignment, Angle, Length, Point, PositiveLength};
use crate::layer::LayerName;

/// Edits the fields of one [`Text`](crate::entity::Text) element as a
/// single undoable step.
///
/// The constructor snapshots the current value of every field as both
/// the "old" and the "new" side, so an untouched command is a
/// guaranteed no-op. Staged setters overwrite the "new" side and, with
/// `immediate`, apply the value to the element right away so the UI can
/// preview the edit before it is committed to history. A command that
/// staged immediate values but never got executed restores the element
/// when dropped.
pub struct CmdTextEdit {
    text: TextRef,
    executed: bool,
    old_layer: LayerName,
    new_layer: LayerName,
    old_text: String,
    new_text: String,
    old_position: Point,
    new_position: Point,
    old_rotation: Angle,
    new_rotation: Angle,
    old_height: PositiveLength,
    new_height: PositiveLength,
    old_align: Alignment,
    new_align: Alignment,
}

impl CmdTextEdit {
    pub fn new(text: TextRef) -> Self {
        let snapshot = text.borrow().clone();
        Self {
            text,
            executed: false,
            old_layer: snapshot.layer().clone(),
            new_layer: snapshot.layer().clone(),
            old_text: snapshot.text().to_owned(),
            new_text: snapshot.text().to_owned(),
            old_position: snapshot.position(),
            new_position: snapshot.position(),
            old_rotation: snapshot.rotation(),
            new_rotation: snapshot.rotation(),
            old_height: snapshot.height(),
            new_height: snapshot.height(),
            old_align: snapshot.align(),
            new_align: snapshot.align(),
        }
    }

    pub fn set_layer(&mut self, layer: LayerName, immediate: bool) {
        assert!(!self.executed, "staging after execution is a caller bug");
        self.new_layer = layer.clone();
        if immediate {
            self.text.borrow_mut().set_layer(layer);
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>, immediate: bool) {
        assert!(!self.executed, "staging after execution is a caller bug");
        self.new_text = text.into();
        if immediate {
            self.text.borrow_mut().set_text(self.new_text.clone());
        }
    }

    pub fn set_position(&mut self, position: Point, immediate: bool) {
        assert!(!self.executed, "staging after execution is a caller bug");
        self.new_position = position;
        if immediate {
            self.text.borrow_mut().set_position(position);
        }
    }

    pub fn set_rotation(&mut self, rotation: Angle, immediate: bool) {
        assert!(!self.executed, "staging after execution is a caller bug");
        self.new_rotation = rotation;
        if immediate {
            self.text.borrow_mut().set_rotation(rotation);
        }
    }

    pub fn set_height(&mut self, height: PositiveLength, immediate: bool) {
        assert!(!self.executed, "staging after execution is a caller bug");
        self.new_height = height;
        if immediate {
            self.text.borrow_mut().set_height(height);
        }
    }

    pub fn set_align(&mut self, align: Alignment, immediate: bool) {
        assert!(!self.executed, "staging after execution is a caller bug");
        self.new_align = align;
        if immediate {
            self.text.borrow_mut().set_align(align);
        }
    }

    /// Shifts the staged position by a delta (used while dragging)
    pub fn translate(&mut self, dx: Length, dy: Length, immediate: bool) {
        let position = self.new_position.translated(dx, dy);
        self.set_position(position, immediate);
    }

    /// Rotates the staged position and rotation around `center`
    pub fn rotate(&mut self, angle: Angle, center: Point, immediate: bool) {
        let position = self.new_position.rotated(angle, center);
        let rotation = self.new_rotation + angle;
        self.set_position(position, immediate);
        self.set_rotation(rotation, immediate);
    }

    fn apply_old(&self) {
        let mut text = self.text.borrow_mut();
        text.set_layer(self.old_layer.clone());
        text.set_text(self.old_text.clone());
        text.set_position(self.old_position);
        text.set_rotation(self.old_rotation);
        text.set_height(self.old_height);
        text.set_align(self.old_align);
    }

    fn apply_new(&self) {
        let mut text = self.text.borrow_mut();
        text.set_layer(self.new_layer.clone());
        text.set_text(self.new_text.clone());
        text.set_position(self.new_position);
        text.set_rotation(self.new_rotation);
        text.set_height(self.new_height);
        text.set_align(self.new_align);
    }

    fn any_change(&self) -> bool {
        self.old_layer != self.new_layer
            || self.old_text != self.new_text
            || self.old_position != self.new_position
            || self.old_rotation != self.new_rotation
            || self.old_height != self.new_height
            || self.old_align != self.new_align
    }
}

impl UndoCommand for CmdTextEdit {
    fn description(&self) -> &str {
        "Edit Text"
    }

    fn execute(&mut self) -> CommandResult<bool> {
        assert!(!self.executed, "command executed twice");
        self.executed = true;
        // Idempotent with values already applied in immediate mode
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

impl Drop for CmdTextEdit {
    fn drop(&mut self) {
        // Abandoned before execution: unwind whatever was staged in
        // immediate mode so the element is left exactly as found.
        if !self.executed {
            self.apply_old();
        }
    }
}
