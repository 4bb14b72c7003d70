use crate::entity::text::TextRef;
use crate::event::{Signal, TextListEvent};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Shared handle to a text list, as captured by membership commands.
pub type TextListRef = Rc<RefCell<TextList>>;

/// Ordered collection of the text elements of one footprint or symbol.
///
/// Elements are shared handles so that edit commands can keep mutating
/// them while the list owns the ordering. Membership changes emit a
/// [`TextListEvent`].
#[derive(Debug, Default)]
pub struct TextList {
    texts: Vec<TextRef>,
    on_edited: Signal<TextListEvent>,
}

impl TextList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The membership-notification channel of this list
    pub fn on_edited(&self) -> &Signal<TextListEvent> {
        &self.on_edited
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TextRef> {
        self.texts.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextRef> {
        self.texts.iter()
    }

    /// Index of the element with the given identity, if present
    pub fn index_of(&self, uuid: Uuid) -> Option<usize> {
        self.texts.iter().position(|t| t.borrow().uuid() == uuid)
    }

    pub fn find(&self, uuid: Uuid) -> Option<TextRef> {
        self.index_of(uuid).map(|i| self.texts[i].clone())
    }

    pub fn contains(&self, uuid: Uuid) -> bool {
        self.index_of(uuid).is_some()
    }

    /// Inserts an element at `index`.
    ///
    /// The list never holds two elements with the same identity; the
    /// insert commands check membership first and report a domain error
    /// instead of reaching this point.
    pub fn insert(&mut self, index: usize, text: TextRef) {
        debug_assert!(!self.contains(text.borrow().uuid()));
        self.texts.insert(index, text);
        self.on_edited.emit(&TextListEvent::ElementAdded { index });
    }

    pub fn push(&mut self, text: TextRef) {
        self.insert(self.texts.len(), text);
    }

    /// Removes and returns the element at `index`
    pub fn remove(&mut self, index: usize) -> TextRef {
        let text = self.texts.remove(index);
        self.on_edited.emit(&TextListEvent::ElementRemoved { index });
        text
    }
}
