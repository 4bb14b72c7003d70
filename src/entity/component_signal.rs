use crate::entity::SignalRole;
use crate::event::{ComponentSignalEvent, Signal};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Shared handle to a component signal.
pub type ComponentSignalRef = Rc<RefCell<ComponentSignal>>;

/// A named electrical signal of a component.
///
/// Same observable contract as [`Text`](crate::entity::Text): setters
/// skip no-op assignments and emit a field-specific
/// [`ComponentSignalEvent`] otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSignal {
    uuid: Uuid,
    name: String,
    role: SignalRole,
    required: bool,
    #[serde(skip)]
    on_edited: Signal<ComponentSignalEvent>,
}

impl PartialEq for ComponentSignal {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
            && self.name == other.name
            && self.role == other.role
            && self.required == other.required
    }
}

impl ComponentSignal {
    pub fn new(name: impl Into<String>, role: SignalRole, required: bool) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            role,
            required,
            on_edited: Signal::new(),
        }
    }

    pub fn new_ref(name: impl Into<String>, role: SignalRole, required: bool) -> ComponentSignalRef {
        Rc::new(RefCell::new(Self::new(name, role, required)))
    }

    pub fn on_edited(&self) -> &Signal<ComponentSignalEvent> {
        &self.on_edited
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &SignalRole {
        &self.role
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn set_uuid(&mut self, uuid: Uuid) -> bool {
        if uuid == self.uuid {
            return false;
        }
        self.uuid = uuid;
        self.on_edited.emit(&ComponentSignalEvent::UuidChanged);
        true
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name == self.name {
            return false;
        }
        self.name = name;
        self.on_edited.emit(&ComponentSignalEvent::NameChanged);
        true
    }

    pub fn set_role(&mut self, role: SignalRole) -> bool {
        if role == self.role {
            return false;
        }
        self.role = role;
        self.on_edited.emit(&ComponentSignalEvent::RoleChanged);
        true
    }

    pub fn set_required(&mut self, required: bool) -> bool {
        if required == self.required {
            return false;
        }
        self.required = required;
        self.on_edited.emit(&ComponentSignalEvent::RequiredChanged);
        true
    }

    /// Assigns the full value state of `other` through the setters,
    /// identity included. Returns true if anything changed.
    pub fn copy_from(&mut self, other: &ComponentSignal) -> bool {
        let mut changed = self.set_uuid(other.uuid);
        changed |= self.set_name(other.name.clone());
        changed |= self.set_role(other.role.clone());
        changed |= self.set_required(other.required);
        changed
    }
}
