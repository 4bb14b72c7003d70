use serde::{Deserialize, Serialize};
use std::fmt;

/// The electrical role of a component signal.
///
/// Roles are immutable values compared by tag; the set of available
/// roles lives in a [`SignalRoleRegistry`] built once at startup and
/// passed around by reference, instead of hidden static instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalRole {
    tag: String,
    display_name: String,
}

impl SignalRole {
    pub fn new(tag: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            display_name: display_name.into(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl PartialEq for SignalRole {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for SignalRole {}

impl std::hash::Hash for SignalRole {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
    }
}

impl fmt::Display for SignalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// The set of signal roles available to a running application.
#[derive(Debug, Clone)]
pub struct SignalRoleRegistry {
    roles: Vec<SignalRole>,
}

impl SignalRoleRegistry {
    /// Builds the registry of standard roles
    pub fn standard() -> Self {
        Self {
            roles: vec![
                SignalRole::new("power", "Power"),
                SignalRole::new("input", "Input"),
                SignalRole::new("output", "Output"),
                SignalRole::new("inout", "I/O"),
                SignalRole::new("opendrain", "Open Drain"),
                SignalRole::new("passive", "Passive"),
            ],
        }
    }

    /// Looks up a role by its tag
    pub fn get(&self, tag: &str) -> Option<&SignalRole> {
        self.roles.iter().find(|r| r.tag == tag)
    }

    /// The role assigned to new signals
    pub fn default_role(&self) -> &SignalRole {
        self.get("passive").expect("standard registry has passive")
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SignalRole> {
        self.roles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_tag() {
        let a = SignalRole::new("input", "Input");
        let b = SignalRole::new("input", "Eingang");
        assert_eq!(a, b);
        assert_ne!(a, SignalRole::new("output", "Input"));
    }

    #[test]
    fn test_standard_registry() {
        let registry = SignalRoleRegistry::standard();
        assert_eq!(registry.iter().count(), 6);
        assert_eq!(registry.get("power").unwrap().display_name(), "Power");
        assert!(registry.get("bogus").is_none());
        assert_eq!(registry.default_role().tag(), "passive");
    }
}
