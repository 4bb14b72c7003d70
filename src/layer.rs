use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the graphics layer a library element lives on.
///
/// Layer names are lowercase identifiers like `top_legend`. The name is
/// treated as an opaque reference here; resolving it against an actual
/// layer stack is the job of the (out of scope) rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerName(String);

impl LayerName {
    pub fn new(name: impl Into<String>) -> Self {
        LayerName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // The layers commonly carrying text elements.

    pub fn top_legend() -> Self {
        LayerName::new("top_legend")
    }

    pub fn symbol_names() -> Self {
        LayerName::new("sym_names")
    }
}

impl fmt::Display for LayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
