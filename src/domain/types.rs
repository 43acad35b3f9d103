//! Names used by the registry
//!
//! Definition names are the keys callers use to build fixtures. Any string is
//! a valid name, including the empty string and names with surrounding
//! whitespace; uniqueness is the only rule, and the registry enforces it.

use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

/// Name under which a definition is registered
///
/// Compared byte for byte: `"person"` and `" person"` are different names.
#[nutype(derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    From,
    AsRef,
    Display
))]
pub struct DefinitionName(String);

impl DefinitionName {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}
