//! Trace identifier for one logical call tree
//!
//! A `TraceId` binds a call to its call tree (the `id`) and to its depth
//! within that tree (the `level`). Every call in the same tree shares one
//! id; nested calls carry an incremented level.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of hex characters kept from the generated UUID.
///
/// Eight characters keep log lines grep-able while leaving collisions
/// negligible within the lifetime of a single process.
const ID_LEN: usize = 8;

/// Identifier and nesting level for one call within a trace tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceId {
    id: String,
    level: u32,
}

impl TraceId {
    /// Create a root TraceId with a freshly generated id and level 0
    pub fn create() -> Self {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(ID_LEN);
        Self { id, level: 0 }
    }

    /// Derive the TraceId for a call nested one level deeper
    ///
    /// The child shares this id and carries `level + 1`.
    pub fn child(&self) -> Self {
        Self {
            id: self.id.clone(),
            level: self.level + 1,
        }
    }

    /// Get the string form of the identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the nesting level (root = 0)
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Whether this id sits at the root of its call tree
    pub fn is_root(&self) -> bool {
        self.level == 0
    }

    /// Reconstruct from parts (for deserialization or tests)
    pub fn from_parts(id: String, level: u32) -> Self {
        Self { id, level }
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::create()
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
