//! Directed, typed relationships between nodes.

use serde::Serialize;

use super::{now_micros, NodeId};

/// A directed relationship from `source` to `target`.
///
/// Relationships have no identity of their own; two calls with the same
/// arguments produce two distinct records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    /// Origin of the relationship.
    pub source: NodeId,
    /// Destination of the relationship.
    pub target: NodeId,
    /// Caller-defined relationship type, e.g. "Acted In".
    pub relationship_type: String,
    /// When this relationship was created (Unix epoch microseconds).
    pub created_at: u64,
}

impl Relationship {
    /// Create a new relationship stamped with the current time.
    pub fn new(source: NodeId, relationship_type: impl Into<String>, target: NodeId) -> Self {
        Self {
            source,
            target,
            relationship_type: relationship_type.into(),
            created_at: now_micros(),
        }
    }
}
