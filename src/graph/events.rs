//! Node change notifications.

use serde::Serialize;

use super::Direction;
use crate::types::{now_micros, NodeId};

/// What happened to a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChangeKind {
    /// The node was registered in the graph.
    Created,
    /// A relationship was attached. `Forward` means the node is the source.
    RelationshipAdded {
        relationship_type: String,
        direction: Direction,
    },
}

/// A change notification delivered to listeners registered with `Graph::on_change`.
#[derive(Debug, Clone, Serialize)]
pub struct NodeChange {
    pub node: NodeId,
    pub name: String,
    pub kind: ChangeKind,
    /// Unix epoch microseconds.
    pub at: u64,
}

impl NodeChange {
    pub(crate) fn new(node: NodeId, name: &str, kind: ChangeKind) -> Self {
        Self {
            node,
            name: name.to_string(),
            kind,
            at: now_micros(),
        }
    }
}

/// Boxed listener callback.
pub(crate) type ChangeListener = Box<dyn FnMut(&NodeChange) + Send + Sync>;
