//! fluent-graph — an in-memory directed property graph with a fluent query API.
//!
//! Nodes are named and optionally typed; relationships are directed and carry
//! a caller-defined type string. Queries start from a node name and follow
//! outgoing or incoming relationships, filtered by relationship type and by
//! the type of the node at the far end. A query can fan out into a second
//! query from each of its results.

pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{Query, QuerySpec};
pub use graph::{ChangeKind, Direction, Graph, GraphBuilder, GraphSummary, NodeChange};
pub use types::{
    now_micros, GraphError, GraphResult, Node, NodeId, Relationship, TypeFilter,
    DEFAULT_NODE_CAPACITY,
};
