//! Error types for the fluent-graph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the fluent-graph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No node is registered under this name.
    #[error("Node named {0:?} not found")]
    NotFound(String),

    /// The id does not belong to this graph's arena.
    #[error("Node ID {0} does not exist in this graph")]
    UnknownNodeId(NodeId),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
