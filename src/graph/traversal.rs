//! Traversal direction and single-hop neighbour scanning.

use serde::Serialize;

use crate::types::{Node, NodeId, Relationship};

use super::Graph;

/// Direction for graph traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Direction {
    /// Follow outgoing relationships (source -> target).
    #[default]
    Forward,
    /// Follow incoming relationships (target <- source).
    Backward,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Backward => write!(f, "backward"),
        }
    }
}

/// Every relationship of `id` in `direction`, paired with the node at the far end.
///
/// Order is relationship insertion order; parallel relationships yield the
/// same neighbour more than once.
pub fn neighbors(
    graph: &Graph,
    id: NodeId,
    direction: Direction,
) -> impl Iterator<Item = (&Relationship, &Node)> + '_ {
    let relationships: Box<dyn Iterator<Item = &Relationship> + '_> = match direction {
        Direction::Forward => Box::new(graph.outgoing(id)),
        Direction::Backward => Box::new(graph.incoming(id)),
    };
    relationships.filter_map(move |rel| {
        let far = match direction {
            Direction::Forward => rel.target,
            Direction::Backward => rel.source,
        };
        graph.get(far).map(|node| (rel, node))
    })
}
