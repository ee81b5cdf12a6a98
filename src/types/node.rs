//! Node identity and the node record stored in the graph arena.

use serde::Serialize;

/// Stable index of a node inside a `Graph` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Arena slot, or `None` if the id cannot address memory on this target.
    pub(crate) fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, optionally typed vertex.
///
/// Name and type are fixed once the node is created. The adjacency lists are
/// filled in by the owning graph and only ever grow.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Arena id (assigned by the graph on insertion).
    pub(crate) id: NodeId,
    name: String,
    node_type: Option<String>,
    /// Indices into the graph's relationship list where this node is the source.
    #[serde(skip_serializing)]
    pub(crate) outgoing: Vec<usize>,
    /// Indices into the graph's relationship list where this node is the target.
    #[serde(skip_serializing)]
    pub(crate) incoming: Vec<usize>,
}

impl Node {
    /// Create an untyped node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId(0),
            name: name.into(),
            node_type: None,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Create a node with a type tag. An empty tag leaves the node untyped.
    ///
    /// There is no reserved "any type" tag: `Node::typed(name, "*")` is a node
    /// of type `"*"`, not an untyped node. Only `TypeFilter::Any` matches every
    /// type.
    pub fn typed(name: impl Into<String>, node_type: impl Into<String>) -> Self {
        let node_type = node_type.into();
        let mut node = Self::new(name);
        if !node_type.is_empty() {
            node.node_type = Some(node_type);
        }
        node
    }

    /// The id assigned by the graph.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Unique name within the registry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type tag, if any.
    pub fn node_type(&self) -> Option<&str> {
        self.node_type.as_deref()
    }

    /// Number of outgoing relationships.
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of incoming relationships.
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.node_type == other.node_type
    }
}

impl Eq for Node {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_nodes_differ_by_type() {
        assert_ne!(Node::new("a"), Node::typed("a", "Film"));
        assert_ne!(Node::typed("a", "Film"), Node::typed("a", "TV Show"));
        assert_eq!(Node::typed("a", "Film"), Node::typed("a", "Film"));
    }

    #[test]
    fn star_type_is_not_untyped() {
        assert_eq!(Node::typed("a", "*").node_type(), Some("*"));
        assert_ne!(Node::typed("a", "*"), Node::new("a"));
    }

    #[test]
    fn oversized_id_has_no_slot_on_narrow_targets() {
        assert_eq!(NodeId(7).index(), Some(7));
        if usize::BITS < 64 {
            assert_eq!(NodeId(u64::MAX).index(), None);
        }
    }
}
