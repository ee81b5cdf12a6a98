//! Fluent API for building Graph instances.

use crate::types::{GraphResult, Node};

use super::Graph;

/// Fluent builder for constructing a Graph from names.
///
/// Nodes are added in declaration order, then links are resolved by name, so
/// a link may name a node declared after it.
pub struct GraphBuilder {
    nodes: Vec<Node>,
    links: Vec<(String, String, String)>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Declare an untyped node.
    pub fn node(&mut self, name: &str) -> &mut Self {
        self.nodes.push(Node::new(name));
        self
    }

    /// Declare a typed node.
    pub fn typed_node(&mut self, name: &str, node_type: &str) -> &mut Self {
        self.nodes.push(Node::typed(name, node_type));
        self
    }

    /// Declare a relationship between two named nodes.
    pub fn link(&mut self, source: &str, relationship_type: &str, target: &str) -> &mut Self {
        self.links.push((
            source.to_string(),
            relationship_type.to_string(),
            target.to_string(),
        ));
        self
    }

    /// Build the final Graph. Fails with `NotFound` if a link names an undeclared node.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::with_capacity(self.nodes.len());
        for node in self.nodes {
            graph.add(node);
        }
        for (source, relationship_type, target) in self.links {
            graph.link(&source, relationship_type, &target)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
