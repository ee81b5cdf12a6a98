//! Core graph structure — a node arena, a name registry and the relationship list.

use std::collections::{BTreeMap, HashMap};

use log::debug;
use serde::Serialize;

use super::events::{ChangeKind, ChangeListener, NodeChange};
use super::Direction;
use crate::engine::Query;
use crate::types::{GraphError, GraphResult, Node, NodeId, Relationship, DEFAULT_NODE_CAPACITY};

/// Counts describing the registered part of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    /// Nodes reachable by name.
    pub nodes: usize,
    /// Arena slots, including nodes shadowed by a later `add` of the same name.
    pub arena_slots: usize,
    /// All relationship records.
    pub relationships: usize,
    /// Registered nodes without a type tag.
    pub untyped_nodes: usize,
    /// Registered nodes per type tag.
    pub node_types: BTreeMap<String, usize>,
    /// Relationship records per relationship type.
    pub relationship_types: BTreeMap<String, usize>,
}

/// The in-memory property graph.
///
/// The graph owns every node in an arena; relationships refer to their
/// endpoints by `NodeId`, and each node keeps ordered indices of the
/// relationships it takes part in.
pub struct Graph {
    /// All nodes ever added, indexed by `NodeId`.
    nodes: Vec<Node>,
    /// All relationships in insertion order.
    relationships: Vec<Relationship>,
    /// Name registry: name -> most recently added node with that name.
    names: HashMap<String, NodeId>,
    /// Change listeners, called in registration order.
    listeners: Vec<ChangeListener>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_NODE_CAPACITY)
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            relationships: Vec::new(),
            names: HashMap::with_capacity(capacity),
            listeners: Vec::new(),
        }
    }

    /// Number of nodes reachable by name.
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of arena slots, shadowed nodes included.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of relationships.
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Whether a node is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Register a node under its name, replacing any earlier registration.
    ///
    /// The replaced node stays in the arena, so relationships that point at
    /// it keep working, but it can no longer be found by name.
    pub fn add(&mut self, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u64);
        node.id = id;
        node.outgoing.clear();
        node.incoming.clear();

        if let Some(previous) = self.names.insert(node.name().to_string(), id) {
            debug!(
                "node {:?} re-registered: id {} replaces id {}",
                node.name(),
                id,
                previous
            );
        } else {
            debug!("node {:?} registered with id {}", node.name(), id);
        }

        let change = NodeChange::new(id, node.name(), ChangeKind::Created);
        self.nodes.push(node);
        self.notify(&change);
        id
    }

    /// Look up the node registered under `name`.
    pub fn find(&self, name: &str) -> GraphResult<&Node> {
        self.id_of(name)
            .and_then(|id| self.get(id))
            .ok_or_else(|| GraphError::NotFound(name.to_string()))
    }

    /// The id currently registered under `name`.
    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    /// Get a node by arena id, registered or shadowed.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        id.index().and_then(|i| self.nodes.get(i))
    }

    /// Iterate over registered nodes (arbitrary order).
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.names.values().filter_map(move |&id| self.get(id))
    }

    /// All relationships in insertion order.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Add a directed relationship from `source` to `target`.
    ///
    /// Duplicates and self-relationships are allowed; each call adds exactly
    /// one record and one entry on each endpoint.
    pub fn add_relationship(
        &mut self,
        source: NodeId,
        relationship_type: impl Into<String>,
        target: NodeId,
    ) -> GraphResult<()> {
        let source_slot = self.slot(source)?;
        let target_slot = self.slot(target)?;

        let relationship = Relationship::new(source, relationship_type, target);
        let index = self.relationships.len();
        debug!(
            "relationship #{}: {} -[{}]-> {}",
            index, source, relationship.relationship_type, target
        );

        let source_change = NodeChange::new(
            source,
            self.nodes[source_slot].name(),
            ChangeKind::RelationshipAdded {
                relationship_type: relationship.relationship_type.clone(),
                direction: Direction::Forward,
            },
        );
        let target_change = NodeChange::new(
            target,
            self.nodes[target_slot].name(),
            ChangeKind::RelationshipAdded {
                relationship_type: relationship.relationship_type.clone(),
                direction: Direction::Backward,
            },
        );

        self.relationships.push(relationship);
        self.nodes[source_slot].outgoing.push(index);
        self.nodes[target_slot].incoming.push(index);

        self.notify(&source_change);
        self.notify(&target_change);
        Ok(())
    }

    /// Add a relationship between two registered nodes, by name.
    pub fn link(
        &mut self,
        source: &str,
        relationship_type: impl Into<String>,
        target: &str,
    ) -> GraphResult<()> {
        let source_id = self.find(source)?.id();
        let target_id = self.find(target)?.id();
        self.add_relationship(source_id, relationship_type, target_id)
    }

    /// Relationships where `id` is the source, in insertion order.
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &Relationship> + '_ {
        self.get(id)
            .into_iter()
            .flat_map(move |node| node.outgoing.iter().map(move |&i| &self.relationships[i]))
    }

    /// Relationships where `id` is the target, in insertion order.
    pub fn incoming(&self, id: NodeId) -> impl Iterator<Item = &Relationship> + '_ {
        self.get(id)
            .into_iter()
            .flat_map(move |node| node.incoming.iter().map(move |&i| &self.relationships[i]))
    }

    /// Start a query from the node named `name`.
    ///
    /// The name is not resolved until the query runs, so it may refer to a
    /// node that has not been added yet.
    pub fn query_from(&self, name: impl Into<String>) -> Query<'_> {
        Query::new(self, name)
    }

    /// Register a listener that is told about node creation and relationship changes.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&NodeChange) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Counts over registered nodes and all relationships.
    pub fn summary(&self) -> GraphSummary {
        let mut node_types: BTreeMap<String, usize> = BTreeMap::new();
        let mut untyped_nodes = 0;
        for node in self.nodes() {
            match node.node_type() {
                Some(t) => *node_types.entry(t.to_string()).or_default() += 1,
                None => untyped_nodes += 1,
            }
        }

        let mut relationship_types: BTreeMap<String, usize> = BTreeMap::new();
        for rel in &self.relationships {
            *relationship_types
                .entry(rel.relationship_type.clone())
                .or_default() += 1;
        }

        GraphSummary {
            nodes: self.node_count(),
            arena_slots: self.arena_len(),
            relationships: self.relationship_count(),
            untyped_nodes,
            node_types,
            relationship_types,
        }
    }

    /// The summary as a JSON value.
    pub fn info_json(&self) -> serde_json::Value {
        serde_json::to_value(self.summary()).unwrap_or_default()
    }

    /// Arena slot of `id`, checked against this graph.
    fn slot(&self, id: NodeId) -> GraphResult<usize> {
        id.index()
            .filter(|&i| i < self.nodes.len())
            .ok_or(GraphError::UnknownNodeId(id))
    }

    fn notify(&mut self, change: &NodeChange) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.node_count())
            .field("arena_slots", &self.arena_len())
            .field("relationships", &self.relationship_count())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
