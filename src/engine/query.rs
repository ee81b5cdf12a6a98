//! Query executor — single-hop filtered traversal and chained sub-queries.

use std::collections::HashSet;

use log::{debug, trace};
use serde::Serialize;

use crate::graph::{neighbors, Direction, Graph};
use crate::types::{GraphResult, Node, NodeId, TypeFilter};

/// A finished description of what a query looks for.
///
/// Plain data: building a variant leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuerySpec {
    /// Name of the starting node, resolved at execution time.
    pub from: String,
    /// Which relationship types to follow.
    pub relationship: TypeFilter,
    /// Which adjacency list to scan.
    pub direction: Direction,
    /// Which node types to keep at the far end.
    pub to_type: TypeFilter,
}

impl QuerySpec {
    /// Unfiltered forward query from `from`.
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            relationship: TypeFilter::Any,
            direction: Direction::Forward,
            to_type: TypeFilter::Any,
        }
    }

    /// Same spec with a different relationship filter.
    pub fn with_relationship(self, relationship: TypeFilter) -> Self {
        Self {
            relationship,
            ..self
        }
    }

    /// Same spec with a different direction.
    pub fn with_direction(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }

    /// Same spec with a different destination type filter.
    pub fn with_to_type(self, to_type: TypeFilter) -> Self {
        Self { to_type, ..self }
    }

    /// Whether a relationship of `relationship_type` leading to `node` passes both filters.
    pub fn accepts(&self, relationship_type: &str, node: &Node) -> bool {
        self.relationship.matches(Some(relationship_type)) && self.to_type.matches(node.node_type())
    }
}

/// A query bound to a graph.
///
/// Every configuration method consumes the query and returns the updated
/// one; a `Query` can be cloned and executed any number of times.
#[derive(Debug, Clone)]
pub struct Query<'g> {
    graph: &'g Graph,
    spec: QuerySpec,
}

impl<'g> Query<'g> {
    /// Create an unfiltered forward query. Prefer `Graph::query_from`.
    pub fn new(graph: &'g Graph, from: impl Into<String>) -> Self {
        Self {
            graph,
            spec: QuerySpec::new(from),
        }
    }

    /// Wrap an existing spec.
    pub fn from_spec(graph: &'g Graph, spec: QuerySpec) -> Self {
        Self { graph, spec }
    }

    /// The current configuration.
    pub fn spec(&self) -> &QuerySpec {
        &self.spec
    }

    /// Only follow relationships of this type. Direction is left as is.
    pub fn related_by(self, relationship_type: impl Into<String>) -> Self {
        self.map_spec(|spec| spec.with_relationship(TypeFilter::exactly(relationship_type)))
    }

    /// Only follow incoming relationships of this type.
    pub fn related_by_reverse(self, relationship_type: impl Into<String>) -> Self {
        self.related_by(relationship_type).backward()
    }

    /// Follow relationships of any type.
    pub fn any_relationship(self) -> Self {
        self.map_spec(|spec| spec.with_relationship(TypeFilter::Any))
    }

    /// Scan outgoing relationships.
    pub fn forward(self) -> Self {
        self.direction(Direction::Forward)
    }

    /// Scan incoming relationships.
    pub fn backward(self) -> Self {
        self.direction(Direction::Backward)
    }

    /// Set the traversal direction.
    pub fn direction(self, direction: Direction) -> Self {
        self.map_spec(|spec| spec.with_direction(direction))
    }

    /// Only keep neighbours with this node type.
    pub fn to_node_type(self, node_type: impl Into<String>) -> Self {
        self.map_spec(|spec| spec.with_to_type(TypeFilter::exactly(node_type)))
    }

    /// Keep neighbours of any type, untyped included.
    pub fn any_node_type(self) -> Self {
        self.map_spec(|spec| spec.with_to_type(TypeFilter::Any))
    }

    fn map_spec(self, f: impl FnOnce(QuerySpec) -> QuerySpec) -> Self {
        Self {
            graph: self.graph,
            spec: f(self.spec),
        }
    }

    /// Run the query.
    ///
    /// Returns matching neighbours in relationship insertion order. A
    /// neighbour linked by several matching relationships appears once per
    /// relationship. Fails with `NotFound` if the starting name is not
    /// registered.
    pub fn execute(&self) -> GraphResult<Vec<&'g Node>> {
        let graph = self.graph;
        let start = graph.find(&self.spec.from)?;

        let results: Vec<&'g Node> = neighbors(graph, start.id(), self.spec.direction)
            .filter(|(rel, node)| {
                let keep = self.spec.accepts(&rel.relationship_type, node);
                trace!(
                    "{:?} -[{}]- {:?}: {}",
                    self.spec.from,
                    rel.relationship_type,
                    node.name(),
                    if keep { "kept" } else { "skipped" }
                );
                keep
            })
            .map(|(_, node)| node)
            .collect();

        debug!(
            "query from {:?} ({}, relationship {}, to type {}) matched {} node(s)",
            self.spec.from,
            self.spec.direction,
            self.spec.relationship,
            self.spec.to_type,
            results.len()
        );
        Ok(results)
    }

    /// Number of results `execute` would return.
    pub fn count(&self) -> GraphResult<usize> {
        self.execute().map(|results| results.len())
    }

    /// Run this query, then run a second query from every result.
    ///
    /// `configure` receives a fresh unfiltered query rooted at each
    /// first-hop node (by name) and returns it configured. The second-hop
    /// results are merged without duplicates, in first-seen order. Nodes
    /// named like this query's starting node are left out.
    pub fn execute_sub_query<F>(&self, configure: F) -> GraphResult<Vec<&'g Node>>
    where
        F: Fn(Query<'g>) -> Query<'g>,
    {
        let first_hop = self.execute()?;

        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut merged: Vec<&'g Node> = Vec::new();
        for node in first_hop {
            let sub_query = configure(Query::new(self.graph, node.name()));
            for found in sub_query.execute()? {
                if found.name() == self.spec.from {
                    continue;
                }
                if seen.insert(found.id()) {
                    merged.push(found);
                }
            }
        }

        debug!(
            "sub-query from {:?} collected {} distinct node(s)",
            self.spec.from,
            merged.len()
        );
        Ok(merged)
    }
}
