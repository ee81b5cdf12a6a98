//! In-memory graph storage — the arena, the name registry and traversal helpers.

pub mod builder;
pub mod events;
pub mod property_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use events::{ChangeKind, NodeChange};
pub use property_graph::{Graph, GraphSummary};
pub use traversal::{neighbors, Direction};
