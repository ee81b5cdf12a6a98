//! All data types for the fluent-graph library.

pub mod error;
pub mod filter;
pub mod node;
pub mod relationship;

pub use error::{GraphError, GraphResult};
pub use filter::TypeFilter;
pub use node::{Node, NodeId};
pub use relationship::Relationship;

/// Initial arena capacity used by `Graph::new`.
pub const DEFAULT_NODE_CAPACITY: usize = 16;

/// Returns the current time as Unix epoch microseconds.
pub fn now_micros() -> u64 {
    chrono::Utc::now().timestamp_micros() as u64
}
