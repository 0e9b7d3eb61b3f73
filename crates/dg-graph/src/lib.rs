//! dg-graph: mutable directed graphs with graph-scoped node identity.
//!
//! Provides:
//! - Node and Edge value types, comparable and hashable
//! - A mutable Graph with cascading node removal
//! - Dense indexing of graph snapshots
//!
//! # Example
//!
//! ```
//! use dg_graph::{Edge, Graph, GraphError};
//!
//! let mut graph = Graph::new();
//! let a = graph.new_node();
//! let b = graph.new_node();
//! graph.connect(a, b).unwrap();
//!
//! assert_eq!(graph.edges(), &[Edge::new(a, b)]);
//! assert_eq!(
//!     graph.connect(a, b),
//!     Err(GraphError::DuplicateEdge { edge: Edge::new(a, b) })
//! );
//!
//! graph.remove(a).unwrap();
//! assert!(!graph.contains(a));
//! assert!(graph.edges().is_empty());
//! ```

pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use dg_core::{DgError, DgResult, GraphId, NodeId};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, Node};
pub use indexing::IndexMap;
