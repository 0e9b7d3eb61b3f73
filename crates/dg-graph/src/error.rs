//! Graph-specific error types.

use dg_core::DgError;
use thiserror::Error;

use crate::graph::{Edge, Node};

pub type GraphResult<T> = Result<T, GraphError>;

/// Rejected graph operations.
///
/// All variants are recoverable: they describe bad input from the caller,
/// never a broken graph, except [`GraphError::Corrupted`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The node is not live in this graph (foreign, never created here, or removed).
    #[error("Node {node} is not in this graph")]
    NodeNotFound { node: Node },

    /// `connect` on an ordered pair that already has an edge.
    #[error("Edge {edge} already exists")]
    DuplicateEdge { edge: Edge },

    /// `disconnect` on an ordered pair without an edge.
    #[error("Edge {edge} does not exist")]
    EdgeNotFound { edge: Edge },

    /// Internal state failed an invariant check.
    #[error("Graph invariant violated: {what}")]
    Corrupted { what: String },
}

impl From<GraphError> for DgError {
    fn from(err: GraphError) -> Self {
        let what = err.to_string();
        match err {
            GraphError::NodeNotFound { .. } | GraphError::EdgeNotFound { .. } => {
                DgError::NotFound { what }
            }
            GraphError::DuplicateEdge { .. } => DgError::AlreadyExists { what },
            GraphError::Corrupted { .. } => DgError::Invariant { what },
        }
    }
}
