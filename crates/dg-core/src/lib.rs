//! dg-core: stable foundation for digraph.
//!
//! Contains:
//! - ids (graph identity tokens and graph-local node ids)
//! - error (shared error types)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{DgError, DgResult};
pub use ids::*;
