//! Dense indexing of a graph snapshot.
//!
//! Maps the live nodes of a graph to contiguous indices (0..N) so callers can
//! keep per-node data in plain vectors or build adjacency matrices.

use std::collections::HashMap;

use dg_core::{DgResult, GraphId, NodeId};

use crate::error::GraphError;
use crate::graph::{Graph, Node};

/// Index map providing contiguous indices for the live nodes of a graph.
///
/// Built once from a graph; later mutation of the graph does not affect it.
/// Provides O(1) lookup in both directions.
#[derive(Debug, Clone)]
pub struct IndexMap {
    graph: GraphId,

    /// Contiguous list of nodes (index -> Node), in `Graph::nodes` order.
    nodes: Vec<Node>,

    /// Reverse lookup: NodeId -> index.
    /// Keyed by id rather than sized by it; removal leaves ids sparse.
    node_to_idx: HashMap<NodeId, usize>,

    /// Every live edge as (origin index, destination index), in `Graph::edges` order.
    edge_pairs: Vec<(usize, usize)>,
}

impl IndexMap {
    /// Build an index map from a graph.
    pub fn from_graph(graph: &Graph) -> Self {
        let nodes = graph.nodes().to_vec();

        let node_to_idx: HashMap<NodeId, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id(), i))
            .collect();

        // Edge endpoints are live by construction, so both lookups hit.
        let edge_pairs = graph
            .edges()
            .iter()
            .filter_map(|e| {
                let origin = *node_to_idx.get(&e.origin.id())?;
                let destination = *node_to_idx.get(&e.destination.id())?;
                Some((origin, destination))
            })
            .collect();

        Self {
            graph: graph.id(),
            nodes,
            node_to_idx,
            edge_pairs,
        }
    }

    /// Number of nodes in the index.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the contiguous index for a node.
    pub fn node_idx(&self, node: Node) -> DgResult<usize> {
        if node.graph() != self.graph {
            return Err(GraphError::NodeNotFound { node }.into());
        }
        self.node_to_idx
            .get(&node.id())
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound { node }.into())
    }

    /// Get the node at a contiguous index.
    pub fn node(&self, i: usize) -> Option<Node> {
        self.nodes.get(i).copied()
    }

    /// All indexed nodes in index order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges as index pairs.
    pub fn edge_pairs(&self) -> &[(usize, usize)] {
        &self.edge_pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_core::DgError;

    #[test]
    fn index_map_basic() {
        let mut g = Graph::new();
        let n1 = g.new_node();
        let n2 = g.new_node();
        g.connect(n1, n2).unwrap();

        let idx_map = IndexMap::from_graph(&g);

        assert_eq!(idx_map.node_count(), 2);

        let i1 = idx_map.node_idx(n1).unwrap();
        assert_eq!(idx_map.node(i1), Some(n1));

        let i2 = idx_map.node_idx(n2).unwrap();
        assert_eq!(idx_map.node(i2), Some(n2));

        assert_eq!(idx_map.edge_pairs(), &[(i1, i2)]);
    }

    #[test]
    fn index_map_unknown_nodes() {
        let mut g = Graph::new();
        let n1 = g.new_node();
        let n2 = g.new_node();
        g.remove(n1).unwrap();

        let mut other = Graph::new();
        let foreign = other.new_node();

        let idx_map = IndexMap::from_graph(&g);

        assert_eq!(idx_map.node_idx(n2).unwrap(), 0);
        assert!(idx_map.node_idx(n1).is_err());
        assert!(matches!(
            idx_map.node_idx(foreign),
            Err(DgError::NotFound { .. })
        ));
        assert_eq!(idx_map.node(1), None);
    }

    #[test]
    fn index_map_is_contiguous_after_removal() {
        let mut g = Graph::new();
        let n1 = g.new_node();
        let n2 = g.new_node();
        let n3 = g.new_node();
        let n4 = g.new_node();
        g.connect(n1, n4).unwrap();
        g.connect(n4, n3).unwrap();
        g.connect(n2, n3).unwrap();
        g.remove(n2).unwrap();

        let idx_map = IndexMap::from_graph(&g);

        assert_eq!(idx_map.node_idx(n1).unwrap(), 0);
        assert_eq!(idx_map.node_idx(n3).unwrap(), 1);
        assert_eq!(idx_map.node_idx(n4).unwrap(), 2);
        assert_eq!(idx_map.nodes(), &[n1, n3, n4]);
        assert_eq!(idx_map.edge_pairs(), &[(0, 2), (2, 1)]);
    }

    #[test]
    fn index_map_is_a_snapshot() {
        let mut g = Graph::new();
        let n1 = g.new_node();
        let idx_map = IndexMap::from_graph(&g);

        let n2 = g.new_node();
        g.remove(n1).unwrap();

        assert_eq!(idx_map.node_idx(n1).unwrap(), 0);
        assert!(idx_map.node_idx(n2).is_err());
    }

    #[test]
    fn index_map_after_heavy_churn() {
        let mut g = Graph::new();
        for _ in 0..10_000 {
            let n = g.new_node();
            g.remove(n).unwrap();
        }
        let a = g.new_node();
        let b = g.new_node();
        g.connect(b, a).unwrap();
        // Mimic a long-lived graph whose ids are far apart.
        g.last_node = NodeId::new(50_000_000);
        let c = g.new_node();

        let idx_map = IndexMap::from_graph(&g);

        assert_eq!(c.id().get(), 50_000_001);
        assert_eq!(idx_map.node_to_idx.len(), 3);
        assert_eq!(idx_map.node_idx(a).unwrap(), 0);
        assert_eq!(idx_map.node_idx(c).unwrap(), 2);
        assert_eq!(idx_map.edge_pairs(), &[(1, 0)]);
    }

    #[test]
    fn index_map_empty_graph() {
        let idx_map = IndexMap::from_graph(&Graph::new());
        assert_eq!(idx_map.node_count(), 0);
        assert!(idx_map.edge_pairs().is_empty());
    }
}
