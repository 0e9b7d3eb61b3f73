//! Graph validation logic.

use std::collections::HashSet;

use dg_core::{GraphId, NodeId};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, Graph, Node};

impl Graph {
    /// Verify the internal state of the graph.
    ///
    /// Checks that the ordered collections and the lookup indices describe the
    /// same nodes and edges, that every edge endpoint is live and that no id
    /// is ahead of the counter. A healthy graph always passes. This is
    /// O(nodes + edges), so mutators never call it.
    pub fn check_invariants(&self) -> GraphResult<()> {
        validate_nodes(self.id, self.last_node, &self.nodes, &self.live)?;
        validate_edges(&self.edges, &self.live, &self.edge_keys)
    }
}

fn corrupted(what: String) -> GraphError {
    GraphError::Corrupted { what }
}

/// Validate the node list against the graph identity, counter and live index.
pub(crate) fn validate_nodes(
    graph: GraphId,
    last_node: Option<NodeId>,
    nodes: &[Node],
    live: &HashSet<NodeId>,
) -> GraphResult<()> {
    let mut seen = HashSet::with_capacity(nodes.len());
    let mut prev: Option<NodeId> = None;

    for node in nodes {
        if node.graph() != graph {
            return Err(corrupted(format!("node {node} belongs to another graph")));
        }
        if last_node.is_none_or(|last| node.id() > last) {
            return Err(corrupted(format!("node {node} is ahead of the id counter")));
        }
        if !seen.insert(node.id()) {
            return Err(corrupted(format!("node {node} is listed twice")));
        }
        // Survivors keep creation order, so ids only grow along the list.
        if prev.is_some_and(|p| node.id() < p) {
            return Err(corrupted(format!("node {node} is out of order")));
        }
        prev = Some(node.id());
    }

    if seen != *live {
        return Err(corrupted(format!(
            "live index has {} nodes, node list has {}",
            live.len(),
            seen.len()
        )));
    }

    Ok(())
}

/// Validate the edge list against live nodes and the edge index.
pub(crate) fn validate_edges(
    edges: &[Edge],
    live: &HashSet<NodeId>,
    edge_keys: &HashSet<(NodeId, NodeId)>,
) -> GraphResult<()> {
    let mut seen = HashSet::with_capacity(edges.len());

    for edge in edges {
        for endpoint in [edge.origin, edge.destination] {
            if !live.contains(&endpoint.id()) {
                return Err(corrupted(format!(
                    "edge {edge} references removed node {endpoint}"
                )));
            }
        }
        if edge.origin.graph() != edge.destination.graph() {
            return Err(corrupted(format!("edge {edge} spans two graphs")));
        }
        if !seen.insert(edge.key()) {
            return Err(corrupted(format!("edge {edge} is listed twice")));
        }
    }

    if seen != *edge_keys {
        return Err(corrupted(format!(
            "edge index has {} pairs, edge list has {}",
            edge_keys.len(),
            seen.len()
        )));
    }

    Ok(())
}
