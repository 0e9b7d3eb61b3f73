//! Core graph data structures.

use core::fmt;
use std::collections::HashSet;

use dg_core::{GraphId, NodeId};
use tracing::trace;

use crate::error::{GraphError, GraphResult};

/// A node of a directed graph.
///
/// Nodes are plain values: the token of the graph that minted them plus a
/// graph-local id. They can be copied, compared with `==` and used as map
/// keys. Nodes of different graphs never compare equal, even when their
/// local ids coincide. Removing a node from its graph does not invalidate the
/// value, it only ends its membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    graph: GraphId,
    id: NodeId,
}

impl Node {
    pub(crate) fn new(graph: GraphId, id: NodeId) -> Self {
        Self { graph, id }
    }

    /// Identity of the graph that created this node.
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    /// Graph-local id (1 for the first node of a graph).
    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.graph, self.id)
    }
}

/// A directed connection from `origin` to `destination`.
///
/// An edge is identified by its ordered endpoint pair alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub origin: Node,
    pub destination: Node,
}

impl Edge {
    pub fn new(origin: Node, destination: Node) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// True when the edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }

    /// True when `node` is either endpoint.
    pub fn touches(&self, node: Node) -> bool {
        self.origin == node || self.destination == node
    }

    pub(crate) fn key(&self) -> (NodeId, NodeId) {
        (self.origin.id, self.destination.id)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// The graph: a mutable, isolated collection of nodes and directed edges.
///
/// The graph stores:
/// - Live nodes and edges in vectors, in insertion order of the survivors.
/// - Hash indices over both for O(1) membership checks.
///
/// `Graph` is deliberately not `Clone`: a copy would share this graph's
/// identity token and its nodes would be accepted by both.
///
/// Not synchronized. Mutation needs `&mut self`; wrap the graph in a lock to
/// share it between threads.
#[derive(Debug)]
pub struct Graph {
    pub(crate) id: GraphId,
    pub(crate) last_node: Option<NodeId>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) live: HashSet<NodeId>,
    pub(crate) edge_keys: HashSet<(NodeId, NodeId)>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create an empty graph with an identity distinct from every other graph.
    pub fn new() -> Self {
        Self {
            id: GraphId::fresh(),
            last_node: None,
            nodes: Vec::new(),
            edges: Vec::new(),
            live: HashSet::new(),
            edge_keys: HashSet::new(),
        }
    }

    /// Identity token shared by every node this graph creates.
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Create a node inside the graph and return it.
    ///
    /// Ids are handed out sequentially and never reused, even after removal.
    ///
    /// # Panics
    ///
    /// Panics if the graph has already handed out `u64::MAX` node ids.
    pub fn new_node(&mut self) -> Node {
        let id = match self.last_node {
            None => NodeId::FIRST,
            Some(last) => last.next().expect("node id space exhausted"),
        };
        self.last_node = Some(id);

        let node = Node::new(self.id, id);
        self.nodes.push(node);
        self.live.insert(id);
        trace!(%node, "node created");

        node
    }

    /// Return all live nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all live edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph has no live nodes (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check whether `node` was created by this graph and not removed since.
    pub fn contains(&self, node: Node) -> bool {
        node.graph == self.id && self.live.contains(&node.id)
    }

    /// Check whether an edge exists for the exact ordered pair.
    pub fn has_edge(&self, origin: Node, destination: Node) -> bool {
        self.contains(origin)
            && self.contains(destination)
            && self.edge_keys.contains(&(origin.id, destination.id))
    }

    /// Remove a node together with every edge it takes part in.
    pub fn remove(&mut self, node: Node) -> GraphResult<()> {
        self.ensure_contains(node)?;

        self.live.remove(&node.id);
        self.nodes.retain(|n| *n != node);

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(node));
        self.edge_keys
            .retain(|&(origin, destination)| origin != node.id && destination != node.id);
        trace!(%node, dropped_edges = before - self.edges.len(), "node removed");

        Ok(())
    }

    /// Add a directed edge from `origin` to `destination`.
    ///
    /// Both nodes must be live in this graph. Self-loops are allowed; a second
    /// edge for the same ordered pair is not.
    pub fn connect(&mut self, origin: Node, destination: Node) -> GraphResult<()> {
        self.ensure_contains(origin)?;
        self.ensure_contains(destination)?;

        let edge = Edge::new(origin, destination);
        if !self.edge_keys.insert(edge.key()) {
            return Err(GraphError::DuplicateEdge { edge });
        }
        self.edges.push(edge);
        trace!(%edge, "edge added");

        Ok(())
    }

    /// Remove the edge from `origin` to `destination`.
    pub fn disconnect(&mut self, origin: Node, destination: Node) -> GraphResult<()> {
        self.ensure_contains(origin)?;
        self.ensure_contains(destination)?;

        let edge = Edge::new(origin, destination);
        if !self.edge_keys.remove(&edge.key()) {
            return Err(GraphError::EdgeNotFound { edge });
        }
        let pos = self
            .edges
            .iter()
            .position(|e| *e == edge)
            .ok_or_else(|| GraphError::Corrupted {
                what: format!("edge {edge} indexed but not listed"),
            })?;
        self.edges.remove(pos);
        trace!(%edge, "edge removed");

        Ok(())
    }

    /// Destinations of all edges leaving `node`, in edge insertion order.
    pub fn successors(&self, node: Node) -> GraphResult<Vec<Node>> {
        self.ensure_contains(node)?;
        Ok(self
            .edges
            .iter()
            .filter(|e| e.origin == node)
            .map(|e| e.destination)
            .collect())
    }

    /// Origins of all edges entering `node`, in edge insertion order.
    pub fn predecessors(&self, node: Node) -> GraphResult<Vec<Node>> {
        self.ensure_contains(node)?;
        Ok(self
            .edges
            .iter()
            .filter(|e| e.destination == node)
            .map(|e| e.origin)
            .collect())
    }

    fn ensure_contains(&self, node: Node) -> GraphResult<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound { node })
        }
    }
}
