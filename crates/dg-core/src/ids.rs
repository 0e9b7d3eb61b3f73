use core::fmt;
use core::num::NonZeroU64;
use core::sync::atomic::{AtomicU64, Ordering};

/// Source of graph identity tokens for this process.
static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity token of one graph instance.
///
/// Every call to [`GraphId::fresh`] yields a token distinct from all tokens
/// previously minted in this process. Nodes embed the token of the graph that
/// created them, which is what keeps node equality graph-scoped.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(NonZeroU64);

impl GraphId {
    /// Mint a new process-unique token.
    pub fn fresh() -> Self {
        let raw = NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed);
        // The counter starts at 1 and 2^64 graphs will not be created.
        Self(NonZeroU64::new(raw).expect("graph id counter wrapped"))
    }

    /// Raw token value, for display and diagnostics.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphId({})", self.get())
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.get())
    }
}

/// Graph-local node identifier.
///
/// - assigned sequentially starting at 1
/// - `NonZero` enables `Option<NodeId>` to be niche-optimized
///
/// A `NodeId` alone says nothing about which graph it belongs to; pair it
/// with a [`GraphId`] before comparing nodes across graphs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(NonZeroU64);

impl NodeId {
    /// The first id handed out by a fresh graph.
    pub const FIRST: NodeId = NodeId(NonZeroU64::MIN);

    /// Build an id from its raw value. Returns `None` for zero.
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    /// The id following this one, or `None` once the id space is exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Raw id value (always >= 1).
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.get())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.get())
    }
}
