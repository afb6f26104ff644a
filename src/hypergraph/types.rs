//! Core types for hypergraph representation.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

/// Serial of one [`Hypergraph`](super::Hypergraph) instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreId(u32);

impl StoreId {
    /// Allocate a serial no other store in this process has.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(1);
        StoreId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A handle to a node registered in a [`Hypergraph`](super::Hypergraph).
///
/// Indices are allocated by the store, starting at 1, and are never reused.
/// The handle also records which store allocated it, so handles from two
/// stores never compare equal even when their indices match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    store: StoreId,
    index: usize,
}

impl NodeId {
    pub(crate) fn new(store: StoreId, index: usize) -> Self {
        Self { store, index }
    }

    /// Number of the node within its store.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Store that allocated this handle.
    pub fn store(&self) -> StoreId {
        self.store
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.index)
    }
}

/// A handle to a hyperedge in a [`Hypergraph`](super::Hypergraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub usize);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// What a hyperedge represents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EdgeKind {
    /// An electrical net: every endpoint is the same conductor
    Trace,
    /// The node membership of one component instance
    Label {
        /// Type name of the component, e.g. `"Nor"`
        component_type: String,
    },
}

impl EdgeKind {
    /// Create a label kind for the given component type.
    pub fn label(component_type: impl Into<String>) -> Self {
        EdgeKind::Label {
            component_type: component_type.into(),
        }
    }

    pub fn is_trace(&self) -> bool {
        matches!(self, EdgeKind::Trace)
    }

    pub fn is_label(&self) -> bool {
        matches!(self, EdgeKind::Label { .. })
    }

    /// Component type name for label edges.
    pub fn component_type(&self) -> Option<&str> {
        match self {
            EdgeKind::Label { component_type } => Some(component_type),
            EdgeKind::Trace => None,
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Trace => write!(f, "trace"),
            EdgeKind::Label { component_type } => write!(f, "{}", component_type),
        }
    }
}

/// A registered node and its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: NodeId,
    pub name: String,
}

/// An unordered set of endpoints plus a kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperedge {
    pub id: EdgeId,
    pub nodes: BTreeSet<NodeId>,
    pub kind: EdgeKind,
}

impl Hyperedge {
    /// Number of endpoints.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Display name used by visualization, e.g. `"Nor - e12"`.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.kind, self.id)
    }
}
