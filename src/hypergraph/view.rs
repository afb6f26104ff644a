//! Simple-graph views of a hypergraph for visualization.
//!
//! Plotting tools draw simple graphs, so a hypergraph is shown through its
//! star expansion: every hyperedge becomes an extra vertex joined to each of
//! its endpoints.

use std::collections::BTreeMap;
use std::fmt;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{NodeIndex, UnGraph};

use super::store::Hypergraph;
use super::types::{EdgeId, EdgeKind, Hyperedge, NodeId};

/// A vertex of the star expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewVertex {
    /// A pin of the circuit
    Pin { id: NodeId, name: String },
    /// A hyperedge, drawn as its own vertex
    Edge {
        id: EdgeId,
        kind: EdgeKind,
        display_name: String,
    },
}

impl ViewVertex {
    pub fn is_pin(&self) -> bool {
        matches!(self, ViewVertex::Pin { .. })
    }
}

impl fmt::Display for ViewVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewVertex::Pin { id, name } => write!(f, "{} - {}", id, name),
            ViewVertex::Edge { display_name, .. } => write!(f, "{}", display_name),
        }
    }
}

/// An endpoint-to-hyperedge link in the star expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incidence;

impl fmt::Display for Incidence {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// Star expansion of a hypergraph.
#[derive(Debug, Clone)]
pub struct StarView {
    pub graph: UnGraph<ViewVertex, Incidence>,
    pub pins: BTreeMap<NodeId, NodeIndex>,
    pub edges: BTreeMap<EdgeId, NodeIndex>,
}

impl StarView {
    /// Graph vertex for a store node.
    pub fn pin(&self, node: NodeId) -> Option<NodeIndex> {
        self.pins.get(&node).copied()
    }

    /// Graph vertex for a hyperedge.
    pub fn edge(&self, edge: EdgeId) -> Option<NodeIndex> {
        self.edges.get(&edge).copied()
    }

    /// Render as Graphviz DOT.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[Config::EdgeNoLabel]))
    }
}

/// Build the star expansion of `store`.
pub fn to_graph(store: &Hypergraph) -> StarView {
    let mut graph = UnGraph::new_undirected();
    let mut pins = BTreeMap::new();
    let mut edges = BTreeMap::new();

    for record in store.node_records() {
        let idx = graph.add_node(ViewVertex::Pin {
            id: record.id,
            name: record.name.clone(),
        });
        pins.insert(record.id, idx);
    }

    for edge in store.hyperedges() {
        let idx = graph.add_node(ViewVertex::Edge {
            id: edge.id,
            kind: edge.kind.clone(),
            display_name: edge.display_name(),
        });
        edges.insert(edge.id, idx);
        for node in &edge.nodes {
            if let Some(&pin) = pins.get(node) {
                graph.add_edge(pin, idx, Incidence);
            }
        }
    }

    StarView { graph, pins, edges }
}

/// Graphviz DOT text of the star expansion of `store`.
pub fn to_dot(store: &Hypergraph) -> String {
    to_graph(store).to_dot()
}

/// Group hyperedges by endpoint count, smallest order first.
pub fn decompose_by_order(store: &Hypergraph) -> BTreeMap<usize, Vec<&Hyperedge>> {
    let mut groups: BTreeMap<usize, Vec<&Hyperedge>> = BTreeMap::new();
    for edge in store.hyperedges() {
        groups.entry(edge.order()).or_default().push(edge);
    }
    groups
}
