//! Hypergraph storage.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use super::types::{EdgeId, EdgeKind, Hyperedge, NodeId, NodeRecord, StoreId};
use crate::error::{HypernetError, Result};

/// Operations the topology core needs from a hypergraph store.
///
/// Every operation is synchronous and immediately visible to the next call.
pub trait HypergraphStore {
    /// Register a new node and return its handle.
    fn add_node(&mut self, name: &str) -> NodeId;

    /// All registered nodes.
    fn node_set(&self) -> BTreeSet<NodeId>;

    /// Whether the node is registered in this store.
    fn contains_node(&self, node: NodeId) -> bool;

    /// Insert a hyperedge over `nodes`.
    fn add_hyperedge(&mut self, nodes: &BTreeSet<NodeId>, kind: EdgeKind) -> Result<EdgeId>;

    /// Remove every hyperedge in `edges`. Unknown ids fail the whole call.
    fn remove_hyperedges(&mut self, edges: &BTreeSet<EdgeId>) -> Result<()>;

    /// Remove `edges` and insert one hyperedge over `nodes` as a single step.
    ///
    /// Either the whole rewrite happens or the store is left untouched.
    fn replace_hyperedges(
        &mut self,
        edges: &BTreeSet<EdgeId>,
        nodes: &BTreeSet<NodeId>,
        kind: EdgeKind,
    ) -> Result<EdgeId>;

    /// Hyperedges incident to `node`.
    fn star(&self, node: NodeId) -> Result<BTreeSet<EdgeId>>;

    /// Endpoints of a hyperedge.
    fn hyperedge_nodes(&self, edge: EdgeId) -> Result<&BTreeSet<NodeId>>;

    /// Kind (attributes) of a hyperedge.
    fn hyperedge_kind(&self, edge: EdgeId) -> Result<&EdgeKind>;

    /// All hyperedge ids.
    fn hyperedge_ids(&self) -> BTreeSet<EdgeId>;

    /// Persist the whole structure.
    fn write(&self, path: &Path) -> Result<()>;
}

/// In-memory hypergraph.
///
/// Nodes and edges are kept in id order; an incidence index answers star
/// queries without scanning every edge. Id counters belong to the instance,
/// so two stores number their nodes independently; node handles carry the
/// instance's [`StoreId`] so they are only ever recognised by their own store.
#[derive(Debug, Clone)]
pub struct Hypergraph {
    id: StoreId,
    pub(crate) nodes: BTreeMap<NodeId, NodeRecord>,
    pub(crate) edges: BTreeMap<EdgeId, Hyperedge>,
    incidence: HashMap<NodeId, BTreeSet<EdgeId>>,
    pub(crate) next_node: usize,
    pub(crate) next_edge: usize,
}

impl Hypergraph {
    /// Create an empty hypergraph.
    pub fn new() -> Self {
        Self {
            id: StoreId::next(),
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            incidence: HashMap::new(),
            next_node: 1,
            next_edge: 1,
        }
    }

    /// Rebuild from raw parts, e.g. after reading a persisted file.
    ///
    /// Nodes are given by index and name, hyperedges by id, endpoint indices
    /// and kind. Repeated ids and endpoints that name no node are rejected.
    pub(crate) fn from_parts(
        nodes: Vec<(usize, String)>,
        edges: Vec<(EdgeId, Vec<usize>, EdgeKind)>,
        next_node: usize,
        next_edge: usize,
    ) -> Result<Self> {
        let mut graph = Self {
            next_node: next_node.max(1),
            next_edge: next_edge.max(1),
            ..Self::new()
        };
        for (index, name) in nodes {
            let id = NodeId::new(graph.id, index);
            if graph.nodes.contains_key(&id) {
                return Err(HypernetError::DuplicateId { what: "node", id: index });
            }
            graph.incidence.insert(id, BTreeSet::new());
            graph.next_node = graph.next_node.max(index + 1);
            graph.nodes.insert(id, NodeRecord { id, name });
        }
        for (id, endpoints, kind) in edges {
            if graph.edges.contains_key(&id) {
                return Err(HypernetError::DuplicateId { what: "hyperedge", id: id.0 });
            }
            let nodes: BTreeSet<NodeId> = endpoints
                .into_iter()
                .map(|index| NodeId::new(graph.id, index))
                .collect();
            graph.check_endpoints(&nodes)?;
            graph.next_edge = graph.next_edge.max(id.0 + 1);
            let edge = Hyperedge { id, nodes, kind };
            graph.index_edge(&edge);
            graph.edges.insert(id, edge);
        }
        Ok(graph)
    }

    /// Serial of this store instance.
    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Handle of the node registered under `index`, if any.
    pub fn node_at(&self, index: usize) -> Option<NodeId> {
        let id = NodeId::new(self.id, index);
        self.nodes.contains_key(&id).then_some(id)
    }

    /// Number of registered nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of hyperedges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Name a node was registered with.
    pub fn node_name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).map(|r| r.name.as_str())
    }

    /// Iterate over registered nodes in id order.
    pub fn node_records(&self) -> impl Iterator<Item = &NodeRecord> {
        self.nodes.values()
    }

    /// Iterate over hyperedges in id order.
    pub fn hyperedges(&self) -> impl Iterator<Item = &Hyperedge> {
        self.edges.values()
    }

    /// Get a hyperedge by id.
    pub fn hyperedge(&self, edge: EdgeId) -> Option<&Hyperedge> {
        self.edges.get(&edge)
    }

    /// All `Trace` hyperedges in id order.
    pub fn traces(&self) -> impl Iterator<Item = &Hyperedge> {
        self.edges.values().filter(|e| e.kind.is_trace())
    }

    /// All `Label` hyperedges in id order.
    pub fn labels(&self) -> impl Iterator<Item = &Hyperedge> {
        self.edges.values().filter(|e| e.kind.is_label())
    }

    /// The `Trace` hyperedge containing `node`, if the node has been connected.
    pub fn net_of(&self, node: NodeId) -> Option<&Hyperedge> {
        self.incidence
            .get(&node)?
            .iter()
            .filter_map(|id| self.edges.get(id))
            .find(|e| e.kind.is_trace())
    }

    fn check_endpoints(&self, nodes: &BTreeSet<NodeId>) -> Result<()> {
        match nodes.iter().find(|n| !self.nodes.contains_key(n)) {
            Some(&missing) => Err(HypernetError::membership(missing)),
            None => Ok(()),
        }
    }

    fn check_edges(&self, edges: &BTreeSet<EdgeId>) -> Result<()> {
        match edges.iter().find(|e| !self.edges.contains_key(e)) {
            Some(&edge) => Err(HypernetError::UnknownHyperedge { edge }),
            None => Ok(()),
        }
    }

    fn index_edge(&mut self, edge: &Hyperedge) {
        for node in &edge.nodes {
            self.incidence.entry(*node).or_default().insert(edge.id);
        }
    }

    // Callers must have checked the endpoints.
    fn insert_unchecked(&mut self, nodes: &BTreeSet<NodeId>, kind: EdgeKind) -> EdgeId {
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;

        let edge = Hyperedge {
            id,
            nodes: nodes.clone(),
            kind,
        };
        self.index_edge(&edge);
        tracing::trace!(edge = %id, kind = %edge.kind, order = edge.order(), "insert hyperedge");
        self.edges.insert(id, edge);
        id
    }

    // Callers must have checked the ids.
    fn remove_unchecked(&mut self, edges: &BTreeSet<EdgeId>) {
        for id in edges {
            if let Some(edge) = self.edges.remove(id) {
                for node in &edge.nodes {
                    if let Some(star) = self.incidence.get_mut(node) {
                        star.remove(id);
                    }
                }
                tracing::trace!(edge = %id, "remove hyperedge");
            }
        }
    }
}

impl Default for Hypergraph {
    fn default() -> Self {
        Self::new()
    }
}

impl HypergraphStore for Hypergraph {
    fn add_node(&mut self, name: &str) -> NodeId {
        let id = NodeId::new(self.id, self.next_node);
        self.next_node += 1;
        self.nodes.insert(
            id,
            NodeRecord {
                id,
                name: name.to_string(),
            },
        );
        self.incidence.insert(id, BTreeSet::new());
        id
    }

    fn node_set(&self) -> BTreeSet<NodeId> {
        self.nodes.keys().copied().collect()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        node.store() == self.id && self.nodes.contains_key(&node)
    }

    fn add_hyperedge(&mut self, nodes: &BTreeSet<NodeId>, kind: EdgeKind) -> Result<EdgeId> {
        self.check_endpoints(nodes)?;
        Ok(self.insert_unchecked(nodes, kind))
    }

    fn remove_hyperedges(&mut self, edges: &BTreeSet<EdgeId>) -> Result<()> {
        self.check_edges(edges)?;
        self.remove_unchecked(edges);
        Ok(())
    }

    fn replace_hyperedges(
        &mut self,
        edges: &BTreeSet<EdgeId>,
        nodes: &BTreeSet<NodeId>,
        kind: EdgeKind,
    ) -> Result<EdgeId> {
        self.check_edges(edges)?;
        self.check_endpoints(nodes)?;
        self.remove_unchecked(edges);
        Ok(self.insert_unchecked(nodes, kind))
    }

    fn star(&self, node: NodeId) -> Result<BTreeSet<EdgeId>> {
        self.incidence
            .get(&node)
            .cloned()
            .ok_or_else(|| HypernetError::membership(node))
    }

    fn hyperedge_nodes(&self, edge: EdgeId) -> Result<&BTreeSet<NodeId>> {
        self.edges
            .get(&edge)
            .map(|e| &e.nodes)
            .ok_or(HypernetError::UnknownHyperedge { edge })
    }

    fn hyperedge_kind(&self, edge: EdgeId) -> Result<&EdgeKind> {
        self.edges
            .get(&edge)
            .map(|e| &e.kind)
            .ok_or(HypernetError::UnknownHyperedge { edge })
    }

    fn hyperedge_ids(&self) -> BTreeSet<EdgeId> {
        self.edges.keys().copied().collect()
    }

    fn write(&self, path: &Path) -> Result<()> {
        super::persist::write_file(self, path)
    }
}
