//! Net consolidation.
//!
//! Every electrically connected set of pins is represented by exactly one
//! `Trace` hyperedge. Connecting two pins inserts a two-pin trace and then
//! folds every trace touching either pin into a single hyperedge spanning
//! their union, so the invariant holds again when [`consolidate`] returns.

use std::collections::BTreeSet;

use crate::error::{HypernetError, Result};
use crate::hypergraph::{EdgeId, EdgeKind, HypergraphStore, NodeId};

/// Wire `a` to `b` in `store`, merging the nets on either side.
///
/// Returns the `Trace` hyperedge that now holds both pins. Fails with
/// [`HypernetError::Membership`] before touching the store if either pin is
/// not registered. The final remove-and-insert is a single
/// [`HypergraphStore::replace_hyperedges`] call, so a failed rewrite never
/// leaves pins without a covering trace.
pub fn consolidate<S: HypergraphStore + ?Sized>(store: &mut S, a: NodeId, b: NodeId) -> Result<EdgeId> {
    for node in [a, b] {
        if !store.contains_node(node) {
            return Err(HypernetError::membership(node));
        }
    }

    let pair: BTreeSet<NodeId> = [a, b].into_iter().collect();
    let inserted = store.add_hyperedge(&pair, EdgeKind::Trace)?;

    let mut star = store.star(a)?;
    star.extend(store.star(b)?);

    let mut nodes = BTreeSet::new();
    let mut traces = BTreeSet::new();
    for edge in star {
        if !store.hyperedge_kind(edge)?.is_trace() {
            continue;
        }
        nodes.extend(store.hyperedge_nodes(edge)?.iter().copied());
        traces.insert(edge);
    }

    if traces.len() <= 1 {
        tracing::trace!(%a, %b, net = %inserted, "new net");
        return Ok(inserted);
    }

    let merged = store.replace_hyperedges(&traces, &nodes, EdgeKind::Trace)?;
    tracing::debug!(
        %a,
        %b,
        net = %merged,
        merged = traces.len(),
        pins = nodes.len(),
        "merged nets"
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypergraph::Hypergraph;

    fn traces(g: &Hypergraph) -> Vec<BTreeSet<NodeId>> {
        g.traces().map(|e| e.nodes.clone()).collect()
    }

    fn set(nodes: &[NodeId]) -> BTreeSet<NodeId> {
        nodes.iter().copied().collect()
    }

    #[test]
    fn test_first_connection_starts_net() {
        let mut g = Hypergraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let net = consolidate(&mut g, a, b).unwrap();
        assert_eq!(traces(&g), vec![set(&[a, b])]);
        assert_eq!(g.net_of(a).map(|e| e.id), Some(net));
    }

    #[test]
    fn test_bridge_merges_two_nets() {
        let mut g = Hypergraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        let d = g.add_node("d");

        consolidate(&mut g, a, b).unwrap();
        consolidate(&mut g, c, d).unwrap();
        assert_eq!(g.traces().count(), 2);

        consolidate(&mut g, b, c).unwrap();
        assert_eq!(traces(&g), vec![set(&[a, b, c, d])]);
    }

    #[test]
    fn test_extending_a_net() {
        let mut g = Hypergraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        consolidate(&mut g, a, b).unwrap();
        consolidate(&mut g, c, b).unwrap();
        assert_eq!(traces(&g), vec![set(&[a, b, c])]);
    }

    #[test]
    fn test_reconnect_same_net_keeps_node_set() {
        let mut g = Hypergraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        consolidate(&mut g, a, b).unwrap();
        consolidate(&mut g, b, c).unwrap();
        let before = traces(&g);

        consolidate(&mut g, a, c).unwrap();
        assert_eq!(traces(&g), before);
        assert_eq!(g.star(a).unwrap().len(), 1);
    }

    #[test]
    fn test_labels_are_not_merged() {
        let mut g = Hypergraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        let label = g
            .add_hyperedge(&set(&[a, b, c]), EdgeKind::label("Block"))
            .unwrap();

        consolidate(&mut g, a, b).unwrap();
        assert_eq!(traces(&g), vec![set(&[a, b])]);
        assert_eq!(g.hyperedge_nodes(label).unwrap(), &set(&[a, b, c]));
    }

    #[test]
    fn test_self_connection() {
        let mut g = Hypergraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");

        consolidate(&mut g, a, a).unwrap();
        assert_eq!(traces(&g), vec![set(&[a])]);

        consolidate(&mut g, a, b).unwrap();
        consolidate(&mut g, b, b).unwrap();
        assert_eq!(traces(&g), vec![set(&[a, b])]);
    }

    #[test]
    fn test_unregistered_endpoint_leaves_store_untouched() {
        let mut g = Hypergraph::new();
        let y = g.add_node("y");
        let x = Hypergraph::new().add_node("x");

        let err = consolidate(&mut g, x, y).unwrap_err();
        assert!(matches!(err, HypernetError::Membership { node } if node == x));
        assert_eq!(g.num_edges(), 0);
        assert_eq!(g.node_set(), set(&[y]));

        let err = consolidate(&mut g, y, x).unwrap_err();
        assert!(err.is_membership());
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn test_same_index_from_another_store_is_rejected() {
        let mut g = Hypergraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let mut other = Hypergraph::new();
        let x = other.add_node("x");
        let y = other.add_node("y");
        assert_eq!((x.index(), y.index()), (a.index(), b.index()));

        assert!(consolidate(&mut g, x, y).unwrap_err().is_membership());
        assert!(consolidate(&mut g, a, y).unwrap_err().is_membership());
        assert_eq!(g.num_edges(), 0);
        assert_eq!(other.num_edges(), 0);
    }
}
