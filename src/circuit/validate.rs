//! Assembly validation.

use std::collections::BTreeMap;

use crate::error::{HypernetError, Result};
use crate::hypergraph::{EdgeKind, HypergraphStore, NodeId};

use super::Assembly;

/// Validate the topology of a built assembly.
///
/// Checks:
/// - No node belongs to more than one `Trace` hyperedge
/// - Every component has exactly one `Label` hyperedge, tagged with its
///   type name and covering exactly its node membership
pub fn validate_assembly(assembly: &Assembly) -> Result<()> {
    let store = assembly.store();

    let mut net_of: BTreeMap<NodeId, _> = BTreeMap::new();
    for trace in store.traces() {
        for node in &trace.nodes {
            if let Some(other) = net_of.insert(*node, trace.id) {
                return Err(HypernetError::invalid_topology(format!(
                    "node {} is in traces {} and {}",
                    assembly.node_label(*node),
                    other,
                    trace.id
                )));
            }
        }
    }

    for record in assembly.components() {
        let label = record.label.ok_or_else(|| {
            HypernetError::invalid_topology(format!(
                "component {} ({}) has no label",
                record.id, record.type_name
            ))
        })?;

        let kind = store.hyperedge_kind(label)?;
        if kind != &EdgeKind::label(record.type_name) {
            return Err(HypernetError::invalid_topology(format!(
                "label {} of component {} is tagged '{}', expected '{}'",
                label, record.id, kind, record.type_name
            )));
        }

        if store.hyperedge_nodes(label)? != &assembly.nodes(record.id)? {
            return Err(HypernetError::invalid_topology(format!(
                "label {} of component {} ({}) does not match its membership",
                label, record.id, record.type_name
            )));
        }
    }

    let labels = store.labels().count();
    if labels != assembly.num_components() {
        return Err(HypernetError::invalid_topology(format!(
            "{} labels for {} components",
            labels,
            assembly.num_components()
        )));
    }

    Ok(())
}
