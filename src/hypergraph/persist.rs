//! Persistence of a whole hypergraph as JSON.
//!
//! The file holds every node, every hyperedge with its kind, and both id
//! counters, so a restored store continues numbering where the original
//! stopped. Records are written in id order, which makes the output
//! deterministic: writing a restored store reproduces the same bytes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::store::Hypergraph;
use super::types::{EdgeId, EdgeKind};
use crate::error::{HypernetError, Result};

/// Version written into every file.
pub const FORMAT_VERSION: u32 = 1;

// Node handles are tied to one store instance, so files hold bare indices.
#[derive(Serialize, Deserialize)]
struct FileNode {
    id: usize,
    name: String,
}

#[derive(Serialize, Deserialize)]
struct FileEdge {
    id: EdgeId,
    nodes: Vec<usize>,
    #[serde(flatten)]
    kind: EdgeKind,
}

#[derive(Serialize, Deserialize)]
struct HypergraphFile {
    format_version: u32,
    next_node: usize,
    next_edge: usize,
    nodes: Vec<FileNode>,
    edges: Vec<FileEdge>,
}

/// Serialize a hypergraph to a JSON string.
pub fn to_json(graph: &Hypergraph) -> Result<String> {
    let file = HypergraphFile {
        format_version: FORMAT_VERSION,
        next_node: graph.next_node,
        next_edge: graph.next_edge,
        nodes: graph
            .node_records()
            .map(|r| FileNode {
                id: r.id.index(),
                name: r.name.clone(),
            })
            .collect(),
        edges: graph
            .hyperedges()
            .map(|e| FileEdge {
                id: e.id,
                nodes: e.nodes.iter().map(|n| n.index()).collect(),
                kind: e.kind.clone(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Restore a hypergraph from a JSON string.
pub fn from_json(input: &str) -> Result<Hypergraph> {
    let file: HypergraphFile = serde_json::from_str(input)?;
    if file.format_version != FORMAT_VERSION {
        return Err(HypernetError::UnsupportedFormat {
            found: file.format_version,
            expected: FORMAT_VERSION,
        });
    }
    Hypergraph::from_parts(
        file.nodes.into_iter().map(|n| (n.id, n.name)).collect(),
        file.edges.into_iter().map(|e| (e.id, e.nodes, e.kind)).collect(),
        file.next_node,
        file.next_edge,
    )
}

/// Write a hypergraph to `path`.
pub fn write_file(graph: &Hypergraph, path: &Path) -> Result<()> {
    let json = to_json(graph)?;
    fs::write(path, json).map_err(|e| HypernetError::file_write(path, e))?;
    tracing::debug!(
        path = %path.display(),
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        "wrote hypergraph"
    );
    Ok(())
}

/// Read a hypergraph from `path`.
pub fn read_file(path: &Path) -> Result<Hypergraph> {
    let content = fs::read_to_string(path).map_err(|e| HypernetError::file_read(path, e))?;
    from_json(&content)
}

impl Hypergraph {
    /// Read a hypergraph previously written with
    /// [`HypergraphStore::write`](super::HypergraphStore::write).
    pub fn read(path: &Path) -> Result<Self> {
        read_file(path)
    }
}
