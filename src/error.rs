//! Error types for the hypernet topology core.
//!
//! This module provides a unified error type [`HypernetError`] that covers
//! all error conditions that can occur while wiring an assembly, rewriting
//! hyperedges in the store, validating the result and persisting it.

use thiserror::Error;

use crate::hypergraph::{EdgeId, NodeId};

/// Result type alias using [`HypernetError`].
pub type Result<T> = std::result::Result<T, HypernetError>;

/// Unified error type for all hypernet operations.
#[derive(Error, Debug)]
pub enum HypernetError {
    // ============ Store Errors ============
    /// Endpoint is not registered in the store the operation runs against
    #[error("Node {node} is not registered in this hypergraph")]
    Membership { node: NodeId },

    /// Hyperedge id does not exist in the store
    #[error("Hyperedge {edge} not found in hypergraph")]
    UnknownHyperedge { edge: EdgeId },

    // ============ Assembly Errors ============
    /// Component handle does not belong to the assembly
    #[error("Component #{id} not found in assembly")]
    UnknownComponent { id: usize },

    /// Name that matches no catalogue entry
    #[error("Unknown circuit '{name}'")]
    UnknownCircuit { name: String },

    /// Invalid assembly topology (found by validation)
    #[error("Invalid assembly topology: {message}")]
    InvalidTopology { message: String },

    // ============ I/O Errors ============
    /// Error reading a persisted hypergraph
    #[error("Failed to read hypergraph file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a persisted hypergraph or view
    #[error("Failed to write '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed persisted hypergraph
    #[error("Malformed hypergraph data: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    /// Same id used twice in persisted hypergraph data
    #[error("Duplicate {what} id {id} in hypergraph data")]
    DuplicateId { what: &'static str, id: usize },

    /// Persisted hypergraph written by an incompatible version
    #[error("Unsupported hypergraph format version {found} (expected {expected})")]
    UnsupportedFormat { found: u32, expected: u32 },
}

impl HypernetError {
    /// Create a membership error
    pub fn membership(node: NodeId) -> Self {
        Self::Membership { node }
    }

    /// Create an invalid topology error
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Create a file read error
    pub fn file_read(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileReadError {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a file write error
    pub fn file_write(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileWriteError {
            path: path.display().to_string(),
            source,
        }
    }

    /// Whether this error is a membership violation.
    pub fn is_membership(&self) -> bool {
        matches!(self, Self::Membership { .. })
    }
}
