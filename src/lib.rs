//! # Hypernet Core
//!
//! Circuit topology modelled as a hypergraph.
//!
//! This library provides:
//! - A hypergraph store where pins are nodes and every net is one hyperedge
//! - Hierarchical components that share one store per top-level assembly
//! - Incremental net consolidation on every pairwise connection
//! - Persistence and simple-graph views for visualization
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`hypergraph`] - Store contract, in-memory store, persistence, views
//! - [`circuit`] - Component tree, net consolidation and validation
//! - [`components`] - Example components (transistor, gates, latch)
//! - [`error`] - Error type shared by all modules
//!
//! ## Usage
//!
//! ```
//! use hypernet_core::circuit::{Assembly, Component, ComponentCx};
//! use hypernet_core::hypergraph::NodeId;
//! use hypernet_core::Result;
//!
//! struct Divider {
//!     top: NodeId,
//!     mid: NodeId,
//! }
//!
//! impl Component for Divider {
//!     const TYPE_NAME: &'static str = "Divider";
//!
//!     fn build(cx: &mut ComponentCx<'_>) -> Result<Self> {
//!         let top = cx.node("top")?;
//!         let mid = cx.node("mid")?;
//!         let tap = cx.node("tap")?;
//!         cx.connect(mid, tap)?;
//!         Ok(Divider { top, mid })
//!     }
//! }
//!
//! let (assembly, divider) = Assembly::build::<Divider>().unwrap();
//! assert_eq!(assembly.store().traces().count(), 1);
//! assert!(assembly.store().net_of(divider.top).is_none());
//! assert_eq!(assembly.node_name(divider.mid), "mid");
//! ```
//!
//! ## Net Consolidation
//!
//! A node belongs to at most one `Trace` hyperedge. Connecting two nodes:
//!
//! 1. Inserts a `Trace` hyperedge over the pair
//! 2. Collects every `Trace` hyperedge incident to either node
//! 3. If there is more than one, replaces them all by a single hyperedge
//!    spanning their union

pub mod circuit;
pub mod components;
pub mod error;
pub mod hypergraph;

// Re-export main types for convenience
pub use circuit::{Assembly, AssemblyOptions, Component, ComponentCx, LabelMembership};
pub use error::{HypernetError, Result};
pub use hypergraph::{EdgeId, EdgeKind, Hypergraph, HypergraphStore, NodeId};

/// File extension of persisted hypergraphs
pub const HYPERGRAPH_EXTENSION: &str = "hypergraph.json";
