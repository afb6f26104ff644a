//! Hypergraph storage shared by every component of an assembly.
//!
//! This module provides the [`HypergraphStore`] contract the topology core
//! relies on, the in-memory [`Hypergraph`] that implements it, persistence of
//! a whole store, and simple-graph views for visualization.

mod persist;
mod store;
mod types;
pub mod view;

pub use persist::{from_json, read_file, to_json, write_file, FORMAT_VERSION};
pub use store::{Hypergraph, HypergraphStore};
pub use types::*;
