//! Circuit topology built on a shared hypergraph.
//!
//! This module provides the component tree ([`Assembly`], [`Component`]),
//! the net consolidation run on every connection, and validation of the
//! resulting topology.

mod assembly;
mod net;
mod validate;

pub use assembly::{
    Assembly, AssemblyOptions, Component, ComponentCx, ComponentId, ComponentRecord,
    LabelMembership,
};
pub use net::consolidate;
pub use validate::validate_assembly;
