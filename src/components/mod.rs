//! Example circuit components.
//!
//! This module provides a small catalogue of hierarchical components:
//! - Transistor: P-channel FET
//! - Gates: NOR, NAND
//! - Latch: RS NOR latch
//! - Fixture: a four-pin net chain
//!
//! Each component creates its pins, wires its children, and leaves label
//! emission to the assembly.

mod chain;
mod gates;
mod latch;
mod transistor;

pub use chain::NetChain;
pub use gates::{Nand, Nor};
pub use latch::RsNorLatch;
pub use transistor::Pfet;

use std::fmt;
use std::str::FromStr;

use crate::circuit::{Assembly, AssemblyOptions, Component};
use crate::error::{HypernetError, Result};

/// A catalogue entry that can be built as a top-level assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExampleCircuit {
    Pfet,
    Nor,
    Nand,
    RsNorLatch,
    NetChain,
}

impl ExampleCircuit {
    /// Every catalogue entry, leaves first.
    pub const ALL: [ExampleCircuit; 5] = [
        ExampleCircuit::Pfet,
        ExampleCircuit::Nor,
        ExampleCircuit::Nand,
        ExampleCircuit::RsNorLatch,
        ExampleCircuit::NetChain,
    ];

    /// Type name of the root component.
    pub fn type_name(&self) -> &'static str {
        match self {
            ExampleCircuit::Pfet => Pfet::TYPE_NAME,
            ExampleCircuit::Nor => Nor::TYPE_NAME,
            ExampleCircuit::Nand => Nand::TYPE_NAME,
            ExampleCircuit::RsNorLatch => RsNorLatch::TYPE_NAME,
            ExampleCircuit::NetChain => NetChain::TYPE_NAME,
        }
    }

    /// Build the entry as the root of a new assembly.
    pub fn build(&self, options: AssemblyOptions) -> Result<Assembly> {
        let assembly = match self {
            ExampleCircuit::Pfet => Assembly::build_with::<Pfet>(options)?.0,
            ExampleCircuit::Nor => Assembly::build_with::<Nor>(options)?.0,
            ExampleCircuit::Nand => Assembly::build_with::<Nand>(options)?.0,
            ExampleCircuit::RsNorLatch => Assembly::build_with::<RsNorLatch>(options)?.0,
            ExampleCircuit::NetChain => Assembly::build_with::<NetChain>(options)?.0,
        };
        Ok(assembly)
    }
}

impl fmt::Display for ExampleCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl FromStr for ExampleCircuit {
    type Err = HypernetError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.replace(['-', '_'], "").to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.type_name().to_lowercase() == wanted)
            .ok_or_else(|| HypernetError::UnknownCircuit { name: s.to_string() })
    }
}
