//! Transistor model.
//!
//! Only the pins matter here: a transistor is a leaf component with four
//! terminals and no internal wiring.

use crate::circuit::{Component, ComponentCx, ComponentId};
use crate::error::Result;
use crate::hypergraph::NodeId;

/// P-channel field effect transistor.
#[derive(Debug, Clone, Copy)]
pub struct Pfet {
    pub id: ComponentId,
    pub gate: NodeId,
    pub drain: NodeId,
    pub source: NodeId,
    pub gnd: NodeId,
}

impl Component for Pfet {
    const TYPE_NAME: &'static str = "Pfet";

    fn build(cx: &mut ComponentCx<'_>) -> Result<Self> {
        Ok(Self {
            id: cx.id(),
            gate: cx.node("gate")?,
            drain: cx.node("drain")?,
            source: cx.node("source")?,
            gnd: cx.node("gnd")?,
        })
    }
}
