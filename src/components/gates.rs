//! Two-input logic gates built from transistors.

use crate::circuit::{Component, ComponentCx, ComponentId};
use crate::error::Result;
use crate::hypergraph::NodeId;

use super::Pfet;

/// Two-input NOR gate: transistors in series between `vcc` and `out`.
#[derive(Debug, Clone, Copy)]
pub struct Nor {
    pub id: ComponentId,
    pub pfet_a: Pfet,
    pub pfet_b: Pfet,
    pub a: NodeId,
    pub b: NodeId,
    pub out: NodeId,
    pub vcc: NodeId,
    pub gnd: NodeId,
}

impl Component for Nor {
    const TYPE_NAME: &'static str = "Nor";

    fn build(cx: &mut ComponentCx<'_>) -> Result<Self> {
        let pfet_a: Pfet = cx.child("pfet_a")?;
        let pfet_b: Pfet = cx.child("pfet_b")?;

        let a = cx.node("a")?;
        let b = cx.node("b")?;
        let out = cx.node("out")?;
        let vcc = cx.node("vcc")?;
        let gnd = cx.node("gnd")?;

        cx.connect(pfet_a.gate, a)?;
        cx.connect(pfet_b.gate, b)?;

        cx.connect(pfet_a.drain, vcc)?;
        cx.connect(pfet_a.source, pfet_b.drain)?;
        cx.connect(pfet_b.source, out)?;

        cx.connect(pfet_a.gnd, gnd)?;
        cx.connect(pfet_b.gnd, gnd)?;

        Ok(Self {
            id: cx.id(),
            pfet_a,
            pfet_b,
            a,
            b,
            out,
            vcc,
            gnd,
        })
    }
}

/// Two-input NAND gate: transistors in parallel between `vcc` and `out`.
#[derive(Debug, Clone, Copy)]
pub struct Nand {
    pub id: ComponentId,
    pub pfet_a: Pfet,
    pub pfet_b: Pfet,
    pub a: NodeId,
    pub b: NodeId,
    pub out: NodeId,
    pub vcc: NodeId,
    pub gnd: NodeId,
}

impl Component for Nand {
    const TYPE_NAME: &'static str = "Nand";

    fn build(cx: &mut ComponentCx<'_>) -> Result<Self> {
        let pfet_a: Pfet = cx.child("pfet_a")?;
        let pfet_b: Pfet = cx.child("pfet_b")?;

        let a = cx.node("a")?;
        let b = cx.node("b")?;
        let out = cx.node("out")?;
        let vcc = cx.node("vcc")?;
        let gnd = cx.node("gnd")?;

        cx.connect(pfet_a.gate, a)?;
        cx.connect(pfet_b.gate, b)?;

        cx.connect(pfet_a.drain, vcc)?;
        cx.connect(pfet_b.drain, vcc)?;

        cx.connect(out, pfet_a.source)?;
        cx.connect(out, pfet_b.source)?;

        cx.connect(pfet_a.gnd, gnd)?;
        cx.connect(pfet_b.gnd, gnd)?;

        Ok(Self {
            id: cx.id(),
            pfet_a,
            pfet_b,
            a,
            b,
            out,
            vcc,
            gnd,
        })
    }
}
