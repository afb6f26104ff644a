//! Set/reset latch built from two cross-coupled NOR gates.

use crate::circuit::{Component, ComponentCx, ComponentId};
use crate::error::Result;
use crate::hypergraph::NodeId;

use super::Nor;

/// RS NOR latch.
#[derive(Debug, Clone, Copy)]
pub struct RsNorLatch {
    pub id: ComponentId,
    pub nor_r: Nor,
    pub nor_s: Nor,
    pub r: NodeId,
    pub s: NodeId,
    pub vcc: NodeId,
    pub gnd: NodeId,
    pub q: NodeId,
    pub q_bar: NodeId,
}

impl Component for RsNorLatch {
    const TYPE_NAME: &'static str = "RsNorLatch";

    fn build(cx: &mut ComponentCx<'_>) -> Result<Self> {
        let nor_r: Nor = cx.child("nor_r")?;
        let nor_s: Nor = cx.child("nor_s")?;

        let r = cx.node("r")?;
        let s = cx.node("s")?;
        let vcc = cx.node("vcc")?;
        let gnd = cx.node("gnd")?;
        let q = cx.node("q")?;
        let q_bar = cx.node("q_bar")?;

        cx.connect(nor_r.a, r)?;
        cx.connect(nor_r.b, nor_s.out)?;

        cx.connect(nor_s.a, s)?;
        cx.connect(nor_s.b, nor_r.out)?;

        cx.connect(nor_r.vcc, vcc)?;
        cx.connect(nor_s.vcc, vcc)?;

        cx.connect(nor_r.gnd, gnd)?;
        cx.connect(nor_s.gnd, gnd)?;

        cx.connect(q, nor_r.out)?;
        cx.connect(q_bar, nor_s.out)?;

        Ok(Self {
            id: cx.id(),
            nor_r,
            nor_s,
            r,
            s,
            vcc,
            gnd,
            q,
            q_bar,
        })
    }
}
