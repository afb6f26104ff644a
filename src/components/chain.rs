//! Four pins joined into one net in two halves.

use crate::circuit::{Component, ComponentCx, ComponentId};
use crate::error::Result;
use crate::hypergraph::NodeId;

/// Connects `a-b` and `c-d` as separate nets, then bridges them with `b-c`.
#[derive(Debug, Clone, Copy)]
pub struct NetChain {
    pub id: ComponentId,
    pub a: NodeId,
    pub b: NodeId,
    pub c: NodeId,
    pub d: NodeId,
}

impl Component for NetChain {
    const TYPE_NAME: &'static str = "NetChain";

    fn build(cx: &mut ComponentCx<'_>) -> Result<Self> {
        let a = cx.node("a")?;
        let b = cx.node("b")?;
        let c = cx.node("c")?;
        let d = cx.node("d")?;

        cx.connect(a, b)?;
        cx.connect(c, d)?;
        cx.connect(b, c)?;

        Ok(Self {
            id: cx.id(),
            a,
            b,
            c,
            d,
        })
    }
}
