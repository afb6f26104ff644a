//! Component trees sharing one hypergraph.
//!
//! An [`Assembly`] owns the single [`Hypergraph`] of a top-level circuit and
//! an arena of component records. Components never hold the store
//! themselves: they are built through a [`ComponentCx`] that borrows the
//! assembly, so every node a child registers lands in its root's store.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::net::consolidate;
use crate::error::{HypernetError, Result};
use crate::hypergraph::{EdgeId, EdgeKind, Hypergraph, HypergraphStore, NodeId};

/// A handle to a component within its [`Assembly`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub usize);

impl ComponentId {
    /// The root component (always index 0).
    pub const ROOT: ComponentId = ComponentId(0);

    pub fn is_root(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which nodes a component's `Label` hyperedge enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMembership {
    /// Only the nodes the component created itself
    Direct,
    /// Own nodes plus the nodes of every descendant
    #[default]
    Recursive,
}

/// Options for building an assembly.
#[derive(Debug, Clone, Default)]
pub struct AssemblyOptions {
    pub label_membership: LabelMembership,
}

/// A circuit element that can be built inside an assembly.
///
/// `build` creates the element's children and nodes and wires them; the
/// element's `Label` hyperedge is emitted by the assembly once `build`
/// returns.
pub trait Component: Sized {
    /// Type name recorded on the `Label` hyperedge.
    const TYPE_NAME: &'static str;

    fn build(cx: &mut ComponentCx<'_>) -> Result<Self>;
}

/// Bookkeeping for one component instance.
#[derive(Debug, Clone)]
pub struct ComponentRecord {
    pub id: ComponentId,
    pub type_name: &'static str,
    /// Binding name within the parent (the type name for the root)
    pub name: String,
    pub parent: Option<ComponentId>,
    /// Named nodes in creation order
    pub bindings: Vec<(String, NodeId)>,
    pub children: Vec<ComponentId>,
    pub label: Option<EdgeId>,
}

/// A top-level circuit: one hypergraph and the component tree built on it.
#[derive(Debug)]
pub struct Assembly {
    store: Hypergraph,
    components: Vec<ComponentRecord>,
    owners: BTreeMap<NodeId, ComponentId>,
    options: AssemblyOptions,
}

impl Assembly {
    /// Build `T` as the root of a new assembly with default options.
    pub fn build<T: Component>() -> Result<(Self, T)> {
        Self::build_with(AssemblyOptions::default())
    }

    /// Build `T` as the root of a new assembly.
    pub fn build_with<T: Component>(options: AssemblyOptions) -> Result<(Self, T)> {
        let mut assembly = Self {
            store: Hypergraph::new(),
            components: Vec::new(),
            owners: BTreeMap::new(),
            options,
        };
        let root = assembly.instantiate::<T>(T::TYPE_NAME.to_string(), None)?;
        tracing::debug!(
            root = T::TYPE_NAME,
            components = assembly.components.len(),
            nodes = assembly.store.num_nodes(),
            edges = assembly.store.num_edges(),
            "built assembly"
        );
        Ok((assembly, root))
    }

    fn instantiate<T: Component>(&mut self, name: String, parent: Option<ComponentId>) -> Result<T> {
        let id = ComponentId(self.components.len());
        self.components.push(ComponentRecord {
            id,
            type_name: T::TYPE_NAME,
            name,
            parent,
            bindings: Vec::new(),
            children: Vec::new(),
            label: None,
        });
        if let Some(parent) = parent {
            self.record_mut(parent)?.children.push(id);
        }

        let built = T::build(&mut ComponentCx { assembly: self, id })?;
        self.emit_label(id)?;
        Ok(built)
    }

    fn emit_label(&mut self, id: ComponentId) -> Result<EdgeId> {
        let nodes = self.nodes(id)?;
        let type_name = self.record(id)?.type_name;
        let edge = self.store.add_hyperedge(&nodes, EdgeKind::label(type_name))?;
        self.record_mut(id)?.label = Some(edge);
        tracing::trace!(component = %id, type_name, label = %edge, "emitted label");
        Ok(edge)
    }

    fn register_node(&mut self, owner: ComponentId, name: &str) -> Result<NodeId> {
        let node = self.store.add_node(name);
        self.record_mut(owner)?.bindings.push((name.to_string(), node));
        self.owners.insert(node, owner);
        Ok(node)
    }

    fn record_mut(&mut self, id: ComponentId) -> Result<&mut ComponentRecord> {
        self.components
            .get_mut(id.0)
            .ok_or(HypernetError::UnknownComponent { id: id.0 })
    }

    /// Wire two nodes, merging their nets.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<EdgeId> {
        consolidate(&mut self.store, a, b)
    }

    /// The shared hypergraph.
    pub fn store(&self) -> &Hypergraph {
        &self.store
    }

    /// Give up the component tree and keep the hypergraph.
    pub fn into_store(self) -> Hypergraph {
        self.store
    }

    /// The root component.
    pub fn root(&self) -> ComponentId {
        ComponentId::ROOT
    }

    /// Get a component record.
    pub fn record(&self, id: ComponentId) -> Result<&ComponentRecord> {
        self.components
            .get(id.0)
            .ok_or(HypernetError::UnknownComponent { id: id.0 })
    }

    /// All components in creation order; a parent precedes its children.
    pub fn components(&self) -> impl Iterator<Item = &ComponentRecord> {
        self.components.iter()
    }

    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    pub fn type_name(&self, id: ComponentId) -> Result<&'static str> {
        Ok(self.record(id)?.type_name)
    }

    pub fn parent(&self, id: ComponentId) -> Result<Option<ComponentId>> {
        Ok(self.record(id)?.parent)
    }

    /// Immediate child components.
    pub fn children(&self, id: ComponentId) -> Result<&[ComponentId]> {
        Ok(&self.record(id)?.children)
    }

    /// The component's `Label` hyperedge, once it has finished building.
    pub fn label(&self, id: ComponentId) -> Result<Option<EdgeId>> {
        Ok(self.record(id)?.label)
    }

    /// Nodes the component created itself.
    pub fn direct_nodes(&self, id: ComponentId) -> Result<BTreeSet<NodeId>> {
        Ok(self.record(id)?.bindings.iter().map(|(_, n)| *n).collect())
    }

    /// Own nodes plus the nodes of every descendant.
    pub fn recursive_nodes(&self, id: ComponentId) -> Result<BTreeSet<NodeId>> {
        let mut nodes = BTreeSet::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let record = self.record(current)?;
            nodes.extend(record.bindings.iter().map(|(_, n)| *n));
            stack.extend(record.children.iter().copied());
        }
        Ok(nodes)
    }

    /// Nodes belonging to the component under the configured membership.
    pub fn nodes(&self, id: ComponentId) -> Result<BTreeSet<NodeId>> {
        match self.options.label_membership {
            LabelMembership::Direct => self.direct_nodes(id),
            LabelMembership::Recursive => self.recursive_nodes(id),
        }
    }

    /// Component that created `node`.
    pub fn owner(&self, node: NodeId) -> Option<ComponentId> {
        self.owners.get(&node).copied()
    }

    /// Name of `node` within its owner, or its raw identity if it has none.
    pub fn node_name(&self, node: NodeId) -> String {
        self.owner(node)
            .and_then(|owner| self.components.get(owner.0))
            .and_then(|record| record.bindings.iter().find(|(_, n)| *n == node))
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| node.to_string())
    }

    /// `"<id> - <name>"`, as shown in views.
    pub fn node_label(&self, node: NodeId) -> String {
        format!("{} - {}", node, self.node_name(node))
    }

    /// Dotted path from the root, e.g. `"nor_r.pfet_a.gate"`.
    pub fn qualified_name(&self, node: NodeId) -> String {
        let mut parts = vec![self.node_name(node)];
        let mut current = self.owner(node);
        while let Some(record) = current.and_then(|id| self.components.get(id.0)) {
            if record.parent.is_none() {
                break;
            }
            parts.push(record.name.clone());
            current = record.parent;
        }
        parts.reverse();
        parts.join(".")
    }

    /// Look up a node by its dotted path from the root.
    pub fn find_node(&self, path: &str) -> Option<NodeId> {
        let mut segments: Vec<&str> = path.split('.').collect();
        let leaf = segments.pop()?;
        let mut current = self.components.first()?;
        for segment in segments {
            current = current
                .children
                .iter()
                .filter_map(|id| self.components.get(id.0))
                .find(|child| child.name == segment)?;
        }
        current
            .bindings
            .iter()
            .find(|(name, _)| name == leaf)
            .map(|(_, n)| *n)
    }
}

/// Construction context handed to [`Component::build`].
pub struct ComponentCx<'a> {
    assembly: &'a mut Assembly,
    id: ComponentId,
}

impl ComponentCx<'_> {
    /// The component being built.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Register a node named `name` owned by this component.
    pub fn node(&mut self, name: &str) -> Result<NodeId> {
        self.assembly.register_node(self.id, name)
    }

    /// Build a child component named `name` on the same hypergraph.
    pub fn child<T: Component>(&mut self, name: &str) -> Result<T> {
        self.assembly.instantiate::<T>(name.to_string(), Some(self.id))
    }

    /// Wire two nodes, merging their nets.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<EdgeId> {
        self.assembly.connect(a, b)
    }

    /// Read access to the assembly under construction.
    pub fn assembly(&self) -> &Assembly {
        &*self.assembly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf {
        id: ComponentId,
        out: NodeId,
    }

    impl Component for Leaf {
        const TYPE_NAME: &'static str = "Leaf";

        fn build(cx: &mut ComponentCx<'_>) -> Result<Self> {
            cx.node("inp")?;
            let out = cx.node("out")?;
            Ok(Self { id: cx.id(), out })
        }
    }

    struct Pair {
        left: Leaf,
        right: Leaf,
        shared: NodeId,
    }

    impl Component for Pair {
        const TYPE_NAME: &'static str = "Pair";

        fn build(cx: &mut ComponentCx<'_>) -> Result<Self> {
            let left: Leaf = cx.child("left")?;
            let right: Leaf = cx.child("right")?;
            let shared = cx.node("shared")?;
            cx.connect(left.out, shared)?;
            cx.connect(right.out, shared)?;
            Ok(Self { left, right, shared })
        }
    }

    struct Empty;

    impl Component for Empty {
        const TYPE_NAME: &'static str = "Empty";

        fn build(_cx: &mut ComponentCx<'_>) -> Result<Self> {
            Ok(Empty)
        }
    }

    #[test]
    fn test_children_share_root_store() {
        let (assembly, pair) = Assembly::build::<Pair>().unwrap();
        let all = assembly.store().node_set();
        assert_eq!(all.len(), 5);
        for id in [pair.left.id, pair.right.id, assembly.root()] {
            assert!(assembly.direct_nodes(id).unwrap().is_subset(&all));
        }
        assert_eq!(assembly.children(assembly.root()).unwrap(), &[pair.left.id, pair.right.id]);
        assert_eq!(assembly.parent(pair.left.id).unwrap(), Some(ComponentId::ROOT));
        assert!(assembly.children(pair.left.id).unwrap().is_empty());
    }

    #[test]
    fn test_recursive_label_covers_descendants() {
        let (assembly, pair) = Assembly::build::<Pair>().unwrap();
        let root_label = assembly.label(assembly.root()).unwrap().unwrap();
        let nodes = assembly.store().hyperedge_nodes(root_label).unwrap();
        assert_eq!(nodes, &assembly.store().node_set());
        assert_eq!(
            assembly.store().hyperedge_kind(root_label).unwrap(),
            &EdgeKind::label("Pair")
        );

        let leaf_label = assembly.label(pair.left.id).unwrap().unwrap();
        assert_eq!(
            assembly.store().hyperedge_nodes(leaf_label).unwrap(),
            &assembly.direct_nodes(pair.left.id).unwrap()
        );
    }

    #[test]
    fn test_direct_label_covers_own_nodes_only() {
        let options = AssemblyOptions {
            label_membership: LabelMembership::Direct,
        };
        let (assembly, pair) = Assembly::build_with::<Pair>(options).unwrap();
        let root_label = assembly.label(assembly.root()).unwrap().unwrap();
        assert_eq!(
            assembly.store().hyperedge_nodes(root_label).unwrap(),
            &BTreeSet::from([pair.shared])
        );
    }

    #[test]
    fn test_one_label_per_component_after_wiring() {
        let (assembly, _) = Assembly::build::<Pair>().unwrap();
        assert_eq!(assembly.store().labels().count(), assembly.num_components());

        // Children finish first, the root's label is the last edge created.
        let root_label = assembly.label(assembly.root()).unwrap().unwrap();
        assert_eq!(assembly.store().hyperedge_ids().last(), Some(&root_label));
    }

    #[test]
    fn test_wiring_children_to_shared_node() {
        let (assembly, pair) = Assembly::build::<Pair>().unwrap();
        let traces: Vec<_> = assembly.store().traces().collect();
        assert_eq!(traces.len(), 1);
        assert_eq!(
            traces[0].nodes,
            BTreeSet::from([pair.left.out, pair.right.out, pair.shared])
        );
    }

    #[test]
    fn test_node_names() {
        let (assembly, pair) = Assembly::build::<Pair>().unwrap();
        assert_eq!(assembly.node_name(pair.shared), "shared");
        assert_eq!(assembly.node_name(pair.left.out), "out");
        assert_eq!(assembly.node_label(pair.left.out), "n2 - out");
        assert_eq!(assembly.qualified_name(pair.right.out), "right.out");
        assert_eq!(assembly.qualified_name(pair.shared), "shared");
        let (_, stray) = Assembly::build::<Leaf>().unwrap();
        assert_eq!(stray.out.index(), 2);
        assert_eq!(assembly.node_name(stray.out), "n2");
        assert_eq!(assembly.owner(stray.out), None);
        assert_eq!(assembly.owner(pair.shared), Some(ComponentId::ROOT));
    }

    #[test]
    fn test_find_node() {
        let (assembly, pair) = Assembly::build::<Pair>().unwrap();
        assert_eq!(assembly.find_node("left.out"), Some(pair.left.out));
        assert_eq!(assembly.find_node("shared"), Some(pair.shared));
        assert_eq!(assembly.find_node("middle.out"), None);
        assert_eq!(assembly.find_node("left.missing"), None);
    }

    #[test]
    fn test_connect_foreign_node_fails() {
        let (mut small, leaf) = Assembly::build::<Leaf>().unwrap();
        let (_, pair) = Assembly::build::<Pair>().unwrap();
        let before = small.store().hyperedge_ids();

        // Both stores hold an index 2; only the local handle is a member.
        assert_eq!(pair.left.out.index(), leaf.out.index());
        assert!(!small.store().contains_node(pair.left.out));
        let err = small.connect(leaf.out, pair.left.out).unwrap_err();
        assert!(err.is_membership());
        let err = small.connect(pair.left.out, pair.right.out).unwrap_err();
        assert!(err.is_membership());
        assert_eq!(small.store().hyperedge_ids(), before);
    }

    #[test]
    fn test_into_store_keeps_topology() {
        let (assembly, pair) = Assembly::build::<Pair>().unwrap();
        let edges = assembly.store().hyperedge_ids();
        let store = assembly.into_store();
        assert_eq!(store.hyperedge_ids(), edges);
        assert_eq!(store.node_name(pair.shared), Some("shared"));
        assert_eq!(store.traces().count(), 1);
    }

    #[test]
    fn test_empty_component_still_labelled() {
        let (assembly, _) = Assembly::build::<Empty>().unwrap();
        let label = assembly.label(assembly.root()).unwrap().unwrap();
        assert!(assembly.store().hyperedge_nodes(label).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_component() {
        let (assembly, _) = Assembly::build::<Leaf>().unwrap();
        assert!(matches!(
            assembly.children(ComponentId(9)),
            Err(HypernetError::UnknownComponent { id: 9 })
        ));
    }
}
