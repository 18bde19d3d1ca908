use crate::domain::edge::{Edge, EdgeKind};
use crate::domain::node::{NamedType, NodeCategory, NodeId};
use crate::domain::type_registry::{NamespaceView, TypeRegistry};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Write;

/// Source identifier → deduplicated outgoing edges
pub type EdgeView = BTreeMap<NodeId, BTreeSet<Edge>>;

/// Type Graph - the finished product of one build
///
/// Mutated only by the builder; every public accessor returns a copy.
#[derive(Debug, Default, Clone)]
pub struct TypeGraph {
    registry: TypeRegistry,
    edges: EdgeView,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&mut self, named: NamedType) {
        self.registry.register(named);
    }

    /// Inserts an edge; returns false if the same (from, to, kind) already existed.
    pub(crate) fn add_edge(&mut self, from: &str, to: impl Into<String>, kind: EdgeKind) -> bool {
        self.edges
            .entry(from.to_string())
            .or_default()
            .insert(Edge::new(to, kind))
    }

    pub(crate) fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn struct_nodes(&self) -> NamespaceView {
        self.registry.namespace_view(NodeCategory::StructLike)
    }

    pub fn interface_nodes(&self) -> NamespaceView {
        self.registry.namespace_view(NodeCategory::InterfaceLike)
    }

    pub fn other_nodes(&self) -> NamespaceView {
        self.registry.namespace_view(NodeCategory::Other)
    }

    /// All registered names per namespace, regardless of category
    pub fn nodes(&self) -> NamespaceView {
        let mut all = NamespaceView::new();
        for view in [self.struct_nodes(), self.interface_nodes(), self.other_nodes()] {
            for (namespace, names) in view {
                all.entry(namespace).or_default().extend(names);
            }
        }
        for names in all.values_mut() {
            names.sort();
        }
        all
    }

    pub fn edges(&self) -> EdgeView {
        self.edges.clone()
    }

    pub fn category_of(&self, id: &str) -> Option<NodeCategory> {
        self.registry.get(id).map(|n| n.category)
    }

    pub fn has_edge(&self, from: &str, to: &str, kind: EdgeKind) -> bool {
        self.edges
            .get(from)
            .is_some_and(|out| out.contains(&Edge::new(to, kind)))
    }

    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Snapshot as a petgraph digraph. Edge targets that were never registered (external or
    /// filtered-out types) still get a node.
    pub fn to_digraph(&self) -> DiGraph<NodeId, EdgeKind> {
        let mut graph = DiGraph::new();
        let mut index: HashMap<NodeId, NodeIndex> = HashMap::new();
        let mut node = |graph: &mut DiGraph<NodeId, EdgeKind>, id: &str| {
            *index
                .entry(id.to_string())
                .or_insert_with(|| graph.add_node(id.to_string()))
        };

        for view in [self.struct_nodes(), self.interface_nodes(), self.other_nodes()] {
            for (namespace, names) in view {
                for name in names {
                    node(&mut graph, &format!("{namespace}.{name}"));
                }
            }
        }
        for (from, out) in &self.edges {
            let source = node(&mut graph, from);
            for edge in out {
                let target = node(&mut graph, &edge.to);
                graph.add_edge(source, target, edge.kind);
            }
        }
        graph
    }

    /// Diagnostic dump of the node views and the edge view.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (title, view) in [
            ("struct nodes", self.struct_nodes()),
            ("interface nodes", self.interface_nodes()),
            ("other nodes", self.other_nodes()),
        ] {
            let _ = writeln!(out, "{title}:");
            for (namespace, names) in view {
                let _ = writeln!(out, "  pkg: {namespace}");
                for name in names {
                    let _ = writeln!(out, "    {name}");
                }
            }
        }
        let _ = writeln!(out, "edges:");
        for (from, out_edges) in &self.edges {
            let _ = writeln!(out, "  from: {from}");
            let _ = writeln!(out, "  to, kind:");
            for edge in out_edges {
                let _ = writeln!(out, "    {}, {}", edge.to, edge.kind);
            }
        }
        out
    }
}
