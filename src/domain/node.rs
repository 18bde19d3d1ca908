use crate::domain::frontend::{MethodSig, ResolvedType, Shape};
use serde::Serialize;

/// Node identifier: `<namespace-path>.<local-name>`
pub type NodeId = String;

pub fn node_id(namespace: &str, name: &str) -> NodeId {
    format!("{namespace}.{name}")
}

/// Category a registered named type falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum NodeCategory {
    StructLike,
    InterfaceLike,
    Other, // Distinct defined type over a primitive or container shape
}

/// A registered named type.
///
/// `methods` keeps the method table the implementation matcher needs: the required set
/// for InterfaceLike nodes, the pointer method set for StructLike nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub namespace: String,
    pub name: String,
    pub category: NodeCategory,
    pub methods: Vec<MethodSig>,
}

impl NamedType {
    pub fn id(&self) -> NodeId {
        node_id(&self.namespace, &self.name)
    }
}

/// Decides the category of a declared type from its resolved shape.
///
/// Returns `None` for declarations that are not registered: unmodified primitives,
/// `=` aliases of unnamed shapes, and opaque shapes.
pub fn classify(resolved: &ResolvedType) -> Option<NodeCategory> {
    match resolved.shape {
        Shape::StructLike => Some(NodeCategory::StructLike),
        Shape::InterfaceLike => Some(NodeCategory::InterfaceLike),
        Shape::NamedPrimitive | Shape::NamedContainer(_) if resolved.is_distinct() => {
            Some(NodeCategory::Other)
        }
        Shape::NamedPrimitive | Shape::NamedContainer(_) | Shape::Opaque => None,
    }
}
