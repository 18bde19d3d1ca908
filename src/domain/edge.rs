use serde::Serialize;

/// Edge kind - structural relationship between two named types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EdgeKind {
    Has,         // StructLike/InterfaceLike → type of a named field or method signature
    Implements,  // StructLike → InterfaceLike it structurally satisfies
    Embeds,      // StructLike/InterfaceLike → type of an anonymous field
    UsesAsAlias, // Defined type → every type reachable in its right-hand side
}

impl EdgeKind {
    pub fn label(&self) -> &'static str {
        match self {
            EdgeKind::Has => "Has",
            EdgeKind::Implements => "Implements",
            EdgeKind::Embeds => "Embeds",
            EdgeKind::UsesAsAlias => "UsesAsAlias",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outgoing half of an edge; the source identifier is the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    pub to: String,
    pub kind: EdgeKind,
}

impl Edge {
    pub fn new(to: impl Into<String>, kind: EdgeKind) -> Self {
        Self {
            to: to.into(),
            kind,
        }
    }
}
