//! Type-reference resolution: finds the named types a type expression refers to, and turns
//! their literal spellings into fully-qualified node identifiers.

use crate::domain::frontend::{ImportSpec, Shape, TypeExpr};
use crate::domain::node::{NodeId, node_id};
use std::collections::HashSet;
use tracing::warn;

/// Universal and marker types that never become edge targets.
const MARKER_TYPES: [&str; 5] = ["struct{}", "interface{}", "any", "error", "comparable"];

pub fn is_marker_type(spelling: &str) -> bool {
    MARKER_TYPES.contains(&spelling)
}

/// Per-declaration resolution context: where the declaration lives, the import table of its
/// source unit, and its own generic type parameters.
#[derive(Debug, Clone)]
pub struct ResolveContext<'a> {
    pub namespace: &'a str,
    pub imports: &'a [ImportSpec],
    type_params: HashSet<&'a str>,
}

impl<'a> ResolveContext<'a> {
    pub fn new(namespace: &'a str, imports: &'a [ImportSpec], type_params: &'a [String]) -> Self {
        Self {
            namespace,
            imports,
            type_params: type_params.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_type_param(&self, spelling: &str) -> bool {
        self.type_params.contains(spelling)
    }

    /// Fully-qualified identifier for a literal spelling found in this declaration.
    pub fn qualify(&self, spelling: &str) -> NodeId {
        qualify(spelling, self.namespace, self.imports)
    }
}

/// Collects the literal spellings of every interesting named type inside `expr`, in
/// traversal order. Duplicates are kept; the edge set collapses them.
pub fn find_type_references(expr: &TypeExpr, ctx: &ResolveContext<'_>) -> Vec<String> {
    let mut found = Vec::new();
    collect(expr, ctx, &mut found);
    found
}

fn collect(expr: &TypeExpr, ctx: &ResolveContext<'_>, found: &mut Vec<String>) {
    match expr {
        TypeExpr::Named { spelling, .. } if ctx.is_type_param(spelling) => {}
        TypeExpr::Named {
            spelling,
            resolved: None,
        } => {
            warn!(
                namespace = ctx.namespace,
                spelling = %spelling,
                "identifier has no resolved type"
            );
        }
        TypeExpr::Named {
            spelling,
            resolved: Some(resolved),
        } => match resolved.shape {
            Shape::StructLike | Shape::InterfaceLike => found.push(spelling.clone()),
            Shape::NamedPrimitive | Shape::NamedContainer(_) => {
                if resolved.is_distinct() {
                    found.push(spelling.clone());
                }
            }
            Shape::Opaque => {
                warn!(
                    namespace = ctx.namespace,
                    spelling = %spelling,
                    underlying = %resolved.underlying,
                    "underlying type did not match any shape"
                );
            }
        },
        TypeExpr::Qualified { qualifier, name } => found.push(format!("{qualifier}.{name}")),
        TypeExpr::Pointer { elem }
        | TypeExpr::Slice { elem }
        | TypeExpr::Array { elem, .. }
        | TypeExpr::Chan { elem, .. }
        | TypeExpr::Variadic { elem } => collect(elem, ctx, found),
        TypeExpr::Map { key, value } => {
            collect(key, ctx, found);
            collect(value, ctx, found);
        }
        TypeExpr::Func { params, results } => {
            for param in params.iter().chain(results) {
                collect(param, ctx, found);
            }
        }
        TypeExpr::Instantiated { base, args } => {
            for arg in args {
                collect(arg, ctx, found);
            }
            collect(base, ctx, found);
        }
        TypeExpr::Struct { .. } | TypeExpr::Interface { .. } => {
            warn!(
                namespace = ctx.namespace,
                spelling = %expr.spelling(),
                "inline type literal is not followed"
            );
        }
        TypeExpr::Unsupported { spelling, shape } => {
            warn!(
                namespace = ctx.namespace,
                spelling = %spelling,
                shape = %shape,
                "expression did not match any type shape"
            );
        }
    }
}

/// Turns a literal spelling into a node identifier.
///
/// `Name` → `<namespace>.Name`. `q.Name` → `<path>.Name` for the first import whose alias
/// is `q` or whose path ends in the segment `q`; without a match `q` itself is used as
/// the namespace path.
pub fn qualify(spelling: &str, namespace: &str, imports: &[ImportSpec]) -> NodeId {
    let Some((qualifier, name)) = split_qualified(spelling) else {
        return node_id(namespace, spelling);
    };

    let mut matches = imports
        .iter()
        .filter(|i| i.alias.as_deref() == Some(qualifier) || i.last_segment() == qualifier);
    let Some(first) = matches.next() else {
        return node_id(qualifier, name);
    };
    let others: Vec<&str> = matches
        .filter(|i| i.path != first.path)
        .map(|i| i.path.as_str())
        .collect();
    if !others.is_empty() {
        // First match in declaration order wins; there is no further tie-break.
        warn!(
            namespace,
            qualifier,
            chosen = %first.path,
            ignored = ?others,
            "ambiguous import qualifier"
        );
    }
    node_id(&first.path, name)
}

fn split_qualified(spelling: &str) -> Option<(&str, &str)> {
    let (qualifier, name) = spelling.split_once('.')?;
    if is_identifier(qualifier) && is_identifier(name) {
        Some((qualifier, name))
    } else {
        None
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_')
}
