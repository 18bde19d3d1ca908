use crate::domain::edge::EdgeKind;
use crate::domain::frontend::{Field, Program, TypeDecl, TypeExpr};
use crate::domain::graph::TypeGraph;
use crate::domain::matcher::{SignatureMatcher, implements_pairs};
use crate::domain::node::{NamedType, classify, node_id};
use crate::domain::ports::CapabilityMatcher;
use crate::domain::resolver::{ResolveContext, find_type_references, is_marker_type};
use anyhow::{Result, bail};
use tracing::{debug, info, warn};

/// Options for one build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// External-scope filter: when set, only edges whose target identifier starts with this
    /// root namespace are kept.
    pub external_root: Option<String>,
    /// Abort when the front-end reported type-check errors.
    pub strict: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            external_root: None,
            strict: true,
        }
    }
}

/// Graph builder - Domain Service for constructing a TypeGraph
pub struct TypeGraphBuilder {
    options: BuildOptions,
    matcher: Box<dyn CapabilityMatcher>,
}

impl Default for TypeGraphBuilder {
    fn default() -> Self {
        Self::new(BuildOptions::default())
    }
}

impl TypeGraphBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self::with_matcher(options, Box::new(SignatureMatcher))
    }

    pub fn with_matcher(options: BuildOptions, matcher: Box<dyn CapabilityMatcher>) -> Self {
        Self { options, matcher }
    }

    /// Two-pass build strategy
    pub fn build(&self, program: &Program) -> Result<TypeGraph> {
        if !program.errors.is_empty() {
            if self.options.strict {
                bail!(
                    "front-end reported {} type-check error(s): {}",
                    program.errors.len(),
                    program.errors.join("; ")
                );
            }
            for error in &program.errors {
                warn!(%error, "type-check error (continuing in best-effort mode)");
            }
        }

        let mut graph = TypeGraph::new();

        // Pass 1: classify declarations and wire Has/Embeds/UsesAsAlias edges, file by file
        for package in &program.packages {
            debug!(namespace = %package.path, files = package.files.len(), "processing package");
            for file in &package.files {
                debug!(namespace = %package.path, file = %file.name, "processing file");
                for decl in &file.decls {
                    let Some(category) = classify(&decl.resolved) else {
                        debug!(namespace = %package.path, name = %decl.name, "not a graph node");
                        continue;
                    };
                    debug!(namespace = %package.path, name = %decl.name, ?category, "registered");
                    graph.register(NamedType {
                        namespace: package.path.clone(),
                        name: decl.name.clone(),
                        category,
                        methods: decl.methods.clone(),
                    });

                    let ctx = ResolveContext::new(&package.path, &file.imports, &decl.type_params);
                    self.wire_declaration(&mut graph, decl, &ctx);
                }
            }
        }

        // Pass 2: Implements edges, once every namespace is registered
        for (record, contract) in implements_pairs(graph.registry(), self.matcher.as_ref()) {
            graph.add_edge(&record, contract, EdgeKind::Implements);
        }

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "type graph built"
        );
        Ok(graph)
    }

    fn wire_declaration(&self, graph: &mut TypeGraph, decl: &TypeDecl, ctx: &ResolveContext<'_>) {
        let from = node_id(ctx.namespace, &decl.name);
        match &decl.body {
            TypeExpr::Struct { fields } => self.wire_members(graph, &from, fields, ctx),
            TypeExpr::Interface { members } => self.wire_members(graph, &from, members, ctx),
            body => {
                for spelling in find_type_references(body, ctx) {
                    self.emit(graph, &from, &spelling, EdgeKind::UsesAsAlias, ctx);
                }
            }
        }
    }

    fn wire_members(
        &self,
        graph: &mut TypeGraph,
        from: &str,
        fields: &[Field],
        ctx: &ResolveContext<'_>,
    ) {
        for field in fields {
            let kind = if field.is_embedded() {
                EdgeKind::Embeds
            } else {
                EdgeKind::Has
            };
            for spelling in find_type_references(&field.ty, ctx) {
                self.emit(graph, from, &spelling, kind, ctx);
            }
        }
    }

    fn emit(
        &self,
        graph: &mut TypeGraph,
        from: &str,
        spelling: &str,
        kind: EdgeKind,
        ctx: &ResolveContext<'_>,
    ) {
        if is_marker_type(spelling) {
            return;
        }
        let target = ctx.qualify(spelling);
        if let Some(root) = &self.options.external_root
            && !target.starts_with(root.as_str())
        {
            debug!(%from, %target, "dropping edge to external type");
            return;
        }
        graph.add_edge(from, target, kind);
    }
}
