use crate::domain::edge::EdgeKind;
use crate::domain::graph::TypeGraph;
use crate::domain::type_registry::NamespaceView;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Shape and fill color per node category
const STRUCT_STYLE: (&str, &str) = ("rect", "paleturquoise1");
const INTERFACE_STYLE: (&str, &str) = ("hexagon", "plum1");
const OTHER_STYLE: (&str, &str) = ("ellipse", "whitesmoke");

/// Sanitize a string for use as a DOT subgraph name.
///
/// Replaces non-alphanumeric characters with `_`.
pub fn sanitize_dot_id(s: &str) -> String {
    let result: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if result.is_empty() {
        "root".to_string()
    } else {
        result
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Label, arrowhead and line style for an edge kind.
fn edge_style(kind: EdgeKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        EdgeKind::Has => ("Has", "normal", "solid"),
        EdgeKind::Embeds => ("Embeds", "empty", "solid"),
        EdgeKind::Implements => ("Implements", "empty", "dashed"),
        EdgeKind::UsesAsAlias => ("UsesAsAlias", "normal", "dashed"),
    }
}

/// Write the graph as DOT: one cluster per namespace, one shape per category, one arrow
/// style per edge kind.
pub fn write_dot<W: Write>(graph: &TypeGraph, out: &mut W) -> io::Result<()> {
    writeln!(out, "digraph G {{")?;
    writeln!(out, "node[style=\"filled\" fillcolor=\"whitesmoke\"]")?;

    let views: [(NamespaceView, (&str, &str)); 3] = [
        (graph.struct_nodes(), STRUCT_STYLE),
        (graph.interface_nodes(), INTERFACE_STYLE),
        (graph.other_nodes(), OTHER_STYLE),
    ];
    let namespaces: BTreeSet<&String> = views.iter().flat_map(|(view, _)| view.keys()).collect();

    for namespace in namespaces {
        writeln!(out, "subgraph cluster_{} {{", sanitize_dot_id(namespace))?;
        writeln!(out, "label = {};", quote(namespace))?;
        writeln!(out, "style = \"solid\";")?;
        writeln!(out, "bgcolor = \"cornsilk\";")?;
        for (view, (shape, fill)) in &views {
            for name in view.get(namespace).into_iter().flatten() {
                writeln!(
                    out,
                    "{} [label={} shape=\"{}\" fillcolor=\"{}\"];",
                    quote(&format!("{namespace}.{name}")),
                    quote(name),
                    shape,
                    fill
                )?;
            }
        }
        writeln!(out, "}}")?;
    }

    for (from, edges) in graph.edges() {
        for edge in edges {
            let (label, arrowhead, style) = edge_style(edge.kind);
            writeln!(
                out,
                "{} -> {} [label=\"{}\" arrowhead=\"{}\" style=\"{}\"];",
                quote(&from),
                quote(&edge.to),
                label,
                arrowhead,
                style
            )?;
        }
    }
    writeln!(out, "}}")
}

/// Render the graph as a DOT string.
pub fn render_dot(graph: &TypeGraph) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_dot(graph, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Create or truncate `path` and write the DOT rendering into it.
pub fn write_to_file(graph: &TypeGraph, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_dot(graph, &mut out)
        .and_then(|_| out.flush())
        .with_context(|| format!("Failed to write DOT file: {}", path.display()))?;
    Ok(())
}
