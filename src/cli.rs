use crate::adapters::dot;
use crate::adapters::json::JsonFrontendAdapter;
use crate::app::engine::AnalysisEngine;
use crate::config::{FileConfig, RunConfig};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Builds a structural type graph of a codebase and writes it as a Graphviz DOT file.
///
/// Nodes are named types (records, contracts, defined types) grouped by namespace; edges
/// are Has, Embeds, Implements and UsesAsAlias relationships.
#[derive(Parser, Debug)]
#[command(name = "typegraph", version, about, long_about = None)]
pub struct Cli {
    /// The path to the root directory for which the analysis runs.
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Resolved program dumped by the front-end (default: <path>/typegraph.json).
    #[arg(long)]
    pub frontend: Option<PathBuf>,

    /// The output dot file name (default: typegraph.dot).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Ignore types imported from outside the module declared in go.mod.
    #[arg(long)]
    pub ignore_external: bool,

    /// The directory where the go.mod file exists (default: --path).
    #[arg(long)]
    pub go_mod_path: Option<PathBuf>,

    /// Package patterns, comma separated (e.g. './...,example.com/app/store/...').
    #[arg(long = "package-pattern", value_delimiter = ',')]
    pub package_patterns: Vec<String>,

    /// Continue when the front-end reported type-check errors.
    #[arg(long)]
    pub best_effort: bool,

    /// Enable verbose mode (debug logs and a dump of the graph on stdout).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run one analysis: load → build → (dump) → render.
pub fn run(cli: Cli) -> Result<()> {
    let file_config = FileConfig::load(&cli.path);
    let config = RunConfig::resolve(&cli, file_config);

    let source = JsonFrontendAdapter::new(&config.frontend);
    let graph = AnalysisEngine::new(config.clone()).build_graph(&source)?;

    if config.verbose {
        print!("{}", graph.dump());
    }

    let output = &config.output;
    dot::write_to_file(&graph, output)?;

    let diagram = graph.to_digraph();
    info!(
        output = %output.display(),
        nodes = diagram.node_count(),
        edges = diagram.edge_count(),
        "wrote dot file"
    );
    Ok(())
}
