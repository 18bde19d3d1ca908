use crate::app::filter::{NamespacePattern, filter_packages};
use crate::config::RunConfig;
use crate::domain::builder::TypeGraphBuilder;
use crate::domain::graph::TypeGraph;
use crate::domain::ports::{CapabilityMatcher, FrontendSource};
use anyhow::{Context as _, Result};
use tracing::{debug, info};

/// Drives one analysis run: options → load → select namespaces → build.
pub struct AnalysisEngine {
    config: RunConfig,
    matcher: Option<Box<dyn CapabilityMatcher>>,
}

impl AnalysisEngine {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            matcher: None,
        }
    }

    /// Replace the default signature-based capability check.
    pub fn with_matcher(mut self, matcher: Box<dyn CapabilityMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn build_graph(self, source: &dyn FrontendSource) -> Result<TypeGraph> {
        let options = self.config.build_options()?;
        let patterns = self
            .config
            .package_patterns
            .iter()
            .map(|p| NamespacePattern::parse(p))
            .collect::<Result<Vec<_>>>()?;

        let program = source
            .load()
            .context("Failed to load program from front-end")?;
        let loaded = program.packages.len();
        let program = filter_packages(program, &patterns);
        info!(
            loaded,
            selected = program.packages.len(),
            patterns = ?patterns.iter().map(NamespacePattern::as_str).collect::<Vec<_>>(),
            "selected packages"
        );
        for package in &program.packages {
            debug!(namespace = %package.path, files = package.files.len(), "package");
        }

        let builder = match self.matcher {
            Some(matcher) => TypeGraphBuilder::with_matcher(options, matcher),
            None => TypeGraphBuilder::new(options),
        };
        builder.build(&program)
    }
}
