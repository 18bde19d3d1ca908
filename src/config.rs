use crate::adapters::fs::manifest::read_module_name;
use crate::cli::Cli;
use crate::domain::builder::BuildOptions;
use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "typegraph.toml";
pub const DEFAULT_FRONTEND_FILE: &str = "typegraph.json";
pub const DEFAULT_OUTPUT_FILE: &str = "typegraph.dot";
pub const DEFAULT_PACKAGE_PATTERN: &str = "./...";

/// Configuration loaded from `typegraph.toml` at the analysed root.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Drop edges to types outside the root namespace.
    pub ignore_external: Option<bool>,
    /// Root namespace used by `ignore_external`; read from go.mod when absent.
    pub module: Option<String>,
    /// Directory holding go.mod. Relative paths in this file are taken from the analysed
    /// root.
    pub manifest_dir: Option<PathBuf>,
    pub package_patterns: Option<Vec<String>>,
    /// Abort on front-end type-check errors (default true).
    pub strict: Option<bool>,
    pub output: Option<PathBuf>,
    pub frontend: Option<PathBuf>,
}

impl FileConfig {
    /// Load configuration from `typegraph.toml` in the given root directory.
    ///
    /// Returns a default (empty) configuration if the file does not exist or cannot be parsed.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => {
                    info!(path = %config_path.display(), "loaded configuration");
                    config
                }
                Err(err) => {
                    warn!(
                        path = %config_path.display(),
                        %err,
                        "failed to parse config, using defaults"
                    );
                    Self::default()
                }
            },
            Err(err) => {
                warn!(
                    path = %config_path.display(),
                    %err,
                    "failed to read config, using defaults"
                );
                Self::default()
            }
        }
    }
}

/// Effective settings for one run: CLI flags layered over `typegraph.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub root: PathBuf,
    pub frontend: PathBuf,
    pub output: PathBuf,
    pub ignore_external: bool,
    pub module: Option<String>,
    pub manifest_dir: PathBuf,
    pub package_patterns: Vec<String>,
    pub strict: bool,
    pub verbose: bool,
}

impl RunConfig {
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let root = cli.path.clone();
        let in_root = |p: PathBuf| if p.is_absolute() { p } else { root.join(p) };

        let frontend = cli
            .frontend
            .clone()
            .or_else(|| file.frontend.map(&in_root))
            .unwrap_or_else(|| root.join(DEFAULT_FRONTEND_FILE));
        let output = cli
            .output
            .clone()
            .or_else(|| file.output.map(&in_root))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));
        let manifest_dir = cli
            .go_mod_path
            .clone()
            .or_else(|| file.manifest_dir.map(&in_root))
            .unwrap_or_else(|| root.clone());
        let package_patterns = if !cli.package_patterns.is_empty() {
            cli.package_patterns.clone()
        } else {
            file.package_patterns
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| vec![DEFAULT_PACKAGE_PATTERN.to_string()])
        };

        Self {
            frontend,
            output,
            ignore_external: cli.ignore_external || file.ignore_external.unwrap_or(false),
            module: file.module,
            manifest_dir,
            package_patterns,
            strict: !cli.best_effort && file.strict.unwrap_or(true),
            verbose: cli.verbose,
            root,
        }
    }

    /// Options for the core builder. Reads go.mod when the external filter is on and no
    /// module was configured explicitly.
    pub fn build_options(&self) -> Result<BuildOptions> {
        let external_root = if self.ignore_external {
            let module = match &self.module {
                Some(module) => module.clone(),
                None => read_module_name(&self.manifest_dir)?,
            };
            info!(%module, "ignoring types outside module");
            Some(module)
        } else {
            None
        };
        Ok(BuildOptions {
            external_root,
            strict: self.strict,
        })
    }
}
