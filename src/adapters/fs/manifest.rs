use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};

/// Project manifest file name
pub const MANIFEST_FILE: &str = "go.mod";

pub fn manifest_path(manifest_dir: &Path) -> PathBuf {
    manifest_dir.join(MANIFEST_FILE)
}

/// Root namespace declared by the first `module <name>` line of `<manifest_dir>/go.mod`.
pub fn read_module_name(manifest_dir: &Path) -> Result<String> {
    let path = manifest_path(manifest_dir);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
    parse_module_name(&content)
        .ok_or_else(|| anyhow!("No `module` line found in manifest: {}", path.display()))
}

fn parse_module_name(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("module ") || line.starts_with("module\t"))
        .and_then(|line| line.split_whitespace().last())
        .map(|name| name.trim_matches('"').to_string())
}
