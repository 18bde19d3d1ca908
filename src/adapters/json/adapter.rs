use crate::domain::frontend::Program;
use crate::domain::ports::FrontendSource;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Front-end adapter reading a resolved program dumped as JSON
pub struct JsonFrontendAdapter {
    pub path: PathBuf,
}

impl JsonFrontendAdapter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl FrontendSource for JsonFrontendAdapter {
    fn load(&self) -> Result<Program> {
        let json_content = std::fs::read_to_string(&self.path).with_context(|| {
            format!("Failed to read front-end dump: {}", self.path.display())
        })?;
        let program: Program = serde_json::from_str(&json_content).with_context(|| {
            format!("Failed to parse front-end dump: {}", self.path.display())
        })?;
        Ok(program)
    }
}
