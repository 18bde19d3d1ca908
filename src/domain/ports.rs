use crate::domain::frontend::{MethodSig, Program};
use anyhow::Result;

/// Front-end port (implemented by adapters): loads a fully resolved program
pub trait FrontendSource {
    fn load(&self) -> Result<Program>;
}

/// Structural compatibility port used by the implementation matcher
pub trait CapabilityMatcher: Send + Sync {
    /// True if a candidate offering `available` satisfies every method in `required`.
    fn satisfies(&self, required: &[MethodSig], available: &[MethodSig]) -> bool;
}
