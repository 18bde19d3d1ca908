//! Mock implementations for integration tests.
#![allow(dead_code)]

use std::sync::Mutex;

use anyhow::{Result, anyhow};
use typegraph::domain::frontend::{MethodSig, Program};
use typegraph::domain::ports::{CapabilityMatcher, FrontendSource};

/// Mock FrontendSource returning a fixed program, or failing.
pub struct MockFrontendSource {
    program: Option<Program>,
}

impl MockFrontendSource {
    pub fn new(program: Program) -> Self {
        Self {
            program: Some(program),
        }
    }

    pub fn failing() -> Self {
        Self { program: None }
    }
}

impl FrontendSource for MockFrontendSource {
    fn load(&self) -> Result<Program> {
        self.program
            .clone()
            .ok_or_else(|| anyhow!("mock front-end: package load failed"))
    }
}

/// CapabilityMatcher that records every query and answers with a fixed value.
pub struct RecordingMatcher {
    pub answer: bool,
    pub calls: Mutex<Vec<(Vec<String>, Vec<String>)>>,
}

impl RecordingMatcher {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

fn names(methods: &[MethodSig]) -> Vec<String> {
    methods.iter().map(|m| m.name.clone()).collect()
}

impl CapabilityMatcher for RecordingMatcher {
    fn satisfies(&self, required: &[MethodSig], available: &[MethodSig]) -> bool {
        self.calls
            .lock()
            .unwrap()
            .push((names(required), names(available)));
        self.answer
    }
}

/// Matches on method names only, ignoring signatures.
pub struct NameOnlyMatcher;

impl CapabilityMatcher for NameOnlyMatcher {
    fn satisfies(&self, required: &[MethodSig], available: &[MethodSig]) -> bool {
        required
            .iter()
            .all(|r| available.iter().any(|a| a.name == r.name))
    }
}
