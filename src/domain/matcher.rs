//! Implementation matching: structural contract satisfaction between every composite
//! record and every contract registered in a build.

use crate::domain::frontend::MethodSig;
use crate::domain::node::{NodeCategory, NodeId};
use crate::domain::ports::CapabilityMatcher;
use crate::domain::type_registry::TypeRegistry;
use std::collections::HashMap;

/// Signature-equality matcher over extracted method tables.
///
/// A required method is satisfied by an available method with the same name, the same
/// parameter and result type strings, and the same variadic flag.
#[derive(Debug, Default, Clone, Copy)]
pub struct SignatureMatcher;

impl CapabilityMatcher for SignatureMatcher {
    fn satisfies(&self, required: &[MethodSig], available: &[MethodSig]) -> bool {
        let by_name: HashMap<&str, &MethodSig> =
            available.iter().map(|m| (m.name.as_str(), m)).collect();
        required
            .iter()
            .all(|req| by_name.get(req.name.as_str()).is_some_and(|m| *m == req))
    }
}

/// All (record, contract) identifier pairs where the record satisfies a non-empty contract.
///
/// Runs over every InterfaceLike × StructLike pair; cost is the product of both counts.
pub fn implements_pairs(
    registry: &TypeRegistry,
    matcher: &dyn CapabilityMatcher,
) -> Vec<(NodeId, NodeId)> {
    let mut pairs = Vec::new();
    for contract in registry.of_category(NodeCategory::InterfaceLike) {
        if contract.methods.is_empty() {
            continue;
        }
        for record in registry.of_category(NodeCategory::StructLike) {
            if matcher.satisfies(&contract.methods, &record.methods) {
                pairs.push((record.id(), contract.id()));
            }
        }
    }
    pairs
}
