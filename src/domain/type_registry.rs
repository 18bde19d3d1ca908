//! Type Registry - every named type registered during one build
//!
//! Keyed by node identifier, so re-declaring a name in the same namespace replaces the
//! earlier entry (category included).

use crate::domain::node::{NamedType, NodeCategory, NodeId};
use std::collections::BTreeMap;

/// Namespace path → local names registered under it
pub type NamespaceView = BTreeMap<String, Vec<String>>;

#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    types: BTreeMap<NodeId, NamedType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a named type
    pub fn register(&mut self, named: NamedType) {
        self.types.insert(named.id(), named);
    }

    pub fn get(&self, id: &str) -> Option<&NamedType> {
        self.types.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.types.contains_key(id)
    }

    /// All registered types of one category, in identifier order
    pub fn of_category(&self, category: NodeCategory) -> impl Iterator<Item = &NamedType> {
        self.types.values().filter(move |t| t.category == category)
    }

    /// Category-partitioned snapshot: namespace → local names
    pub fn namespace_view(&self, category: NodeCategory) -> NamespaceView {
        let mut view = NamespaceView::new();
        for named in self.of_category(category) {
            view.entry(named.namespace.clone())
                .or_default()
                .push(named.name.clone());
        }
        view
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
