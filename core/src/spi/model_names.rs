//! # Model Names
//!
//! Maps model keys to the names they are published under in
//! `components.schemas`.

use crate::service::ModelKey;
use indexmap::IndexMap;

/// Published name of every model of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelNamesRegistry {
    names: IndexMap<ModelKey, String>,
}

impl ModelNamesRegistry {
    /// Creates a registry from explicit assignments.
    pub fn new(names: IndexMap<ModelKey, String>) -> Self {
        Self { names }
    }

    /// Published name of a model. Unregistered keys fall back to their
    /// simple name.
    pub fn name_for(&self, key: &ModelKey) -> String {
        self.names
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.name.clone())
    }

    /// Every assignment in registration order.
    pub fn names(&self) -> impl Iterator<Item = (&ModelKey, &str)> {
        self.names.iter().map(|(k, v)| (k, v.as_str()))
    }
}
