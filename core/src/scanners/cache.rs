//! Generated documentation per group.

use crate::service::Documentation;
use indexmap::IndexMap;

/// Holds the `Documentation` of every generated group, in generation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentationCache {
    documentations: IndexMap<String, Documentation>,
}

impl DocumentationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a group's documentation, replacing a previous one.
    pub fn add(&mut self, documentation: Documentation) {
        self.documentations
            .insert(documentation.group_name.clone(), documentation);
    }

    /// Documentation of a group.
    pub fn documentation_by_group(&self, group_name: &str) -> Option<&Documentation> {
        self.documentations.get(group_name)
    }

    /// Every stored group name.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.documentations.keys().map(String::as_str)
    }

    /// Every stored documentation.
    pub fn all(&self) -> impl Iterator<Item = &Documentation> {
        self.documentations.values()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.documentations.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.documentations.is_empty()
    }

    /// Drops every group.
    pub fn clear(&mut self) {
        self.documentations.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn documentation(group: &str) -> Documentation {
        Documentation {
            group_name: group.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_groups_keep_insertion_order() {
        let mut cache = DocumentationCache::new();
        cache.add(documentation("b"));
        cache.add(documentation("a"));
        assert_eq!(cache.groups().collect::<Vec<_>>(), vec!["b", "a"]);
        assert!(cache.documentation_by_group("a").is_some());
        assert!(cache.documentation_by_group("c").is_none());
        cache.clear();
        assert!(cache.is_empty());
    }
}
