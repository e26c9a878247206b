//! Unique operation ids.

use crate::service::HttpMethod;
use std::collections::HashMap;

/// Generates `{handler}Using{METHOD}` ids, suffixing `_1`, `_2`, ... on
/// collision. One generator serves one scan.
#[derive(Debug, Default, Clone)]
pub struct OperationNameGenerator {
    seen: HashMap<String, usize>,
}

impl OperationNameGenerator {
    /// Creates a fresh generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The next unique id for a handler and method.
    pub fn next(&mut self, handler_name: &str, method: HttpMethod) -> String {
        let base = format!("{}Using{}", handler_name, method);
        let count = self.seen.entry(base.clone()).or_insert(0);
        let id = if *count == 0 {
            base
        } else {
            format!("{}_{}", base, count)
        };
        *count += 1;
        id
    }
}
