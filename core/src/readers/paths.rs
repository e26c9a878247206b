//! Path decorators.

use crate::spi::{DocumentationType, PathContext, PathDecorator, Plugin};
use regex::Regex;
use std::sync::OnceLock;

/// Prepends the docket's path mapping.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathMappingDecorator;

impl Plugin for PathMappingDecorator {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl PathDecorator for PathMappingDecorator {
    fn decorate(&self, context: &PathContext<'_>, path: String) -> String {
        match context.documentation.path_mapping.as_deref() {
            Some(mapping) if !mapping.trim_matches('/').is_empty() => {
                format!(
                    "/{}/{}",
                    mapping.trim_matches('/'),
                    path.trim_start_matches('/')
                )
            }
            _ => path,
        }
    }
}

/// Strips regex constraints from template variables (`{id:\d+}` becomes
/// `{id}`) and collapses repeated slashes.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathSanitizer;

impl Plugin for PathSanitizer {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl PathDecorator for PathSanitizer {
    fn decorate(&self, _context: &PathContext<'_>, path: String) -> String {
        static TEMPLATE_RE: OnceLock<Regex> = OnceLock::new();
        let template_re = TEMPLATE_RE.get_or_init(|| {
            Regex::new(r"\{([^/{}:]+):(?:[^{}]|\{[^{}]*\})*\}").expect("Invalid regex")
        });
        static SLASHES_RE: OnceLock<Regex> = OnceLock::new();
        let slashes_re = SLASHES_RE.get_or_init(|| Regex::new(r"/{2,}").expect("Invalid regex"));

        let stripped = template_re.replace_all(&path, "{$1}");
        let collapsed = slashes_re.replace_all(&stripped, "/");
        if collapsed.is_empty() {
            "/".to_string()
        } else {
            collapsed.into_owned()
        }
    }
}
