//! # Documentation Scanners
//!
//! Turns the handlers of each docket into a `Documentation`: operations are
//! built through the plugin manager, grouped by resource into listings and
//! stored per group in a `DocumentationCache`.

pub mod bootstrap;
pub mod cache;
pub mod documentation;
pub mod models;
pub mod operation;
pub mod operation_names;

pub use bootstrap::DocumentationPluginsBootstrapper;
pub use cache::DocumentationCache;
pub use documentation::{ApiDocumentationScanner, ADDITIONAL_LISTING};
pub use models::collect_models;
pub use operation::{request_body, ApiOperationReader};
pub use operation_names::OperationNameGenerator;
