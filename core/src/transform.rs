#![deny(missing_docs)]

//! # Transformation
//!
//! Per-request rewriting of an already mapped document. The cached
//! document is shared through an `Arc` and never mutated; filters return
//! either that same `Arc` or a fresh document.

pub mod chain;
pub mod context;
pub mod filters;
pub mod service;

pub use chain::TransformationFilters;
pub use context::{OpenApiTransformationContext, RequestContext};
pub use filters::{
    BasePathAndHostnameFilter, ForwardedPrefixFilter, OpenApiTransformationFilter, HOST,
    X_FORWARDED_HOST, X_FORWARDED_PREFIX, X_FORWARDED_PROTO,
};
pub use service::OpenApiDocumentService;
