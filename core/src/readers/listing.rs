//! API listing readers.

use crate::spi::{ApiListingBuilderPlugin, ApiListingContext, DocumentationType, Plugin};
use std::collections::BTreeSet;

/// Union of the media types of every operation in the listing.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApiListingMediaTypeReader;

impl Plugin for ApiListingMediaTypeReader {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl ApiListingBuilderPlugin for ApiListingMediaTypeReader {
    fn apply(&self, context: &mut ApiListingContext<'_>) {
        let builder = context.api_listing_builder();
        let operations = builder.current_apis().iter().flat_map(|a| &a.operations);
        let mut produces = BTreeSet::new();
        let mut consumes = BTreeSet::new();
        for operation in operations {
            produces.extend(operation.produces.iter().cloned());
            consumes.extend(operation.consumes.iter().cloned());
        }
        builder.produces(produces).consumes(consumes);
    }
}

/// Tags used by the listing's operations, described by the docket's tags.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApiListingTagsReader;

impl Plugin for ApiListingTagsReader {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl ApiListingBuilderPlugin for ApiListingTagsReader {
    fn apply(&self, context: &mut ApiListingContext<'_>) {
        let available = context.documentation_context().tags.clone();
        let builder = context.api_listing_builder();
        let names: BTreeSet<String> = builder
            .current_apis()
            .iter()
            .flat_map(|a| &a.operations)
            .flat_map(|o| o.tags.iter().cloned())
            .collect();
        builder.tag_names(names).available_tags(available);
    }
}
