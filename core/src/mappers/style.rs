//! Style enum mapping.
//!
//! Headers and encodings accept disjoint subsets of the service model's
//! styles, so each target gets its own total function. Styles a target
//! does not know map to `None`, which consumers read as "use the default
//! for this location".

use crate::oas;
use crate::service::ParameterStyle;

/// Translates service model styles into output document styles.
#[derive(Debug, Default, Clone, Copy)]
pub struct StyleEnumMapper;

impl StyleEnumMapper {
    /// Style of a header object. Only `SIMPLE` survives.
    pub fn header_style(&self, style: Option<ParameterStyle>) -> Option<oas::HeaderStyle> {
        match style? {
            ParameterStyle::Simple => Some(oas::HeaderStyle::Simple),
            ParameterStyle::Default
            | ParameterStyle::Matrix
            | ParameterStyle::Label
            | ParameterStyle::Form
            | ParameterStyle::SpaceDelimited
            | ParameterStyle::PipeDelimited
            | ParameterStyle::DeepObject => None,
        }
    }

    /// Style of an encoding object. Only the delimited styles and
    /// `DEEP_OBJECT` survive.
    pub fn encoding_style(&self, style: Option<ParameterStyle>) -> Option<oas::EncodingStyle> {
        match style? {
            ParameterStyle::SpaceDelimited => Some(oas::EncodingStyle::SpaceDelimited),
            ParameterStyle::PipeDelimited => Some(oas::EncodingStyle::PipeDelimited),
            ParameterStyle::DeepObject => Some(oas::EncodingStyle::DeepObject),
            ParameterStyle::Default
            | ParameterStyle::Simple
            | ParameterStyle::Matrix
            | ParameterStyle::Label
            | ParameterStyle::Form => None,
        }
    }

    /// Style of a parameter object. `DEFAULT` has no output counterpart.
    pub fn parameter_style(&self, style: Option<ParameterStyle>) -> Option<oas::ParameterStyle> {
        match style? {
            ParameterStyle::Default => None,
            ParameterStyle::Simple => Some(oas::ParameterStyle::Simple),
            ParameterStyle::Matrix => Some(oas::ParameterStyle::Matrix),
            ParameterStyle::Label => Some(oas::ParameterStyle::Label),
            ParameterStyle::Form => Some(oas::ParameterStyle::Form),
            ParameterStyle::SpaceDelimited => Some(oas::ParameterStyle::SpaceDelimited),
            ParameterStyle::PipeDelimited => Some(oas::ParameterStyle::PipeDelimited),
            ParameterStyle::DeepObject => Some(oas::ParameterStyle::DeepObject),
        }
    }
}
