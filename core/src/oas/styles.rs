//! Style enumerations of the output document.
//!
//! Parameters, headers and encodings each accept a different subset of the
//! OpenAPI styles, so each gets its own enumeration.

use serde::{Deserialize, Serialize};

/// `style` of a parameter object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterStyle {
    /// `matrix`
    Matrix,
    /// `label`
    Label,
    /// `form`
    Form,
    /// `simple`
    Simple,
    /// `spaceDelimited`
    SpaceDelimited,
    /// `pipeDelimited`
    PipeDelimited,
    /// `deepObject`
    DeepObject,
}

/// `style` of a header object. Headers only know `simple`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderStyle {
    /// `simple`
    Simple,
}

/// `style` of an encoding object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EncodingStyle {
    /// `spaceDelimited`
    SpaceDelimited,
    /// `pipeDelimited`
    PipeDelimited,
    /// `deepObject`
    DeepObject,
}

/// `in` of a parameter object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterIn {
    /// Query string.
    Query,
    /// Header.
    Header,
    /// Path segment.
    Path,
    /// Cookie.
    Cookie,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_serialize_camel_case() {
        assert_eq!(
            serde_json::to_string(&ParameterStyle::SpaceDelimited).unwrap(),
            "\"spaceDelimited\""
        );
        assert_eq!(
            serde_json::to_string(&EncodingStyle::DeepObject).unwrap(),
            "\"deepObject\""
        );
        assert_eq!(serde_json::to_string(&ParameterIn::Cookie).unwrap(), "\"cookie\"");
    }
}
