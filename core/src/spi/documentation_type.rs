//! # Documentation Types
//!
//! The discriminator that selects which plugins take part in a run.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output schema family and version a docket targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DocumentationType {
    /// Swagger 1.2.
    #[serde(rename = "SWAGGER_12")]
    Swagger12,
    /// Swagger 2.0.
    #[serde(rename = "SWAGGER_2")]
    Swagger2,
    /// OpenAPI 3.0.
    #[default]
    #[serde(rename = "OAS_30")]
    Oas30,
}

impl DocumentationType {
    /// Every known documentation type.
    pub const ALL: [DocumentationType; 3] = [
        DocumentationType::Swagger12,
        DocumentationType::Swagger2,
        DocumentationType::Oas30,
    ];

    /// Family name.
    pub fn name(&self) -> &'static str {
        match self {
            DocumentationType::Swagger12 | DocumentationType::Swagger2 => "swagger",
            DocumentationType::Oas30 => "openApi",
        }
    }

    /// Schema version.
    pub fn version(&self) -> &'static str {
        match self {
            DocumentationType::Swagger12 => "1.2",
            DocumentationType::Swagger2 => "2.0",
            DocumentationType::Oas30 => "3.0",
        }
    }

    /// Constant name used in configuration files.
    pub fn constant(&self) -> &'static str {
        match self {
            DocumentationType::Swagger12 => "SWAGGER_12",
            DocumentationType::Swagger2 => "SWAGGER_2",
            DocumentationType::Oas30 => "OAS_30",
        }
    }
}

impl fmt::Display for DocumentationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name(), self.version())
    }
}

impl FromStr for DocumentationType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DocumentationType::ALL
            .into_iter()
            .find(|t| t.constant().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::Config(format!("Unknown documentation type: {}", s)))
    }
}
