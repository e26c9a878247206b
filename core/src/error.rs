//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// YAML (de)serialisation failure.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// JSON (de)serialisation failure.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// A path selector or other pattern failed to compile.
    #[display("Invalid Pattern: {_0}")]
    InvalidPattern(regex::Error),

    /// Invalid configuration values.
    #[from(ignore)]
    #[display("Configuration Error: {_0}")]
    Config(String),

    /// Two or more dockets declare the same group name.
    #[from(ignore)]
    #[display("Multiple Dockets with the same group name are not supported. The following duplicate groups were discovered: {}", _0.join(","))]
    DuplicateGroups(Vec<String>),

    /// A documentation group was requested that was never generated.
    #[from(ignore)]
    #[display("Unknown documentation group: {_0}")]
    UnknownGroup(String),

    /// A mapping table does not cover an enum constant of the source model.
    #[from(ignore)]
    #[display("Unexpected enum constant: {_0}")]
    UnexpectedEnumConstant(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_duplicate_groups_message_lists_every_group() {
        let err = AppError::DuplicateGroups(vec!["a".into(), "b".into()]);
        assert_eq!(
            err.to_string(),
            "Multiple Dockets with the same group name are not supported. The following duplicate groups were discovered: a,b"
        );
    }

    #[test]
    fn test_yaml_conversion() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{").unwrap_err();
        let app_err: AppError = yaml_err.into();
        assert!(matches!(app_err, AppError::Yaml(_)));
    }
}
