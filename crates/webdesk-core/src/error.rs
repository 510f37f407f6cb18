//! Error types for `webdesk-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.
//!
//! Errors are reserved for violated preconditions and invariants (invalid
//! names, sibling collisions on direct rename, cycle attempts). Expected
//! misuse — looking up a missing item, opening a nonexistent path — is
//! reported through `Option`/`bool` sentinels instead and never raises.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message or take corrective action.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An item name is invalid (empty, whitespace-only, or containing the
    /// path separator).
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// A sibling with the same name already exists.
    #[error("name conflict: {0:?} already exists in this directory")]
    NameConflict(String),

    /// Inserting the item would make a directory contain itself or one of
    /// its own ancestors.
    #[error("cycle: cannot insert {0:?} into its own subtree")]
    Cycle(String),

    /// A directory was expected but the item is a file.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// The configuration file does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to read the configuration file.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `webdesk-core`.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn invalid_name_displays_name() {
        let err = CoreError::InvalidName("bad/name".to_string());
        assert_eq!(err.to_string(), "invalid name: \"bad/name\"");
    }

    #[test]
    fn name_conflict_displays_name() {
        let err = CoreError::NameConflict("notes.txt".to_string());
        assert_eq!(
            err.to_string(),
            "name conflict: \"notes.txt\" already exists in this directory"
        );
    }

    #[test]
    fn cycle_displays_name() {
        let err = CoreError::Cycle("projects".to_string());
        assert_eq!(
            err.to_string(),
            "cycle: cannot insert \"projects\" into its own subtree"
        );
    }

    #[test]
    fn not_a_directory_displays_path() {
        let err = CoreError::NotADirectory("root/readme.md".to_string());
        assert_eq!(err.to_string(), "not a directory: root/readme.md");
    }

    #[test]
    fn not_found_displays_path() {
        let err = CoreError::NotFound(PathBuf::from("/missing/config.toml"));
        assert_eq!(err.to_string(), "path not found: /missing/config.toml");
    }

    #[test]
    fn config_parse_displays_message() {
        let err = CoreError::ConfigParse("unexpected token".to_string());
        assert_eq!(err.to_string(), "config parse error: unexpected token");
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
        assert!(core_err.to_string().contains("gone"));
    }

    #[test]
    fn core_result_ok() {
        let result: CoreResult<i32> = Ok(42);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn error_is_debug() {
        let err = CoreError::InvalidName(String::new());
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidName"));
    }
}
