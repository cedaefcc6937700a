//! Error types for rosterdb.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in rosterdb.
///
/// Lookups that miss and inserts that collide with an existing id are not
/// errors: they come back as `None` / `false` from the directory. This enum
/// only covers conditions the caller cannot resolve by retrying with a
/// different key.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading or writing a snapshot file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot file could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The tree no longer satisfies one of its structural invariants.
    ///
    /// This indicates a bug in the rebalancing code, not a runtime
    /// condition. Tests treat it as fatal.
    #[error("tree invariant violated: {0}")]
    InvariantViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvariantViolation("balance factor 2 at key 10".into());
        assert_eq!(
            format!("{}", err),
            "tree invariant violated: balance factor 2 at key 10"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: Error = json_err.into();

        assert!(matches!(err, Error::Json(_)));
        assert!(format!("{}", err).starts_with("JSON error:"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err: Error = io_err.into();
        assert!(err.source().is_some());

        let err = Error::InvariantViolation("x".into());
        assert!(err.source().is_none());
    }
}
