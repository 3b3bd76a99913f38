//! Crate error type
//!
//! Only configuration and JSON handling can fail.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the physics step itself.
///
/// Stepping, detection and resolution are total over well-formed state; only
/// configuration and (de)serialisation can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is out of range or non-finite.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// JSON encoding or decoding failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Reading a config file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_informative() {
        let e = Error::InvalidConfig("substeps must be >= 1".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid config"));
        assert!(msg.contains("substeps"));
    }

    #[test]
    fn test_json_errors_convert() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let e: Error = err.into();
        assert!(matches!(e, Error::Json(_)));
    }
}
