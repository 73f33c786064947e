//! Common error types for DIMP

use thiserror::Error;

/// Common result type for DIMP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across DIMP crates
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlx_errors_convert_to_database() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, Error::Database(_)));
        assert!(err.to_string().starts_with("Database error:"));
    }

    #[test]
    fn test_config_error_message() {
        let err = Error::Config("ARTEMIS_URL not configured".to_string());
        assert_eq!(err.to_string(), "Configuration error: ARTEMIS_URL not configured");
    }
}
