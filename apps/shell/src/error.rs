//! # Error Handling
//!
//! Two error types live in the shell:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ShellError  - startup problems (config file, env, SDK bootstrap).     │
//! │                Fatal to `run()`, reported once in the log.             │
//! │                                                                         │
//! │  ApiError    - what a screen receives when a command fails.            │
//! │                { "code": "NOT_FOUND", "message": "Product not found" } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use ishop_core::CoreError;

/// Result type alias for shell startup operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// Startup and configuration failures.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Configuration values are inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to write the config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// A third-party SDK refused to start.
    #[error("Failed to start {integration}: {reason}")]
    IntegrationFailed {
        integration: String,
        reason: String,
    },

    /// The mock catalog could not be built.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CoreError),
}

impl ShellError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ShellError::InvalidConfig(_)
                | ShellError::ConfigLoadFailed(_)
                | ShellError::ConfigSaveFailed(_)
        )
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ShellError {
    fn from(err: toml::de::Error) -> Self {
        ShellError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ShellError {
    fn from(err: toml::ser::Error) -> Self {
        ShellError::ConfigSaveFailed(err.to_string())
    }
}

/// Error returned from commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    ValidationError,
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::CategoryNotFound(id) => ApiError::not_found("Category", &id),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use ishop_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::ProductNotFound("shirt-a".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: shirt-a");

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "id".into(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_api_error_json() {
        let json = serde_json::to_value(ApiError::not_found("Product", "x")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: x");
    }

    #[test]
    fn test_config_error_category() {
        assert!(ShellError::InvalidConfig("x".into()).is_config_error());
        assert!(!ShellError::IntegrationFailed {
            integration: "Stripe".into(),
            reason: "x".into()
        }
        .is_config_error());
    }
}
