//! # Error Types
//!
//! Domain-specific error types for ishop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ishop-core errors (this file)                                         │
//! │  ├── CoreError        - Catalog lookups, wraps validation              │
//! │  └── ValidationError  - Field validation failures                      │
//! │                                                                         │
//! │  ishop-cart errors                                                     │
//! │  └── CartError        - Observer failures (logged, never propagated)   │
//! │                                                                         │
//! │  ishop-shell errors                                                    │
//! │  ├── ShellError       - Config and SDK bootstrap failures              │
//! │  └── ApiError         - What the screens see (code + message)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category id is not in the catalog.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Field validation errors raised while constructing domain values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. an image URL without a scheme).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
