//! # Validation Module
//!
//! Field checks run by the domain constructors. Once a [`Product`] exists it
//! is known-good, so the cart appends it without re-validating.
//!
//! [`Product`]: crate::types::Product
//!
//! ## Usage
//! ```rust
//! use ishop_core::validation::{validate_id, validate_name};
//!
//! assert!(validate_id("shirt-a").is_ok());
//! assert!(validate_name("name", "").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_ID_LEN, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a catalog identifier.
///
/// ## Rules
/// - Must not be blank
/// - At most `MAX_ID_LEN` characters
/// - Letters, digits, hyphens and underscores only (UUIDs qualify)
pub fn validate_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LEN,
        });
    }

    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a display name (product or category title).
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price. Zero is allowed (free items), negative is not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an image URL. Only absolute http(s) URLs are loadable by the
/// image cells.
pub fn validate_image_url(url: &str) -> ValidationResult<()> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(ValidationError::InvalidFormat {
            field: "image_url".to_string(),
            reason: "must start with http:// or https://".to_string(),
        });
    }

    Ok(())
}
