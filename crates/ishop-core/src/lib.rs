//! # ishop-core: Domain Types for iShop
//!
//! Pure value types shared by the cart crate and the application shell.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          iShop Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    ishop-shell (apps/shell)                     │   │
//! │  │   Config ──► Launch plan ──► Composition root ──► Commands      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    ishop-cart                                   │   │
//! │  │   CartManager ──► CartEventBus ──► Badge / Cart screen          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ishop-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │ validation│                  │   │
//! │  │   │  Product  │  │   Money   │  │   rules   │                  │   │
//! │  │   │  Category │  │           │  │           │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SDK CALLS • PURE FUNCTIONS                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation used by constructors
//!
//! ## Example Usage
//!
//! ```rust
//! use ishop_core::{Money, Product};
//!
//! let shirt = Product::new("shirt-a", "Oxford Shirt", Money::from_cents(2999)).unwrap();
//! assert_eq!(shirt.price().to_string(), "$29.99");
//! ```

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

/// Maximum length of a product or category display name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a product identifier.
pub const MAX_ID_LEN: usize = 64;
