//! # Commands Module
//!
//! Entry points the screens call. Each command takes only the state it needs
//! and returns a serializable response or an [`ApiError`](crate::error::ApiError).
//!
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── cart.rs        ◄─── get_cart, add_to_cart, clear_cart
//! ├── catalog.rs     ◄─── list_categories, list_products, get_product
//! └── navigation.rs  ◄─── menu selection, cart button, settings rows
//! ```
//!
//! ```rust,ignore
//! // Only needs the cart
//! commands::cart::get_cart(&state.cart)
//!
//! // Needs catalog and cart
//! commands::cart::add_to_cart(&state.catalog, &state.cart, "oxford-shirt")
//! ```

pub mod cart;
pub mod catalog;
pub mod navigation;
