//! # Cart Commands
//!
//! ```text
//! ┌──────────┐  add_to_cart   ┌──────────┐   clear_cart   ┌──────────┐
//! │  Empty   │───────────────►│ In Cart  │───────────────►│  Empty   │
//! │  badge ""│                │ badge "n"│                │  badge ""│
//! └──────────┘                └──────────┘                └──────────┘
//!                                  │ ▲
//!                                  └─┘ add_to_cart (every add is a new line)
//! ```

use serde::Serialize;
use tracing::debug;

use ishop_cart::CartLine;
use ishop_core::{Money, Product};

use crate::catalog::Catalog;
use crate::error::ApiError;
use crate::state::CartState;

/// Cart contents as the screens see them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub count: usize,
    /// Badge text, empty for an empty cart.
    pub badge: String,
    pub subtotal: String,
}

impl From<&CartState> for CartResponse {
    fn from(state: &CartState) -> Self {
        let products = state.cart().products();
        let subtotal: Money = products.iter().map(Product::price).sum();

        CartResponse {
            items: products.iter().map(CartLine::from).collect(),
            count: products.len(),
            badge: state.badge().title(),
            subtotal: subtotal.to_string(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(cart)
}

/// Adds a catalog product to the cart.
///
/// ## Errors
/// `NOT_FOUND` when the catalog has no product with `product_id`.
pub fn add_to_cart(
    catalog: &Catalog,
    cart: &CartState,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog.find_product(product_id)?;
    cart.cart().add_product(product);

    Ok(CartResponse::from(cart))
}

/// Empties the cart.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.cart().clear();
    CartResponse::from(cart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn setup() -> (Catalog, CartState) {
        (Catalog::mock().unwrap(), CartState::new())
    }

    #[test]
    fn test_get_empty_cart() {
        let (_, cart) = setup();
        let response = get_cart(&cart);

        assert!(response.items.is_empty());
        assert_eq!(response.count, 0);
        assert_eq!(response.badge, "");
        assert_eq!(response.subtotal, "$0.00");
    }

    #[test]
    fn test_add_to_cart_keeps_duplicates() {
        let (catalog, cart) = setup();

        add_to_cart(&catalog, &cart, "oxford-shirt").unwrap();
        let response = add_to_cart(&catalog, &cart, "oxford-shirt").unwrap();

        assert_eq!(response.count, 2);
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.badge, "2");
        assert_eq!(response.subtotal, "$59.98");
    }

    #[test]
    fn test_add_unknown_product() {
        let (catalog, cart) = setup();

        let err = add_to_cart(&catalog, &cart, "nope").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(get_cart(&cart).count, 0);
    }

    #[test]
    fn test_clear_cart() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, "stoneware-mug").unwrap();

        let response = clear_cart(&cart);
        assert_eq!(response.count, 0);
        assert_eq!(response.badge, "");

        let response = add_to_cart(&catalog, &cart, "linen-scarf").unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].product_id, "linen-scarf");
    }

    #[test]
    fn test_response_json_shape() {
        let (catalog, cart) = setup();
        let response = add_to_cart(&catalog, &cart, "oxford-shirt").unwrap();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["badge"], "1");
        assert_eq!(json["items"][0]["productId"], "oxford-shirt");
        assert_eq!(json["items"][0]["price"], "$29.99");
    }
}
