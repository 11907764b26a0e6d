//! # Cart Events
//!
//! The closed set of things that can happen to the cart. Handlers match on
//! [`CartEvent`] exhaustively, so adding a variant is a compile error at
//! every observer until it is handled.

use std::fmt;

use ishop_core::Product;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A cart state change.
///
/// Transient: events are delivered once, synchronously, and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum CartEvent {
    /// One product entry was appended to the cart.
    ProductAdded { product: Product },
    /// The cart was emptied.
    CartCleared,
}

impl CartEvent {
    /// Returns the discriminant used to route this event to subscribers.
    pub fn kind(&self) -> EventKind {
        match self {
            CartEvent::ProductAdded { .. } => EventKind::ProductAdded,
            CartEvent::CartCleared => EventKind::CartCleared,
        }
    }
}

/// Payload-free event discriminant, the unit of subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum EventKind {
    ProductAdded,
    CartCleared,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [EventKind; 2] = [EventKind::ProductAdded, EventKind::CartCleared];
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::ProductAdded => write!(f, "product_added"),
            EventKind::CartCleared => write!(f, "cart_cleared"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ishop_core::Money;

    #[test]
    fn test_event_kind() {
        let product = Product::new("shirt-a", "Shirt", Money::from_cents(2999)).unwrap();
        assert_eq!(
            CartEvent::ProductAdded { product }.kind(),
            EventKind::ProductAdded
        );
        assert_eq!(CartEvent::CartCleared.kind(), EventKind::CartCleared);
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_value(CartEvent::CartCleared).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "cartCleared" }));

        let product = Product::new("shirt-a", "Shirt", Money::from_cents(2999)).unwrap();
        let json = serde_json::to_value(CartEvent::ProductAdded { product }).unwrap();
        assert_eq!(json["type"], "productAdded");
        assert_eq!(json["product"]["id"], "shirt-a");
        assert_eq!(json["product"]["price"], 2999);
    }

    #[test]
    fn test_event_payload_is_validated() {
        let event: CartEvent = serde_json::from_str(
            r#"{"type":"productAdded","product":{"id":"shirt-a","name":"Shirt","price":2999}}"#,
        )
        .unwrap();
        assert_eq!(event.kind(), EventKind::ProductAdded);

        let negative = r#"{"type":"productAdded","product":{"id":"a","name":"A","price":-5}}"#;
        assert!(serde_json::from_str::<CartEvent>(negative).is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EventKind::ProductAdded.to_string(), "product_added");
        assert_eq!(EventKind::CartCleared.to_string(), "cart_cleared");
    }
}
