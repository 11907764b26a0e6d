//! # Cart Badge
//!
//! The counter on the top-right cart button.
//!
//! ```text
//! count:   0     1     2     0
//! title:   ""   "1"   "2"    ""
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

use super::CartObserver;
use crate::error::HandlerResult;
use crate::events::{CartEvent, EventKind};
use crate::manager::CartManager;

/// Renders a cart count for the badge: empty when the cart is empty.
pub fn badge_title(count: usize) -> String {
    if count > 0 {
        count.to_string()
    } else {
        String::new()
    }
}

/// Badge observer.
///
/// The title is always re-derived from [`CartManager::product_count`], never
/// incremented locally, so it cannot drift from the cart.
#[derive(Debug)]
pub struct CartBadge {
    cart: Arc<CartManager>,
    title: RwLock<String>,
}

impl CartBadge {
    /// Creates a badge already showing the current cart count.
    pub fn new(cart: Arc<CartManager>) -> Self {
        let title = badge_title(cart.product_count());
        CartBadge {
            cart,
            title: RwLock::new(title),
        }
    }

    /// Text currently displayed on the badge.
    pub fn title(&self) -> String {
        self.title
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Re-reads the count from the cart.
    pub fn refresh(&self) {
        let title = badge_title(self.cart.product_count());
        trace!(title = %title, "Cart badge refreshed");
        *self.title.write().unwrap_or_else(PoisonError::into_inner) = title;
    }
}

impl CartObserver for CartBadge {
    fn interests(&self) -> &'static [EventKind] {
        &[EventKind::ProductAdded, EventKind::CartCleared]
    }

    fn on_cart_event(&self, event: &CartEvent) -> HandlerResult {
        match event {
            // Both re-derive: after a clear the count is zero and renders as
            // empty, and a product added concurrently right after the clear
            // is still shown.
            CartEvent::ProductAdded { .. } | CartEvent::CartCleared => self.refresh(),
        }
        Ok(())
    }
}
