//! # Cart State
//!
//! The cart manager and its two observers, wired to one event bus.

use std::sync::Arc;

use ishop_cart::{
    attach, detach, CartBadge, CartEventBus, CartManager, CartScreen, SubscriptionHandle,
};
use tracing::debug;

/// Cart, badge and cart screen sharing one bus.
///
/// Dropping the state detaches both observers.
#[derive(Debug)]
pub struct CartState {
    bus: Arc<CartEventBus>,
    cart: Arc<CartManager>,
    badge: Arc<CartBadge>,
    screen: Arc<CartScreen>,
    subscriptions: Vec<SubscriptionHandle>,
}

impl CartState {
    /// Builds an empty cart with the badge and cart screen attached.
    pub fn new() -> Self {
        let bus = Arc::new(CartEventBus::new());
        let cart = Arc::new(CartManager::new(Arc::clone(&bus)));
        let badge = Arc::new(CartBadge::new(Arc::clone(&cart)));
        let screen = Arc::new(CartScreen::new(Arc::clone(&cart)));

        let mut subscriptions = attach(&bus, &badge);
        subscriptions.extend(attach(&bus, &screen));
        debug!(subscriptions = subscriptions.len(), "Cart observers attached");

        CartState {
            bus,
            cart,
            badge,
            screen,
            subscriptions,
        }
    }

    pub fn bus(&self) -> &Arc<CartEventBus> {
        &self.bus
    }

    pub fn cart(&self) -> &Arc<CartManager> {
        &self.cart
    }

    pub fn badge(&self) -> &CartBadge {
        &self.badge
    }

    pub fn screen(&self) -> &CartScreen {
        &self.screen
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CartState {
    fn drop(&mut self) {
        detach(&self.bus, &self.subscriptions);
    }
}
