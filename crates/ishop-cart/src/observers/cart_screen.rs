//! # Cart Screen
//!
//! The checkout screen listing the products in the cart.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │  Shopping Cart                            │
//! ├───────────────────────────────────────────┤
//! │  Oxford Shirt                    $29.99   │
//! │  Oxford Shirt                    $29.99   │
//! │  Canvas Tote                     $14.50   │
//! ├───────────────────────────────────────────┤
//! │  Subtotal                        $74.48   │
//! │               [ Clear cart ]              │
//! └───────────────────────────────────────────┘
//! ```
//!
//! When the screen appears it pulls `products()` immediately instead of
//! waiting for the next event. While hidden, events are ignored.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use ishop_core::{Money, Product};
use serde::Serialize;
use tracing::debug;

use super::CartObserver;
use crate::error::HandlerResult;
use crate::events::{CartEvent, EventKind};
use crate::manager::CartManager;

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub price: String,
}

impl From<&Product> for CartLine {
    fn from(product: &Product) -> Self {
        CartLine {
            product_id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price().to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct Rendered {
    lines: Vec<CartLine>,
    subtotal: String,
    reloads: u64,
}

/// Cart screen observer.
#[derive(Debug)]
pub struct CartScreen {
    cart: Arc<CartManager>,
    visible: AtomicBool,
    rendered: RwLock<Rendered>,
}

impl CartScreen {
    /// Creates a hidden screen with nothing rendered yet.
    pub fn new(cart: Arc<CartManager>) -> Self {
        CartScreen {
            cart,
            visible: AtomicBool::new(false),
            rendered: RwLock::new(Rendered {
                subtotal: Money::zero().to_string(),
                ..Rendered::default()
            }),
        }
    }

    /// Marks the screen visible and renders current cart contents.
    pub fn appear(&self) {
        self.visible.store(true, Ordering::SeqCst);
        self.reload();
    }

    pub fn disappear(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// The screen's "clear cart" action.
    pub fn clear_cart(&self) {
        self.cart.clear();
    }

    /// Rows currently rendered.
    pub fn lines(&self) -> Vec<CartLine> {
        self.rendered().lines.clone()
    }

    /// Subtotal label currently rendered.
    pub fn subtotal(&self) -> String {
        self.rendered().subtotal.clone()
    }

    /// How many times the rows were rebuilt.
    pub fn reload_count(&self) -> u64 {
        self.rendered().reloads
    }

    fn reload(&self) {
        let products = self.cart.products();
        let subtotal: Money = products.iter().map(Product::price).sum();
        let lines: Vec<CartLine> = products.iter().map(CartLine::from).collect();

        debug!(rows = lines.len(), subtotal = %subtotal, "Cart screen reloaded");

        let mut rendered = self.rendered.write().unwrap_or_else(PoisonError::into_inner);
        rendered.lines = lines;
        rendered.subtotal = subtotal.to_string();
        rendered.reloads += 1;
    }

    fn rendered(&self) -> std::sync::RwLockReadGuard<'_, Rendered> {
        self.rendered.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CartObserver for CartScreen {
    fn interests(&self) -> &'static [EventKind] {
        &[EventKind::ProductAdded, EventKind::CartCleared]
    }

    fn on_cart_event(&self, event: &CartEvent) -> HandlerResult {
        if !self.is_visible() {
            return Ok(());
        }

        match event {
            CartEvent::ProductAdded { .. } | CartEvent::CartCleared => self.reload(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::CartEventBus;
    use crate::observers::{attach, CartBadge};

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, format!("Item {id}"), Money::from_cents(cents)).unwrap()
    }

    fn wired() -> (Arc<CartManager>, Arc<CartScreen>) {
        let bus = Arc::new(CartEventBus::new());
        let cart = Arc::new(CartManager::new(Arc::clone(&bus)));
        let screen = Arc::new(CartScreen::new(Arc::clone(&cart)));
        attach(&bus, &screen);
        (cart, screen)
    }

    #[test]
    fn test_hidden_screen_ignores_events() {
        let (cart, screen) = wired();
        cart.add_product(product("a", 100));

        assert!(screen.lines().is_empty());
        assert_eq!(screen.reload_count(), 0);
    }

    #[test]
    fn test_appear_pulls_current_contents() {
        let (cart, screen) = wired();
        cart.add_product(product("a", 100));
        cart.add_product(product("b", 250));

        screen.appear();

        let lines = screen.lines();
        let ids: Vec<&str> = lines.iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(lines[0].name, "Item a");
        assert_eq!(lines[1].price, "$2.50");
        assert_eq!(screen.subtotal(), "$3.50");
    }

    #[test]
    fn test_visible_screen_tracks_events() {
        let (cart, screen) = wired();
        screen.appear();

        cart.add_product(product("a", 100));
        assert_eq!(screen.lines().len(), 1);

        screen.clear_cart();
        assert!(screen.lines().is_empty());
        assert_eq!(screen.subtotal(), "$0.00");
        assert_eq!(cart.product_count(), 0);

        screen.disappear();
        cart.add_product(product("b", 100));
        assert!(screen.lines().is_empty());
    }

    #[test]
    fn test_badge_and_screen_agree_with_cart() {
        let bus = Arc::new(CartEventBus::new());
        let cart = Arc::new(CartManager::new(Arc::clone(&bus)));
        let badge = Arc::new(CartBadge::new(Arc::clone(&cart)));
        let screen = Arc::new(CartScreen::new(Arc::clone(&cart)));
        attach(&bus, &badge);
        attach(&bus, &screen);
        screen.appear();

        let p = product("p", 1999);
        cart.add_product(p.clone());

        assert_eq!(cart.product_count(), 1);
        assert_eq!(cart.products(), vec![p.clone()]);
        assert_eq!(badge.title(), "1");
        assert_eq!(screen.lines(), vec![CartLine::from(&p)]);
    }
}
