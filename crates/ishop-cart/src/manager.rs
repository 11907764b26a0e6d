//! # Cart Manager
//!
//! Owns the products currently in the cart and announces every change.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Screen Action            CartManager              Event                │
//! │  ─────────────            ───────────              ─────                │
//! │                                                                         │
//! │  Tap "Add to cart" ─────► add_product(P) ───────► ProductAdded{P}       │
//! │                           items.push(P)                                 │
//! │                                                                         │
//! │  Tap "Clear" ───────────► clear() ──────────────► CartCleared           │
//! │                           items.clear()                                 │
//! │                                                                         │
//! │  Render badge/screen ───► product_count()         (none, read only)     │
//! │                           products()                                    │
//! │                                                                         │
//! │  NOTE: the lock is released before publishing so observers can call    │
//! │        the read operations from inside their handlers.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use ishop_core::{Money, Product};
use tracing::debug;

use crate::bus::CartEventBus;
use crate::events::CartEvent;

/// Plain cart contents.
///
/// ## Invariants
/// - Entries keep insertion order
/// - Every add is its own entry: identical products are NOT merged into a
///   quantity (a second "Oxford Shirt" is a second row)
#[derive(Debug, Clone)]
pub struct Cart {
    items: Vec<Product>,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends one entry.
    pub fn push(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Removes every entry and restarts the session clock.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Sum of entry prices.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(Product::price).sum()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// The single writer of cart contents.
///
/// ## Thread Safety
/// `Mutex<Cart>` guards every read-modify-write, so a product added from a
/// background completion handler is never lost. Observers still have to be
/// reached on the UI context; the shell redispatches background mutations
/// there before calling into the manager.
#[derive(Debug)]
pub struct CartManager {
    cart: Mutex<Cart>,
    bus: Arc<CartEventBus>,
}

impl CartManager {
    /// Creates an empty cart that announces changes on `bus`.
    pub fn new(bus: Arc<CartEventBus>) -> Self {
        CartManager {
            cart: Mutex::new(Cart::new()),
            bus,
        }
    }

    /// Appends `product` as a new entry and publishes `ProductAdded`.
    pub fn add_product(&self, product: Product) {
        let count = {
            let mut cart = self.lock();
            cart.push(product.clone());
            cart.len()
        };

        debug!(product_id = %product.id(), count, "Product added to cart");
        self.bus.publish(CartEvent::ProductAdded { product });
    }

    /// Empties the cart and publishes `CartCleared`.
    pub fn clear(&self) {
        let removed = {
            let mut cart = self.lock();
            let removed = cart.len();
            cart.clear();
            removed
        };

        debug!(removed, "Cart cleared");
        self.bus.publish(CartEvent::CartCleared);
    }

    /// Number of entries currently in the cart.
    pub fn product_count(&self) -> usize {
        self.lock().len()
    }

    /// Snapshot of the entries, in insertion order.
    pub fn products(&self) -> Vec<Product> {
        self.lock().items().to_vec()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Sum of all entry prices.
    pub fn subtotal(&self) -> Money {
        self.lock().subtotal()
    }

    /// When the current cart session started (creation or last clear).
    pub fn session_started_at(&self) -> DateTime<Utc> {
        self.lock().created_at()
    }

    /// The bus this manager publishes on.
    pub fn bus(&self) -> &Arc<CartEventBus> {
        &self.bus
    }

    // Every critical section is a single Vec operation, so a poisoned lock
    // still guards a consistent cart.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_cents(price_cents)).unwrap()
    }

    fn manager() -> CartManager {
        CartManager::new(Arc::new(CartEventBus::new()))
    }

    #[test]
    fn test_count_matches_number_of_adds() {
        let cart = manager();
        assert_eq!(cart.product_count(), 0);

        for n in 1..=25 {
            cart.add_product(test_product(&format!("p{n}"), 100));
            assert_eq!(cart.product_count(), n);
        }
    }

    #[test]
    fn test_identical_products_are_separate_entries() {
        let cart = manager();
        let shirt = test_product("shirt-a", 2999);

        cart.add_product(shirt.clone());
        cart.add_product(shirt.clone());

        assert_eq!(cart.product_count(), 2);
        assert_eq!(cart.products(), vec![shirt.clone(), shirt]);
        assert_eq!(cart.subtotal().cents(), 5998);
    }

    #[test]
    fn test_clear_always_empties() {
        let cart = manager();
        cart.clear();
        assert_eq!(cart.product_count(), 0);

        cart.add_product(test_product("a", 100));
        cart.add_product(test_product("b", 200));
        cart.clear();

        assert_eq!(cart.product_count(), 0);
        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_no_residue_after_clear() {
        let cart = manager();
        let p = test_product("p", 100);
        let q = test_product("q", 200);

        cart.add_product(p);
        cart.clear();
        cart.add_product(q.clone());

        assert_eq!(cart.products(), vec![q]);
    }

    #[test]
    fn test_products_keep_insertion_order() {
        let cart = manager();
        let ids = ["c", "a", "b"];
        for id in ids {
            cart.add_product(test_product(id, 100));
        }

        let got: Vec<String> = cart.products().iter().map(|p| p.id().to_string()).collect();
        assert_eq!(got, ids);
    }

    #[test]
    fn test_clear_restarts_session() {
        let cart = manager();
        let started = cart.session_started_at();
        cart.clear();
        assert!(cart.session_started_at() >= started);
    }

    #[test]
    fn test_mutations_publish_events() {
        let bus = Arc::new(CartEventBus::new());
        let cart = CartManager::new(Arc::clone(&bus));
        let seen = Arc::new(Mutex::new(Vec::new()));

        for kind in EventKind::ALL {
            let seen = Arc::clone(&seen);
            bus.subscribe(kind, move |event| {
                seen.lock().unwrap().push(event.clone());
                Ok(())
            });
        }

        let shirt = test_product("shirt-a", 2999);
        cart.add_product(shirt.clone());
        cart.clear();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                CartEvent::ProductAdded { product: shirt },
                CartEvent::CartCleared
            ]
        );
    }

    #[test]
    fn test_handlers_can_query_manager_during_delivery() {
        let bus = Arc::new(CartEventBus::new());
        let cart = Arc::new(CartManager::new(Arc::clone(&bus)));
        let counts = Arc::new(Mutex::new(Vec::new()));

        for kind in EventKind::ALL {
            let cart = Arc::downgrade(&cart);
            let counts = Arc::clone(&counts);
            bus.subscribe(kind, move |_| {
                if let Some(cart) = cart.upgrade() {
                    counts.lock().unwrap().push(cart.product_count());
                }
                Ok(())
            });
        }

        cart.add_product(test_product("a", 100));
        cart.add_product(test_product("b", 100));
        cart.add_product(test_product("c", 100));
        cart.clear();

        assert_eq!(*counts.lock().unwrap(), vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        let cart = manager();

        std::thread::scope(|scope| {
            for t in 0..4 {
                let cart = &cart;
                scope.spawn(move || {
                    for i in 0..100 {
                        cart.add_product(test_product(&format!("t{t}-{i}"), 1));
                    }
                });
            }
        });

        assert_eq!(cart.product_count(), 400);
        assert_eq!(cart.subtotal().cents(), 400);
    }
}
