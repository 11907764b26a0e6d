//! # Cart Observers
//!
//! UI-facing components that react to [`CartEvent`]s.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  attach(bus, Arc<O>)                                                    │
//! │     │                                                                   │
//! │     └── for kind in O::interests():                                     │
//! │            bus.subscribe(kind, Weak<O> ──► O::on_cart_event)            │
//! │                                                                         │
//! │  The bus holds only a Weak reference: dropping the last Arc of an       │
//! │  observer silently stops its delivery, no unsubscribe needed.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod badge;
mod cart_screen;

pub use badge::{badge_title, CartBadge};
pub use cart_screen::{CartLine, CartScreen};

use std::sync::Arc;

use crate::bus::{CartEventBus, SubscriptionHandle};
use crate::error::HandlerResult;
use crate::events::{CartEvent, EventKind};

/// A component that reacts to cart events.
pub trait CartObserver: Send + Sync + 'static {
    /// Event kinds this observer subscribes to.
    fn interests(&self) -> &'static [EventKind];

    /// Handles one event. Must only read the cart, never mutate it.
    fn on_cart_event(&self, event: &CartEvent) -> HandlerResult;
}

/// Subscribes `observer` to every kind in its [`CartObserver::interests`].
pub fn attach<O: CartObserver>(bus: &CartEventBus, observer: &Arc<O>) -> Vec<SubscriptionHandle> {
    observer
        .interests()
        .iter()
        .map(|&kind| {
            let weak = Arc::downgrade(observer);
            bus.subscribe(kind, move |event| match weak.upgrade() {
                Some(observer) => observer.on_cart_event(event),
                None => Ok(()),
            })
        })
        .collect()
}

/// Removes subscriptions created by [`attach`].
pub fn detach(bus: &CartEventBus, handles: &[SubscriptionHandle]) {
    for &handle in handles {
        bus.unsubscribe(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counter {
        seen: AtomicUsize,
    }

    impl CartObserver for Counter {
        fn interests(&self) -> &'static [EventKind] {
            &EventKind::ALL
        }

        fn on_cart_event(&self, _event: &CartEvent) -> HandlerResult {
            self.seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_attach_subscribes_every_interest() {
        let bus = CartEventBus::new();
        let counter = Arc::new(Counter::default());

        let handles = attach(&bus, &counter);
        assert_eq!(handles.len(), 2);

        bus.publish(CartEvent::CartCleared);
        assert_eq!(counter.seen.load(Ordering::SeqCst), 1);

        detach(&bus, &handles);
        bus.publish(CartEvent::CartCleared);
        assert_eq!(counter.seen.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count(EventKind::CartCleared), 0);
    }

    #[test]
    fn test_dropped_observer_is_skipped() {
        let bus = CartEventBus::new();
        let counter = Arc::new(Counter::default());
        attach(&bus, &counter);
        drop(counter);

        let report = bus.publish(CartEvent::CartCleared);
        assert!(report.is_clean());
    }
}
