//! # Cart Event Bus
//!
//! Synchronous, in-process publish/subscribe for [`CartEvent`]s.
//!
//! ## Delivery Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  publish(event)                                                         │
//! │     │                                                                   │
//! │     ├── 1. lock, copy handlers subscribed to event.kind(), unlock       │
//! │     │                                                                   │
//! │     ├── 2. call each handler in subscription order, on this thread      │
//! │     │        ├── Ok(())      → delivered                               │
//! │     │        ├── Err(e)      → warn!, continue                         │
//! │     │        └── panic       → caught, warn!, continue                 │
//! │     │                                                                   │
//! │     └── 3. return DeliveryReport                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because the handler list is copied before delivery, a handler may
//! subscribe, unsubscribe or publish again without deadlocking. Subscribers
//! added during a delivery do not see the event being delivered.

use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace, warn};

use crate::error::{CartError, HandlerResult};
use crate::events::{CartEvent, EventKind};

type Handler = Arc<dyn Fn(&CartEvent) -> HandlerResult + Send + Sync>;

/// Opaque token returned by [`CartEventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionHandle(u64);

impl SubscriptionHandle {
    #[doc(hidden)]
    pub const fn from_raw(id: u64) -> Self {
        SubscriptionHandle(id)
    }
}

impl fmt::Display for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of one [`CartEventBus::publish`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Handlers that returned `Ok(())`.
    pub delivered: usize,
    /// Handlers that returned an error or panicked.
    pub failed: usize,
}

impl DeliveryReport {
    /// True when no handler failed.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

struct Subscriber {
    handle: SubscriptionHandle,
    kind: EventKind,
    handler: Handler,
}

/// Typed event bus shared (via `Arc`) by the cart manager and the observers.
pub struct CartEventBus {
    subscribers: Mutex<Vec<Subscriber>>,
    next_id: AtomicU64,
}

impl CartEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for every future event of `kind`.
    ///
    /// Handlers for the same kind run in the order they subscribed.
    pub fn subscribe<F>(&self, kind: EventKind, handler: F) -> SubscriptionHandle
    where
        F: Fn(&CartEvent) -> HandlerResult + Send + Sync + 'static,
    {
        let handle = SubscriptionHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push(Subscriber {
            handle,
            kind,
            handler: Arc::new(handler),
        });

        debug!(subscription = %handle, %kind, "Cart event subscriber registered");
        handle
    }

    /// Removes a subscription.
    ///
    /// Unknown or already removed handles are ignored. Returns whether a
    /// subscriber was actually removed.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        let mut subscribers = self.lock();
        match subscribers.iter().position(|s| s.handle == handle) {
            Some(index) => {
                let removed = subscribers.remove(index);
                debug!(
                    subscription = %handle,
                    kind = %removed.kind,
                    "Cart event subscriber removed"
                );
                true
            }
            None => {
                debug!(subscription = %handle, "Unsubscribe ignored: handle not registered");
                false
            }
        }
    }

    /// Delivers `event` to all current subscribers of its kind before
    /// returning. Handler failures are logged and never reach the caller.
    pub fn publish(&self, event: CartEvent) -> DeliveryReport {
        let kind = event.kind();
        let handlers: Vec<(SubscriptionHandle, Handler)> = self
            .lock()
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| (s.handle, Arc::clone(&s.handler)))
            .collect();

        trace!(%kind, subscribers = handlers.len(), "Publishing cart event");

        let mut report = DeliveryReport::default();
        for (handle, handler) in handlers {
            let outcome = catch_unwind(AssertUnwindSafe(|| handler(&event)));
            let reason = match outcome {
                Ok(Ok(())) => {
                    report.delivered += 1;
                    continue;
                }
                Ok(Err(err)) => err.to_string(),
                Err(payload) => panic_reason(payload.as_ref()),
            };

            report.failed += 1;
            let failure = CartError::HandlerFailure {
                subscription: handle,
                kind,
                reason,
            };
            warn!(error = %failure, "Cart event handler failed, continuing delivery");
        }

        report
    }

    /// Number of subscribers currently registered for `kind`.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.lock().iter().filter(|s| s.kind == kind).count()
    }

    // Handlers never run under this lock, so poisoning can only come from a
    // panic inside Vec bookkeeping; the list is still consistent then.
    fn lock(&self) -> MutexGuard<'_, Vec<Subscriber>> {
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CartEventBus {
    fn default() -> Self {
        CartEventBus {
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl fmt::Debug for CartEventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartEventBus")
            .field("subscribers", &self.lock().len())
            .finish()
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panicked: {msg}")
    } else {
        "panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ishop_core::{Money, Product};

    fn shirt() -> CartEvent {
        CartEvent::ProductAdded {
            product: Product::new("shirt-a", "Shirt", Money::from_cents(2999)).unwrap(),
        }
    }

    fn recorder(
        log: &Arc<Mutex<Vec<&'static str>>>,
        tag: &'static str,
    ) -> impl Fn(&CartEvent) -> HandlerResult {
        let log = Arc::clone(log);
        move |_| {
            log.lock().unwrap().push(tag);
            Ok(())
        }
    }

    #[test]
    fn test_publish_delivers_in_subscription_order() {
        let bus = CartEventBus::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        bus.subscribe(EventKind::ProductAdded, recorder(&log, "first"));
        bus.subscribe(EventKind::ProductAdded, recorder(&log, "second"));
        bus.subscribe(EventKind::ProductAdded, recorder(&log, "third"));

        let report = bus.publish(shirt());

        // Synchronous: everything happened before publish returned.
        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
        assert_eq!(report, DeliveryReport { delivered: 3, failed: 0 });
    }

    #[test]
    fn test_publish_routes_by_kind() {
        let bus = CartEventBus::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        bus.subscribe(EventKind::ProductAdded, recorder(&log, "added"));
        bus.subscribe(EventKind::CartCleared, recorder(&log, "cleared"));

        bus.publish(CartEvent::CartCleared);
        assert_eq!(*log.lock().unwrap(), vec!["cleared"]);

        bus.publish(shirt());
        assert_eq!(*log.lock().unwrap(), vec!["cleared", "added"]);
    }

    #[test]
    fn test_publish_without_subscribers_is_noop() {
        let bus = CartEventBus::new();
        let report = bus.publish(CartEvent::CartCleared);
        assert_eq!(report, DeliveryReport::default());
        assert!(report.is_clean());
    }

    #[test]
    fn test_failing_handler_does_not_block_others() {
        let bus = CartEventBus::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        bus.subscribe(EventKind::ProductAdded, recorder(&log, "before"));
        bus.subscribe(EventKind::ProductAdded, |_| Err("badge view gone".into()));
        bus.subscribe(EventKind::ProductAdded, |_| panic!("observer exploded"));
        bus.subscribe(EventKind::ProductAdded, recorder(&log, "after"));

        let report = bus.publish(shirt());

        assert_eq!(*log.lock().unwrap(), vec!["before", "after"]);
        assert_eq!(report, DeliveryReport { delivered: 2, failed: 2 });
        assert!(!report.is_clean());

        // The bus stays usable after a panicking handler.
        let report = bus.publish(shirt());
        assert_eq!(report.delivered, 2);
    }

    #[test]
    fn test_double_unsubscribe_is_noop() {
        let bus = CartEventBus::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let gone = bus.subscribe(EventKind::CartCleared, recorder(&log, "gone"));
        bus.subscribe(EventKind::CartCleared, recorder(&log, "kept"));

        assert!(bus.unsubscribe(gone));
        assert!(!bus.unsubscribe(gone));
        assert!(!bus.unsubscribe(SubscriptionHandle::from_raw(999)));

        bus.publish(CartEvent::CartCleared);
        assert_eq!(*log.lock().unwrap(), vec!["kept"]);
        assert_eq!(bus.subscriber_count(EventKind::CartCleared), 1);
    }

    #[test]
    fn test_subscriber_added_during_delivery_misses_current_event() {
        let bus = Arc::new(CartEventBus::new());
        let log = Arc::new(Mutex::new(Vec::new()));

        let inner_bus = Arc::clone(&bus);
        let inner_log = Arc::clone(&log);
        bus.subscribe(EventKind::CartCleared, move |_| {
            inner_bus.subscribe(EventKind::CartCleared, recorder(&inner_log, "late"));
            Ok(())
        });

        bus.publish(CartEvent::CartCleared);
        assert!(log.lock().unwrap().is_empty());

        // The late subscriber is registered for the next event.
        bus.publish(CartEvent::CartCleared);
        assert_eq!(*log.lock().unwrap(), vec!["late"]);
    }

    #[test]
    fn test_handles_are_unique() {
        let bus = CartEventBus::new();
        let a = bus.subscribe(EventKind::CartCleared, |_| Ok(()));
        let b = bus.subscribe(EventKind::CartCleared, |_| Ok(()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_panic_reason() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_reason(payload.as_ref()), "panicked: boom");

        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_reason(payload.as_ref()), "panicked: bang");

        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_reason(payload.as_ref()), "panicked");
    }
}
