//! # Cart Error Types
//!
//! The cart itself cannot fail: it is an in-memory `Vec` behind a mutex.
//! The only failure is a subscriber misbehaving during delivery, which the
//! bus isolates, logs and drops.

use thiserror::Error;

use crate::bus::SubscriptionHandle;
use crate::events::EventKind;

/// Error a handler may return instead of panicking.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Return type of every event handler.
pub type HandlerResult = Result<(), HandlerError>;

/// Cart-level errors. Developer-visible only (log output).
#[derive(Debug, Error)]
pub enum CartError {
    /// A subscriber returned an error or panicked while handling an event.
    /// Delivery to the remaining subscribers continued.
    #[error("Subscriber {subscription} failed handling {kind}: {reason}")]
    HandlerFailure {
        subscription: SubscriptionHandle,
        kind: EventKind,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_failure_message() {
        let err = CartError::HandlerFailure {
            subscription: SubscriptionHandle::from_raw(7),
            kind: EventKind::CartCleared,
            reason: "view was deallocated".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Subscriber #7 failed handling cart_cleared: view was deallocated"
        );
    }
}
