//! # ishop-cart: Cart State and Cart Events
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Product screen ── add_product(P) ──► CartManager                       │
//! │                                          │ 1. push P (under lock)       │
//! │                                          │ 2. release lock              │
//! │                                          ▼                              │
//! │                                   CartEventBus.publish(ProductAdded{P}) │
//! │                                          │ snapshot subscribers         │
//! │                          ┌───────────────┴───────────────┐              │
//! │                          ▼                               ▼              │
//! │                     CartBadge                       CartScreen          │
//! │              title = count() or ""         lines = products() (visible) │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Observers never accumulate deltas from the event payload. They always
//! re-read the manager, so what they show cannot drift from the cart.
//!
//! ## Modules
//!
//! - [`manager`] - `CartManager`, the only writer of cart contents
//! - [`bus`] - `CartEventBus`, synchronous typed publish/subscribe
//! - [`events`] - `CartEvent` and its `EventKind` discriminant
//! - [`observers`] - `CartObserver` trait, badge and cart screen
//! - [`error`] - handler failure types

pub mod bus;
pub mod error;
pub mod events;
pub mod manager;
pub mod observers;

pub use bus::{CartEventBus, DeliveryReport, SubscriptionHandle};
pub use error::{CartError, HandlerError, HandlerResult};
pub use events::{CartEvent, EventKind};
pub use manager::{Cart, CartManager};
pub use observers::{attach, detach, CartBadge, CartLine, CartObserver, CartScreen};
