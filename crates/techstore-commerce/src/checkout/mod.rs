//! Checkout module.
//!
//! Checkout has no payment step: it snapshots the cart into an
//! [`OrderConfirmation`] and the session resets itself.

mod order;

pub use order::OrderConfirmation;
