//! Order confirmation snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartItem, CartPricing};
use crate::error::CommerceError;
use crate::ids::OrderNumber;
use crate::money::{Money, Percent};

/// What the shopper bought, captured at checkout before the cart is cleared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Per-session order sequence number, starting at 1.
    pub number: OrderNumber,
    pub placed_at: DateTime<Utc>,
    /// Cart items in display order.
    pub items: Vec<CartItem>,
    /// Promo percentage that was applied.
    pub promo: Percent,
    pub pricing: CartPricing,
}

impl OrderConfirmation {
    /// Snapshot a cart with the applied promo.
    pub fn capture(
        number: OrderNumber,
        cart: &Cart,
        promo: Percent,
        placed_at: DateTime<Utc>,
    ) -> Result<Self, CommerceError> {
        Ok(Self {
            number,
            placed_at,
            items: cart.items().to_vec(),
            promo,
            pricing: cart.calculate_pricing(promo)?,
        })
    }

    pub fn total(&self) -> Money {
        self.pricing.total
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// An empty cart can be checked out; the order then has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
