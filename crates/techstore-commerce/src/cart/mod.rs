//! Shopping cart module.
//!
//! Contains the cart store, pricing calculations, and promo codes.

mod cart;
mod pricing;
mod promo;

pub use cart::{Cart, CartItem};
pub use pricing::{effective_unit_price, subtotal, total, CartPricing, LineItemPricing};
pub use promo::{PromoCode, PromoEngine};
