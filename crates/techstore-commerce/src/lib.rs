//! Storefront engine for TechStore.
//!
//! This crate holds the whole shopping session in memory:
//!
//! - **Catalog**: the fixed product list
//! - **Cart**: ordered cart items with quantity controls, promo codes, pricing
//! - **Checkout**: order confirmation snapshots
//! - **Content**: section routing and static page copy
//! - **Session**: [`Storefront`], the state struct UI handlers operate on
//!
//! # Example
//!
//! ```
//! use techstore_commerce::prelude::*;
//!
//! let mut store = Storefront::builtin()?;
//! store.add_to_cart(ProductId::new(1))?;
//! store.add_to_cart(ProductId::new(1))?;
//! store.apply_promo_code("welcome10")?;
//!
//! let pricing = store.pricing()?;
//! assert_eq!(pricing.lines[0].quantity, 2);
//! println!("Итого: {}", store.format_money(pricing.total));
//!
//! let order = store.checkout()?;
//! assert_eq!(order.item_count(), 2);
//! assert!(store.cart().is_empty());
//! # Ok::<(), techstore_commerce::CommerceError>(())
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod notify;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod content;
pub mod session;

pub use config::{StoreConfig, StoreInfo};
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money, MoneyFormat, Percent};
pub use session::{SessionSnapshot, Storefront};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{StoreConfig, StoreInfo};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money, MoneyFormat, Percent};

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartPricing, LineItemPricing, PromoCode, PromoEngine};

    // Checkout
    pub use crate::checkout::OrderConfirmation;

    // Content
    pub use crate::content::{ContentBlock, Footer, Hero, Section, SectionContent, StaticPage};

    // Session
    pub use crate::notify::{Notification, NotificationKind, NotificationQueue, Notifier};
    pub use crate::session::{SessionSnapshot, Storefront};
}
