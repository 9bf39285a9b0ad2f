//! The storefront session.
//!
//! [`Storefront`] owns every piece of mutable state for one shopper: the
//! cart, the applied promo, the promo input field and the current section.
//! UI event handlers call its methods with `&mut`; each call runs to
//! completion synchronously.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use techstore_observability::{SessionId, StructuredLogger};

use crate::cart::{Cart, CartItem, CartPricing, PromoEngine};
use crate::catalog::Catalog;
use crate::checkout::OrderConfirmation;
use crate::config::StoreConfig;
use crate::content::{Footer, Section, SectionContent};
use crate::error::CommerceError;
use crate::ids::{OrderNumber, ProductId};
use crate::money::{Money, Percent};
use crate::notify::{Notification, NotificationQueue, Notifier};

/// Session state and the operations that mutate it.
#[derive(Debug)]
pub struct Storefront<N: Notifier = NotificationQueue> {
    config: StoreConfig,
    catalog: Catalog,
    promos: PromoEngine,
    cart: Cart,
    applied_promo: Percent,
    promo_input: String,
    section: Section,
    next_order: OrderNumber,
    notifier: N,
    logger: StructuredLogger,
}

impl Storefront<NotificationQueue> {
    /// Session with the built-in catalog and promo codes, queuing
    /// notifications for the UI.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_notifier(config, NotificationQueue::new())
    }

    /// Session using the compiled-in store configuration.
    pub fn builtin() -> Result<Self, CommerceError> {
        Ok(Self::new(StoreConfig::builtin()?))
    }

    /// Notifications not yet shown.
    pub fn notifications(&self) -> &[Notification] {
        self.notifier.pending()
    }

    /// Take every pending notification, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifier.drain()
    }
}

impl<N: Notifier> Storefront<N> {
    /// Session delivering notifications to a custom notifier.
    pub fn with_notifier(config: StoreConfig, notifier: N) -> Self {
        let catalog = Catalog::builtin(config.store.currency);
        let logger = StructuredLogger::new(SessionId::generate())
            .with_settings(config.logging)
            .with_component("storefront");

        Self {
            cart: Cart::new(catalog.currency()),
            catalog,
            promos: PromoEngine::builtin(),
            applied_promo: Percent::ZERO,
            promo_input: String::new(),
            section: Section::default(),
            next_order: OrderNumber::new(1),
            notifier,
            logger,
            config,
        }
    }

    /// Replace the catalog. The cart is reset to the catalog's currency.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.cart = Cart::new(catalog.currency());
        self.catalog = catalog;
        self
    }

    pub fn with_promos(mut self, promos: PromoEngine) -> Self {
        self.promos = promos;
        self
    }

    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    /// The "buy" button: add one unit of a catalog product.
    ///
    /// Returns the product's new quantity in the cart.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<u32, CommerceError> {
        let Some(product) = self.catalog.get(product_id) else {
            self.logger
                .component("cart")
                .warn_builder("unknown product")
                .field_u64("product_id", u64::from(product_id.get()))
                .emit();
            return Err(CommerceError::ProductNotFound(product_id));
        };

        let quantity = self.cart.add(product)?;
        self.notifier.notify(Notification::added_to_cart(product));

        self.logger
            .component("cart")
            .info_builder("item added")
            .field_u64("product_id", u64::from(product_id.get()))
            .field_u64("quantity", u64::from(quantity))
            .emit();

        Ok(quantity)
    }

    /// Remove an item; a no-op if it is not in the cart.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        let removed = self.cart.remove(product_id);
        if removed {
            self.logger
                .component("cart")
                .info_builder("item removed")
                .field_u64("product_id", u64::from(product_id.get()))
                .emit();
        }
        removed
    }

    /// Set an item's quantity; zero removes it.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        let changed = self.cart.update_quantity(product_id, quantity);
        if changed {
            self.log_quantity(product_id);
        }
        changed
    }

    pub fn increment_quantity(&mut self, product_id: ProductId) -> bool {
        let changed = self.cart.increment(product_id);
        if changed {
            self.log_quantity(product_id);
        }
        changed
    }

    pub fn decrement_quantity(&mut self, product_id: ProductId) -> bool {
        let changed = self.cart.decrement(product_id);
        if changed {
            self.log_quantity(product_id);
        }
        changed
    }

    fn log_quantity(&self, product_id: ProductId) {
        self.logger
            .component("cart")
            .debug_builder("quantity updated")
            .field_u64("product_id", u64::from(product_id.get()))
            .field_u64("quantity", u64::from(self.cart.quantity_of(product_id).unwrap_or(0)))
            .emit();
    }

    /// Text typed into the promo field.
    pub fn set_promo_input(&mut self, input: impl Into<String>) {
        self.promo_input = input.into();
    }

    pub fn promo_input(&self) -> &str {
        &self.promo_input
    }

    /// Apply a promo code.
    ///
    /// A match replaces the applied discount. An unknown code leaves it
    /// untouched; the failure is both returned and shown to the shopper.
    pub fn apply_promo_code(&mut self, code: &str) -> Result<Percent, CommerceError> {
        match self.promos.resolve(code) {
            Ok(percent) => {
                self.applied_promo = percent;
                self.notifier.notify(Notification::promo_applied(percent));
                self.logger
                    .component("promo")
                    .info_builder("promo code applied")
                    .field("code", code)
                    .field_u64("percent", u64::from(percent.get()))
                    .emit();
                Ok(percent)
            }
            Err(e) => {
                self.notifier.notify(Notification::promo_rejected());
                self.logger
                    .component("promo")
                    .warn_builder("promo code rejected")
                    .field("code", code)
                    .emit();
                Err(e)
            }
        }
    }

    /// The "apply" button: apply whatever is in the promo field.
    pub fn apply_entered_promo(&mut self) -> Result<Percent, CommerceError> {
        let code = self.promo_input.clone();
        self.apply_promo_code(&code)
    }

    /// Currently applied promo percentage (zero when none).
    pub fn applied_promo(&self) -> Percent {
        self.applied_promo
    }

    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        self.cart.calculate_pricing(self.applied_promo)
    }

    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        crate::cart::subtotal(&self.cart)
    }

    pub fn total(&self) -> Result<Money, CommerceError> {
        Ok(crate::cart::total(self.subtotal()?, self.applied_promo))
    }

    /// Place the order.
    ///
    /// Captures the confirmation, then clears the cart, the applied promo
    /// and the promo field. An empty cart is accepted. If the cart cannot
    /// be priced nothing is cleared.
    pub fn checkout(&mut self) -> Result<OrderConfirmation, CommerceError> {
        let order =
            OrderConfirmation::capture(self.next_order, &self.cart, self.applied_promo, Utc::now())?;
        self.next_order = self.next_order.next();

        self.notifier.notify(Notification::order_placed());
        self.cart.clear();
        self.applied_promo = Percent::ZERO;
        self.promo_input.clear();

        self.logger
            .component("checkout")
            .info_builder("order placed")
            .field_u64("order_number", order.number.get())
            .field_u64("items", order.item_count())
            .field_i64("total_minor", order.total().amount_minor)
            .field_bool("empty", order.is_empty())
            .emit();

        Ok(order)
    }

    pub fn set_section(&mut self, section: Section) {
        if self.section != section {
            self.logger
                .component("router")
                .debug_builder("section changed")
                .field("from", self.section.as_str())
                .field("to", section.as_str())
                .emit();
        }
        self.section = section;
    }

    /// Switch section by name; unknown names show the home page.
    pub fn navigate(&mut self, name: &str) -> Section {
        let section = Section::parse(name);
        self.set_section(section);
        section
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Static content of the current section.
    pub fn content(&self) -> SectionContent {
        self.section.content(&self.config.store)
    }

    pub fn footer(&self) -> Footer {
        Footer::build(&self.config.store, &self.promos)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn promos(&self) -> &PromoEngine {
        &self.promos
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn session_id(&self) -> &SessionId {
        self.logger.session_id()
    }

    /// Format an amount with the configured money format.
    pub fn format_money(&self, money: Money) -> String {
        money.format_with(&self.config.money)
    }

    /// Everything the UI needs to render the current state.
    pub fn snapshot(&self) -> Result<SessionSnapshot, CommerceError> {
        let pricing = self.pricing()?;
        Ok(SessionSnapshot {
            session_id: self.session_id().to_string(),
            section: self.section,
            items: self.cart.items().to_vec(),
            line_count: self.cart.line_count(),
            item_count: self.cart.item_count(),
            applied_promo: self.applied_promo,
            promo_input: self.promo_input.clone(),
            subtotal_display: self.format_money(pricing.subtotal),
            total_display: self.format_money(pricing.total),
            pricing,
        })
    }
}

/// Serializable view of a session for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub section: Section,
    pub items: Vec<CartItem>,
    /// Distinct products in the cart.
    pub line_count: usize,
    pub item_count: u64,
    pub applied_promo: Percent,
    pub promo_input: String,
    pub pricing: CartPricing,
    pub subtotal_display: String,
    pub total_display: String,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string(self)?)
    }
}
