//! Cart and cart item types.

use crate::cart::{CartPricing, LineItemPricing};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money, Percent};
use serde::{Deserialize, Serialize};

/// A product in the cart together with its quantity.
///
/// `quantity` is at least 1 for every item held by a [`Cart`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price after the product's own discount.
    pub fn effective_price(&self) -> Money {
        self.product.effective_price()
    }

    /// Effective unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.effective_price().times(self.quantity)
    }
}

/// A shopping cart.
///
/// Items are kept in insertion order, at most one per product id, each with
/// quantity at least 1 and priced in the cart's currency. The item list is
/// only reachable through the mutation methods below, so a cart serializes
/// for display but is never deserialized.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Cart {
    currency: Currency,
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            items: Vec::new(),
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Add one unit of a product.
    ///
    /// An existing item has its quantity bumped; otherwise a new item with
    /// quantity 1 is appended. Returns the item's new quantity.
    ///
    /// Products priced in another currency are rejected with
    /// `CurrencyMismatch`.
    pub fn add(&mut self, product: &Product) -> Result<u32, CommerceError> {
        product.price.ensure_currency(self.currency)?;

        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return Ok(existing.quantity);
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
        Ok(1)
    }

    /// Remove an item. Returns false if it was not in the cart.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        self.items.len() < len_before
    }

    /// Set an item's quantity; zero removes it.
    ///
    /// Returns false if the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product_id);
        }

        match self.items.iter_mut().find(|i| i.product.id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// The "+" control: one more unit of an item already in the cart.
    pub fn increment(&mut self, product_id: ProductId) -> bool {
        match self.quantity_of(product_id) {
            Some(q) => self.update_quantity(product_id, q.saturating_add(1)),
            None => false,
        }
    }

    /// The "-" control: one unit fewer, removing the item at zero.
    pub fn decrement(&mut self, product_id: ProductId) -> bool {
        match self.quantity_of(product_id) {
            Some(q) => self.update_quantity(product_id, q.saturating_sub(1)),
            None => false,
        }
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.get(product_id).map(|i| i.quantity)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct products (the badge on the cart button).
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Price the cart with a promo percentage applied on top.
    pub fn calculate_pricing(&self, promo: Percent) -> Result<CartPricing, CommerceError> {
        let lines = self
            .items
            .iter()
            .map(LineItemPricing::for_item)
            .collect::<Result<Vec<_>, _>>()?;
        let subtotal = Money::try_sum(lines.iter().map(|l| &l.line_total), self.currency)?;
        let total = crate::cart::total(subtotal, promo);
        let promo_discount = subtotal
            .try_subtract(&total)
            .ok_or_else(|| CommerceError::currency_mismatch(subtotal.currency, total.currency))?;

        Ok(CartPricing {
            lines,
            subtotal,
            promo,
            promo_discount,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: i64) -> Product {
        Product::new(ProductId::new(id), format!("Product {}", id), Money::new(price, Currency::RUB))
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::RUB);
        assert!(cart.is_empty());
        assert_eq!(cart.line_count(), 0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new(Currency::RUB);
        let p = product(1, 1000);

        assert_eq!(cart.add(&p), Ok(1));
        assert_eq!(cart.add(&p), Ok(2));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(p.id), Some(2));
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&product(3, 100)).unwrap();
        cart.add(&product(1, 100)).unwrap();
        cart.add(&product(3, 100)).unwrap();
        cart.add(&product(2, 100)).unwrap();

        let ids: Vec<u32> = cart.items().iter().map(|i| i.id().get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new(Currency::RUB);
        let p = product(1, 1000);
        cart.add(&p).unwrap();

        assert!(cart.update_quantity(p.id, 5));
        assert_eq!(cart.quantity_of(p.id), Some(5));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new(Currency::RUB);
        let p = product(1, 1000);
        cart.add(&p).unwrap();

        assert!(cart.update_quantity(p.id, 0));
        assert!(!cart.contains(p.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&product(1, 1000)).unwrap();

        assert!(!cart.update_quantity(ProductId::new(2), 3));
        assert_eq!(cart.line_count(), 1);
        assert!(!cart.contains(ProductId::new(2)));
    }

    #[test]
    fn test_remove_absent_twice_is_noop() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&product(1, 1000)).unwrap();
        let before = cart.clone();

        assert!(!cart.remove(ProductId::new(7)));
        assert!(!cart.remove(ProductId::new(7)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = Cart::new(Currency::RUB);
        let p = product(1, 1000);
        cart.add(&p).unwrap();

        assert!(cart.increment(p.id));
        assert_eq!(cart.quantity_of(p.id), Some(2));

        assert!(cart.decrement(p.id));
        assert!(cart.decrement(p.id));
        assert!(!cart.contains(p.id));

        assert!(!cart.decrement(p.id));
        assert!(!cart.increment(p.id));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&product(1, 1000)).unwrap();
        cart.add(&product(2, 1000)).unwrap();
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_other_currency() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&product(1, 1000)).unwrap();
        let imported = Product::new(ProductId::new(2), "Imported", Money::new(500, Currency::USD));

        assert_eq!(
            cart.add(&imported),
            Err(CommerceError::CurrencyMismatch {
                expected: "RUB".to_string(),
                got: "USD".to_string(),
            })
        );
        assert_eq!(cart.line_count(), 1);

        let pricing = cart.calculate_pricing(Percent::ZERO).unwrap();
        assert_eq!(pricing.subtotal, Money::new(1000, Currency::RUB));
    }

    #[test]
    fn test_quantities_stay_positive() {
        let mut cart = Cart::new(Currency::RUB);
        let p = product(1, 1000);
        cart.add(&p).unwrap();

        cart.update_quantity(p.id, 0);
        cart.add(&p).unwrap();
        cart.decrement(p.id);
        cart.add(&p).unwrap();

        assert!(cart.items().iter().all(|i| i.quantity >= 1));
        assert_eq!(cart.quantity_of(p.id), Some(1));
    }

    #[test]
    fn test_serializes_for_display() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&product(4, 899_000)).unwrap();

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["currency"], "RUB");
        assert_eq!(json["items"][0]["product"]["id"], 4);
        assert_eq!(json["items"][0]["quantity"], 1);
    }
}
