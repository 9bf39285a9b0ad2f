//! Cart pricing calculations.
//!
//! Everything here is a pure function of the cart contents and the applied
//! promo percentage; nothing is cached.

use crate::cart::{Cart, CartItem};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Money, Percent};
use serde::{Deserialize, Serialize};

/// Unit price after the product's own discount.
pub fn effective_unit_price(product: &Product) -> Money {
    match product.discount {
        Some(discount) => product.price.percent_off(discount),
        None => product.price,
    }
}

/// Sum of effective unit price times quantity over the cart.
pub fn subtotal(cart: &Cart) -> Result<Money, CommerceError> {
    let lines: Vec<Money> = cart.items().iter().map(CartItem::line_total).collect();
    Money::try_sum(&lines, cart.currency())
}

/// Subtotal with the promo percentage taken off.
pub fn total(subtotal: Money, promo: Percent) -> Money {
    if promo.is_zero() {
        subtotal
    } else {
        subtotal.percent_off(promo)
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineItemPricing>,
    /// Sum of line totals before the promo code.
    pub subtotal: Money,
    /// Promo percentage applied on top of the subtotal.
    pub promo: Percent,
    /// Amount taken off by the promo code.
    pub promo_discount: Money,
    /// Final total.
    pub total: Money,
}

impl CartPricing {
    /// Check if a promo code discount is applied.
    pub fn has_promo(&self) -> bool {
        !self.promo.is_zero()
    }

    /// Savings from product discounts and the promo code combined.
    pub fn savings(&self) -> Result<Money, CommerceError> {
        let currency = self.subtotal.currency;
        Money::try_sum(
            self.lines
                .iter()
                .map(|l| &l.product_discount)
                .chain(std::iter::once(&self.promo_discount)),
            currency,
        )
    }
}

/// Pricing breakdown for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    pub product_id: ProductId,
    /// Catalog price per unit.
    pub unit_price: Money,
    /// Price per unit after the product discount.
    pub effective_unit_price: Money,
    pub quantity: u32,
    /// Product discount over the whole line.
    pub product_discount: Money,
    /// Effective unit price times quantity.
    pub line_total: Money,
}

impl LineItemPricing {
    pub fn for_item(item: &CartItem) -> Result<Self, CommerceError> {
        let effective = item.effective_price();
        let line_total = effective.times(item.quantity);
        let full = item.product.price.times(item.quantity);
        let product_discount = full
            .try_subtract(&line_total)
            .ok_or_else(|| CommerceError::currency_mismatch(full.currency, line_total.currency))?;

        Ok(Self {
            product_id: item.product.id,
            unit_price: item.product.price,
            effective_unit_price: effective,
            quantity: item.quantity,
            product_discount,
            line_total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(id: u32, price: i64, discount: Option<u8>) -> Product {
        let p = Product::new(ProductId::new(id), "Test", Money::new(price, Currency::RUB));
        match discount {
            Some(d) => p.with_discount(Percent::saturating(d)),
            None => p,
        }
    }

    #[test]
    fn test_effective_price_without_discount() {
        for price in [0, 1, 999, 8_999_000] {
            let p = product(1, price, None);
            assert_eq!(effective_unit_price(&p), p.price);
        }
    }

    #[test]
    fn test_effective_price_with_discount() {
        assert_eq!(effective_unit_price(&product(1, 1000, Some(10))).amount_minor, 900);
        assert_eq!(effective_unit_price(&product(1, 1000, Some(0))).amount_minor, 1000);
        assert_eq!(effective_unit_price(&product(1, 1000, Some(100))).amount_minor, 0);
        // 54 990 ₽ with 15% off
        assert_eq!(
            effective_unit_price(&product(3, 5_499_000, Some(15))).amount_minor,
            4_674_150
        );
    }

    #[test]
    fn test_subtotal_and_total_example() {
        let mut cart = Cart::new(Currency::RUB);
        let p = product(1, 1000, Some(10));
        cart.add(&p).unwrap();
        cart.add(&p).unwrap();

        let sub = subtotal(&cart).unwrap();
        assert_eq!(sub.amount_minor, 1800);
        assert_eq!(total(sub, Percent::saturating(20)).amount_minor, 1440);
        assert_eq!(total(sub, Percent::ZERO), sub);
    }

    #[test]
    fn test_calculate_pricing_breakdown() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&product(1, 1000, Some(10))).unwrap();
        cart.add(&product(1, 1000, Some(10))).unwrap();
        cart.add(&product(2, 500, None)).unwrap();

        let pricing = cart.calculate_pricing(Percent::saturating(20)).unwrap();
        assert_eq!(pricing.lines.len(), 2);
        assert_eq!(pricing.lines[0].effective_unit_price.amount_minor, 900);
        assert_eq!(pricing.lines[0].product_discount.amount_minor, 200);
        assert_eq!(pricing.lines[0].line_total.amount_minor, 1800);
        assert_eq!(pricing.lines[1].line_total.amount_minor, 500);

        assert_eq!(pricing.subtotal.amount_minor, 2300);
        assert_eq!(pricing.total.amount_minor, 1840);
        assert_eq!(pricing.promo_discount.amount_minor, 460);
        assert_eq!(pricing.savings().unwrap().amount_minor, 660);
        assert!(pricing.has_promo());
    }

    #[test]
    fn test_empty_cart_pricing() {
        let pricing = Cart::new(Currency::RUB)
            .calculate_pricing(Percent::saturating(15))
            .unwrap();
        assert!(pricing.lines.is_empty());
        assert!(pricing.subtotal.is_zero());
        assert!(pricing.total.is_zero());
        assert!(pricing.promo_discount.is_zero());
    }
}
