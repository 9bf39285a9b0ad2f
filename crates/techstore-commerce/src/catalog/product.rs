//! Product type.

use crate::cart::effective_unit_price;
use crate::ids::ProductId;
use crate::money::{Money, Percent};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are defined once at startup and never mutated; the cart keeps
/// its own copy of each product it holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Base price before the product's own discount.
    pub price: Money,
    /// Product-level discount, if any.
    pub discount: Option<Percent>,
    /// Category label shown as a badge.
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Short description.
    pub description: String,
}

impl Product {
    /// Create a product with no discount and empty display fields.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            discount: None,
            category: String::new(),
            image: String::new(),
            description: String::new(),
        }
    }

    pub fn with_discount(mut self, discount: Percent) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the product carries a non-zero discount badge.
    pub fn has_discount(&self) -> bool {
        self.discount.is_some_and(|d| !d.is_zero())
    }

    /// Unit price after the product's own discount.
    pub fn effective_price(&self) -> Money {
        effective_unit_price(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn keyboard() -> Product {
        Product::new(ProductId::new(4), "Клавиатура", Money::from_major(8_990, Currency::RUB))
    }

    #[test]
    fn test_builder_setters() {
        let p = keyboard()
            .with_category("Аксессуары")
            .with_image("https://example.com/k.jpg")
            .with_description("Механическая");

        assert_eq!(p.category, "Аксессуары");
        assert_eq!(p.image, "https://example.com/k.jpg");
        assert_eq!(p.description, "Механическая");
        assert!(p.discount.is_none());
    }

    #[test]
    fn test_has_discount() {
        assert!(!keyboard().has_discount());
        assert!(!keyboard().with_discount(Percent::ZERO).has_discount());
        assert!(keyboard().with_discount(Percent::saturating(5)).has_discount());
    }

    #[test]
    fn test_effective_price() {
        assert_eq!(keyboard().effective_price(), Money::from_major(8_990, Currency::RUB));
        assert_eq!(
            keyboard().with_discount(Percent::ZERO).effective_price(),
            Money::from_major(8_990, Currency::RUB)
        );
        // 8 990 with 10% off is 8 091
        assert_eq!(
            keyboard().with_discount(Percent::saturating(10)).effective_price(),
            Money::from_major(8_091, Currency::RUB)
        );
    }
}
