//! Product catalog module.
//!
//! The catalog is a fixed list of products in one currency. It is built once
//! per session and read-only afterwards.

mod data;
mod product;

pub use product::Product;

pub(crate) use data::promo_codes as builtin_promo_codes;

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;
use serde::Serialize;

/// Immutable, ordered product list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Catalog {
    currency: Currency,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and foreign currencies.
    pub fn new(currency: Currency, products: Vec<Product>) -> Result<Self, CommerceError> {
        for (i, product) in products.iter().enumerate() {
            product.price.ensure_currency(currency)?;
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
        }

        Ok(Self { currency, products })
    }

    /// The store's compiled-in product list.
    pub fn builtin(currency: Currency) -> Self {
        Self {
            currency,
            products: data::products(currency),
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Products in a category, in display order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Money, Percent};

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin(Currency::RUB);
        assert_eq!(catalog.len(), 6);

        let laptop = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(laptop.name, "Ноутбук Dell XPS 15");
        assert_eq!(laptop.price, Money::from_major(89_990, Currency::RUB));
        assert_eq!(laptop.discount, Some(Percent::saturating(10)));

        let headphones = catalog.get(ProductId::new(2)).unwrap();
        assert!(!headphones.has_discount());

        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_builtin_ids_unique() {
        let builtin = Catalog::builtin(Currency::RUB);
        let rebuilt = Catalog::new(Currency::RUB, builtin.products().to_vec());
        assert_eq!(rebuilt, Ok(builtin));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::builtin(Currency::RUB);
        assert_eq!(
            catalog.categories(),
            vec!["Электроника", "Аудио", "Телефоны", "Аксессуары"]
        );
        assert_eq!(catalog.in_category("Аксессуары").count(), 2);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let price = Money::from_major(100, Currency::RUB);
        let result = Catalog::new(
            Currency::RUB,
            vec![
                Product::new(ProductId::new(1), "A", price),
                Product::new(ProductId::new(1), "B", price),
            ],
        );
        assert_eq!(result, Err(CommerceError::DuplicateProduct(ProductId::new(1))));
    }

    #[test]
    fn test_rejects_foreign_currency() {
        let result = Catalog::new(
            Currency::RUB,
            vec![Product::new(
                ProductId::new(1),
                "A",
                Money::from_major(10, Currency::USD),
            )],
        );
        assert!(matches!(result, Err(CommerceError::CurrencyMismatch { .. })));
    }
}
