//! Built-in store data: the product list and the valid promo codes.

use crate::cart::PromoCode;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money, Percent};

pub(crate) fn products(currency: Currency) -> Vec<Product> {
    let rub = |units: i64| Money::from_major(units, currency);

    vec![
        Product::new(ProductId::new(1), "Ноутбук Dell XPS 15", rub(89_990))
            .with_discount(Percent::saturating(10))
            .with_category("Электроника")
            .with_image("https://images.unsplash.com/photo-1593642632823-8f785ba67e45?w=400&h=300&fit=crop")
            .with_description("Мощный ноутбук для работы и развлечений"),
        Product::new(ProductId::new(2), "Беспроводные наушники Sony", rub(19_990))
            .with_category("Аудио")
            .with_image("https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=300&fit=crop")
            .with_description("Премиальное качество звука"),
        Product::new(ProductId::new(3), "Смартфон Samsung Galaxy", rub(54_990))
            .with_discount(Percent::saturating(15))
            .with_category("Телефоны")
            .with_image("https://images.unsplash.com/photo-1610945415295-d9bbf067e59c?w=400&h=300&fit=crop")
            .with_description("Флагман с отличной камерой"),
        Product::new(ProductId::new(4), "Механическая клавиатура", rub(8_990))
            .with_category("Аксессуары")
            .with_image("https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=400&h=300&fit=crop")
            .with_description("Профессиональная клавиатура для работы"),
        Product::new(ProductId::new(5), "Монитор LG UltraWide", rub(34_990))
            .with_discount(Percent::saturating(5))
            .with_category("Электроника")
            .with_image("https://images.unsplash.com/photo-1527443224154-c4a3942d3acf?w=400&h=300&fit=crop")
            .with_description("Широкоформатный монитор 34\""),
        Product::new(ProductId::new(6), "Мышь Logitech MX Master", rub(6_990))
            .with_category("Аксессуары")
            .with_image("https://images.unsplash.com/photo-1527814050087-3793815479db?w=400&h=300&fit=crop")
            .with_description("Эргономичная беспроводная мышь"),
    ]
}

pub(crate) fn promo_codes() -> Vec<PromoCode> {
    vec![
        PromoCode::new("WELCOME10", Percent::saturating(10)),
        PromoCode::new("SUMMER20", Percent::saturating(20)),
        PromoCode::new("SAVE15", Percent::saturating(15)),
    ]
}
