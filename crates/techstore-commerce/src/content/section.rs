//! Storefront sections.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The closed set of pages the storefront can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Hero banner plus the product catalog.
    #[default]
    Home,
    About,
    Delivery,
    Contacts,
    Blog,
}

impl Section {
    /// Every section, in navigation order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Delivery,
        Section::Contacts,
        Section::Blog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Delivery => "delivery",
            Section::Contacts => "contacts",
            Section::Blog => "blog",
        }
    }

    /// Label of the navigation button.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::About => "О нас",
            Section::Delivery => "Доставка",
            Section::Contacts => "Контакты",
            Section::Blog => "Блог",
        }
    }

    /// Resolve a section name; anything unrecognized is the home page.
    pub fn parse(name: &str) -> Self {
        match name {
            "about" => Section::About,
            "delivery" => Section::Delivery,
            "contacts" => Section::Contacts,
            "blog" => Section::Blog,
            _ => Section::Home,
        }
    }
}

impl FromStr for Section {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Section::parse(s))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
