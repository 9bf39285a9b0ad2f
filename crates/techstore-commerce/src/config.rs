//! Store configuration.
//!
//! The default configuration is compiled in from `store.toml`; embedders can
//! pass their own TOML text instead. Missing sections and fields fall back to
//! the built-in values.

use serde::{Deserialize, Serialize};
use techstore_observability::LogSettings;

use crate::error::CommerceError;
use crate::money::{Currency, MoneyFormat};

const BUILTIN_CONFIG: &str = include_str!("../store.toml");

/// Complete store configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store identity and contact details.
    #[serde(default)]
    pub store: StoreInfo,

    /// Money display settings.
    #[serde(default)]
    pub money: MoneyFormat,

    /// Logger settings.
    #[serde(default)]
    pub logging: LogSettings,
}

impl StoreConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(content)?)
    }

    /// The compiled-in configuration.
    pub fn builtin() -> Result<Self, CommerceError> {
        Self::from_toml_str(BUILTIN_CONFIG)
    }
}

/// Store identity shown in the header, contacts page and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_phone")]
    pub phone: String,

    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_address")]
    pub address: String,

    /// Year the company was founded.
    #[serde(default = "default_since")]
    pub since: u16,

    /// Year printed in the footer copyright line.
    #[serde(default = "default_copyright_year")]
    pub copyright_year: u16,

    #[serde(default)]
    pub currency: Currency,
}

fn default_name() -> String {
    "TechStore".to_string()
}

fn default_phone() -> String {
    "+7 (495) 123-45-67".to_string()
}

fn default_email() -> String {
    "info@store.ru".to_string()
}

fn default_address() -> String {
    "Москва, ул. Примерная, д. 1".to_string()
}

fn default_since() -> u16 {
    2020
}

fn default_copyright_year() -> u16 {
    2024
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: default_name(),
            phone: default_phone(),
            email: default_email(),
            address: default_address(),
            since: default_since(),
            copyright_year: default_copyright_year(),
            currency: Currency::default(),
        }
    }
}
