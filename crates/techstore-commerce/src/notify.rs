//! User-visible notifications.
//!
//! The storefront reports outcomes (item added, promo accepted or rejected,
//! order placed) through the [`Notifier`] trait. Showing them as toasts is
//! up to the UI; [`NotificationQueue`] simply buffers them until drained.

use crate::catalog::Product;
use crate::money::Percent;
use serde::{Deserialize, Serialize};

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    /// Failure; rendered in the destructive style.
    Destructive,
}

/// A toast-style message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Destructive,
        }
    }

    pub fn added_to_cart(product: &Product) -> Self {
        Self::info("Товар добавлен в корзину", product.name.clone())
    }

    pub fn promo_applied(percent: Percent) -> Self {
        Self::info(
            "Промокод применен!",
            format!("Скидка {} активирована", percent),
        )
    }

    pub fn promo_rejected() -> Self {
        Self::destructive("Неверный промокод", "Проверьте правильность ввода")
    }

    pub fn order_placed() -> Self {
        Self::info(
            "Заказ оформлен!",
            "Спасибо за покупку. Мы свяжемся с вами в ближайшее время.",
        )
    }

    pub fn is_destructive(&self) -> bool {
        self.kind == NotificationKind::Destructive
    }
}

/// Receives notifications emitted by the storefront.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Buffers notifications until the UI drains them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    pending: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications not yet drained, oldest first.
    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    /// Take every pending notification, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        self.pending.push(notification);
    }
}
