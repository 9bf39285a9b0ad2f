//! Newtype IDs for type-safe identifiers.
//!
//! Catalog and order identifiers are plain integers in the store data; the
//! newtypes keep a product id from being passed where an order number is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate integer-backed newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $inner:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Create a new ID from its numeric value.
            pub const fn new(id: $inner) -> Self {
                Self(id)
            }

            /// Get the numeric value.
            pub const fn get(&self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(
    /// Stable catalog identifier of a product.
    ProductId,
    u32
);
define_id!(
    /// Per-session sequence number of a placed order.
    OrderNumber,
    u64
);

impl OrderNumber {
    /// The number following this one.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}
