//! Product availability.

use serde::{Deserialize, Serialize};

/// Stock availability shown on product pages and in the shop sidebar.
///
/// A plain label: there are no transition rules between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    #[default]
    InStock,
    OutOfStock,
    LowStock,
}

impl Availability {
    /// The wire value (e.g., `"low-stock"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::OutOfStock => "out-of-stock",
            Self::LowStock => "low-stock",
        }
    }

    /// Translation key for the availability label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::InStock => "shop.in_stock",
            Self::OutOfStock => "shop.out_of_stock",
            Self::LowStock => "shop.low_stock",
        }
    }

    /// Whether the product can be added to the cart.
    #[must_use]
    pub const fn is_purchasable(self) -> bool {
        !matches!(self, Self::OutOfStock)
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
