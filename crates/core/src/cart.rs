//! Shopping cart held in the visitor's session.
//!
//! Lines reference products by id; prices are always read from the catalog
//! so a cart never carries stale amounts.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::types::{Price, ProductId};

/// Order subtotal at which shipping becomes free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Errors from cart mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("cart line {0} does not exist")]
    LineNotFound(usize),
    #[error("quantity must be between 1 and {}", Quantity::MAX.get())]
    InvalidQuantity,
}

/// A line quantity, from 1 to [`Quantity::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Self = Self(1);
    pub const MAX: Self = Self(99);

    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] for zero or anything above
    /// [`Quantity::MAX`].
    pub const fn new(value: u32) -> Result<Self, CartError> {
        if value == 0 || value > Self::MAX.0 {
            Err(CartError::InvalidQuantity)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// One more, stopping at [`Quantity::MAX`].
    #[must_use]
    pub const fn increment(self) -> Self {
        if self.0 < Self::MAX.0 { Self(self.0 + 1) } else { self }
    }

    /// One less, stopping at 1.
    #[must_use]
    pub const fn decrement(self) -> Self {
        if self.0 > 1 { Self(self.0 - 1) } else { self }
    }

    /// Whether the decrement control should be disabled.
    #[must_use]
    pub const fn is_min(self) -> bool {
        self.0 == 1
    }

    /// Whether the increment control should be disabled.
    #[must_use]
    pub const fn is_max(self) -> bool {
        self.0 == Self::MAX.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for Quantity {
    type Error = CartError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One cart line: a product with its chosen variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: Quantity,
    pub selected_size: Option<String>,
    pub selected_color: Option<String>,
}

impl CartLine {
    #[must_use]
    pub fn new(
        product_id: ProductId,
        quantity: Quantity,
        selected_size: Option<String>,
        selected_color: Option<String>,
    ) -> Self {
        Self {
            product_id,
            quantity,
            selected_size,
            selected_color,
        }
    }

    fn same_variant(&self, other: &Self) -> bool {
        self.product_id == other.product_id
            && self.selected_size == other.selected_size
            && self.selected_color == other.selected_color
    }
}

/// A cart line joined with its catalog product.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedLine<'a> {
    /// Position in the cart, used by update/remove forms.
    pub index: usize,
    pub line: &'a CartLine,
    pub product: &'a Product,
}

impl ResolvedLine<'_> {
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.unit_price().times(self.line.quantity.get())
    }
}

/// The session cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    /// Free-text order note from the cart page.
    #[serde(default)]
    pub note: String,
}

impl Cart {
    /// The sample cart new visitors start with.
    #[must_use]
    pub fn sample() -> Self {
        let line = |id: i32, qty: u32, size: &str, color: &str| CartLine {
            product_id: ProductId::new(id),
            quantity: Quantity(qty),
            selected_size: Some(size.to_owned()),
            selected_color: Some(color.to_owned()),
        };
        Self {
            lines: vec![
                line(1, 2, "M", "Rose Pink"),
                line(3, 1, "L", "Black"),
                line(7, 1, "10", "Red/Black"),
            ],
            note: String::new(),
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a line, merging into an existing line with the same variant.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when the merged quantity would
    /// pass [`Quantity::MAX`]. The cart is left unchanged.
    pub fn add(&mut self, line: CartLine) -> Result<(), CartError> {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.same_variant(&line)) {
            existing.quantity =
                Quantity::new(existing.quantity.get().saturating_add(line.quantity.get()))?;
        } else {
            self.lines.push(line);
        }
        Ok(())
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut CartLine, CartError> {
        self.lines
            .get_mut(index)
            .ok_or(CartError::LineNotFound(index))
    }

    /// Set a line's quantity. Values outside `1..=99` are rejected and the
    /// cart is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown line or an out-of-range quantity.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<(), CartError> {
        let quantity = Quantity::new(quantity)?;
        self.line_mut(index)?.quantity = quantity;
        Ok(())
    }

    /// Increment a line, stopping at [`Quantity::MAX`].
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown line.
    pub fn increment(&mut self, index: usize) -> Result<Quantity, CartError> {
        let line = self.line_mut(index)?;
        line.quantity = line.quantity.increment();
        Ok(line.quantity)
    }

    /// Decrement a line, stopping at 1.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown line.
    pub fn decrement(&mut self, index: usize) -> Result<Quantity, CartError> {
        let line = self.line_mut(index)?;
        line.quantity = line.quantity.decrement();
        Ok(line.quantity)
    }

    /// # Errors
    ///
    /// Returns an error for an unknown line.
    pub fn remove(&mut self, index: usize) -> Result<CartLine, CartError> {
        if index < self.lines.len() {
            Ok(self.lines.remove(index))
        } else {
            Err(CartError::LineNotFound(index))
        }
    }

    /// Remove every line and the note.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.note.clear();
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .map(|l| l.quantity.get())
            .fold(0, u32::saturating_add)
    }

    /// Lines joined with their products. Lines whose product is no longer in
    /// the catalog are skipped.
    #[must_use]
    pub fn resolve<'a>(&'a self, catalog: &'a Catalog) -> Vec<ResolvedLine<'a>> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                catalog
                    .product_by_id(line.product_id)
                    .map(|product| ResolvedLine {
                        index,
                        line,
                        product,
                    })
            })
            .collect()
    }

    /// Sum of price × quantity over all lines.
    #[must_use]
    pub fn subtotal(&self, catalog: &Catalog) -> Price {
        self.resolve(catalog)
            .iter()
            .map(ResolvedLine::line_total)
            .sum()
    }
}

/// Progress towards free shipping in whole percent, capped at 100.
#[must_use]
pub fn free_shipping_progress(subtotal: Price) -> u32 {
    let percent = (subtotal.amount * Decimal::ONE_HUNDRED / FREE_SHIPPING_THRESHOLD)
        .floor()
        .min(Decimal::ONE_HUNDRED)
        .max(Decimal::ZERO);
    percent.to_u32().unwrap_or(100)
}

/// Amount still needed for free shipping (zero once reached).
#[must_use]
pub fn free_shipping_remaining(subtotal: Price) -> Price {
    Price::usd((FREE_SHIPPING_THRESHOLD - subtotal.amount).max(Decimal::ZERO))
}
