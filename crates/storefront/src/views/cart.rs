//! Cart display data shared by the cart page, cart drawer and checkout summary.

use souq_core::cart::{Cart, ResolvedLine, free_shipping_progress, free_shipping_remaining};
use souq_core::catalog::Catalog;

use super::product::product_href;
use crate::i18n::Translator;

/// Cart line display data for templates.
#[derive(Clone, Debug)]
pub struct CartLineView {
    /// Position in the cart, posted back by update and remove forms.
    pub index: usize,
    pub href: String,
    pub name: String,
    pub image: String,
    /// "M / Rose Pink", empty when no variant was chosen.
    pub variant: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub unit_price: String,
    pub original_price: Option<String>,
    pub quantity: u32,
    /// The decrement control is disabled at the minimum quantity.
    pub at_minimum: bool,
    /// The increment control is disabled at the maximum quantity.
    pub at_maximum: bool,
    pub line_total: String,
}

impl From<&ResolvedLine<'_>> for CartLineView {
    fn from(resolved: &ResolvedLine<'_>) -> Self {
        let product = resolved.product;
        let line = resolved.line;
        let variant = [line.selected_size.as_deref(), line.selected_color.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" / ");

        Self {
            index: resolved.index,
            href: product_href(&product.slug),
            name: product.name.clone(),
            image: product.image.clone(),
            variant,
            size: line.selected_size.clone(),
            color: line.selected_color.clone(),
            unit_price: product.unit_price().display_compact(),
            original_price: product
                .has_discount()
                .then(|| product.list_price().display_compact()),
            quantity: line.quantity.get(),
            at_minimum: line.quantity.is_min(),
            at_maximum: line.quantity.is_max(),
            line_total: resolved.line_total().display(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone, Debug)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    /// "3 items"
    pub count_label: String,
    pub subtotal: String,
    pub note: String,
    /// Free-shipping progress, 0 to 100.
    pub shipping_progress: u32,
    /// Shipping notice ("Spend $12.00 more..." or the unlocked message).
    pub shipping_notice: String,
    pub free_shipping_unlocked: bool,
}

impl CartView {
    #[must_use]
    pub fn new(cart: &Cart, catalog: &Catalog, t: &Translator) -> Self {
        let lines: Vec<CartLineView> = cart
            .resolve(catalog)
            .iter()
            .map(CartLineView::from)
            .collect();
        let subtotal = cart.subtotal(catalog);
        let remaining = free_shipping_remaining(subtotal);
        let unlocked = remaining.is_zero();
        let shipping_notice = if unlocked {
            t.t("general.cart.shipping_unlocked")
        } else {
            t.t_with(
                "general.cart.shipping_notice",
                &[("amount", &remaining.display())],
            )
        };
        let item_count = cart.item_count();

        Self {
            lines,
            item_count,
            count_label: t.t_count("cart.items_count", item_count as usize),
            subtotal: subtotal.display(),
            note: cart.note.clone(),
            shipping_progress: free_shipping_progress(subtotal),
            shipping_notice,
            free_shipping_unlocked: unlocked,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use souq_core::locale::Locale;

    use super::*;
    use crate::i18n::Translations;

    const CATALOG: &str = include_str!("../../data/catalog.json");

    fn en() -> Translator {
        Translator::new(Arc::new(Translations::from_embedded().unwrap()), Locale::En)
    }

    #[test]
    fn test_sample_cart_view() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let view = CartView::new(&Cart::sample(), &catalog, &en());

        assert_eq!(view.lines.len(), 3);
        assert_eq!(view.item_count, 4);
        assert_eq!(view.count_label, "4 items");
        // 2 x $79 + $149 + $120
        assert_eq!(view.subtotal, "$427.00");
        assert!(view.free_shipping_unlocked);
        assert_eq!(view.shipping_progress, 100);

        let dress = &view.lines[0];
        assert_eq!(dress.variant, "M / Rose Pink");
        assert_eq!(dress.line_total, "$158.00");
        assert!(!dress.at_minimum);
        assert!(view.lines[1].at_minimum);
        assert!(!view.lines.iter().any(|line| line.at_maximum));
    }

    #[test]
    fn test_shipping_notice_below_threshold() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let mut cart = Cart::sample();
        cart.clear();
        cart.add(souq_core::cart::CartLine::new(
            souq_core::ProductId::new(6),
            souq_core::cart::Quantity::ONE,
            None,
            None,
        ))
        .unwrap();
        let view = CartView::new(&cart, &catalog, &en());

        assert_eq!(view.shipping_progress, 28);
        assert_eq!(view.shipping_notice, "Spend $72.00 more for free shipping!");
        assert_eq!(view.lines[0].variant, "");
        assert_eq!(view.count_label, "1 item");
    }
}
