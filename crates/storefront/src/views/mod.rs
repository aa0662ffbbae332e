//! View models for templates.
//!
//! Templates receive plain display data: strings already formatted and
//! translated, links already built. Domain logic stays in `souq-core`.

pub mod cart;
pub mod drawer;
pub mod layout;
pub mod product;
pub mod query;
pub mod shop;

pub use cart::{CartLineView, CartView};
pub use drawer::{DrawerKind, DrawerView};
pub use layout::Page;
pub use product::ProductCardView;
pub use query::QueryParams;
pub use shop::{PagerView, ShopSidebarView, ShopState, ViewMode};
