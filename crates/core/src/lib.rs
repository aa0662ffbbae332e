//! Souq Core - Storefront domain library.
//!
//! This crate provides the types and pure logic behind the Souq storefront:
//! the catalog schema, shop filtering/sorting/pagination, the cart, the
//! checkout wizard, the deal countdown and locale direction handling.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no templates. The `souq-storefront` crate renders these into pages.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, emails and availability
//! - [`catalog`] - Products, categories, price ranges and the in-memory catalog
//! - [`shop`] - Shop query: filter, sort and paginate products
//! - [`cart`] - Cart lines, quantity guard and totals
//! - [`checkout`] - Checkout steps, shipping methods and order totals
//! - [`countdown`] - Deal of the day countdown
//! - [`locale`] - Supported locales, text direction and drawer mirroring

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod countdown;
pub mod locale;
pub mod shop;
pub mod types;

pub use types::*;
