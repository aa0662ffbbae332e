//! Core types for Souq.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod availability;
pub mod email;
pub mod id;
pub mod price;

pub use availability::Availability;
pub use email::{Email, EmailError};
pub use id::ProductId;
pub use price::{CurrencyCode, Price};
