//! Core types for the storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod price;

pub use email::{Email, EmailError};
pub use price::{CurrencyCode, Price, PriceError};
