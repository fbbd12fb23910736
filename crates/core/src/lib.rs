//! Jacaré Core - Shared types library.
//!
//! This crate provides common types used across the Jacaré Autopeças components:
//! - `storefront` - Cart state, page state and the UI event router
//! - `cli` - Command-line host that drives the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no terminal handling. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for prices and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
