//! Jacaré Autopeças storefront library.
//!
//! Everything a storefront visit does outside of rendering: the shopping
//! cart and its local persistence, the simulated checkout, and the page
//! state driven by UI events. Hosts (the `jacare` CLI, tests) supply the
//! key-value store and the dialogs.
//!
//! # Example
//!
//! ```
//! use jacare_storefront::cart::{CartBadge, CartStore};
//! use jacare_storefront::dialog::ScriptedDialog;
//! use jacare_storefront::events::{EventRouter, UiEvent};
//! use jacare_storefront::page::Page;
//! use jacare_storefront::storage::MemoryStore;
//!
//! let badge = CartBadge::new();
//! let mut cart = CartStore::new(MemoryStore::new());
//! cart.subscribe(badge.clone());
//!
//! let mut page = Page::new(cart, ScriptedDialog::new());
//! let router = EventRouter::storefront();
//! router.dispatch(&mut page, UiEvent::Ready).unwrap();
//! router
//!     .dispatch(
//!         &mut page,
//!         UiEvent::AddToCart {
//!             name: "Filtro de Óleo".to_owned(),
//!             price_text: "R$ 29,90".to_owned(),
//!         },
//!     )
//!     .unwrap();
//!
//! assert_eq!(badge.count(), 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod config;
pub mod dialog;
pub mod error;
pub mod events;
pub mod page;
pub mod storage;
