//! Client-side shopping cart.
//!
//! # Flow
//!
//! ```text
//! add-to-cart event -> CartStore::add -> merge or append -> persist -> notify displays
//! page ready        -> CartStore::load -> hydrate from storage -> notify displays
//! checkout confirm  -> CartStore::clear -> persist -> notify displays
//! ```
//!
//! Line items are keyed by product name. Totals are never stored; every read
//! recomputes them from the items.

mod display;
mod line_item;
mod persist;
mod store;

pub use display::{CartBadge, CartDisplay, CartTotals};
pub use line_item::LineItem;
pub use persist::{PersistError, decode_snapshot, encode_snapshot};
pub use store::{CartSnapshot, CartStatus, CartStore};

/// Storage key under which the cart snapshot is persisted.
pub const CART_STORAGE_KEY: &str = "jacare_autopecas_carrinho";
