use jacare_core::Price;
use rust_decimal::Decimal;
use tracing::instrument;

use super::persist::{PersistError, decode_snapshot, encode_snapshot};
use super::{CART_STORAGE_KEY, CartDisplay, CartTotals, LineItem};
use crate::storage::KeyValueStore;

/// Whether the cart holds anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartStatus {
    Empty,
    NonEmpty,
}

/// Read-only view of the cart for display and checkout confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub item_count: u32,
    pub total: Decimal,
}

impl CartSnapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn total_price(&self) -> Price {
        Price::brl(self.total)
    }
}

/// Owner of the shopping cart for a page session.
///
/// Every mutation recomputes totals, writes the snapshot to the key-value
/// store and then notifies subscribed displays. Storage failures are logged
/// and otherwise ignored: the in-memory cart remains authoritative for the
/// session.
pub struct CartStore {
    items: Vec<LineItem>,
    storage: Box<dyn KeyValueStore>,
    key: String,
    displays: Vec<Box<dyn CartDisplay>>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("key", &self.key)
            .field("displays", &self.displays.len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Create an empty cart persisted under [`CART_STORAGE_KEY`].
    pub fn new(storage: impl KeyValueStore + 'static) -> Self {
        Self::with_key(storage, CART_STORAGE_KEY)
    }

    /// Create an empty cart persisted under a custom key.
    pub fn with_key(storage: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            storage: Box::new(storage),
            key: key.into(),
            displays: Vec::new(),
        }
    }

    /// Register a display to be refreshed after every change.
    pub fn subscribe(&mut self, display: impl CartDisplay + 'static) {
        self.displays.push(Box::new(display));
    }

    /// Add one unit of the named product.
    ///
    /// An existing line with the same name has its quantity incremented and
    /// keeps its original price; otherwise a new line is appended.
    ///
    /// Never panics. Line quantities stop at `u32::MAX` and totals saturate
    /// at [`Decimal::MAX`]; neither is reachable with prices accepted by
    /// [`Price::parse_brl`].
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn add(&mut self, name: &str, unit_price: Decimal) -> CartTotals {
        match self.items.iter_mut().find(|line| line.name() == name) {
            Some(line) => {
                line.increment();
                tracing::debug!(quantity = line.quantity(), "merged into existing line");
            }
            None => {
                self.items.push(LineItem::new(name, unit_price));
                tracing::debug!("appended new line");
            }
        }

        let totals = self.totals();
        tracing::info!(
            item_count = totals.item_count,
            total = %totals.total,
            "cart.add"
        );
        self.persist();
        self.notify(totals);
        totals
    }

    /// Empty the cart.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn clear(&mut self) -> CartTotals {
        self.items.clear();
        let totals = self.totals();
        tracing::info!("cart.clear");
        self.persist();
        self.notify(totals);
        totals
    }

    /// Replace the cart contents from a serialized snapshot.
    ///
    /// Absent or malformed input leaves the cart empty. Displays are
    /// notified; nothing is written back to storage.
    #[instrument(skip(self, serialized), fields(key = %self.key))]
    pub fn hydrate(&mut self, serialized: Option<&str>) -> CartTotals {
        self.items = match serialized.map(decode_snapshot) {
            Some(Ok(items)) => items,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "discarding persisted cart");
                Vec::new()
            }
            None => Vec::new(),
        };

        let totals = self.totals();
        tracing::info!(
            lines = self.items.len(),
            item_count = totals.item_count,
            "cart.hydrate"
        );
        self.notify(totals);
        totals
    }

    /// Read the persisted snapshot from storage and hydrate from it.
    ///
    /// An unreadable store is treated like an absent snapshot.
    pub fn load(&mut self) -> CartTotals {
        let serialized = match self.storage.get(&self.key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "failed to read persisted cart");
                None
            }
        };
        self.hydrate(serialized.as_deref())
    }

    /// Current lines and derived totals.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        let totals = self.totals();
        CartSnapshot {
            items: self.items.clone(),
            item_count: totals.item_count,
            total: totals.total,
        }
    }

    /// Totals recomputed from the current lines.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_count: self
                .items
                .iter()
                .fold(0, |acc: u32, line| acc.saturating_add(line.quantity())),
            total: self
                .items
                .iter()
                .map(LineItem::subtotal)
                .fold(Decimal::ZERO, |acc, subtotal| {
                    acc.checked_add(subtotal).unwrap_or(Decimal::MAX)
                }),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn status(&self) -> CartStatus {
        if self.items.is_empty() {
            CartStatus::Empty
        } else {
            CartStatus::NonEmpty
        }
    }

    /// The cart in its persisted form.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Unrepresentable`] if a price cannot be stored.
    pub fn serialize(&self) -> Result<String, PersistError> {
        encode_snapshot(&self.items)
    }

    fn persist(&mut self) {
        let result = self
            .serialize()
            .and_then(|value| {
                self.storage
                    .set(&self.key, &value)
                    .map_err(PersistError::from)
            });

        if let Err(e) = result {
            tracing::warn!(error = %e, key = %self.key, "cart not persisted");
        }
    }

    fn notify(&mut self, totals: CartTotals) {
        for display in &mut self.displays {
            display.update(totals);
        }
    }
}
