//! Persisted cart layout.
//!
//! The stored value is a JSON array, one object per line in insertion order:
//!
//! ```json
//! [{ "name": "Filtro de Óleo", "price": 29.9, "quantity": 2 }]
//! ```
//!
//! There is no version field. Anything that does not decode to this shape,
//! or decodes to lines that break cart invariants (negative, non-finite or
//! above [`Price::MAX_AMOUNT`] price, zero quantity), is reported as
//! [`PersistError::MalformedPersistedState`] and the caller starts from an
//! empty cart.

use jacare_core::Price;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::LineItem;
use crate::storage::StorageError;

/// Errors that can occur while persisting or restoring the cart.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The stored value does not have the expected shape.
    #[error("malformed persisted cart: {reason}")]
    MalformedPersistedState { reason: String },

    /// A line cannot be represented in the stored layout.
    #[error("cannot persist line {name:?}: price out of range")]
    Unrepresentable { name: String },

    /// The key-value store rejected the write.
    #[error("failed to persist cart: {0}")]
    PersistenceWriteFailure(#[from] StorageError),
}

impl PersistError {
    fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPersistedState {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredLine {
    name: String,
    price: f64,
    quantity: u32,
}

impl TryFrom<&LineItem> for StoredLine {
    type Error = PersistError;

    fn try_from(line: &LineItem) -> Result<Self, Self::Error> {
        let price = line
            .unit_price()
            .to_f64()
            .filter(|p| p.is_finite())
            .ok_or_else(|| PersistError::Unrepresentable {
                name: line.name().to_owned(),
            })?;

        Ok(Self {
            name: line.name().to_owned(),
            price,
            quantity: line.quantity(),
        })
    }
}

impl TryFrom<StoredLine> for LineItem {
    type Error = PersistError;

    fn try_from(stored: StoredLine) -> Result<Self, Self::Error> {
        if stored.quantity == 0 {
            return Err(PersistError::malformed(format!(
                "line {:?} has zero quantity",
                stored.name
            )));
        }
        if !stored.price.is_finite() || stored.price < 0.0 {
            return Err(PersistError::malformed(format!(
                "line {:?} has invalid price {}",
                stored.name, stored.price
            )));
        }

        // Stored prices are binary floats; snap back to centavos.
        let unit_price = Decimal::from_f64(stored.price)
            .map(|p| p.round_dp(2).normalize())
            .filter(|p| *p <= Price::MAX_AMOUNT)
            .ok_or_else(|| {
                PersistError::malformed(format!("line {:?} price out of range", stored.name))
            })?;

        Ok(Self::restore(stored.name, unit_price, stored.quantity))
    }
}

/// Serialize cart lines into the stored layout.
///
/// # Errors
///
/// Returns [`PersistError::Unrepresentable`] if a price cannot be expressed
/// as a JSON number.
pub fn encode_snapshot(items: &[LineItem]) -> Result<String, PersistError> {
    let stored = items
        .iter()
        .map(StoredLine::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    serde_json::to_string(&stored).map_err(|e| PersistError::malformed(e.to_string()))
}

/// Decode the stored layout into cart lines.
///
/// Lines sharing a name are folded into the first occurrence so the
/// one-line-per-name invariant holds even for hand-edited values.
///
/// # Errors
///
/// Returns [`PersistError::MalformedPersistedState`] if the value is not a
/// JSON array of line objects or any line breaks cart invariants.
pub fn decode_snapshot(serialized: &str) -> Result<Vec<LineItem>, PersistError> {
    let stored: Vec<StoredLine> =
        serde_json::from_str(serialized).map_err(|e| PersistError::malformed(e.to_string()))?;

    let mut items: Vec<LineItem> = Vec::with_capacity(stored.len());
    for line in stored {
        let line = LineItem::try_from(line)?;
        match items.iter_mut().find(|existing| existing.name() == line.name()) {
            Some(existing) => existing.absorb(line.quantity()),
            None => items.push(line),
        }
    }
    Ok(items)
}
