use std::cell::Cell;
use std::rc::Rc;

use jacare_core::Price;
use rust_decimal::Decimal;

/// Derived cart figures pushed to displays after every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Sum of line quantities.
    pub item_count: u32,
    /// Sum of line subtotals.
    pub total: Decimal,
}

impl CartTotals {
    #[must_use]
    pub const fn total_price(&self) -> Price {
        Price::brl(self.total)
    }
}

/// Something that renders cart totals, such as the header badge.
///
/// Closures taking [`CartTotals`] are displays too:
///
/// ```
/// use jacare_storefront::cart::{CartStore, CartTotals};
/// use jacare_storefront::storage::MemoryStore;
///
/// let mut cart = CartStore::new(MemoryStore::new());
/// cart.subscribe(|totals: CartTotals| assert!(totals.item_count <= 1));
/// cart.add("Filtro de Óleo", rust_decimal::Decimal::new(2990, 2));
/// ```
pub trait CartDisplay {
    fn update(&mut self, totals: CartTotals);
}

impl<F: FnMut(CartTotals)> CartDisplay for F {
    fn update(&mut self, totals: CartTotals) {
        self(totals);
    }
}

/// Header cart counter.
///
/// Clones share state, so the host keeps one handle for rendering while the
/// cart store owns another.
#[derive(Debug, Clone, Default)]
pub struct CartBadge {
    count: Rc<Cell<u32>>,
    renders: Rc<Cell<u32>>,
}

impl CartBadge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number currently shown on the badge.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count.get()
    }

    /// Badge text.
    #[must_use]
    pub fn text(&self) -> String {
        self.count.get().to_string()
    }

    /// How many times the badge has been refreshed.
    #[must_use]
    pub fn renders(&self) -> u32 {
        self.renders.get()
    }
}

impl CartDisplay for CartBadge {
    fn update(&mut self, totals: CartTotals) {
        self.count.set(totals.item_count);
        self.renders.set(self.renders.get().saturating_add(1));
    }
}
