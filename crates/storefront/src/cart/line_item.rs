use jacare_core::Price;
use rust_decimal::Decimal;

/// One distinct product in the cart and how many of it were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    name: String,
    unit_price: Decimal,
    quantity: u32,
}

impl LineItem {
    /// A new line with quantity 1.
    #[must_use]
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// Rebuild a line from persisted parts. Callers guarantee `quantity >= 1`.
    pub(crate) fn restore(name: String, unit_price: Decimal, quantity: u32) -> Self {
        debug_assert!(quantity >= 1);
        Self {
            name,
            unit_price,
            quantity,
        }
    }

    /// Product name; also the merge key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price * quantity`, saturating at [`Decimal::MAX`].
    ///
    /// Prices from [`Price::parse_brl`] are capped at [`Price::MAX_AMOUNT`],
    /// so with a `u32` quantity the product never comes close to saturating.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.unit_price
            .checked_mul(Decimal::from(self.quantity))
            .unwrap_or(Decimal::MAX)
    }

    /// Subtotal as a displayable BRL price.
    #[must_use]
    pub fn subtotal_price(&self) -> Price {
        Price::brl(self.subtotal())
    }

    /// Add one unit. The quantity stops at `u32::MAX`; further adds are
    /// not counted.
    pub(crate) const fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub(crate) const fn absorb(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }
}
