//! Simulated checkout.
//!
//! No payment happens. The shopper sees the itemized cart, confirms, and the
//! cart is emptied as if they had been handed off to a payment page.

use rust_decimal::Decimal;
use tracing::instrument;

use crate::cart::{CartSnapshot, CartStore};
use crate::dialog::Dialog;

pub const EMPTY_CART_MESSAGE: &str = "Seu carrinho está vazio!";
pub const CONFIRM_QUESTION: &str = "Deseja finalizar a compra?";
pub const REDIRECT_MESSAGE: &str =
    "Redirecionando para o checkout...\n\nEm um site real, isso levaria para a página de pagamento.";

/// How a checkout attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to check out; the shopper was told so.
    EmptyCart,
    /// The shopper declined; the cart is untouched.
    Cancelled,
    /// The shopper confirmed; the cart was cleared.
    Completed { item_count: u32, total: Decimal },
}

/// Itemized confirmation text for a snapshot.
#[must_use]
pub fn summary(snapshot: &CartSnapshot) -> String {
    let mut text = String::from("CARRINHO DE COMPRAS\n\n");
    for line in &snapshot.items {
        text.push_str(&format!(
            "{} - Qtd: {} - {}\n",
            line.name(),
            line.quantity(),
            line.subtotal_price()
        ));
    }
    text.push_str(&format!("\nTOTAL: {}", snapshot.total_price()));
    text
}

/// Run the checkout flow against `cart`.
#[instrument(skip_all)]
pub fn run(cart: &mut CartStore, dialog: &mut dyn Dialog) -> CheckoutOutcome {
    let snapshot = cart.snapshot();
    if snapshot.is_empty() {
        dialog.alert(EMPTY_CART_MESSAGE);
        return CheckoutOutcome::EmptyCart;
    }

    let prompt = format!("{}\n\n{CONFIRM_QUESTION}", summary(&snapshot));
    if !dialog.confirm(&prompt) {
        tracing::info!(item_count = snapshot.item_count, "checkout cancelled");
        return CheckoutOutcome::Cancelled;
    }

    dialog.alert(REDIRECT_MESSAGE);
    cart.clear();
    tracing::info!(
        item_count = snapshot.item_count,
        total = %snapshot.total,
        "checkout completed"
    );
    CheckoutOutcome::Completed {
        item_count: snapshot.item_count,
        total: snapshot.total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStatus;
    use crate::dialog::{DialogMessage, ScriptedDialog};
    use crate::storage::MemoryStore;

    fn stocked_cart() -> CartStore {
        let mut cart = CartStore::new(MemoryStore::new());
        cart.add("Filtro de Óleo", Decimal::new(2990, 2));
        cart.add("Amortecedor Dianteiro", Decimal::new(128_900, 2));
        cart.add("Filtro de Óleo", Decimal::new(2990, 2));
        cart
    }

    #[test]
    fn test_summary_lists_lines_and_total() {
        let text = summary(&stocked_cart().snapshot());
        assert_eq!(
            text,
            "CARRINHO DE COMPRAS\n\n\
             Filtro de Óleo - Qtd: 2 - R$ 59,80\n\
             Amortecedor Dianteiro - Qtd: 1 - R$ 1.289,00\n\
             \nTOTAL: R$ 1.348,80"
        );
    }

    #[test]
    fn test_empty_cart_alerts() {
        let mut cart = CartStore::new(MemoryStore::new());
        let mut dialog = ScriptedDialog::new().answering([true]);

        assert_eq!(run(&mut cart, &mut dialog), CheckoutOutcome::EmptyCart);
        assert_eq!(
            dialog.shown(),
            vec![DialogMessage::Alert(EMPTY_CART_MESSAGE.to_owned())]
        );
    }

    #[test]
    fn test_cancel_leaves_cart() {
        let mut cart = stocked_cart();
        let before = cart.snapshot();
        let mut dialog = ScriptedDialog::new().answering([false]);

        assert_eq!(run(&mut cart, &mut dialog), CheckoutOutcome::Cancelled);
        assert_eq!(cart.snapshot(), before);
        assert!(dialog.alerts().is_empty());
    }

    #[test]
    fn test_confirm_clears_cart() {
        let mut cart = stocked_cart();
        let mut dialog = ScriptedDialog::new().answering([true]);

        let outcome = run(&mut cart, &mut dialog);
        assert_eq!(
            outcome,
            CheckoutOutcome::Completed {
                item_count: 3,
                total: Decimal::new(134_880, 2),
            }
        );
        assert_eq!(cart.status(), CartStatus::Empty);
        assert_eq!(dialog.alerts(), vec![REDIRECT_MESSAGE.to_owned()]);

        let shown = dialog.shown();
        let Some(DialogMessage::Confirm(prompt)) = shown.first() else {
            panic!("expected a confirmation first, got {shown:?}");
        };
        assert!(prompt.ends_with("TOTAL: R$ 1.348,80\n\nDeseja finalizar a compra?"));
    }
}
