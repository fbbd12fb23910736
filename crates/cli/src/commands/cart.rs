//! Cart commands.

use jacare_storefront::checkout::{self, EMPTY_CART_MESSAGE};
use jacare_storefront::config::StorefrontConfig;
use jacare_storefront::error::Result;
use jacare_storefront::events::UiEvent;

use super::Session;
use crate::terminal::TerminalDialog;

/// Add one unit of `name` at the card price `price`.
///
/// # Errors
///
/// Returns an error if `price` is not a valid BRL amount.
pub fn add(config: &StorefrontConfig, name: String, price: String) -> Result<()> {
    let mut session = Session::open(config, TerminalDialog::new())?;
    session.send(UiEvent::AddToCart {
        name,
        price_text: price,
    })?;
    session.finish();
    Ok(())
}

/// Print the itemized cart.
///
/// # Errors
///
/// Returns an error if the session cannot be opened.
#[allow(clippy::print_stdout)]
pub fn show(config: &StorefrontConfig) -> Result<()> {
    let session = Session::open(config, TerminalDialog::new())?;
    let snapshot = session.page().cart().snapshot();
    if snapshot.is_empty() {
        println!("{EMPTY_CART_MESSAGE}");
    } else {
        println!("{}", checkout::summary(&snapshot));
    }
    session.finish();
    Ok(())
}

/// Run the checkout flow, confirming on the terminal unless `yes`.
///
/// # Errors
///
/// Returns an error if the session cannot be opened.
pub fn checkout(config: &StorefrontConfig, yes: bool) -> Result<()> {
    let dialog = if yes {
        TerminalDialog::assume_yes()
    } else {
        TerminalDialog::new()
    };
    let mut session = Session::open(config, dialog)?;
    session.send(UiEvent::OpenCart)?;
    session.finish();
    Ok(())
}
