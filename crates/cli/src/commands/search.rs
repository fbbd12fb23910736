//! Simulated search.

use jacare_storefront::config::StorefrontConfig;
use jacare_storefront::error::Result;
use jacare_storefront::events::UiEvent;

use super::Session;
use crate::terminal::TerminalDialog;

/// Type `term` into the search box and submit it.
///
/// # Errors
///
/// Returns an error if the session cannot be opened.
pub fn run(config: &StorefrontConfig, term: String) -> Result<()> {
    let mut session = Session::open(config, TerminalDialog::new())?;
    session.send(UiEvent::SearchInput { text: term })?;
    session.send(UiEvent::Search)?;
    session.finish();
    Ok(())
}
