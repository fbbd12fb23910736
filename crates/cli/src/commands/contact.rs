//! Simulated contact form.

use jacare_storefront::config::StorefrontConfig;
use jacare_storefront::error::Result;
use jacare_storefront::events::UiEvent;
use jacare_storefront::page::ContactForm;

use super::Session;
use crate::terminal::TerminalDialog;

/// Submit the contact form.
///
/// # Errors
///
/// Returns an error if a field is blank or the email is invalid.
pub fn submit(config: &StorefrontConfig, form: ContactForm) -> Result<()> {
    let mut session = Session::open(config, TerminalDialog::new())?;
    session.send(UiEvent::SubmitContact(form))?;
    session.finish();
    Ok(())
}
