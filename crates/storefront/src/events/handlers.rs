//! Storefront event handlers.
//!
//! Every handler has the [`Handler`](super::Handler) signature so it can be
//! registered on an [`EventRouter`](super::EventRouter); each one only
//! accepts its own event variant.

// Handlers take the event by value to fit the router's fn pointer type.
#![allow(clippy::needless_pass_by_value)]

use jacare_core::Price;
use tracing::instrument;

use super::UiEvent;
use crate::checkout;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::page::contact::SUCCESS_MESSAGE;
use crate::page::{HeaderStyle, Page};

pub const BRAND_MESSAGE: &str = "🐊 Obrigado por visitar a Jacaré Autopeças! 🔧";

fn unexpected(handler: &str, event: &UiEvent) -> AppError {
    AppError::Internal(format!("{handler} cannot handle {:?}", event.kind()))
}

/// Hydrate the cart from local storage.
#[instrument(skip_all)]
pub fn ready(page: &mut Page, _event: UiEvent) -> Result<()> {
    let totals = page.cart.load();
    tracing::info!(item_count = totals.item_count, "page ready");
    Ok(())
}

#[instrument(skip_all)]
pub fn toggle_menu(page: &mut Page, _event: UiEvent) -> Result<()> {
    page.menu = page.menu.toggled();
    tracing::debug!(menu = ?page.menu, "menu toggled");
    Ok(())
}

/// Scroll to a section and close the mobile menu if it is open.
#[instrument(skip(page))]
pub fn navigate(page: &mut Page, event: UiEvent) -> Result<()> {
    let UiEvent::Navigate { target } = event else {
        return Err(unexpected("navigate", &event));
    };

    page.section = Some(target);
    if page.menu.is_open() {
        page.menu = page.menu.toggled();
    }
    Ok(())
}

#[instrument(skip(page))]
pub fn scroll(page: &mut Page, event: UiEvent) -> Result<()> {
    let UiEvent::Scroll { y } = event else {
        return Err(unexpected("scroll", &event));
    };

    let style = HeaderStyle::for_scroll(y);
    if style != page.header {
        tracing::debug!(?style, "header style changed");
        page.header = style;
    }
    Ok(())
}

#[instrument(skip_all)]
pub fn search_input(page: &mut Page, event: UiEvent) -> Result<()> {
    let UiEvent::SearchInput { text } = event else {
        return Err(unexpected("search_input", &event));
    };

    page.search.set_input(text);
    Ok(())
}

/// Simulated search: announce the term and clear the box.
#[instrument(skip_all)]
pub fn search(page: &mut Page, _event: UiEvent) -> Result<()> {
    if let Some(message) = page.search.submit() {
        tracing::info!("search submitted");
        page.dialog.alert(&message);
    }
    Ok(())
}

/// Parse the card's price, add the product, and confirm with a toast.
///
/// An unparseable price fails before the cart is touched.
#[instrument(skip(page))]
pub fn add_to_cart(page: &mut Page, event: UiEvent) -> Result<()> {
    let UiEvent::AddToCart { name, price_text } = event else {
        return Err(unexpected("add_to_cart", &event));
    };

    let price = Price::parse_brl(&price_text)?;
    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("name", name.as_str()), ("price", price_text.as_str())]),
    );

    page.cart.add(&name, price.amount);
    page.notify(format!("{name} adicionado ao carrinho!"));
    Ok(())
}

/// Show the itemized cart and run the simulated checkout.
#[instrument(skip_all)]
pub fn open_cart(page: &mut Page, _event: UiEvent) -> Result<()> {
    let outcome = checkout::run(&mut page.cart, page.dialog.as_mut());
    tracing::debug!(?outcome, "cart dialog closed");
    Ok(())
}

#[instrument(skip_all)]
pub fn submit_contact(page: &mut Page, event: UiEvent) -> Result<()> {
    let UiEvent::SubmitContact(form) = event else {
        return Err(unexpected("submit_contact", &event));
    };

    let submission = form.validate()?;
    tracing::info!(email = %submission.email, "contact form submitted");
    page.notify(SUCCESS_MESSAGE);
    Ok(())
}

#[instrument(skip_all)]
pub fn brand_double_click(page: &mut Page, _event: UiEvent) -> Result<()> {
    page.notify(BRAND_MESSAGE);
    Ok(())
}

/// Reveal elements that scrolled into view.
#[instrument(skip_all)]
pub fn intersect(page: &mut Page, event: UiEvent) -> Result<()> {
    let UiEvent::Intersect { entries } = event else {
        return Err(unexpected("intersect", &event));
    };

    let revealed = page.reveal.on_intersection(&entries);
    if !revealed.is_empty() {
        tracing::debug!(?revealed, "elements revealed");
    }
    Ok(())
}

/// Drop toasts whose time is up.
#[instrument(skip_all)]
pub fn tick(page: &mut Page, _event: UiEvent) -> Result<()> {
    let now = page.now();
    let removed = page.notifications.expire(now);
    if removed > 0 {
        tracing::debug!(removed, "notifications expired");
    }
    Ok(())
}
