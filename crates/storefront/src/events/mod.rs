//! UI event routing for the storefront page.
//!
//! # Event Table
//!
//! ```text
//! Ready             - Page loaded: hydrate cart from local storage
//! ToggleMenu        - Hamburger clicked: open/close mobile menu
//! Navigate          - Nav link clicked: scroll to section, close menu
//! Scroll            - Window scrolled: swap header background
//! SearchInput       - Search box edited
//! Search            - Search button or Enter: simulated search
//! AddToCart         - "Adicionar" clicked on a product card
//! OpenCart          - Cart icon clicked: itemized checkout dialog
//! SubmitContact     - Contact form submitted
//! BrandDoubleClick  - Logo double-clicked
//! Intersect         - Visibility reports for reveal-on-scroll
//! Tick              - Timer: expire toasts
//! ```
//!
//! Dispatch is synchronous: one handler runs to completion against
//! `&mut Page` before the next event is looked at.

pub mod handlers;

use std::collections::HashMap;

use crate::error::Result;
use crate::page::{ContactForm, IntersectionEntry, Page};

/// A shopper or host event.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Ready,
    ToggleMenu,
    Navigate { target: String },
    Scroll { y: f64 },
    SearchInput { text: String },
    Search,
    AddToCart { name: String, price_text: String },
    OpenCart,
    SubmitContact(ContactForm),
    BrandDoubleClick,
    Intersect { entries: Vec<IntersectionEntry> },
    Tick,
}

/// Event discriminant used as the routing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Ready,
    ToggleMenu,
    Navigate,
    Scroll,
    SearchInput,
    Search,
    AddToCart,
    OpenCart,
    SubmitContact,
    BrandDoubleClick,
    Intersect,
    Tick,
}

impl UiEvent {
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Ready => EventKind::Ready,
            Self::ToggleMenu => EventKind::ToggleMenu,
            Self::Navigate { .. } => EventKind::Navigate,
            Self::Scroll { .. } => EventKind::Scroll,
            Self::SearchInput { .. } => EventKind::SearchInput,
            Self::Search => EventKind::Search,
            Self::AddToCart { .. } => EventKind::AddToCart,
            Self::OpenCart => EventKind::OpenCart,
            Self::SubmitContact(_) => EventKind::SubmitContact,
            Self::BrandDoubleClick => EventKind::BrandDoubleClick,
            Self::Intersect { .. } => EventKind::Intersect,
            Self::Tick => EventKind::Tick,
        }
    }
}

/// An event handler.
pub type Handler = fn(&mut Page, UiEvent) -> Result<()>;

/// Maps event kinds to handlers.
#[derive(Clone, Default)]
pub struct EventRouter {
    handlers: HashMap<EventKind, Handler>,
}

impl std::fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

impl EventRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind`, replacing any previous registration.
    #[must_use]
    pub fn on(mut self, kind: EventKind, handler: Handler) -> Self {
        self.handlers.insert(kind, handler);
        self
    }

    /// The router with every storefront handler registered.
    #[must_use]
    pub fn storefront() -> Self {
        Self::new()
            .on(EventKind::Ready, handlers::ready)
            .on(EventKind::ToggleMenu, handlers::toggle_menu)
            .on(EventKind::Navigate, handlers::navigate)
            .on(EventKind::Scroll, handlers::scroll)
            .on(EventKind::SearchInput, handlers::search_input)
            .on(EventKind::Search, handlers::search)
            .on(EventKind::AddToCart, handlers::add_to_cart)
            .on(EventKind::OpenCart, handlers::open_cart)
            .on(EventKind::SubmitContact, handlers::submit_contact)
            .on(EventKind::BrandDoubleClick, handlers::brand_double_click)
            .on(EventKind::Intersect, handlers::intersect)
            .on(EventKind::Tick, handlers::tick)
    }

    #[must_use]
    pub fn handles(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Run the handler registered for `event`.
    ///
    /// Unrouted events are ignored. A failing handler is reported (logged,
    /// and captured to Sentry when internal) and its message is shown to the
    /// shopper before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the handler's error unchanged.
    pub fn dispatch(&self, page: &mut Page, event: UiEvent) -> Result<()> {
        let kind = event.kind();
        let Some(handler) = self.handlers.get(&kind) else {
            tracing::debug!(?kind, "no handler registered");
            return Ok(());
        };

        let _span = tracing::debug_span!("dispatch", ?kind).entered();
        handler(page, event).inspect_err(|err| {
            err.report();
            page.dialog.alert(&err.user_message());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::dialog::ScriptedDialog;
    use crate::page::MenuState;
    use crate::storage::MemoryStore;

    fn page() -> Page {
        Page::new(CartStore::new(MemoryStore::new()), ScriptedDialog::new())
    }

    #[test]
    fn test_storefront_router_covers_every_kind() {
        let router = EventRouter::storefront();
        for kind in [
            EventKind::Ready,
            EventKind::ToggleMenu,
            EventKind::Navigate,
            EventKind::Scroll,
            EventKind::SearchInput,
            EventKind::Search,
            EventKind::AddToCart,
            EventKind::OpenCart,
            EventKind::SubmitContact,
            EventKind::BrandDoubleClick,
            EventKind::Intersect,
            EventKind::Tick,
        ] {
            assert!(router.handles(kind), "{kind:?} not routed");
        }
    }

    #[test]
    fn test_unrouted_event_is_ignored() {
        let router = EventRouter::new();
        let mut page = page();
        assert!(router.dispatch(&mut page, UiEvent::ToggleMenu).is_ok());
        assert_eq!(page.menu(), MenuState::Closed);
    }

    #[test]
    fn test_custom_registration() {
        fn always_open(page: &mut Page, _event: UiEvent) -> Result<()> {
            page.menu = MenuState::Open;
            Ok(())
        }

        let router = EventRouter::storefront().on(EventKind::ToggleMenu, always_open);
        let mut page = page();
        assert!(router.dispatch(&mut page, UiEvent::ToggleMenu).is_ok());
        assert!(router.dispatch(&mut page, UiEvent::ToggleMenu).is_ok());
        assert_eq!(page.menu(), MenuState::Open);
    }
}
