//! Page session state.
//!
//! [`Page`] is the single owner of everything a storefront visit mutates:
//! the cart, the mobile menu, the header style, the search box, toasts and
//! reveal-on-scroll state. Event handlers in [`crate::events`] receive it by
//! `&mut` one event at a time.

pub mod contact;
pub mod notifications;
pub mod reveal;
pub mod search;

use chrono::{DateTime, TimeDelta, Utc};

use crate::cart::CartStore;
use crate::dialog::Dialog;

pub use contact::{ContactError, ContactForm, ContactSubmission};
pub use notifications::{Notification, NotificationQueue};
pub use reveal::{IntersectionEntry, RevealTracker};
pub use search::SearchBox;

/// Scroll offset (px) past which the header turns translucent.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Header background treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderStyle {
    /// Opaque background at the top of the page.
    #[default]
    Solid,
    /// Semi-transparent blurred background once scrolled.
    Translucent,
}

impl HeaderStyle {
    #[must_use]
    pub fn for_scroll(y: f64) -> Self {
        if y > HEADER_SCROLL_THRESHOLD {
            Self::Translucent
        } else {
            Self::Solid
        }
    }
}

type Clock = Box<dyn Fn() -> DateTime<Utc>>;

/// State of one storefront page session.
pub struct Page {
    pub(crate) cart: CartStore,
    pub(crate) dialog: Box<dyn Dialog>,
    pub(crate) menu: MenuState,
    pub(crate) header: HeaderStyle,
    pub(crate) section: Option<String>,
    pub(crate) search: SearchBox,
    pub(crate) notifications: NotificationQueue,
    pub(crate) reveal: RevealTracker,
    clock: Clock,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("cart", &self.cart)
            .field("menu", &self.menu)
            .field("header", &self.header)
            .field("section", &self.section)
            .field("search", &self.search)
            .field("notifications", &self.notifications)
            .field("reveal", &self.reveal)
            .finish_non_exhaustive()
    }
}

impl Page {
    /// Create a page around a cart and the host's dialogs.
    ///
    /// The cart is not loaded yet; dispatch [`UiEvent::Ready`](crate::events::UiEvent::Ready)
    /// to hydrate it.
    pub fn new(cart: CartStore, dialog: impl Dialog + 'static) -> Self {
        Self {
            cart,
            dialog: Box::new(dialog),
            menu: MenuState::default(),
            header: HeaderStyle::default(),
            section: None,
            search: SearchBox::default(),
            notifications: NotificationQueue::default(),
            reveal: RevealTracker::new(),
            clock: Box::new(Utc::now),
        }
    }

    /// Override how long toasts stay on screen, up to
    /// [`MAX_TTL_MS`](notifications::MAX_TTL_MS).
    #[must_use]
    pub fn with_notification_ttl(mut self, ttl: TimeDelta) -> Self {
        self.notifications = NotificationQueue::new(ttl);
        self
    }

    /// Override the time source used to stamp toasts.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Track an element for reveal-on-scroll.
    pub fn observe_reveal(&mut self, element: impl Into<String>) {
        self.reveal.observe(element);
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    #[must_use]
    pub const fn menu(&self) -> MenuState {
        self.menu
    }

    #[must_use]
    pub const fn header(&self) -> HeaderStyle {
        self.header
    }

    /// Section the page last scrolled to, e.g. `#produtos`.
    #[must_use]
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    #[must_use]
    pub const fn search(&self) -> &SearchBox {
        &self.search
    }

    #[must_use]
    pub const fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    #[must_use]
    pub const fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub(crate) fn notify(&mut self, message: impl Into<String>) {
        let now = self.now();
        self.notifications.push(message, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_header_threshold() {
        assert_eq!(HeaderStyle::for_scroll(0.0), HeaderStyle::Solid);
        assert_eq!(HeaderStyle::for_scroll(100.0), HeaderStyle::Solid);
        assert_eq!(HeaderStyle::for_scroll(100.5), HeaderStyle::Translucent);
    }
}
