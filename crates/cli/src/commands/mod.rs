//! Command implementations.
//!
//! Every command opens a [`Session`]: a storefront page over the file-backed
//! store, hydrated from disk, which then receives the command's events.

pub mod cart;
pub mod contact;
pub mod search;

use jacare_storefront::cart::{CartBadge, CartStore};
use jacare_storefront::config::StorefrontConfig;
use jacare_storefront::dialog::Dialog;
use jacare_storefront::error::Result;
use jacare_storefront::events::{EventRouter, UiEvent};
use jacare_storefront::page::Page;
use jacare_storefront::storage::FileStore;

/// One page visit driven from the command line.
pub struct Session {
    page: Page,
    router: EventRouter,
    badge: CartBadge,
}

impl Session {
    /// Build the page and hydrate the cart from `config.storage_dir`.
    ///
    /// # Errors
    ///
    /// Returns the error of the `Ready` handler.
    pub fn open(config: &StorefrontConfig, dialog: impl Dialog + 'static) -> Result<Self> {
        let badge = CartBadge::new();
        let mut cart = CartStore::with_key(
            FileStore::new(config.storage_dir.clone()),
            config.cart_key.clone(),
        );
        cart.subscribe(badge.clone());

        let page = Page::new(cart, dialog).with_notification_ttl(config.notification_ttl);
        let mut session = Self {
            page,
            router: EventRouter::storefront(),
            badge,
        };
        session.send(UiEvent::Ready)?;
        Ok(session)
    }

    /// # Errors
    ///
    /// Returns the handler's error.
    pub fn send(&mut self, event: UiEvent) -> Result<()> {
        self.router.dispatch(&mut self.page, event)
    }

    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// Print the toasts still on screen and the cart badge.
    #[allow(clippy::print_stdout)]
    pub fn finish(self) {
        let now = self.page.now();
        for notification in self.page.notifications().visible(now) {
            println!("🔔 {}", notification.message);
        }
        println!("🛒 {}", self.badge.text());
    }
}
