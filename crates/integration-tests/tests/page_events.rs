//! End-to-end event flows through the storefront router.

#![allow(clippy::unwrap_used)]

use chrono::{TimeDelta, TimeZone, Utc};
use jacare_core::Price;
use jacare_storefront::cart::{CartBadge, CartStatus, CartStore};
use jacare_storefront::checkout::{CONFIRM_QUESTION, EMPTY_CART_MESSAGE, REDIRECT_MESSAGE};
use jacare_storefront::dialog::{DialogMessage, ScriptedDialog};
use jacare_storefront::events::{EventRouter, UiEvent};
use jacare_storefront::page::{ContactForm, HeaderStyle, IntersectionEntry, MenuState, Page};
use jacare_storefront::storage::MemoryStore;
use rust_decimal::Decimal;

struct Visit {
    page: Page,
    router: EventRouter,
    dialog: ScriptedDialog,
    badge: CartBadge,
}

impl Visit {
    fn start(dialog: ScriptedDialog) -> Self {
        let badge = CartBadge::new();
        let mut cart = CartStore::new(MemoryStore::new());
        cart.subscribe(badge.clone());

        let start = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let mut visit = Self {
            page: Page::new(cart, dialog.clone()).with_clock(move || start),
            router: EventRouter::storefront(),
            dialog,
            badge,
        };
        visit.send(UiEvent::Ready);
        visit
    }

    fn send(&mut self, event: UiEvent) {
        self.router.dispatch(&mut self.page, event).unwrap();
    }

    fn add(&mut self, name: &str, price: &str) {
        self.send(UiEvent::AddToCart {
            name: name.to_owned(),
            price_text: price.to_owned(),
        });
    }
}

#[test]
fn test_shopping_trip_with_checkout() {
    let mut visit = Visit::start(ScriptedDialog::new().answering([false, true]));

    visit.send(UiEvent::ToggleMenu);
    visit.send(UiEvent::Navigate {
        target: "#produtos".to_owned(),
    });
    assert_eq!(visit.page.menu(), MenuState::Closed);

    visit.add("Filtro de Óleo", "R$ 29,90");
    visit.add("Vela de Ignição", "R$ 18,50");
    visit.add("Vela de Ignição", "R$ 18,50");
    visit.add("Vela de Ignição", "R$ 18,50");
    assert_eq!(visit.badge.count(), 4);

    // First attempt is cancelled, second confirmed.
    visit.send(UiEvent::OpenCart);
    assert_eq!(visit.page.cart().status(), CartStatus::NonEmpty);
    visit.send(UiEvent::OpenCart);
    assert_eq!(visit.page.cart().status(), CartStatus::Empty);
    assert_eq!(visit.badge.count(), 0);

    let shown = visit.dialog.shown();
    let [DialogMessage::Confirm(first), DialogMessage::Confirm(second), DialogMessage::Alert(done)] =
        shown.as_slice()
    else {
        panic!("unexpected dialogs: {shown:?}");
    };
    assert_eq!(first, second);
    assert!(first.contains("Filtro de Óleo - Qtd: 1 - R$ 29,90"));
    assert!(first.contains("Vela de Ignição - Qtd: 3 - R$ 55,50"));
    assert!(first.contains("TOTAL: R$ 85,40"));
    assert!(first.ends_with(CONFIRM_QUESTION));
    assert_eq!(done, REDIRECT_MESSAGE);
}

#[test]
fn test_checkout_on_empty_cart() {
    let mut visit = Visit::start(ScriptedDialog::new().answering([true]));
    visit.send(UiEvent::OpenCart);
    assert_eq!(visit.dialog.alerts(), vec![EMPTY_CART_MESSAGE]);
}

#[test]
fn test_invalid_price_leaves_cart_alone() {
    let mut visit = Visit::start(ScriptedDialog::new());
    visit.add("Óleo 5W30", "R$ 39,90");

    let err = visit
        .router
        .dispatch(
            &mut visit.page,
            UiEvent::AddToCart {
                name: "Kit Embreagem".to_owned(),
                price_text: "sob consulta".to_owned(),
            },
        )
        .unwrap_err();

    assert!(!err.is_internal());
    assert_eq!(visit.badge.count(), 1);
    assert_eq!(
        visit.page.cart().snapshot().total_price(),
        Price::parse_brl("R$ 39,90").unwrap()
    );
}

#[test]
fn test_large_prices_total_exactly() {
    let mut visit = Visit::start(ScriptedDialog::new());
    visit.add("Motor Parcial", "R$ 12.345,67");
    visit.add("Câmbio", "R$ 1.234,56");
    visit.add("Motor Parcial", "R$ 12.345,67");

    assert_eq!(visit.page.cart().totals().total, Decimal::new(2_592_590, 2));
    assert_eq!(
        visit.page.cart().snapshot().total_price().to_string(),
        "R$ 25.925,90"
    );
}

#[test]
fn test_page_chrome_events() {
    let mut visit = Visit::start(ScriptedDialog::new());

    visit.send(UiEvent::Scroll { y: 480.0 });
    assert_eq!(visit.page.header(), HeaderStyle::Translucent);

    visit.page.observe_reveal("stat-item:clientes");
    visit.send(UiEvent::Intersect {
        entries: vec![IntersectionEntry {
            element: "stat-item:clientes".to_owned(),
            ratio: 0.1,
        }],
    });
    assert!(visit.page.reveal().is_revealed("stat-item:clientes"));

    visit.send(UiEvent::SearchInput {
        text: "radiador".to_owned(),
    });
    visit.send(UiEvent::Search);
    assert_eq!(visit.dialog.alerts().len(), 1);
}

#[test]
fn test_contact_then_toasts_expire() {
    let mut visit = Visit::start(ScriptedDialog::new());
    visit.send(UiEvent::SubmitContact(ContactForm {
        name: "Carlos".to_owned(),
        email: "carlos@oficina.com.br".to_owned(),
        phone: "(11) 3333-4444".to_owned(),
        message: "Preciso de um orçamento.".to_owned(),
    }));
    visit.send(UiEvent::BrandDoubleClick);
    assert_eq!(visit.page.notifications().len(), 2);

    let later = visit.page.now() + TimeDelta::seconds(10);
    let page = std::mem::replace(
        &mut visit.page,
        Page::new(CartStore::new(MemoryStore::new()), ScriptedDialog::new()),
    );
    visit.page = page.with_clock(move || later);
    visit.send(UiEvent::Tick);
    assert!(visit.page.notifications().is_empty());
}
