use caixa_web::app::{App, apply_intent, checkout_props};
use caixa_web::components::ui::CheckoutView;
use caixa_web::pos::{CatalogMode, CheckoutIntent, CheckoutSession, ItemKind};
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer};

fn render_session(session: &CheckoutSession) -> String {
    let props = checkout_props(session, Callback::noop());
    block_on(LocalServerRenderer::<CheckoutView>::with_props(props).render())
}

fn step(session: CheckoutSession, intent: CheckoutIntent) -> CheckoutSession {
    apply_intent(&session, intent).0
}

#[test]
fn checkout_renders_in_english() {
    caixa_web::i18n::set_lang("en");
    let html = render_session(&CheckoutSession::demo());
    assert!(html.contains("New Sale"));
    assert!(html.contains("No items in the cart"));
    assert!(html.contains("Walk-in client"));
    assert!(html.contains("Finalize Sale"));
}

#[test]
fn app_shell_renders_skip_link_and_checkout() {
    caixa_web::i18n::set_lang("pt");
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert!(html.contains("href=\"#main\""));
    assert!(html.contains("checkout-status"));
}

#[test]
fn added_items_show_up_in_the_cart() {
    caixa_web::i18n::set_lang("pt");
    let session = step(
        CheckoutSession::demo(),
        CheckoutIntent::AddItem {
            id: "p-cabo-usbc".into(),
            kind: ItemKind::Product,
        },
    );
    let session = step(session, CheckoutIntent::UpdateQuantity { index: 0, delta: 1 });
    let html = render_session(&session);
    assert!(html.contains("2 × R$ 29.90"), "{html}");
    assert!(html.contains("R$ 59.80"));
    assert!(html.contains("R$ 59,80"));
}

#[test]
fn services_tab_lists_services_only() {
    caixa_web::i18n::set_lang("pt");
    let session = step(
        CheckoutSession::demo(),
        CheckoutIntent::SetActiveCatalog(CatalogMode::Services),
    );
    let html = render_session(&session);
    assert!(html.contains("service-card"));
    assert!(!html.contains("product-card"));
    assert!(html.contains("dias"));
}

#[test]
fn search_narrows_the_grid() {
    caixa_web::i18n::set_lang("pt");
    let session = step(
        CheckoutSession::demo(),
        CheckoutIntent::SetCatalogSearch("pelicula".into()),
    );
    let html = render_session(&session);
    assert_eq!(html.matches("product-card").count(), 1, "{html}");
    assert!(html.contains("Película de Vidro 3D"));
}

#[test]
fn out_of_stock_products_are_marked() {
    caixa_web::i18n::set_lang("pt");
    let html = render_session(&CheckoutSession::demo());
    assert!(html.contains("out-of-stock"));
}
