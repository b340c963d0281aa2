//! Bridge between the reference session and the checkout screen.

use crate::components::ui::CheckoutViewProps;
use crate::i18n;
use crate::pos::{CheckoutError, CheckoutIntent, CheckoutSession};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::{AttrValue, Callback};

/// Snapshot `session` into the props the checkout screen renders from.
#[must_use]
pub fn checkout_props(
    session: &CheckoutSession,
    on_intent: Callback<CheckoutIntent>,
) -> CheckoutViewProps {
    CheckoutViewProps {
        cart: Rc::new(session.cart.clone()),
        selected_client_id: AttrValue::from(session.selected_client_id.clone()),
        clients: Rc::new(session.catalog.clients.clone()),
        subtotal_cents: session.subtotal_cents(),
        cart_total_cents: session.cart_total_cents(),
        discount: session.discount,
        payment_method: AttrValue::from(session.payment_method.clone()),
        active_catalog: session.active_catalog,
        catalog_search: AttrValue::from(session.catalog_search.clone()),
        active_payment_methods: Rc::new(session.active_payment_methods()),
        filtered_products: Rc::new(session.filtered_products()),
        filtered_services: Rc::new(session.filtered_services()),
        products: Rc::new(session.catalog.products.clone()),
        services: Rc::new(session.catalog.services.clone()),
        on_intent,
    }
}

/// Apply one intent to a copy of `session`.
///
/// Returns the next session and, for save attempts, the message to announce.
#[must_use]
pub fn apply_intent(
    session: &CheckoutSession,
    intent: CheckoutIntent,
) -> (CheckoutSession, Option<String>) {
    let is_save = matches!(intent, CheckoutIntent::Save);
    let sales_before = session.sales().len();
    let mut next = session.clone();
    log::debug!("checkout intent: {}", intent.name());
    intent.dispatch(&mut next);

    if !is_save {
        return (next, None);
    }
    let status = if next.sales().len() > sales_before {
        next.last_sale().map(|sale| {
            let number = sale.number.to_string();
            let total = i18n::fmt_brl(sale.total_cents);
            i18n::tr(
                "checkout.status.saved",
                Some(&BTreeMap::from([
                    ("number", number.as_str()),
                    ("total", total.as_str()),
                ])),
            )
        })
    } else {
        next.last_error().map(error_status)
    };
    (next, status)
}

fn error_status(err: &CheckoutError) -> String {
    match err {
        CheckoutError::EmptyCart => i18n::t("checkout.status.empty_cart"),
        CheckoutError::InvalidQuantity { index, .. } => {
            let line = (index + 1).to_string();
            i18n::tr(
                "checkout.status.invalid_quantity",
                Some(&BTreeMap::from([("line", line.as_str())])),
            )
        }
    }
}
