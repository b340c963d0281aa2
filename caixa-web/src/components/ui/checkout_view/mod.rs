//! Checkout screen: cart panel, totals footer and a searchable catalog grid.
//!
//! The component owns no business state. Everything it shows comes from its
//! props and every gesture leaves through `on_intent`.

mod cart_panel;
mod catalog_grid;
pub mod interactions;
pub mod view_model;

use crate::i18n;
use crate::pos::{CartLine, CatalogMode, CheckoutIntent, Client, PaymentMethod, Product, Service};
use cart_panel::render_cart_panel;
use catalog_grid::render_catalog;
use interactions::{
    clear_client_handler, client_choice_handler, forward, on_click, on_select_change,
};
use std::rc::Rc;
use view_model::{ClientView, build_checkout_viewmodel};
use yew::prelude::*;

pub use view_model::{CartLineView, CatalogGrid, CheckoutViewModel};

#[derive(Properties, Clone)]
pub struct CheckoutViewProps {
    pub cart: Rc<Vec<CartLine>>,
    pub selected_client_id: AttrValue,
    pub clients: Rc<Vec<Client>>,
    pub subtotal_cents: i64,
    pub cart_total_cents: i64,
    pub discount: f64,
    pub payment_method: AttrValue,
    pub active_catalog: CatalogMode,
    pub catalog_search: AttrValue,
    pub active_payment_methods: Rc<Vec<PaymentMethod>>,
    pub filtered_products: Rc<Vec<Product>>,
    pub filtered_services: Rc<Vec<Service>>,
    /// Full catalogs, only used to name cart lines
    pub products: Rc<Vec<Product>>,
    pub services: Rc<Vec<Service>>,
    pub on_intent: Callback<CheckoutIntent>,
}

impl PartialEq for CheckoutViewProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cart, &other.cart)
            && Rc::ptr_eq(&self.clients, &other.clients)
            && Rc::ptr_eq(&self.active_payment_methods, &other.active_payment_methods)
            && Rc::ptr_eq(&self.filtered_products, &other.filtered_products)
            && Rc::ptr_eq(&self.filtered_services, &other.filtered_services)
            && Rc::ptr_eq(&self.products, &other.products)
            && Rc::ptr_eq(&self.services, &other.services)
            && self.selected_client_id == other.selected_client_id
            && self.subtotal_cents == other.subtotal_cents
            && self.cart_total_cents == other.cart_total_cents
            && self.discount.to_bits() == other.discount.to_bits()
            && self.payment_method == other.payment_method
            && self.active_catalog == other.active_catalog
            && self.catalog_search == other.catalog_search
            && self.on_intent == other.on_intent
    }
}

#[function_component(CheckoutView)]
pub fn checkout_view(props: &CheckoutViewProps) -> Html {
    let search_ref = use_node_ref();
    {
        let search_ref = search_ref.clone();
        use_effect_with((), move |_| {
            if let Some(input) = search_ref.cast::<web_sys::HtmlInputElement>() {
                let _ = input.focus();
            }
        });
    }

    // `<option selected>` only seeds a pristine select; once the user has
    // picked something the live value has to be written back.
    let payment_ref = use_node_ref();
    {
        let payment_ref = payment_ref.clone();
        use_effect_with(props.payment_method.clone(), move |method| {
            if let Some(select) = payment_ref.cast::<web_sys::HtmlSelectElement>() {
                select.set_value(method);
            }
        });
    }

    let vm = build_checkout_viewmodel(props);
    let on_back = on_click(forward(&props.on_intent, CheckoutIntent::ResetForm));

    html! {
        <main id="main" class="checkout" aria-labelledby="checkout-title">
            <header class="checkout-header">
                <button type="button" class="checkout-back" onclick={on_back}>
                    <span aria-hidden="true">{ "←" }</span>
                    { i18n::t("checkout.back") }
                </button>
                <h1 id="checkout-title">{ i18n::t("checkout.title") }</h1>
                { render_client(&vm.client, props) }
            </header>
            <div class="checkout-body">
                { render_cart_panel(&vm, props, &payment_ref) }
                { render_catalog(&vm, props, &search_ref) }
            </div>
            <div aria-live="polite" aria-atomic="true" class="sr-only" id="checkout-status"></div>
        </main>
    }
}

fn render_client(client: &ClientView, props: &CheckoutViewProps) -> Html {
    match client {
        ClientView::Selected { id, name } => {
            let on_clear = on_click(clear_client_handler(&props.on_intent));
            html! {
                <div class="checkout-client client-badge" data-client-id={id.clone()}>
                    <button type="button"
                            class="client-clear"
                            title={i18n::t("checkout.client.clear")}
                            aria-label={i18n::t("checkout.client.clear")}
                            onclick={on_clear}>
                        <span aria-hidden="true">{ "👤" }</span>
                    </button>
                    <span class="sr-only">{ i18n::t("checkout.client.selected") }</span>
                    <span class="client-name">{ name.clone() }</span>
                </div>
            }
        }
        ClientView::WalkIn => {
            let on_change = on_select_change(client_choice_handler(&props.on_intent));
            html! {
                <div class="checkout-client">
                    <label for="client-select" class="sr-only">{ i18n::t("checkout.client.label") }</label>
                    <select id="client-select" class="client-select" onchange={on_change}>
                        <option value="" selected={true}>{ i18n::t("checkout.client.walk_in") }</option>
                        { for props.clients.iter().map(|c| html! {
                            <option key={c.id.clone()} value={c.id.clone()}>{ c.name.clone() }</option>
                        }) }
                    </select>
                </div>
            }
        }
    }
}
