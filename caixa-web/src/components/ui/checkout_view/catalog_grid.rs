use super::CheckoutViewProps;
use super::interactions::{
    add_item_handler, on_click, on_text_input, search_text_handler, tab_handler,
};
use super::view_model::{CatalogGrid, CatalogTab, CheckoutViewModel, ProductCard, ServiceCard};
use crate::i18n;
use crate::pos::{CheckoutIntent, ItemKind};
use std::collections::BTreeMap;
use yew::prelude::*;

pub fn render_catalog(
    vm: &CheckoutViewModel,
    props: &CheckoutViewProps,
    search_ref: &NodeRef,
) -> Html {
    let on_search = on_text_input(search_text_handler(&props.on_intent));

    html! {
        <section class="catalog" aria-label={i18n::t("checkout.catalog.label")}>
            <div class="catalog-tabs" role="tablist">
                { for vm.tabs.iter().map(|tab| render_tab(tab, &props.on_intent)) }
            </div>
            <input ref={search_ref.clone()}
                   id="catalog-search"
                   class="catalog-search"
                   type="search"
                   autofocus={true}
                   placeholder={i18n::t("checkout.catalog.search")}
                   aria-label={i18n::t("checkout.catalog.search")}
                   value={props.catalog_search.clone()}
                   oninput={on_search} />
            <div class="catalog-grid"
                 role="tabpanel"
                 id="catalog-panel"
                 data-mode={vm.grid.mode().as_str()}>
                { if vm.grid.is_empty() {
                    html! { <p class="catalog-empty">{ i18n::t("checkout.catalog.empty") }</p> }
                } else {
                    match &vm.grid {
                        CatalogGrid::Products(cards) => html! {
                            { for cards.iter().map(|card| render_product_card(card, &props.on_intent)) }
                        },
                        CatalogGrid::Services(cards) => html! {
                            { for cards.iter().map(|card| render_service_card(card, &props.on_intent)) }
                        },
                    }
                }}
            </div>
        </section>
    }
}

fn render_tab(tab: &CatalogTab, on_intent: &Callback<CheckoutIntent>) -> Html {
    html! {
        <button type="button"
                role="tab"
                key={tab.mode.as_str()}
                class={classes!("catalog-tab", tab.active.then_some("active"))}
                aria-selected={tab.active.to_string()}
                aria-controls="catalog-panel"
                data-mode={tab.mode.as_str()}
                onclick={on_click(tab_handler(on_intent, tab.mode))}>
            { tab.label.clone() }
        </button>
    }
}

fn add_label(name: &str) -> String {
    i18n::tr(
        "checkout.catalog.add",
        Some(&BTreeMap::from([("item", name)])),
    )
}

fn render_product_card(card: &ProductCard, on_intent: &Callback<CheckoutIntent>) -> Html {
    let on_add = add_item_handler(on_intent, &card.id, ItemKind::Product);
    html! {
        <button type="button"
                key={card.id.clone()}
                class={classes!("catalog-card", "product-card", card.out_of_stock.then_some("out-of-stock"))}
                data-id={card.id.clone()}
                aria-label={add_label(&card.name)}
                onclick={on_click(on_add)}>
            <span class="card-code">{ card.code.clone() }</span>
            <span class="card-name">{ card.name.clone() }</span>
            <span class="card-stock">{ card.stock.clone() }</span>
            <span class="card-price">{ card.price.clone() }</span>
        </button>
    }
}

fn render_service_card(card: &ServiceCard, on_intent: &Callback<CheckoutIntent>) -> Html {
    let on_add = add_item_handler(on_intent, &card.id, ItemKind::Service);
    html! {
        <button type="button"
                key={card.id.clone()}
                class={classes!("catalog-card", "service-card")}
                data-id={card.id.clone()}
                aria-label={add_label(&card.name)}
                onclick={on_click(on_add)}>
            <span class="card-name">{ card.name.clone() }</span>
            <span class="card-warranty">{ card.warranty.clone() }</span>
            <span class="card-price">{ card.price.clone() }</span>
        </button>
    }
}
