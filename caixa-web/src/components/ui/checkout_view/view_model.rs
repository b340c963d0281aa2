use super::CheckoutViewProps;
use crate::i18n;
use crate::pos::{
    CatalogMode, ItemKind, PaymentMethod, Product, Service, find_client, payment_options,
    resolve_line_name,
};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub index: usize,
    pub kind: ItemKind,
    /// Empty when the referenced catalog entry no longer exists
    pub name: String,
    pub quantity: i32,
    pub detail: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientView {
    WalkIn,
    Selected { id: String, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub code: String,
    pub stock: String,
    pub out_of_stock: bool,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard {
    pub id: String,
    pub name: String,
    pub warranty: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogGrid {
    Products(Vec<ProductCard>),
    Services(Vec<ServiceCard>),
}

impl CatalogGrid {
    #[must_use]
    pub const fn mode(&self) -> CatalogMode {
        match self {
            Self::Products(_) => CatalogMode::Products,
            Self::Services(_) => CatalogMode::Services,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Products(cards) => cards.is_empty(),
            Self::Services(cards) => cards.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTab {
    pub mode: CatalogMode,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutViewModel {
    pub lines: Vec<CartLineView>,
    pub item_count: String,
    pub client: ClientView,
    pub can_save: bool,
    pub subtotal: String,
    pub total: String,
    pub discount_value: String,
    pub payment_options: Vec<PaymentMethod>,
    pub tabs: Vec<CatalogTab>,
    pub grid: CatalogGrid,
}

/// Resolve every label the checkout screen shows from the caller's state.
#[must_use]
pub fn build_checkout_viewmodel(props: &CheckoutViewProps) -> CheckoutViewModel {
    let lines = props
        .cart
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let name = resolve_line_name(line, &props.products, &props.services)
                .unwrap_or_default()
                .to_string();
            let qty = line.quantity.to_string();
            let price = i18n::fmt_brl_plain(line.unit_price_cents);
            let mut vars = BTreeMap::new();
            vars.insert("qty", qty.as_str());
            vars.insert("price", price.as_str());
            CartLineView {
                index,
                kind: line.kind,
                name,
                quantity: line.quantity,
                detail: i18n::tr("checkout.cart.line_detail", Some(&vars)),
                total: i18n::fmt_brl_plain(line.line_total_cents()),
            }
        })
        .collect();

    let count = props.cart.len().to_string();
    let item_count = i18n::tr(
        "checkout.cart.count",
        Some(&BTreeMap::from([("count", count.as_str())])),
    );

    let client = if props.selected_client_id.is_empty() {
        ClientView::WalkIn
    } else {
        ClientView::Selected {
            id: props.selected_client_id.to_string(),
            name: find_client(&props.clients, &props.selected_client_id)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
        }
    };

    let tabs = CatalogMode::ALL
        .iter()
        .map(|&mode| CatalogTab {
            mode,
            label: i18n::t(mode.label_key()),
            active: mode == props.active_catalog,
        })
        .collect();

    let grid = match props.active_catalog {
        CatalogMode::Products => {
            CatalogGrid::Products(props.filtered_products.iter().map(product_card).collect())
        }
        CatalogMode::Services => {
            CatalogGrid::Services(props.filtered_services.iter().map(service_card).collect())
        }
    };

    CheckoutViewModel {
        lines,
        item_count,
        client,
        can_save: !props.cart.is_empty(),
        subtotal: i18n::fmt_brl(props.subtotal_cents),
        total: i18n::fmt_brl(props.cart_total_cents),
        discount_value: i18n::fmt_discount(props.discount),
        payment_options: payment_options(&props.active_payment_methods),
        tabs,
        grid,
    }
}

fn product_card(product: &Product) -> ProductCard {
    let stock = i18n::fmt_number(f64::from(product.stock));
    ProductCard {
        id: product.id.clone(),
        name: product.name.clone(),
        code: i18n::tr(
            "checkout.catalog.code",
            Some(&BTreeMap::from([("code", product.code.as_str())])),
        ),
        stock: i18n::tr(
            "checkout.catalog.stock",
            Some(&BTreeMap::from([("stock", stock.as_str())])),
        ),
        out_of_stock: product.stock <= 0,
        price: i18n::fmt_brl_plain(product.sale_price_cents),
    }
}

fn service_card(service: &Service) -> ServiceCard {
    let days = service.warranty_days.to_string();
    ServiceCard {
        id: service.id.clone(),
        name: service.name.clone(),
        warranty: i18n::tr(
            "checkout.catalog.warranty",
            Some(&BTreeMap::from([("days", days.as_str())])),
        ),
        price: i18n::fmt_brl_plain(service.price_cents),
    }
}
