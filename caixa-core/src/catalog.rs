//! Catalog entities and lookups shared by the checkout screen and its host.
use serde::{Deserialize, Serialize};

/// Payment method offered when no active method has been configured.
pub const FALLBACK_PAYMENT_METHOD: &str = "Pix";

/// Which half of the catalog the grid is browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogMode {
    #[default]
    Products,
    Services,
}

impl CatalogMode {
    pub const ALL: [Self; 2] = [Self::Products, Self::Services];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Services => "services",
        }
    }

    /// Translation key for the tab label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Products => "checkout.catalog.products",
            Self::Services => "checkout.catalog.services",
        }
    }
}

/// Kind of catalog entry a cart line points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Product,
    Service,
}

impl ItemKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Service => "service",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub stock: i32,
    /// Sale price in cents
    pub sale_price_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub warranty_days: u32,
    /// Price in cents
    pub price_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl PaymentMethod {
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            id: FALLBACK_PAYMENT_METHOD.to_lowercase(),
            name: FALLBACK_PAYMENT_METHOD.to_string(),
            active: true,
        }
    }
}

/// One entry of the sale in progress. Lines are addressed by their index in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub kind: ItemKind,
    pub item_id: String,
    pub quantity: i32,
    /// Unit price in cents
    pub unit_price_cents: i64,
}

impl CartLine {
    #[must_use]
    pub fn new(
        kind: ItemKind,
        item_id: impl Into<String>,
        quantity: i32,
        unit_price_cents: i64,
    ) -> Self {
        Self {
            kind,
            item_id: item_id.into(),
            quantity,
            unit_price_cents,
        }
    }

    #[must_use]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents.saturating_mul(i64::from(self.quantity))
    }
}

#[must_use]
pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}

#[must_use]
pub fn find_service<'a>(services: &'a [Service], id: &str) -> Option<&'a Service> {
    services.iter().find(|s| s.id == id)
}

#[must_use]
pub fn find_client<'a>(clients: &'a [Client], id: &str) -> Option<&'a Client> {
    if id.is_empty() {
        return None;
    }
    clients.iter().find(|c| c.id == id)
}

/// Display name of the catalog entry a cart line references, if it still exists.
#[must_use]
pub fn resolve_line_name<'a>(
    line: &CartLine,
    products: &'a [Product],
    services: &'a [Service],
) -> Option<&'a str> {
    match line.kind {
        ItemKind::Product => find_product(products, &line.item_id).map(|p| p.name.as_str()),
        ItemKind::Service => find_service(services, &line.item_id).map(|s| s.name.as_str()),
    }
}

/// Options for the payment picker: the active methods, or the single fallback.
#[must_use]
pub fn payment_options(active: &[PaymentMethod]) -> Vec<PaymentMethod> {
    if active.is_empty() {
        vec![PaymentMethod::fallback()]
    } else {
        active.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product {
            id: "P1".into(),
            code: "W-01".into(),
            name: "Widget".into(),
            stock: 4,
            sale_price_cents: 1000,
        }
    }

    #[test]
    fn catalog_mode_serializes_lowercase() {
        let json = serde_json::to_string(&CatalogMode::Services).unwrap();
        assert_eq!(json, "\"services\"");
        let back: CatalogMode = serde_json::from_str("\"products\"").unwrap();
        assert_eq!(back, CatalogMode::Products);
        assert_eq!(CatalogMode::default(), CatalogMode::Products);
    }

    #[test]
    fn line_total_multiplies_quantity() {
        let line = CartLine::new(ItemKind::Product, "P1", 2, 1000);
        assert_eq!(line.line_total_cents(), 2000);
        let negative = CartLine::new(ItemKind::Product, "P1", -1, 1000);
        assert_eq!(negative.line_total_cents(), -1000);
    }

    #[test]
    fn resolve_line_name_degrades_to_none() {
        let products = vec![widget()];
        let hit = CartLine::new(ItemKind::Product, "P1", 1, 1000);
        let miss = CartLine::new(ItemKind::Product, "P404", 1, 1000);
        let wrong_kind = CartLine::new(ItemKind::Service, "P1", 1, 1000);
        assert_eq!(resolve_line_name(&hit, &products, &[]), Some("Widget"));
        assert_eq!(resolve_line_name(&miss, &products, &[]), None);
        assert_eq!(resolve_line_name(&wrong_kind, &products, &[]), None);
    }

    #[test]
    fn empty_client_id_never_matches() {
        let clients = vec![Client {
            id: String::new(),
            name: "Ghost".into(),
        }];
        assert!(find_client(&clients, "").is_none());
    }

    #[test]
    fn payment_options_fall_back_to_pix() {
        let options = payment_options(&[]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].name, FALLBACK_PAYMENT_METHOD);

        let configured = vec![PaymentMethod {
            id: "cash".into(),
            name: "Dinheiro".into(),
            active: true,
        }];
        assert_eq!(payment_options(&configured), configured);
    }
}
