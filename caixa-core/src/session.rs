//! Reference owner of checkout state.
//!
//! `CheckoutSession` plays the caller role for the checkout screen: it keeps the
//! cart and form fields, computes the figures the screen displays, and applies
//! every intent the screen forwards.
use crate::catalog::{
    CartLine, CatalogMode, ItemKind, PaymentMethod, Product, Service, find_client, find_product,
    find_service, payment_options,
};
use crate::data::{CatalogData, CatalogLoader, StaticCatalogLoader};
use crate::error::CheckoutError;
use crate::intent::CheckoutCommands;
use crate::pricing;
use crate::search::{filter_products, filter_services};
use serde::{Deserialize, Serialize};

/// A finalized sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub number: u32,
    pub lines: Vec<CartLine>,
    pub client_id: Option<String>,
    pub payment_method: String,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSession {
    pub catalog: CatalogData,
    pub cart: Vec<CartLine>,
    pub selected_client_id: String,
    pub discount: f64,
    pub payment_method: String,
    pub active_catalog: CatalogMode,
    pub catalog_search: String,
    sales: Vec<Sale>,
    next_sale_number: u32,
    last_error: Option<CheckoutError>,
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new(CatalogData::default())
    }
}

impl CheckoutSession {
    #[must_use]
    pub fn new(catalog: CatalogData) -> Self {
        let payment_method = default_payment_method(&catalog);
        Self {
            catalog,
            cart: Vec::new(),
            selected_client_id: String::new(),
            discount: 0.0,
            payment_method,
            active_catalog: CatalogMode::Products,
            catalog_search: String::new(),
            sales: Vec::new(),
            next_sale_number: 1,
            last_error: None,
        }
    }

    /// Session over whatever catalog `loader` provides.
    ///
    /// # Errors
    ///
    /// Propagates the loader's error; no session is built from a partial catalog.
    pub fn from_loader<L: CatalogLoader + ?Sized>(loader: &L) -> Result<Self, L::Error> {
        let catalog = loader.load_catalog()?;
        log::debug!(
            "catalog loaded: {} products, {} services, {} clients",
            catalog.products.len(),
            catalog.services.len(),
            catalog.clients.len()
        );
        Ok(Self::new(catalog))
    }

    /// Session over the bundled demo catalog.
    #[must_use]
    pub fn demo() -> Self {
        Self::from_loader(&StaticCatalogLoader).unwrap_or_else(|err| {
            log::error!("bundled catalog rejected: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn subtotal_cents(&self) -> i64 {
        pricing::subtotal_cents(&self.cart)
    }

    #[must_use]
    pub fn cart_total_cents(&self) -> i64 {
        pricing::cart_total_cents(self.subtotal_cents(), self.discount)
    }

    #[must_use]
    pub fn filtered_products(&self) -> Vec<Product> {
        filter_products(&self.catalog.products, &self.catalog_search)
    }

    #[must_use]
    pub fn filtered_services(&self) -> Vec<Service> {
        filter_services(&self.catalog.services, &self.catalog_search)
    }

    #[must_use]
    pub fn active_payment_methods(&self) -> Vec<PaymentMethod> {
        self.catalog.active_payment_methods()
    }

    #[must_use]
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    #[must_use]
    pub fn last_sale(&self) -> Option<&Sale> {
        self.sales.last()
    }

    #[must_use]
    pub const fn last_error(&self) -> Option<&CheckoutError> {
        self.last_error.as_ref()
    }

    /// Finalize the current cart into a sale and clear the form.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when nothing is in the cart and
    /// [`CheckoutError::InvalidQuantity`] when a line holds a non-positive quantity.
    pub fn finalize(&mut self) -> Result<Sale, CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if let Some((index, line)) = self
            .cart
            .iter()
            .enumerate()
            .find(|(_, line)| line.quantity <= 0)
        {
            return Err(CheckoutError::InvalidQuantity {
                index,
                quantity: line.quantity,
            });
        }

        let subtotal_cents = self.subtotal_cents();
        let total_cents = self.cart_total_cents();
        let client_id = find_client(&self.catalog.clients, &self.selected_client_id)
            .map(|c| c.id.clone());
        let sale = Sale {
            number: self.next_sale_number,
            lines: std::mem::take(&mut self.cart),
            client_id,
            payment_method: self.payment_method.clone(),
            subtotal_cents,
            discount_cents: subtotal_cents - total_cents,
            total_cents,
        };
        self.next_sale_number = self.next_sale_number.saturating_add(1);
        self.sales.push(sale.clone());
        log::info!(
            "sale #{} finalized: {} line(s), total {} cents via {}",
            sale.number,
            sale.lines.len(),
            sale.total_cents,
            sale.payment_method
        );
        self.reset_form();
        Ok(sale)
    }

    fn catalog_price(&self, id: &str, kind: ItemKind) -> Option<i64> {
        match kind {
            ItemKind::Product => {
                find_product(&self.catalog.products, id).map(|p| p.sale_price_cents)
            }
            ItemKind::Service => find_service(&self.catalog.services, id).map(|s| s.price_cents),
        }
    }
}

fn default_payment_method(catalog: &CatalogData) -> String {
    payment_options(&catalog.active_payment_methods())
        .into_iter()
        .next()
        .map(|m| m.name)
        .unwrap_or_default()
}

impl CheckoutCommands for CheckoutSession {
    fn reset_form(&mut self) {
        self.cart.clear();
        self.selected_client_id.clear();
        self.discount = 0.0;
        self.payment_method = default_payment_method(&self.catalog);
        self.active_catalog = CatalogMode::Products;
        self.catalog_search.clear();
        self.last_error = None;
    }

    fn set_selected_client_id(&mut self, id: String) {
        self.selected_client_id = id;
    }

    fn set_discount(&mut self, discount: f64) {
        if discount.is_nan() {
            log::debug!("discount input is not a number; treating as no discount");
        }
        self.discount = discount;
    }

    fn set_payment_method(&mut self, name: String) {
        self.payment_method = name;
    }

    fn set_active_catalog(&mut self, mode: CatalogMode) {
        self.active_catalog = mode;
    }

    fn set_catalog_search(&mut self, text: String) {
        self.catalog_search = text;
    }

    fn update_quantity(&mut self, index: usize, delta: i32) {
        let Some(line) = self.cart.get_mut(index) else {
            log::warn!("quantity change for missing cart line {index}");
            return;
        };
        line.quantity = line.quantity.saturating_add(delta);
        if line.quantity <= 0 {
            let removed = self.cart.remove(index);
            log::debug!("cart line {index} ({}) dropped at zero quantity", removed.item_id);
        }
    }

    fn remove_item(&mut self, index: usize) {
        if index < self.cart.len() {
            self.cart.remove(index);
        } else {
            log::warn!("remove requested for missing cart line {index}");
        }
    }

    fn save(&mut self) {
        match self.finalize() {
            Ok(_) => self.last_error = None,
            Err(err) => {
                log::warn!("sale not finalized: {err}");
                self.last_error = Some(err);
            }
        }
    }

    fn add_item(&mut self, id: String, kind: ItemKind) {
        if let Some(line) = self
            .cart
            .iter_mut()
            .find(|line| line.kind == kind && line.item_id == id)
        {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        match self.catalog_price(&id, kind) {
            Some(price) => self.cart.push(CartLine::new(kind, id, 1, price)),
            None => log::warn!("add requested for unknown {} `{id}`", kind.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Client, FALLBACK_PAYMENT_METHOD};
    use crate::intent::CheckoutIntent;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn catalog() -> CatalogData {
        CatalogData {
            products: vec![Product {
                id: "P1".into(),
                code: "W-01".into(),
                name: "Widget".into(),
                stock: 5,
                sale_price_cents: 1000,
            }],
            services: vec![Service {
                id: "S1".into(),
                name: "Setup".into(),
                warranty_days: 30,
                price_cents: 3000,
            }],
            clients: vec![Client {
                id: "c1".into(),
                name: "Ana".into(),
            }],
            payment_methods: vec![PaymentMethod {
                id: "cash".into(),
                name: "Dinheiro".into(),
                active: true,
            }],
        }
    }

    #[test]
    fn adding_same_item_increments_existing_line() {
        let mut session = CheckoutSession::new(catalog());
        session.add_item("P1".into(), ItemKind::Product);
        session.add_item("P1".into(), ItemKind::Product);
        session.add_item("S1".into(), ItemKind::Service);
        assert_eq!(session.cart.len(), 2);
        assert_eq!(session.cart[0].quantity, 2);
        assert_eq!(session.subtotal_cents(), 5000);
    }

    #[test]
    fn unknown_items_are_ignored() {
        let mut session = CheckoutSession::new(catalog());
        session.add_item("P404".into(), ItemKind::Product);
        session.add_item("P1".into(), ItemKind::Service);
        assert!(session.cart.is_empty());
    }

    #[test]
    fn quantity_reaching_zero_removes_line() {
        let mut session = CheckoutSession::new(catalog());
        session.add_item("P1".into(), ItemKind::Product);
        session.add_item("S1".into(), ItemKind::Service);
        session.update_quantity(0, 1);
        assert_eq!(session.cart[0].quantity, 2);
        session.update_quantity(0, -1);
        session.update_quantity(0, -1);
        assert_eq!(session.cart.len(), 1);
        assert_eq!(session.cart[0].item_id, "S1");
        session.update_quantity(7, 1);
        assert_eq!(session.cart.len(), 1);
    }

    #[test]
    fn discount_applies_to_total() {
        let mut session = CheckoutSession::new(catalog());
        for _ in 0..5 {
            session.add_item("P1".into(), ItemKind::Product);
        }
        session.set_discount(5.0);
        assert_eq!(session.subtotal_cents(), 5000);
        assert_eq!(session.cart_total_cents(), 4500);
        session.set_discount(f64::NAN);
        assert_eq!(session.cart_total_cents(), 5000);
    }

    #[test]
    fn save_with_empty_cart_records_error() {
        let mut session = CheckoutSession::new(catalog());
        CheckoutIntent::Save.dispatch(&mut session);
        assert_eq!(session.last_error(), Some(&CheckoutError::EmptyCart));
        assert!(session.sales().is_empty());
    }

    #[test]
    fn save_finalizes_and_resets() {
        let mut session = CheckoutSession::new(catalog());
        session.add_item("P1".into(), ItemKind::Product);
        session.set_selected_client_id("c1".into());
        session.set_discount(2.0);
        session.set_active_catalog(CatalogMode::Services);
        session.save();

        let sale = session.last_sale().expect("sale recorded").clone();
        assert_eq!(sale.number, 1);
        assert_eq!(sale.client_id.as_deref(), Some("c1"));
        assert_eq!(sale.payment_method, "Dinheiro");
        assert_eq!(sale.subtotal_cents, 1000);
        assert_eq!(sale.discount_cents, 200);
        assert_eq!(sale.total_cents, 800);

        assert!(session.cart.is_empty());
        assert!(session.selected_client_id.is_empty());
        assert_eq!(session.active_catalog, CatalogMode::Products);
        assert!(session.last_error().is_none());
    }

    #[test]
    fn unknown_client_is_saved_as_walk_in() {
        let mut session = CheckoutSession::new(catalog());
        session.add_item("P1".into(), ItemKind::Product);
        session.set_selected_client_id("ghost".into());
        let sale = session.finalize().unwrap();
        assert!(sale.client_id.is_none());
    }

    #[test]
    fn empty_payment_directory_defaults_to_pix() {
        let mut data = catalog();
        data.payment_methods.clear();
        let session = CheckoutSession::new(data);
        assert_eq!(session.payment_method, FALLBACK_PAYMENT_METHOD);
        assert!(session.active_payment_methods().is_empty());
    }

    #[test]
    fn search_filters_both_catalogs() {
        let mut session = CheckoutSession::new(catalog());
        session.set_catalog_search("wid".into());
        assert_eq!(session.filtered_products().len(), 1);
        assert!(session.filtered_services().is_empty());
    }

    #[test]
    fn random_intent_streams_keep_cart_consistent() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut session = CheckoutSession::new(catalog());
        for _ in 0..500 {
            let len = session.cart.len();
            let intent = match rng.gen_range(0..5) {
                0 => CheckoutIntent::AddItem {
                    id: "P1".into(),
                    kind: ItemKind::Product,
                },
                1 => CheckoutIntent::AddItem {
                    id: "S1".into(),
                    kind: ItemKind::Service,
                },
                2 => CheckoutIntent::UpdateQuantity {
                    index: rng.gen_range(0..=len),
                    delta: if rng.gen_bool(0.5) { 1 } else { -1 },
                },
                3 => CheckoutIntent::RemoveItem(rng.gen_range(0..=len)),
                _ => CheckoutIntent::Save,
            };
            intent.dispatch(&mut session);
            assert!(session.cart.iter().all(|line| line.quantity > 0));
            assert!(session.cart_total_cents() >= 0);
        }
    }

    struct FixedLoader(Option<CatalogData>);

    impl CatalogLoader for FixedLoader {
        type Error = crate::data::CatalogDataError;

        fn load_catalog(&self) -> Result<CatalogData, Self::Error> {
            match &self.0 {
                Some(data) => Ok(data.clone()),
                None => CatalogData::from_json("{broken"),
            }
        }
    }

    #[test]
    fn sessions_build_from_any_loader() {
        let session = CheckoutSession::from_loader(&FixedLoader(Some(catalog()))).unwrap();
        assert_eq!(session.catalog, catalog());
        assert_eq!(session.payment_method, "Dinheiro");

        let err = CheckoutSession::from_loader(&FixedLoader(None)).unwrap_err();
        assert!(matches!(err, crate::data::CatalogDataError::Parse(_)));
    }

    #[test]
    fn demo_session_uses_bundled_catalog() {
        let demo = CheckoutSession::demo();
        let bundled = StaticCatalogLoader.load_catalog().unwrap();
        assert_eq!(demo.catalog, bundled);
        assert!(!demo.catalog.products.is_empty());
    }
}
