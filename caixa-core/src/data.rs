//! Catalog data bundle: products, services, clients and payment methods.
use crate::catalog::{Client, PaymentMethod, Product, Service};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

const DEFAULT_CATALOG_DATA: &str = include_str!("../../caixa-web/static/data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogDataError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },
    #[error("{kind} `{id}` has a negative price ({cents} cents)")]
    NegativePrice {
        kind: &'static str,
        id: String,
        cents: i64,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
}

impl CatalogData {
    /// Demo catalog bundled with the web front end.
    #[must_use]
    pub fn load_from_static() -> Self {
        StaticCatalogLoader.load_catalog().unwrap_or_else(|err| {
            log::error!("bundled catalog rejected: {err}");
            Self::default()
        })
    }

    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or violates catalog invariants.
    pub fn from_json(json: &str) -> Result<Self, CatalogDataError> {
        let data: Self = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// # Errors
    ///
    /// Returns an error on duplicate ids or negative prices.
    pub fn validate(&self) -> Result<(), CatalogDataError> {
        check_unique("product", self.products.iter().map(|p| p.id.as_str()))?;
        check_unique("service", self.services.iter().map(|s| s.id.as_str()))?;
        check_unique("client", self.clients.iter().map(|c| c.id.as_str()))?;
        check_unique(
            "payment method",
            self.payment_methods.iter().map(|m| m.id.as_str()),
        )?;

        if let Some(p) = self.products.iter().find(|p| p.sale_price_cents < 0) {
            return Err(CatalogDataError::NegativePrice {
                kind: "product",
                id: p.id.clone(),
                cents: p.sale_price_cents,
            });
        }
        if let Some(s) = self.services.iter().find(|s| s.price_cents < 0) {
            return Err(CatalogDataError::NegativePrice {
                kind: "service",
                id: s.id.clone(),
                cents: s.price_cents,
            });
        }
        Ok(())
    }

    /// Payment methods currently enabled.
    #[must_use]
    pub fn active_payment_methods(&self) -> Vec<PaymentMethod> {
        self.payment_methods
            .iter()
            .filter(|m| m.active)
            .cloned()
            .collect()
    }
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogDataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogDataError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Source of catalog data. Platform front ends provide their own.
pub trait CatalogLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    fn load_catalog(&self) -> Result<CatalogData, Self::Error>;
}

/// Loader backed by the catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalogLoader;

impl CatalogLoader for StaticCatalogLoader {
    type Error = CatalogDataError;

    fn load_catalog(&self) -> Result<CatalogData, Self::Error> {
        CatalogData::from_json(DEFAULT_CATALOG_DATA)
    }
}
