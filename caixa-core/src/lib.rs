//! Caixa checkout core
//!
//! Platform-agnostic domain for the Caixa point-of-sale checkout screen: catalog
//! entities, the intents the screen forwards, and a reference session that owns
//! checkout state on the screen's behalf. No UI or platform dependencies.

pub mod catalog;
pub mod data;
pub mod error;
pub mod intent;
pub mod numbers;
pub mod pricing;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use catalog::{
    CartLine, CatalogMode, Client, FALLBACK_PAYMENT_METHOD, ItemKind, PaymentMethod, Product,
    Service, find_client, find_product, find_service, payment_options, resolve_line_name,
};
pub use data::{CatalogData, CatalogDataError, CatalogLoader, StaticCatalogLoader};
pub use error::CheckoutError;
pub use intent::{CheckoutCommands, CheckoutIntent, IntentLog, coerce_number};
pub use session::{CheckoutSession, Sale};
