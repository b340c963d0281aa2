//! Checkout domain as seen from the web crate.

pub use caixa_core::*;
