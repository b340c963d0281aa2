//! Reference pricing for a cart: subtotal, discount and payable total.
//!
//! The checkout screen never calls into this module; it only displays the
//! figures its host computed here.
use crate::catalog::CartLine;
use crate::numbers::amount_to_cents;

/// Sum of every line total.
#[must_use]
pub fn subtotal_cents(cart: &[CartLine]) -> i64 {
    cart.iter()
        .map(CartLine::line_total_cents)
        .fold(0_i64, i64::saturating_add)
}

/// Discount in cents. NaN, infinite and negative inputs count as no discount.
#[must_use]
pub fn discount_cents(discount: f64) -> i64 {
    if !discount.is_finite() || discount <= 0.0 {
        return 0;
    }
    amount_to_cents(discount)
}

/// Payable total, never below zero.
#[must_use]
pub fn cart_total_cents(subtotal_cents: i64, discount: f64) -> i64 {
    subtotal_cents
        .saturating_sub(discount_cents(discount))
        .max(0)
}
