use thiserror::Error;

/// Reasons the reference session refuses to finalize a sale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("cannot finalize a sale with an empty cart")]
    EmptyCart,
    #[error("cart line {index} has non-positive quantity {quantity}")]
    InvalidQuantity { index: usize, quantity: i32 },
}
