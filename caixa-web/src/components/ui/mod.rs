pub mod checkout_view;

pub use checkout_view::{CheckoutView, CheckoutViewProps};
