// storefront/src/services/mod.rs

pub mod checkout;

pub use checkout::{simulate_checkout, CheckoutReceipt};
