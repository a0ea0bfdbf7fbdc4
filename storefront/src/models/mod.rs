// storefront/src/models/mod.rs

//! Database records. They are converted into the core types at the storage edge
//! and never travel further in.

pub mod cart_item;
pub mod product;

pub use cart_item::CartItemRow;
pub use product::ProductRow;
