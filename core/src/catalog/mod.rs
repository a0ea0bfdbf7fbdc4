// thriftstore/src/catalog/mod.rs

//! The catalog store: the full set of listed products.
//!
//! [`Catalog`] is the seam between the cart aggregator / HTTP layer and whatever
//! actually holds listings. `MemoryCatalog` is the injected in-process store; the
//! storefront provides a PostgreSQL implementation.

pub mod memory;
pub mod seed;

use async_trait::async_trait;

use crate::error::Result;
use crate::product::{Category, NewProductInput, Product, ProductId};

pub use memory::MemoryCatalog;

#[async_trait]
pub trait Catalog: Send + Sync {
  /// Every listing, oldest first.
  async fn list_all(&self) -> Result<Vec<Product>>;

  /// Fails with `Error::NotFound` for unknown ids.
  async fn get_by_id(&self, id: &ProductId) -> Result<Product>;

  async fn list_by_category(&self, category: Category) -> Result<Vec<Product>>;

  /// Case-insensitive substring search over name and description.
  /// An empty term returns the whole catalog.
  async fn search(&self, term: &str) -> Result<Vec<Product>>;

  /// Validates the input, assigns id and creation time, and stores the listing.
  async fn create(&self, input: NewProductInput) -> Result<Product>;
}
