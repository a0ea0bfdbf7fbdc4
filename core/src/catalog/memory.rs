// thriftstore/src/catalog/memory.rs

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

use super::Catalog;
use crate::error::{Error, Result};
use crate::product::{Category, NewProductInput, Product, ProductId};

/// In-process product store. Cloning shares the underlying list.
///
/// Guards are only held for the duration of a synchronous copy and never
/// across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
  products: Arc<RwLock<Vec<Product>>>,
}

impl MemoryCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_products(products: Vec<Product>) -> Self {
    MemoryCatalog {
      products: Arc::new(RwLock::new(products)),
    }
  }

  /// Inserts an already-built listing (seeding, fixtures).
  pub fn insert(&self, product: Product) {
    self.products.write().push(product);
  }

  pub fn len(&self) -> usize {
    self.products.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.read().is_empty()
  }

  fn select(&self, keep: impl Fn(&Product) -> bool) -> Vec<Product> {
    self.products.read().iter().filter(|p| keep(p)).cloned().collect()
  }
}

#[async_trait]
impl Catalog for MemoryCatalog {
  async fn list_all(&self) -> Result<Vec<Product>> {
    Ok(self.products.read().clone())
  }

  async fn get_by_id(&self, id: &ProductId) -> Result<Product> {
    self
      .products
      .read()
      .iter()
      .find(|p| &p.id == id)
      .cloned()
      .ok_or_else(|| Error::not_found("Product not found"))
  }

  async fn list_by_category(&self, category: Category) -> Result<Vec<Product>> {
    Ok(self.select(|p| p.category == category))
  }

  async fn search(&self, term: &str) -> Result<Vec<Product>> {
    let found = self.select(|p| p.matches_term(term));
    debug!(term, hits = found.len(), "Memory catalog search");
    Ok(found)
  }

  async fn create(&self, input: NewProductInput) -> Result<Product> {
    let product = input.validate()?.into_listing(Utc::now());
    info!(product_id = %product.id, name = %product.name, "Listing created in memory catalog");
    self.products.write().push(product.clone());
    Ok(product)
  }
}
