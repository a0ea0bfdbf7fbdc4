// thriftstore/src/cart/mod.rs

//! Cart model.
//!
//! A cart is persisted as a [`StoredCart`]: an ordered list of product ids and
//! quantities, one line per product. Readers always see a resolved [`Cart`] whose
//! items carry full product data; totals are computed on demand and never stored.

pub mod aggregator;
pub mod store;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::product::{Product, ProductId};

pub use aggregator::CartAggregator;
pub use store::{CartStore, MemoryCartStore};

/// Identity of the cart owner. Opaque; no authentication is attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
  pub fn new(id: impl Into<String>) -> Self {
    UserId(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for UserId {
  fn from(s: &str) -> Self {
    UserId(s.to_string())
  }
}

impl From<String> for UserId {
  fn from(s: String) -> Self {
    UserId(s)
  }
}

/// One persisted cart entry. `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
  pub product_id: ProductId,
  pub quantity: u32,
}

/// The durable form of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCart {
  pub user: UserId,
  pub lines: Vec<CartLine>,
}

impl StoredCart {
  pub fn new(user: UserId) -> Self {
    StoredCart { user, lines: Vec::new() }
  }

  fn position(&self, product_id: &ProductId) -> Option<usize> {
    self.lines.iter().position(|line| &line.product_id == product_id)
  }

  pub fn quantity_of(&self, product_id: &ProductId) -> Option<u32> {
    self.position(product_id).and_then(|idx| self.lines.get(idx)).map(|line| line.quantity)
  }

  /// Increments an existing line or appends a new one. Never creates a
  /// second line for the same product.
  pub fn add(&mut self, product_id: ProductId, quantity: u32) {
    match self.lines.iter_mut().find(|line| line.product_id == product_id) {
      Some(line) => line.quantity = line.quantity.saturating_add(quantity),
      None => self.lines.push(CartLine { product_id, quantity }),
    }
  }

  /// Overwrites a line's quantity; zero or below removes it.
  pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> Result<()> {
    let idx = self
      .position(product_id)
      .ok_or_else(|| Error::not_found("Item not found in cart"))?;
    if quantity <= 0 {
      self.lines.remove(idx);
      return Ok(());
    }
    let quantity = u32::try_from(quantity).map_err(|_| Error::validation("Quantity is too large"))?;
    if let Some(line) = self.lines.get_mut(idx) {
      line.quantity = quantity;
    }
    Ok(())
  }

  /// Returns whether a line was removed.
  pub fn remove(&mut self, product_id: &ProductId) -> bool {
    let before = self.lines.len();
    self.lines.retain(|line| &line.product_id != product_id);
    self.lines.len() != before
  }
}

/// A cart entry with its product resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
  pub product: Product,
  pub quantity: u32,
}

fn out_of_range() -> Error {
  Error::validation("Cart total exceeds the supported amount")
}

impl CartItem {
  pub fn subtotal(&self) -> Result<Decimal> {
    self
      .product
      .price
      .checked_mul(Decimal::from(self.quantity))
      .ok_or_else(out_of_range)
  }
}

/// `Σ price × quantity`. Fails instead of overflowing.
pub fn cart_total(items: &[CartItem]) -> Result<Decimal> {
  items.iter().try_fold(Decimal::ZERO, |total, item| {
    total.checked_add(item.subtotal()?).ok_or_else(out_of_range)
  })
}

/// `Σ quantity`.
pub fn cart_count(items: &[CartItem]) -> u64 {
  items.iter().map(|item| u64::from(item.quantity)).sum()
}

/// A resolved cart as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
  pub user: UserId,
  pub items: Vec<CartItem>,
}

impl Cart {
  pub fn empty(user: UserId) -> Self {
    Cart { user, items: Vec::new() }
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn total(&self) -> Result<Decimal> {
    cart_total(&self.items)
  }

  pub fn count(&self) -> u64 {
    cart_count(&self.items)
  }
}
