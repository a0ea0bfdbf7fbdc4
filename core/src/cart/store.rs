// thriftstore/src/cart/store.rs

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::{StoredCart, UserId};
use crate::error::Result;

/// Durable storage for cart records, keyed by owner.
#[async_trait]
pub trait CartStore: Send + Sync {
  async fn load(&self, user: &UserId) -> Result<Option<StoredCart>>;

  /// Replaces the whole record for `cart.user`.
  async fn save(&self, cart: &StoredCart) -> Result<()>;

  /// Deletes the record. Deleting a missing record is not an error.
  async fn delete(&self, user: &UserId) -> Result<()>;
}

/// In-process cart records.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStore {
  carts: Arc<RwLock<HashMap<UserId, StoredCart>>>,
}

impl MemoryCartStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn contains(&self, user: &UserId) -> bool {
    self.carts.read().contains_key(user)
  }
}

#[async_trait]
impl CartStore for MemoryCartStore {
  async fn load(&self, user: &UserId) -> Result<Option<StoredCart>> {
    Ok(self.carts.read().get(user).cloned())
  }

  async fn save(&self, cart: &StoredCart) -> Result<()> {
    self.carts.write().insert(cart.user.clone(), cart.clone());
    Ok(())
  }

  async fn delete(&self, user: &UserId) -> Result<()> {
    self.carts.write().remove(user);
    Ok(())
  }
}
