// thriftstore/src/sync/mod.rs

//! Keeps a client's view of its cart in step with the durable store, using a
//! local mirror as the offline fallback.
//!
//! Reads try the remote first and fall back to the mirror. Writes go to the
//! remote first; the visible state (and then the mirror) only changes once the
//! remote has confirmed. A failed write leaves the previous state untouched.

pub mod mirror;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use crate::cart::{cart_count, cart_total, Cart, CartAggregator, CartItem, UserId};
use crate::error::Result;
use crate::product::ProductId;

pub use mirror::{FileMirror, MemoryMirror, STORAGE_KEY};

/// The durable side of the sync: anything that can serve the cart operations.
/// Each call returns the authoritative cart after the operation.
#[async_trait]
pub trait RemoteCart: Send + Sync {
  async fn fetch(&self, user: &UserId) -> Result<Cart>;
  async fn add(&self, user: &UserId, product_id: &ProductId, quantity: u32) -> Result<Cart>;
  async fn update(&self, user: &UserId, product_id: &ProductId, quantity: i64) -> Result<Cart>;
  async fn remove(&self, user: &UserId, product_id: &ProductId) -> Result<Cart>;
  async fn clear(&self, user: &UserId) -> Result<()>;
}

/// The aggregator can act as the remote directly when both live in one process.
#[async_trait]
impl RemoteCart for CartAggregator {
  async fn fetch(&self, user: &UserId) -> Result<Cart> {
    self.get_cart(user).await
  }

  async fn add(&self, user: &UserId, product_id: &ProductId, quantity: u32) -> Result<Cart> {
    self.add_item(user, product_id, quantity).await
  }

  async fn update(&self, user: &UserId, product_id: &ProductId, quantity: i64) -> Result<Cart> {
    self.set_quantity(user, product_id, quantity).await
  }

  async fn remove(&self, user: &UserId, product_id: &ProductId) -> Result<Cart> {
    self.remove_item(user, product_id).await
  }

  async fn clear(&self, user: &UserId) -> Result<()> {
    CartAggregator::clear(self, user).await
  }
}

/// Client-side copy of the last known-good cart contents.
pub trait LocalMirror: Send + Sync {
  /// `Ok(None)` when nothing has been mirrored yet.
  fn load(&self) -> Result<Option<Vec<CartItem>>>;
  fn store(&self, items: &[CartItem]) -> Result<()>;
}

/// Where the state visible after [`CartSync::load`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
  Remote,
  Mirror,
  /// Remote unavailable and nothing mirrored.
  Empty,
}

pub struct CartSync<R, M> {
  remote: R,
  mirror: M,
  user: UserId,
  items: Vec<CartItem>,
}

impl<R: RemoteCart, M: LocalMirror> CartSync<R, M> {
  pub fn new(remote: R, mirror: M, user: UserId) -> Self {
    CartSync {
      remote,
      mirror,
      user,
      items: Vec::new(),
    }
  }

  pub fn user(&self) -> &UserId {
    &self.user
  }

  pub fn items(&self) -> &[CartItem] {
    &self.items
  }

  pub fn total(&self) -> Result<Decimal> {
    cart_total(&self.items)
  }

  pub fn count(&self) -> u64 {
    cart_count(&self.items)
  }

  pub fn remote(&self) -> &R {
    &self.remote
  }

  pub fn mirror(&self) -> &M {
    &self.mirror
  }

  /// Loads from the remote, falling back to the mirror on any failure. Never fails.
  #[instrument(name = "sync::load", skip_all, fields(user = %self.user))]
  pub async fn load(&mut self) -> LoadSource {
    let (items, source) = match self.remote.fetch(&self.user).await {
      Ok(cart) => (cart.items, LoadSource::Remote),
      Err(e) => {
        warn!(error = %e, "Remote cart unavailable; falling back to local mirror");
        match self.mirror.load() {
          Ok(Some(items)) => (items, LoadSource::Mirror),
          Ok(None) => (Vec::new(), LoadSource::Empty),
          Err(mirror_err) => {
            warn!(error = %mirror_err, "Local mirror unreadable; starting with an empty cart");
            (Vec::new(), LoadSource::Empty)
          }
        }
      }
    };
    info!(?source, items = items.len(), "Cart state loaded");
    self.commit(items);
    source
  }

  #[instrument(name = "sync::add_item", skip_all, fields(user = %self.user, product = %product_id))]
  pub async fn add_item(&mut self, product_id: &ProductId, quantity: u32) -> Result<&[CartItem]> {
    let cart = self.remote.add(&self.user, product_id, quantity).await?;
    self.commit(cart.items);
    Ok(&self.items)
  }

  #[instrument(name = "sync::set_quantity", skip_all, fields(user = %self.user, product = %product_id))]
  pub async fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> Result<&[CartItem]> {
    let cart = self.remote.update(&self.user, product_id, quantity).await?;
    self.commit(cart.items);
    Ok(&self.items)
  }

  #[instrument(name = "sync::remove_item", skip_all, fields(user = %self.user, product = %product_id))]
  pub async fn remove_item(&mut self, product_id: &ProductId) -> Result<&[CartItem]> {
    let cart = self.remote.remove(&self.user, product_id).await?;
    self.commit(cart.items);
    Ok(&self.items)
  }

  #[instrument(name = "sync::clear", skip_all, fields(user = %self.user))]
  pub async fn clear(&mut self) -> Result<()> {
    self.remote.clear(&self.user).await?;
    self.commit(Vec::new());
    Ok(())
  }

  /// Replaces the visible state and refreshes the mirror. A mirror write
  /// failure is logged; the confirmed state still stands.
  fn commit(&mut self, items: Vec<CartItem>) {
    self.items = items;
    match self.mirror.store(&self.items) {
      Ok(()) => debug!(items = self.items.len(), "Local mirror refreshed"),
      Err(e) => warn!(error = %e, "Failed to refresh local mirror"),
    }
  }
}
