// thriftstore/src/cart/aggregator.rs

use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{Cart, CartItem, CartStore, StoredCart, UserId};
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::product::ProductId;

/// Per-user cart operations over an injected catalog and cart store.
///
/// Every mutation loads the record, applies the change to a [`StoredCart`],
/// persists it, and hands back the resolved cart.
#[derive(Clone)]
pub struct CartAggregator {
  catalog: Arc<dyn Catalog>,
  store: Arc<dyn CartStore>,
}

impl CartAggregator {
  pub fn new(catalog: Arc<dyn Catalog>, store: Arc<dyn CartStore>) -> Self {
    CartAggregator { catalog, store }
  }

  #[instrument(name = "cart::add_item", skip_all, fields(user = %user, product = %product_id, quantity = quantity), err(Display))]
  pub async fn add_item(&self, user: &UserId, product_id: &ProductId, quantity: u32) -> Result<Cart> {
    if quantity == 0 {
      return Err(Error::validation("Quantity must be a positive number."));
    }
    // Reject unknown products before touching the cart record.
    self.catalog.get_by_id(product_id).await?;

    let mut cart = self
      .store
      .load(user)
      .await?
      .unwrap_or_else(|| StoredCart::new(user.clone()));
    cart.add(product_id.clone(), quantity);
    self.store.save(&cart).await?;

    info!(
      new_quantity = cart.quantity_of(product_id).unwrap_or_default(),
      lines = cart.lines.len(),
      "Item added to cart"
    );
    self.resolve(cart).await
  }

  #[instrument(name = "cart::set_quantity", skip_all, fields(user = %user, product = %product_id, quantity = quantity), err(Display))]
  pub async fn set_quantity(&self, user: &UserId, product_id: &ProductId, quantity: i64) -> Result<Cart> {
    let mut cart = self
      .store
      .load(user)
      .await?
      .ok_or_else(|| Error::not_found("Cart not found"))?;
    cart.set_quantity(product_id, quantity)?;
    self.store.save(&cart).await?;

    info!(lines = cart.lines.len(), "Cart quantity updated");
    self.resolve(cart).await
  }

  #[instrument(name = "cart::remove_item", skip_all, fields(user = %user, product = %product_id), err(Display))]
  pub async fn remove_item(&self, user: &UserId, product_id: &ProductId) -> Result<Cart> {
    let Some(mut cart) = self.store.load(user).await? else {
      return Ok(Cart::empty(user.clone()));
    };
    if cart.remove(product_id) {
      self.store.save(&cart).await?;
      info!(lines = cart.lines.len(), "Item removed from cart");
    }
    self.resolve(cart).await
  }

  #[instrument(name = "cart::clear", skip_all, fields(user = %user), err(Display))]
  pub async fn clear(&self, user: &UserId) -> Result<()> {
    self.store.delete(user).await?;
    info!("Cart cleared");
    Ok(())
  }

  #[instrument(name = "cart::get", skip_all, fields(user = %user), err(Display))]
  pub async fn get_cart(&self, user: &UserId) -> Result<Cart> {
    match self.store.load(user).await? {
      Some(cart) => self.resolve(cart).await,
      None => Ok(Cart::empty(user.clone())),
    }
  }

  async fn resolve(&self, cart: StoredCart) -> Result<Cart> {
    let mut items = Vec::with_capacity(cart.lines.len());
    for line in cart.lines {
      match self.catalog.get_by_id(&line.product_id).await {
        Ok(product) => items.push(CartItem {
          product,
          quantity: line.quantity,
        }),
        Err(Error::NotFound(_)) => {
          warn!(product = %line.product_id, "Cart references a product missing from the catalog; skipping");
        }
        Err(e) => return Err(e),
      }
    }
    Ok(Cart { user: cart.user, items })
  }
}
