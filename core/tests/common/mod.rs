// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every fixture

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use thriftstore::{
  CartAggregator, CartStore, Category, Condition, MemoryCartStore, MemoryCatalog, Product, ProductId, StoredCart,
  UserId,
};
use tracing::Level;

// --- Tracing, once per test binary ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Product fixtures ---
pub fn base_time() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn product(id: &str, price_cents: i64, minutes_after_base: i64) -> Product {
  Product {
    id: ProductId::from(id),
    name: format!("Item {}", id),
    description: format!("Description of {}", id),
    price: Decimal::new(price_cents, 2),
    category: Category::Other,
    condition: Condition::Good,
    image_url: format!("https://img.example/{}.jpg", id),
    seller_id: "seller-1".to_string(),
    created_at: base_time() + Duration::minutes(minutes_after_base),
  }
}

/// A small mixed catalog, listed oldest first.
pub fn sample_listings() -> Vec<Product> {
  vec![
    Product {
      name: "Denim Jacket".to_string(),
      description: "Light wash, barely worn".to_string(),
      category: Category::Clothing,
      condition: Condition::LikeNew,
      ..product("jacket", 4500, 0)
    },
    Product {
      name: "Brass Lamp".to_string(),
      description: "Works with any E27 bulb".to_string(),
      category: Category::HomeGoods,
      condition: Condition::Fair,
      ..product("lamp", 7500, 1)
    },
    Product {
      name: "Field Guide".to_string(),
      description: "Birds of the region, some pencil notes".to_string(),
      category: Category::Books,
      condition: Condition::Used,
      ..product("book", 1200, 2)
    },
    Product {
      name: "Rain Coat".to_string(),
      description: "Yellow coat that pairs with a matching Jacket liner".to_string(),
      category: Category::Clothing,
      condition: Condition::Good,
      ..product("coat", 20000, 3)
    },
    Product {
      name: "Record Player".to_string(),
      description: "Serviced last year".to_string(),
      category: Category::Electronics,
      condition: Condition::Good,
      ..product("player", 14999, 4)
    },
  ]
}

pub fn aggregator_with(products: Vec<Product>) -> (CartAggregator, MemoryCatalog, MemoryCartStore) {
  let catalog = MemoryCatalog::with_products(products);
  let store = MemoryCartStore::new();
  let aggregator = CartAggregator::new(Arc::new(catalog.clone()), Arc::new(store.clone()));
  (aggregator, catalog, store)
}

pub fn user(id: &str) -> UserId {
  UserId::from(id)
}

// --- A cart store whose writes can be switched off ---
#[derive(Clone, Default)]
pub struct FlakyCartStore {
  pub inner: MemoryCartStore,
  pub fail_writes: Arc<AtomicBool>,
  pub save_calls: Arc<AtomicUsize>,
}

#[async_trait]
impl CartStore for FlakyCartStore {
  async fn load(&self, user: &UserId) -> thriftstore::Result<Option<StoredCart>> {
    self.inner.load(user).await
  }

  async fn save(&self, cart: &StoredCart) -> thriftstore::Result<()> {
    self.save_calls.fetch_add(1, Ordering::SeqCst);
    if self.fail_writes.load(Ordering::SeqCst) {
      return Err(thriftstore::Error::from(anyhow::anyhow!("connection refused")));
    }
    self.inner.save(cart).await
  }

  async fn delete(&self, user: &UserId) -> thriftstore::Result<()> {
    if self.fail_writes.load(Ordering::SeqCst) {
      return Err(thriftstore::Error::from(anyhow::anyhow!("connection refused")));
    }
    self.inner.delete(user).await
  }
}
