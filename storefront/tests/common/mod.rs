// storefront/tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every fixture

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use once_cell::sync::Lazy;
use std::sync::Arc;

use storefront::config::AppConfig;
use storefront::state::AppState;
use thriftstore::{Category, Condition, MemoryCartStore, MemoryCatalog, Product, ProductId};

// --- Tracing, once per test binary ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_env_filter("debug")
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// In-memory configuration with no checkout delay.
pub fn test_config() -> AppConfig {
  AppConfig::from_source(|key| match key {
    "SEED_DB" => Some("false".to_string()),
    "CHECKOUT_DELAY_MS" => Some("0".to_string()),
    _ => None,
  })
  .expect("test config")
}

fn listing(id: &str, name: &str, description: &str, price_cents: i64, category: Category, condition: Condition, minute: i64) -> Product {
  Product {
    id: ProductId::from(id),
    name: name.to_string(),
    description: description.to_string(),
    price: Decimal::new(price_cents, 2),
    category,
    condition,
    image_url: format!("https://img.example/{}.jpg", id),
    seller_id: "seller-1".to_string(),
    created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::minutes(minute),
  }
}

/// Oldest first.
pub fn listings() -> Vec<Product> {
  vec![
    listing("jacket", "Denim Jacket", "Light wash, barely worn", 4500, Category::Clothing, Condition::LikeNew, 0),
    listing("lamp", "Brass Lamp", "Works with any E27 bulb", 7500, Category::HomeGoods, Condition::Fair, 1),
    listing("book", "Field Guide", "Birds of the region", 1200, Category::Books, Condition::Used, 2),
    listing("coat", "Rain Coat", "Pairs with a matching Jacket liner", 20000, Category::Clothing, Condition::Good, 3),
    listing("player", "Record Player", "Spins 33 and 45", 14999, Category::Electronics, Condition::Good, 4),
  ]
}

pub fn test_state() -> AppState {
  setup_tracing();
  AppState::new(
    Arc::new(MemoryCatalog::with_products(listings())),
    Arc::new(MemoryCartStore::new()),
    Arc::new(test_config()),
  )
}
