// thriftstore/src/catalog/seed.rs

//! Sample listings used to populate an empty catalog.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::product::{Category, Condition, Product, ProductId};

struct SeedListing {
  name: &'static str,
  description: &'static str,
  price_cents: i64,
  category: Category,
  condition: Condition,
  image_url: &'static str,
  seller_id: &'static str,
}

const SEED_LISTINGS: [SeedListing; 5] = [
  SeedListing {
    name: "Vintage Leather Jacket",
    description: "A beautiful brown leather jacket from the 70s in excellent condition. Perfect for fall weather.",
    price_cents: 8999,
    category: Category::Clothing,
    condition: Condition::Good,
    image_url: "https://images.unsplash.com/photo-1551028719-00167b16eac5?auto=format&fit=crop&w=870&q=80",
    seller_id: "user1",
  },
  SeedListing {
    name: "Retro Record Player",
    description: "Fully functional vintage record player from the 60s. Recently serviced and ready to play your vinyl collection.",
    price_cents: 14999,
    category: Category::Electronics,
    condition: Condition::Fair,
    image_url: "https://images.unsplash.com/photo-1461360228754-6e81c478b882?auto=format&fit=crop&w=774&q=80",
    seller_id: "user2",
  },
  SeedListing {
    name: "Mid-Century Coffee Table",
    description: "Authentic mid-century modern coffee table with tapered legs and walnut finish. Minor scratches but overall great condition.",
    price_cents: 19999,
    category: Category::HomeGoods,
    condition: Condition::Good,
    image_url: "https://images.unsplash.com/photo-1532372320572-cda25653a26d?auto=format&fit=crop&w=1470&q=80",
    seller_id: "user3",
  },
  SeedListing {
    name: "Antique Brass Lamp",
    description: "Beautiful antique brass table lamp with original glass shade. Rewired and safe to use.",
    price_cents: 7500,
    category: Category::HomeGoods,
    condition: Condition::Good,
    image_url: "https://images.unsplash.com/photo-1543198126-a8ad8e47fb22?auto=format&fit=crop&w=687&q=80",
    seller_id: "user2",
  },
  SeedListing {
    name: "Vintage Polaroid Camera",
    description: "Working Polaroid camera from the 80s. Tested and works perfectly with new film.",
    price_cents: 6500,
    category: Category::Electronics,
    condition: Condition::LikeNew,
    image_url: "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f?auto=format&fit=crop&w=870&q=80",
    seller_id: "user4",
  },
];

/// Builds the sample listings. Creation times are one minute apart, ending at
/// `now`, so newest-first ordering is deterministic.
pub fn sample_products(now: DateTime<Utc>) -> Vec<Product> {
  let last = SEED_LISTINGS.len() as i64 - 1;
  SEED_LISTINGS
    .iter()
    .enumerate()
    .map(|(idx, seed)| Product {
      id: ProductId::generate(),
      name: seed.name.to_string(),
      description: seed.description.to_string(),
      price: Decimal::new(seed.price_cents, 2),
      category: seed.category,
      condition: seed.condition,
      image_url: seed.image_url.to_string(),
      seller_id: seed.seller_id.to_string(),
      created_at: now - Duration::minutes(last - idx as i64),
    })
    .collect()
}
