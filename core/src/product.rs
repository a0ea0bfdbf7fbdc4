// thriftstore/src/product.rs

//! The canonical listing type and its closed enumerations.
//!
//! Every backend converts into [`Product`] at its edge; request bodies arrive as
//! [`NewProductInput`] and only become a listing after [`NewProductInput::validate`].

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

pub const DEFAULT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1613338027484-57b8061f3d09?auto=format&fit=crop&w=646&q=80";
pub const DEFAULT_SELLER_ID: &str = "current-user";

/// Decimal places kept on a listing price.
pub const PRICE_SCALE: u32 = 2;
/// Exclusive upper bound on a listing price.
pub const PRICE_LIMIT: i64 = 10_000_000_000;

/// Opaque product identity. Assigned by the catalog on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
  pub fn new(id: impl Into<String>) -> Self {
    ProductId(id.into())
  }

  pub fn generate() -> Self {
    ProductId(Uuid::new_v4().to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for ProductId {
  fn from(s: &str) -> Self {
    ProductId(s.to_string())
  }
}

impl From<String> for ProductId {
  fn from(s: String) -> Self {
    ProductId(s)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
  Clothing,
  Accessories,
  #[serde(rename = "Home Goods")]
  HomeGoods,
  Electronics,
  Books,
  Vintage,
  Collectibles,
  Art,
  Other,
}

impl Category {
  pub const ALL: [Category; 9] = [
    Category::Clothing,
    Category::Accessories,
    Category::HomeGoods,
    Category::Electronics,
    Category::Books,
    Category::Vintage,
    Category::Collectibles,
    Category::Art,
    Category::Other,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Clothing => "Clothing",
      Category::Accessories => "Accessories",
      Category::HomeGoods => "Home Goods",
      Category::Electronics => "Electronics",
      Category::Books => "Books",
      Category::Vintage => "Vintage",
      Category::Collectibles => "Collectibles",
      Category::Art => "Art",
      Category::Other => "Other",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Category {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Category::ALL
      .into_iter()
      .find(|c| c.as_str() == s)
      .ok_or_else(|| Error::validation(format!("Unknown category '{}'", s)))
  }
}

/// Item condition. Declaration order is best-first, so `New < Used` under `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Condition {
  New,
  #[serde(rename = "Like New")]
  LikeNew,
  Good,
  Fair,
  Used,
}

impl Condition {
  pub const ALL: [Condition; 5] = [
    Condition::New,
    Condition::LikeNew,
    Condition::Good,
    Condition::Fair,
    Condition::Used,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Condition::New => "New",
      Condition::LikeNew => "Like New",
      Condition::Good => "Good",
      Condition::Fair => "Fair",
      Condition::Used => "Used",
    }
  }
}

impl fmt::Display for Condition {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Condition {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Condition::ALL
      .into_iter()
      .find(|c| c.as_str() == s)
      .ok_or_else(|| Error::validation(format!("Unknown condition '{}'", s)))
  }
}

/// A listed item. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub description: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  pub category: Category,
  pub condition: Condition,
  pub image_url: String,
  pub seller_id: String,
  pub created_at: DateTime<Utc>,
}

impl Product {
  /// Case-insensitive substring match against name or description.
  /// The term is used as given, surrounding spaces included. An empty term
  /// matches everything.
  pub fn matches_term(&self, term: &str) -> bool {
    let needle = term.to_lowercase();
    if needle.is_empty() {
      return true;
    }
    self.name.to_lowercase().contains(&needle) || self.description.to_lowercase().contains(&needle)
  }
}

/// Raw creation request. Every field is optional so that missing values are
/// reported as a validation failure rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductInput {
  pub name: Option<String>,
  pub description: Option<String>,
  #[serde(default, with = "rust_decimal::serde::float_option")]
  pub price: Option<Decimal>,
  pub category: Option<String>,
  pub condition: Option<String>,
  pub image_url: Option<String>,
  pub seller_id: Option<String>,
}

/// A creation request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  pub name: String,
  pub description: String,
  pub price: Decimal,
  pub category: Category,
  pub condition: Condition,
  pub image_url: String,
  pub seller_id: String,
}

fn present(value: Option<String>) -> Option<String> {
  value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl NewProductInput {
  pub fn validate(self) -> Result<NewProduct> {
    let name = present(self.name);
    let description = present(self.description);
    let category = present(self.category);
    let condition = present(self.condition);

    let mut missing = Vec::new();
    if name.is_none() {
      missing.push("name");
    }
    if description.is_none() {
      missing.push("description");
    }
    if self.price.is_none() {
      missing.push("price");
    }
    if category.is_none() {
      missing.push("category");
    }
    if condition.is_none() {
      missing.push("condition");
    }

    let (Some(name), Some(description), Some(price), Some(category), Some(condition)) =
      (name, description, self.price, category, condition)
    else {
      return Err(Error::validation(format!("Missing required fields: {}", missing.join(", "))));
    };

    if price.is_sign_negative() && !price.is_zero() {
      return Err(Error::validation("Price must not be negative"));
    }
    // Stored with cents precision; half a cent rounds away from zero.
    let price = price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if price >= Decimal::from(PRICE_LIMIT) {
      return Err(Error::validation(format!("Price must be less than {}", PRICE_LIMIT)));
    }

    Ok(NewProduct {
      name,
      description,
      price,
      category: category.parse()?,
      condition: condition.parse()?,
      image_url: present(self.image_url).unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
      seller_id: present(self.seller_id).unwrap_or_else(|| DEFAULT_SELLER_ID.to_string()),
    })
  }
}

impl NewProduct {
  /// Assigns identity and creation time, producing the stored listing.
  pub fn into_listing(self, created_at: DateTime<Utc>) -> Product {
    Product {
      id: ProductId::generate(),
      name: self.name,
      description: self.description,
      price: self.price,
      category: self.category,
      condition: self.condition,
      image_url: self.image_url,
      seller_id: self.seller_id,
      created_at,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn complete_input() -> NewProductInput {
    NewProductInput {
      name: Some("Wool Scarf".to_string()),
      description: Some("Hand knitted".to_string()),
      price: Some(Decimal::new(1250, 2)),
      category: Some("Accessories".to_string()),
      condition: Some("Like New".to_string()),
      image_url: None,
      seller_id: None,
    }
  }

  #[test]
  fn validate_applies_defaults_for_optional_fields() {
    let product = complete_input().validate().unwrap();
    assert_eq!(product.category, Category::Accessories);
    assert_eq!(product.condition, Condition::LikeNew);
    assert_eq!(product.image_url, DEFAULT_IMAGE_URL);
    assert_eq!(product.seller_id, DEFAULT_SELLER_ID);
  }

  #[test]
  fn validate_lists_every_missing_field() {
    let input = NewProductInput {
      name: Some("   ".to_string()),
      price: None,
      ..complete_input()
    };
    match input.validate() {
      Err(Error::Validation(msg)) => {
        assert!(msg.contains("name"));
        assert!(msg.contains("price"));
        assert!(!msg.contains("description"));
      }
      other => panic!("expected validation error, got {:?}", other),
    }
  }

  #[test]
  fn validate_rejects_category_outside_enumeration() {
    let input = NewProductInput {
      category: Some("Furniture".to_string()),
      ..complete_input()
    };
    assert!(matches!(input.validate(), Err(Error::Validation(_))));
  }

  #[test]
  fn validate_rejects_negative_price() {
    let input = NewProductInput {
      price: Some(Decimal::new(-1, 0)),
      ..complete_input()
    };
    assert!(matches!(input.validate(), Err(Error::Validation(_))));
  }

  #[test]
  fn validate_rounds_price_to_cents() {
    let input = NewProductInput {
      price: Some(Decimal::new(10005, 3)),
      ..complete_input()
    };
    let product = input.validate().unwrap();
    assert_eq!(product.price, Decimal::new(1001, 2));
    assert_eq!(product.price.scale(), 2);
  }

  #[test]
  fn validate_bounds_price_below_limit() {
    let highest = NewProductInput {
      price: Some(Decimal::new(999_999_999_999, 2)),
      ..complete_input()
    };
    assert_eq!(highest.validate().unwrap().price, Decimal::new(999_999_999_999, 2));

    for price in [Decimal::from(PRICE_LIMIT), Decimal::from_i128_with_scale(5 * 10i128.pow(28), 0)] {
      let input = NewProductInput {
        price: Some(price),
        ..complete_input()
      };
      assert!(matches!(input.validate(), Err(Error::Validation(_))), "accepted {}", price);
    }
  }

  #[test]
  fn matches_term_keeps_surrounding_spaces() {
    let product = complete_input().validate().unwrap().into_listing(Utc::now());
    assert!(product.matches_term("wool"));
    assert!(product.matches_term("WOOL SCARF"));
    assert!(product.matches_term(""));
    assert!(!product.matches_term("scarf "));
  }

  #[test]
  fn condition_orders_best_first() {
    assert!(Condition::New < Condition::LikeNew);
    assert!(Condition::Fair < Condition::Used);
  }

  #[test]
  fn category_names_round_trip_through_serde() {
    let json = serde_json::to_string(&Category::HomeGoods).unwrap();
    assert_eq!(json, "\"Home Goods\"");
    assert_eq!("Home Goods".parse::<Category>().unwrap(), Category::HomeGoods);
  }
}
