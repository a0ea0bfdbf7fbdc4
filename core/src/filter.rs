// thriftstore/src/filter.rs

//! Derived, ordered views over a product list.
//!
//! [`apply`] narrows with the text, category, condition and price filters (in
//! that order) and then sorts. The input slice is never touched.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::product::{Category, Condition, Product};

/// Sentinel accepted wherever a dimension can be left unrestricted.
pub const ALL: &str = "all";

/// Either no restriction, or exactly one accepted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
  All,
  Only(T),
}

impl<T> Default for Selection<T> {
  fn default() -> Self {
    Selection::All
  }
}

impl<T: PartialEq> Selection<T> {
  pub fn accepts(&self, value: &T) -> bool {
    match self {
      Selection::All => true,
      Selection::Only(wanted) => wanted == value,
    }
  }
}

impl<T: FromStr<Err = Error>> FromStr for Selection<T> {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case(ALL) {
      Ok(Selection::All)
    } else {
      s.parse().map(Selection::Only)
    }
  }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Selection::All => f.write_str(ALL),
      Selection::Only(value) => value.fmt(f),
    }
  }
}

impl<T: fmt::Display> Serialize for Selection<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de, T: FromStr<Err = Error>> Deserialize<'de> for Selection<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
  pub min: Decimal,
  pub max: Decimal,
}

impl PriceRange {
  pub const DEFAULT_MIN: i64 = 0;
  pub const DEFAULT_MAX: i64 = 200;

  pub fn new(min: Decimal, max: Decimal) -> Result<Self> {
    if min > max {
      return Err(Error::validation(format!("Price range minimum {} exceeds maximum {}", min, max)));
    }
    Ok(PriceRange { min, max })
  }

  pub fn contains(&self, price: Decimal) -> bool {
    self.min <= price && price <= self.max
  }
}

impl Default for PriceRange {
  fn default() -> Self {
    PriceRange {
      min: Decimal::from(Self::DEFAULT_MIN),
      max: Decimal::from(Self::DEFAULT_MAX),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
  /// Descending creation time.
  #[default]
  Newest,
  PriceLowHigh,
  PriceHighLow,
}

impl FromStr for SortOrder {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim() {
      "" | "newest" => Ok(SortOrder::Newest),
      "price-low-high" => Ok(SortOrder::PriceLowHigh),
      "price-high-low" => Ok(SortOrder::PriceHighLow),
      other => Err(Error::validation(format!("Unknown sort order '{}'", other))),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
  pub search_term: String,
  pub category: Selection<Category>,
  pub condition: Selection<Condition>,
  pub price_range: PriceRange,
  pub sort: SortOrder,
}

impl FilterConfig {
  /// Restores every default: empty term, "all"/"all", [0, 200], newest.
  pub fn reset(&mut self) {
    *self = FilterConfig::default();
  }

  pub fn with_search(mut self, term: impl Into<String>) -> Self {
    self.search_term = term.into();
    self
  }

  pub fn with_category(mut self, category: Category) -> Self {
    self.category = Selection::Only(category);
    self
  }

  pub fn with_condition(mut self, condition: Condition) -> Self {
    self.condition = Selection::Only(condition);
    self
  }

  pub fn with_price_range(mut self, range: PriceRange) -> Self {
    self.price_range = range;
    self
  }

  pub fn with_sort(mut self, sort: SortOrder) -> Self {
    self.sort = sort;
    self
  }

  fn keeps(&self, product: &Product) -> bool {
    product.matches_term(&self.search_term)
      && self.category.accepts(&product.category)
      && self.condition.accepts(&product.condition)
      && self.price_range.contains(product.price)
  }
}

/// Filters then sorts a copy of `products`. Sorting is stable, so ties keep
/// their relative input order.
pub fn apply(products: &[Product], config: &FilterConfig) -> Vec<Product> {
  let mut results: Vec<Product> = products.iter().filter(|p| config.keeps(p)).cloned().collect();

  match config.sort {
    SortOrder::Newest => results.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    SortOrder::PriceLowHigh => results.sort_by(|a, b| a.price.cmp(&b.price)),
    SortOrder::PriceHighLow => results.sort_by(|a, b| b.price.cmp(&a.price)),
  }

  results
}
