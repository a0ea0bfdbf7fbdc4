// storefront/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use thriftstore::{filter, Category, Condition, FilterConfig, NewProductInput, PriceRange, Product, ProductId, Selection, SortOrder};

#[instrument(name = "handler::list_products", skip_all)]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.catalog.list_all().await?;
  info!("Fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip_all, fields(product_id = %path.as_str()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = ProductId::new(path.into_inner());
  let product = app_state.catalog.get_by_id(&product_id).await?;
  Ok(HttpResponse::Ok().json(product))
}

/// Unknown category names yield an empty list rather than an error.
#[instrument(name = "handler::products_by_category", skip_all, fields(category = %path.as_str()))]
pub async fn products_by_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let category = match path.as_str().parse::<Category>() {
    Ok(category) => category,
    Err(_) => {
      warn!("Unknown category requested; returning no products.");
      return Ok(HttpResponse::Ok().json(Vec::<Product>::new()));
    }
  };
  let products = app_state.catalog.list_by_category(category).await?;
  Ok(HttpResponse::Ok().json(products))
}

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
  #[serde(default)]
  pub q: String,
}

#[instrument(name = "handler::search_products", skip_all, fields(term = %query.q))]
pub async fn search_products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
  let products = app_state.catalog.search(&query.q).await?;
  info!(matches = products.len(), "Search completed.");
  Ok(HttpResponse::Ok().json(products))
}

/// Query string for the filter/sort view. Every parameter is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BrowseQuery {
  pub q: Option<String>,
  pub category: Option<String>,
  pub condition: Option<String>,
  pub min_price: Option<String>,
  pub max_price: Option<String>,
  pub sort: Option<String>,
}

fn parse_price(name: &str, raw: Option<&str>, default: i64) -> Result<Decimal, AppError> {
  match raw.map(str::trim).filter(|v| !v.is_empty()) {
    None => Ok(Decimal::from(default)),
    Some(value) => {
      Decimal::from_str(value).map_err(|_| AppError::Validation(format!("Invalid {} '{}'", name, value)))
    }
  }
}

impl BrowseQuery {
  pub fn into_filter(self) -> Result<FilterConfig, AppError> {
    let category: Selection<Category> = self.category.as_deref().unwrap_or_default().parse()?;
    let condition: Selection<Condition> = self.condition.as_deref().unwrap_or_default().parse()?;
    let min = parse_price("minPrice", self.min_price.as_deref(), PriceRange::DEFAULT_MIN)?;
    let max = parse_price("maxPrice", self.max_price.as_deref(), PriceRange::DEFAULT_MAX)?;
    let sort: SortOrder = self.sort.as_deref().unwrap_or_default().parse()?;

    Ok(FilterConfig {
      search_term: self.q.unwrap_or_default(),
      category,
      condition,
      price_range: PriceRange::new(min, max)?,
      sort,
    })
  }
}

#[instrument(name = "handler::browse_products", skip_all)]
pub async fn browse_products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<BrowseQuery>,
) -> Result<HttpResponse, AppError> {
  let config = query.into_inner().into_filter()?;
  let products = app_state.catalog.list_all().await?;
  let visible = filter::apply(&products, &config);
  info!(total = products.len(), visible = visible.len(), sort = ?config.sort, "Applied browse filters.");
  Ok(HttpResponse::Ok().json(visible))
}

#[instrument(name = "handler::create_product", skip_all)]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<NewProductInput>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.catalog.create(payload.into_inner()).await?;
  info!(product_id = %product.id, "Product created.");
  Ok(HttpResponse::Created().json(product))
}

pub async fn list_categories_handler() -> HttpResponse {
  HttpResponse::Ok().json(Category::ALL)
}
