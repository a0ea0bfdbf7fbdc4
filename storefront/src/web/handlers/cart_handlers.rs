// storefront/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument};

use super::required;
use crate::errors::AppError;
use crate::state::AppState;
use thriftstore::{Cart, CartItem, Error as StoreError, ProductId, UserId};

// --- Response DTO ---

/// A resolved cart together with its derived totals.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CartResponse {
  pub user: UserId,
  pub items: Vec<CartItem>,
  pub count: u64,
  #[serde(with = "rust_decimal::serde::float")]
  pub total: Decimal,
}

impl TryFrom<Cart> for CartResponse {
  type Error = StoreError;

  fn try_from(cart: Cart) -> Result<Self, Self::Error> {
    let count = cart.count();
    let total = cart.total()?;
    Ok(CartResponse {
      user: cart.user,
      items: cart.items,
      count,
      total,
    })
  }
}

impl From<CartResponse> for Cart {
  fn from(response: CartResponse) -> Self {
    Cart {
      user: response.user,
      items: response.items,
    }
  }
}

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
  pub user_id: String,
  pub product_id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub quantity: Option<i64>,
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
  pub user_id: String,
  pub product_id: String,
  pub quantity: i64,
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest {
  pub user_id: String,
  pub product_id: String,
}

fn ids(user_id: &str, product_id: &str) -> Result<(UserId, ProductId), AppError> {
  let user = required("userId", user_id)?;
  let product = required("productId", product_id)?;
  Ok((UserId::new(user), ProductId::new(product)))
}

// --- Handlers ---

#[instrument(name = "handler::get_cart", skip_all, fields(user_id = %path.as_str()))]
pub async fn get_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let user = UserId::new(required("userId", &path)?);
  let cart = app_state.carts.get_cart(&user).await?;
  Ok(HttpResponse::Ok().json(CartResponse::try_from(cart)?))
}

#[instrument(
    name = "handler::add_to_cart",
    skip_all,
    fields(user_id = %req_payload.user_id, product_id = %req_payload.product_id)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequest>,
) -> Result<HttpResponse, AppError> {
  let (user, product_id) = ids(&req_payload.user_id, &req_payload.product_id)?;
  let quantity = req_payload.quantity.unwrap_or(1);
  let quantity = u32::try_from(quantity)
    .ok()
    .filter(|q| *q > 0)
    .ok_or_else(|| AppError::Validation("Quantity must be a positive number.".to_string()))?;

  let cart = app_state.carts.add_item(&user, &product_id, quantity).await?;
  info!(lines = cart.items.len(), "Add to cart successful.");
  Ok(HttpResponse::Ok().json(CartResponse::try_from(cart)?))
}

#[instrument(
    name = "handler::update_cart",
    skip_all,
    fields(user_id = %req_payload.user_id, product_id = %req_payload.product_id, quantity = req_payload.quantity)
)]
pub async fn update_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<UpdateCartRequest>,
) -> Result<HttpResponse, AppError> {
  let (user, product_id) = ids(&req_payload.user_id, &req_payload.product_id)?;
  let cart = app_state
    .carts
    .set_quantity(&user, &product_id, req_payload.quantity)
    .await?;
  Ok(HttpResponse::Ok().json(CartResponse::try_from(cart)?))
}

#[instrument(
    name = "handler::remove_from_cart",
    skip_all,
    fields(user_id = %req_payload.user_id, product_id = %req_payload.product_id)
)]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<RemoveFromCartRequest>,
) -> Result<HttpResponse, AppError> {
  let (user, product_id) = ids(&req_payload.user_id, &req_payload.product_id)?;
  let cart = app_state.carts.remove_item(&user, &product_id).await?;
  Ok(HttpResponse::Ok().json(CartResponse::try_from(cart)?))
}

#[instrument(name = "handler::clear_cart", skip_all, fields(user_id = %path.as_str()))]
pub async fn clear_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let user = UserId::new(required("userId", &path)?);
  app_state.carts.clear(&user).await?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Cart cleared successfully" })))
}
