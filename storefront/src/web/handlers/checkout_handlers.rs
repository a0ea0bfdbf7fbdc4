// storefront/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::required;
use crate::errors::AppError;
use crate::services::simulate_checkout;
use crate::state::AppState;
use thriftstore::UserId;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
  pub user_id: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
  pub message: String,
  pub order_id: String,
  pub item_count: u64,
  #[serde(with = "rust_decimal::serde::float")]
  pub total: Decimal,
}

#[instrument(name = "handler::checkout", skip_all, fields(user_id = %req_payload.user_id))]
pub async fn checkout_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CheckoutRequest>,
) -> Result<HttpResponse, AppError> {
  let user = UserId::new(required("userId", &req_payload.user_id)?);
  let receipt = simulate_checkout(&app_state.carts, &user, app_state.config.checkout_delay).await?;

  info!(order_reference = %receipt.reference, "Checkout completed.");
  Ok(HttpResponse::Ok().json(CheckoutResponse {
    message: "Order placed successfully".to_string(),
    order_id: receipt.reference,
    item_count: receipt.item_count,
    total: receipt.total,
  }))
}
