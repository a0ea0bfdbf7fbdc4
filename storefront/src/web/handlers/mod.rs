// storefront/src/web/handlers/mod.rs

pub mod cart_handlers;
pub mod checkout_handlers;
pub mod product_handlers;

use crate::errors::AppError;

/// Rejects blank identifiers that made it through JSON decoding.
pub(crate) fn required(field: &str, value: &str) -> Result<String, AppError> {
  let value = value.trim();
  if value.is_empty() {
    return Err(AppError::Validation(format!("Missing required fields: {}", field)));
  }
  Ok(value.to_string())
}
