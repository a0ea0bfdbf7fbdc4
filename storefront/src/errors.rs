// storefront/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use thriftstore::Error as StoreError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Migration Error: {0}")]
  Migrate(#[from] sqlx::migrate::MigrateError),

  // Durable store or mirror failures coming out of the marketplace core.
  #[error("Store Error: {source}")]
  Store { source: StoreError },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl From<StoreError> for AppError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::Validation(m) => AppError::Validation(m),
      StoreError::NotFound(m) => AppError::NotFound(m),
      other => AppError::Store { source: other },
    }
  }
}

impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<StoreError>() {
      Ok(store_err) => AppError::from(store_err),
      Err(err) => AppError::Internal(err.to_string()),
    }
  }
}

impl AppError {
  /// The `{message}` sent to clients. Server-side failures get a generic text;
  /// the detail goes to the log instead.
  fn client_message(&self) -> String {
    match self {
      AppError::Validation(m) | AppError::NotFound(m) => m.clone(),
      _ => "Server error".to_string(),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with client error");
    }
    HttpResponse::build(status).json(json!({ "message": self.client_message() }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
