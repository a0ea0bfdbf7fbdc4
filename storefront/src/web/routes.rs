// storefront/src/web/routes.rs

use actix_web::{error, web, HttpResponse};

use crate::errors::AppError;
use crate::web::handlers::{cart_handlers, checkout_handlers, product_handlers};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Malformed bodies, query strings and paths are client errors with the
/// usual `{message}` body.
fn extractor_configs(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
      error::Error::from(AppError::Validation(format!("Invalid request body: {}", err)))
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
      error::Error::from(AppError::Validation(format!("Invalid query string: {}", err)))
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
      error::Error::from(AppError::Validation(format!("Invalid path: {}", err)))
    }));
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  extractor_configs(cfg);

  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .route("/categories", web::get().to(product_handlers::list_categories_handler))
      // Fixed segments are registered ahead of `/{product_id}`.
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("", web::post().to(product_handlers::create_product_handler))
          .route("/search", web::get().to(product_handlers::search_products_handler))
          .route("/browse", web::get().to(product_handlers::browse_products_handler))
          .route(
            "/category/{category}",
            web::get().to(product_handlers::products_by_category_handler),
          )
          .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
      )
      .service(
        web::scope("/cart")
          .route("/add", web::post().to(cart_handlers::add_to_cart_handler))
          .route("/update", web::put().to(cart_handlers::update_cart_handler))
          .route("/remove", web::delete().to(cart_handlers::remove_from_cart_handler))
          .route("/clear/{user_id}", web::delete().to(cart_handlers::clear_cart_handler))
          .route("/{user_id}", web::get().to(cart_handlers::get_cart_handler)),
      )
      .route("/checkout", web::post().to(checkout_handlers::checkout_handler)),
  );
}
