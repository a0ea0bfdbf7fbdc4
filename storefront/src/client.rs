// storefront/src/client.rs

//! HTTP client for the cart endpoints, usable as the remote side of a
//! [`thriftstore::CartSync`].

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::web::handlers::cart_handlers::{AddToCartRequest, CartResponse, RemoveFromCartRequest, UpdateCartRequest};
use thriftstore::{Cart, Error as StoreError, ProductId, RemoteCart, Result, UserId};

#[derive(Debug, Deserialize)]
struct ErrorBody {
  message: String,
}

#[derive(Debug, Clone)]
pub struct HttpCartClient {
  base: Url,
  http: Client,
}

/// Per-request limit; a hung remote counts as unreachable.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

impl HttpCartClient {
  /// `base_url` is the API root, e.g. `http://127.0.0.1:5000/api`.
  pub fn new(base_url: &str) -> Result<Self> {
    Self::with_timeout(base_url, DEFAULT_TIMEOUT)
  }

  pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
    let base = Url::parse(base_url)
      .map_err(|e| StoreError::validation(format!("Invalid base URL '{}': {}", base_url, e)))?;
    if base.cannot_be_a_base() {
      return Err(StoreError::validation(format!("Invalid base URL '{}'", base_url)));
    }
    let http = Client::builder()
      .timeout(timeout)
      .build()
      .map_err(StoreError::transport)?;
    Ok(HttpCartClient { base, http })
  }

  fn endpoint(&self, segments: &[&str]) -> Result<Url> {
    let mut url = self.base.clone();
    url
      .path_segments_mut()
      .map_err(|_| StoreError::validation(format!("Invalid base URL '{}'", self.base)))?
      .pop_if_empty()
      .extend(segments);
    Ok(url)
  }

  async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = Self::check(response).await?;
    response.json::<T>().await.map_err(StoreError::transport)
  }

  /// Maps error statuses onto the core error kinds using the `{message}` body.
  async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
      return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
      .map(|body| body.message)
      .unwrap_or(text);
    debug!(%status, %message, "Cart endpoint returned an error");

    Err(match status {
      StatusCode::NOT_FOUND => StoreError::not_found(message),
      StatusCode::BAD_REQUEST => StoreError::validation(message),
      _ => StoreError::from(anyhow::anyhow!("cart request failed with status {}: {}", status, message)),
    })
  }

  async fn send_cart(&self, request: reqwest::RequestBuilder) -> Result<Cart> {
    let response = request.send().await.map_err(StoreError::transport)?;
    let body: CartResponse = Self::decode(response).await?;
    Ok(body.into())
  }
}

#[async_trait]
impl RemoteCart for HttpCartClient {
  #[instrument(name = "http_cart::fetch", skip_all, fields(user = %user))]
  async fn fetch(&self, user: &UserId) -> Result<Cart> {
    let url = self.endpoint(&["cart", user.as_str()])?;
    self.send_cart(self.http.get(url)).await
  }

  #[instrument(name = "http_cart::add", skip_all, fields(user = %user, product = %product_id))]
  async fn add(&self, user: &UserId, product_id: &ProductId, quantity: u32) -> Result<Cart> {
    let url = self.endpoint(&["cart", "add"])?;
    let body = AddToCartRequest {
      user_id: user.to_string(),
      product_id: product_id.to_string(),
      quantity: Some(i64::from(quantity)),
    };
    self.send_cart(self.http.post(url).json(&body)).await
  }

  #[instrument(name = "http_cart::update", skip_all, fields(user = %user, product = %product_id))]
  async fn update(&self, user: &UserId, product_id: &ProductId, quantity: i64) -> Result<Cart> {
    let url = self.endpoint(&["cart", "update"])?;
    let body = UpdateCartRequest {
      user_id: user.to_string(),
      product_id: product_id.to_string(),
      quantity,
    };
    self.send_cart(self.http.put(url).json(&body)).await
  }

  #[instrument(name = "http_cart::remove", skip_all, fields(user = %user, product = %product_id))]
  async fn remove(&self, user: &UserId, product_id: &ProductId) -> Result<Cart> {
    let url = self.endpoint(&["cart", "remove"])?;
    let body = RemoveFromCartRequest {
      user_id: user.to_string(),
      product_id: product_id.to_string(),
    };
    self.send_cart(self.http.delete(url).json(&body)).await
  }

  #[instrument(name = "http_cart::clear", skip_all, fields(user = %user))]
  async fn clear(&self, user: &UserId) -> Result<()> {
    let url = self.endpoint(&["cart", "clear", user.as_str()])?;
    let response = self.http.delete(url).send().await.map_err(StoreError::transport)?;
    Self::check(response).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn endpoint_appends_encoded_segments() {
    let client = HttpCartClient::new("http://127.0.0.1:5000/api").unwrap();
    let url = client.endpoint(&["cart", "user 1"]).unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/cart/user%201");

    let trailing = HttpCartClient::new("http://127.0.0.1:5000/api/").unwrap();
    assert_eq!(
      trailing.endpoint(&["cart", "add"]).unwrap().as_str(),
      "http://127.0.0.1:5000/api/cart/add"
    );
  }

  #[test]
  fn rejects_unusable_base_urls() {
    assert!(matches!(HttpCartClient::new("not a url"), Err(StoreError::Validation(_))));
    assert!(matches!(HttpCartClient::new("mailto:cart@example.com"), Err(StoreError::Validation(_))));
  }
}
