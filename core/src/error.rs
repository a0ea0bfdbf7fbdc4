// thriftstore/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failures surfaced by catalog, cart and sync operations.
#[derive(Debug, Error)]
pub enum Error {
  /// Missing or malformed input, e.g. a product created without a name.
  #[error("{0}")]
  Validation(String),

  /// Unknown product id, or a cart/entry that does not exist.
  #[error("{0}")]
  NotFound(String),

  /// The durable store could not be reached or answered with a server error.
  #[error("Durable store unavailable: {source}")]
  Transport {
    #[source]
    source: AnyhowError,
  },

  /// The local mirror could not be read or written.
  #[error("Local mirror error: {0}")]
  Mirror(String),
}

impl Error {
  pub fn validation(msg: impl Into<String>) -> Self {
    Error::Validation(msg.into())
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Error::NotFound(msg.into())
  }

  /// Wraps any error coming out of a durable store backend.
  pub fn transport<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Error::Transport { source: AnyhowError::new(err) }
  }

  /// True for failures that should make a reader fall back to the local mirror.
  pub fn is_transport(&self) -> bool {
    matches!(self, Error::Transport { .. })
  }
}

impl From<AnyhowError> for Error {
  fn from(err: AnyhowError) -> Self {
    // Avoid Transport(Transport(..)) when an anyhow error already wraps one of ours.
    match err.downcast::<Error>() {
      Ok(inner) => inner,
      Err(err) => Error::Transport { source: err },
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
