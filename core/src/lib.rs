// thriftstore/src/lib.rs

//! Thriftstore: the marketplace core behind the storefront.
//!
//! The crate holds the parts of a secondhand marketplace that carry real state
//! rules:
//!  - A catalog store of immutable listings with lookup, category listing and
//!    case-insensitive text search.
//!  - A cart aggregator that keeps one line per product per user and derives
//!    counts and totals on every read.
//!  - A pure filter/sort engine for the browse view.
//!  - A persistence adapter that mirrors a user's cart locally and falls back to
//!    the mirror when the durable store is unreachable.
//!
//! Storage is injected through the [`Catalog`] and [`CartStore`] traits; the
//! in-memory implementations here are complete stores, not test doubles.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod product;
pub mod sync;

// --- Re-exports for the Public API ---

pub use crate::cart::{cart_count, cart_total, Cart, CartAggregator, CartItem, CartLine, CartStore, MemoryCartStore, StoredCart, UserId};
pub use crate::catalog::{Catalog, MemoryCatalog};
pub use crate::error::{Error, Result};
pub use crate::filter::{apply, FilterConfig, PriceRange, Selection, SortOrder};
pub use crate::product::{Category, Condition, NewProduct, NewProductInput, Product, ProductId};
pub use crate::sync::{CartSync, FileMirror, LoadSource, LocalMirror, MemoryMirror, RemoteCart};
