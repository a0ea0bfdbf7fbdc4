// tests/cart_tests.rs
mod common;

use common::*;
use rust_decimal::Decimal;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use thriftstore::{CartAggregator, CartStore, Error, MemoryCatalog, ProductId};

#[tokio::test]
async fn test_adding_same_product_twice_consolidates() {
  setup_tracing();
  let (aggregator, _catalog, _store) = aggregator_with(sample_listings());
  let alice = user("alice");
  let lamp = ProductId::from("lamp");

  aggregator.add_item(&alice, &lamp, 1).await.unwrap();
  let cart = aggregator.add_item(&alice, &lamp, 1).await.unwrap();

  assert_eq!(cart.items.len(), 1);
  assert_eq!(cart.items[0].quantity, 2);
  assert_eq!(cart.items[0].product.name, "Brass Lamp");
}

#[tokio::test]
async fn test_add_creates_cart_implicitly_and_keeps_insertion_order() {
  setup_tracing();
  let (aggregator, _catalog, store) = aggregator_with(sample_listings());
  let bob = user("bob");
  assert!(!store.contains(&bob));

  aggregator.add_item(&bob, &ProductId::from("book"), 1).await.unwrap();
  aggregator.add_item(&bob, &ProductId::from("jacket"), 3).await.unwrap();
  let cart = aggregator.add_item(&bob, &ProductId::from("book"), 2).await.unwrap();

  assert!(store.contains(&bob));
  let ids: Vec<&str> = cart.items.iter().map(|i| i.product.id.as_str()).collect();
  assert_eq!(ids, vec!["book", "jacket"]);
  assert_eq!(cart.count(), 6);
}

#[tokio::test]
async fn test_add_rejects_unknown_product_and_zero_quantity() {
  setup_tracing();
  let (aggregator, _catalog, store) = aggregator_with(sample_listings());
  let carol = user("carol");

  let missing = aggregator.add_item(&carol, &ProductId::from("ghost"), 1).await;
  assert!(matches!(missing, Err(Error::NotFound(_))));

  let zero = aggregator.add_item(&carol, &ProductId::from("lamp"), 0).await;
  assert!(matches!(zero, Err(Error::Validation(_))));

  assert!(!store.contains(&carol), "failed adds must not create a cart");
}

#[tokio::test]
async fn test_set_quantity_zero_matches_remove() {
  setup_tracing();
  let (via_set, _c1, _s1) = aggregator_with(sample_listings());
  let (via_remove, _c2, _s2) = aggregator_with(sample_listings());
  let dan = user("dan");

  for aggregator in [&via_set, &via_remove] {
    aggregator.add_item(&dan, &ProductId::from("lamp"), 2).await.unwrap();
    aggregator.add_item(&dan, &ProductId::from("book"), 1).await.unwrap();
  }

  let after_set = via_set.set_quantity(&dan, &ProductId::from("lamp"), 0).await.unwrap();
  let after_remove = via_remove.remove_item(&dan, &ProductId::from("lamp")).await.unwrap();

  assert_eq!(after_set, after_remove);
  assert_eq!(after_set.items.len(), 1);
}

#[tokio::test]
async fn test_set_quantity_overwrites_and_negative_removes() {
  setup_tracing();
  let (aggregator, _catalog, _store) = aggregator_with(sample_listings());
  let erin = user("erin");
  aggregator.add_item(&erin, &ProductId::from("player"), 1).await.unwrap();

  let cart = aggregator.set_quantity(&erin, &ProductId::from("player"), 5).await.unwrap();
  assert_eq!(cart.items[0].quantity, 5);

  let cart = aggregator.set_quantity(&erin, &ProductId::from("player"), -3).await.unwrap();
  assert!(cart.is_empty());
}

#[tokio::test]
async fn test_set_quantity_not_found_cases() {
  setup_tracing();
  let (aggregator, _catalog, _store) = aggregator_with(sample_listings());
  let frank = user("frank");

  let no_cart = aggregator.set_quantity(&frank, &ProductId::from("lamp"), 2).await;
  match no_cart {
    Err(Error::NotFound(msg)) => assert_eq!(msg, "Cart not found"),
    other => panic!("Expected NotFound for missing cart, got {:?}", other),
  }

  aggregator.add_item(&frank, &ProductId::from("book"), 1).await.unwrap();
  let no_entry = aggregator.set_quantity(&frank, &ProductId::from("lamp"), 2).await;
  match no_entry {
    Err(Error::NotFound(msg)) => assert_eq!(msg, "Item not found in cart"),
    other => panic!("Expected NotFound for missing entry, got {:?}", other),
  }
}

#[tokio::test]
async fn test_remove_missing_entry_is_noop() {
  setup_tracing();
  let (aggregator, _catalog, _store) = aggregator_with(sample_listings());
  let gina = user("gina");

  let empty = aggregator.remove_item(&gina, &ProductId::from("lamp")).await.unwrap();
  assert!(empty.is_empty());

  let before = aggregator.add_item(&gina, &ProductId::from("book"), 2).await.unwrap();
  let after = aggregator.remove_item(&gina, &ProductId::from("lamp")).await.unwrap();
  assert_eq!(before, after);
}

#[tokio::test]
async fn test_clear_deletes_record_and_get_returns_empty_shape() {
  setup_tracing();
  let (aggregator, _catalog, store) = aggregator_with(sample_listings());
  let hal = user("hal");

  aggregator.add_item(&hal, &ProductId::from("coat"), 1).await.unwrap();
  aggregator.clear(&hal).await.unwrap();

  assert!(!store.contains(&hal));
  let cart = aggregator.get_cart(&hal).await.unwrap();
  assert_eq!(cart.user, hal);
  assert!(cart.is_empty());
  assert_eq!(cart.total().unwrap(), Decimal::ZERO);
  assert_eq!(cart.count(), 0);
}

#[tokio::test]
async fn test_totals_are_derived_from_resolved_products() {
  setup_tracing();
  let p = product("p", 1000, 0);
  let q = product("q", 500, 1);
  let (aggregator, _catalog, _store) = aggregator_with(vec![p, q]);
  let ivy = user("ivy");

  aggregator.add_item(&ivy, &ProductId::from("p"), 2).await.unwrap();
  aggregator.add_item(&ivy, &ProductId::from("q"), 1).await.unwrap();
  let cart = aggregator.get_cart(&ivy).await.unwrap();

  assert_eq!(cart.total().unwrap(), Decimal::from(25));
  assert_eq!(cart.count(), 3);
}

#[tokio::test]
async fn test_failed_write_leaves_stored_cart_unchanged() {
  setup_tracing();
  let catalog = MemoryCatalog::with_products(sample_listings());
  let store = FlakyCartStore::default();
  let aggregator = CartAggregator::new(Arc::new(catalog), Arc::new(store.clone()));
  let jo = user("jo");

  aggregator.add_item(&jo, &ProductId::from("lamp"), 1).await.unwrap();
  store.fail_writes.store(true, Ordering::SeqCst);

  let result = aggregator.add_item(&jo, &ProductId::from("lamp"), 1).await;
  assert!(matches!(result, Err(ref e) if e.is_transport()));

  let stored = store.inner.load(&jo).await.unwrap().unwrap();
  assert_eq!(stored.quantity_of(&ProductId::from("lamp")), Some(1));
  assert_eq!(store.save_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_total_overflow_is_an_error_not_a_panic() {
  setup_tracing();
  // Inserted directly, so the price never went through validation.
  let huge = thriftstore::Product {
    price: Decimal::MAX,
    ..product("huge", 100, 0)
  };
  let (aggregator, _catalog, _store) = aggregator_with(vec![huge]);
  let carol = user("carol");

  let cart = aggregator.add_item(&carol, &ProductId::from("huge"), 2).await.unwrap();
  assert!(matches!(cart.total(), Err(Error::Validation(_))));
  assert_eq!(cart.count(), 2);

  let single = aggregator.set_quantity(&carol, &ProductId::from("huge"), 1).await.unwrap();
  assert_eq!(single.total().unwrap(), Decimal::MAX);
}
