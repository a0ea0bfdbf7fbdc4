use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;
use thriftstore::filter::{apply, FilterConfig, PriceRange, SortOrder};
use thriftstore::{Category, Condition, Product, ProductId};

// --- Catalog generation ---
fn catalog(size: usize) -> Vec<Product> {
  let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
  (0..size)
    .map(|i| Product {
      id: ProductId::new(format!("p{}", i)),
      name: format!("Listing {}", i),
      description: if i % 7 == 0 {
        "Vintage jacket, lightly worn".to_string()
      } else {
        "Secondhand item in working order".to_string()
      },
      // Spread prices over 0.00..=299.99 so the default range drops some.
      price: Decimal::new(((i * 7919) % 30_000) as i64, 2),
      category: Category::ALL[i % Category::ALL.len()],
      condition: Condition::ALL[i % Condition::ALL.len()],
      image_url: String::new(),
      seller_id: format!("seller{}", i % 50),
      created_at: base + Duration::seconds(((i * 104_729) % 1_000_000) as i64),
    })
    .collect()
}

fn bench_filter_engine(c: &mut Criterion) {
  let mut group = c.benchmark_group("FilterEngine");

  let configs = [
    ("defaults", FilterConfig::default()),
    ("search", FilterConfig::default().with_search("jacket")),
    (
      "narrow",
      FilterConfig::default()
        .with_category(Category::Clothing)
        .with_condition(Condition::Good)
        .with_price_range(PriceRange::new(Decimal::from(20), Decimal::from(120)).unwrap_or_default()),
    ),
    ("price_high_low", FilterConfig::default().with_sort(SortOrder::PriceHighLow)),
  ];

  for size in [100usize, 1_000, 10_000] {
    let products = catalog(size);
    group.throughput(Throughput::Elements(size as u64));
    for (label, config) in &configs {
      group.bench_with_input(BenchmarkId::new(*label, size), &products, |b, products| {
        b.iter(|| apply(black_box(products), black_box(config)))
      });
    }
  }

  group.finish();
}

criterion_group!(benches, bench_filter_engine);
criterion_main!(benches);
