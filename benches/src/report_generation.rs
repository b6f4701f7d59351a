use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sales::prelude::*;

/// Build a synthetic dataset with a fixed seller/product pool
fn synthetic_dataset(sellers: usize, records: usize) -> SalesData {
    let sellers: Vec<Seller> = (1..=sellers as u64)
        .map(|id| Seller {
            id,
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            start_date: "2020-01-01".to_string(),
            position: "Seller".to_string(),
        })
        .collect();

    let products: Vec<Product> = (0..100u64)
        .map(|i| Product {
            sku: format!("SKU-{i}"),
            name: format!("Product {i}"),
            purchase_price: (i % 50) as f64 + 1.0,
        })
        .collect();

    let purchase_records: Vec<PurchaseRecord> = (0..records as u64)
        .map(|i| {
            let items: Vec<LineItem> = (0..3)
                .map(|j| LineItem {
                    sku: format!("SKU-{}", (i * 7 + j * 13) % 100),
                    quantity: Some(1 + (i + j) % 5),
                    sale_price: Some(10.0 + (i % 90) as f64),
                    discount: Some((i % 4) as f64 * 5.0),
                })
                .collect();

            PurchaseRecord {
                seller_id: 1 + i % sellers.len() as u64,
                customer_id: 1 + i % 500,
                date: format!("2024-{:02}-{:02}", 1 + i % 12, 1 + i % 28),
                total_amount: 100.0,
                total_discount: 0.0,
                items,
            }
        })
        .collect();

    SalesData {
        sellers,
        products,
        purchase_records,
    }
}

/// Benchmark the full analyze pipeline over growing record counts
fn bench_analyze_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_throughput");

    for count in [100, 1_000, 10_000] {
        let data = synthetic_dataset(50, count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter(|| black_box(analyze(data, &AnalyzeOptions::default()).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the join pass alone, without ranking and formatting
fn bench_join_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("join_pass");

    for count in [1_000, 10_000] {
        let data = synthetic_dataset(50, count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter_batched(
                || PurchaseProcessor::new(&data.sellers, &data.products, &DEFAULT_REVENUE),
                |mut processor| {
                    for record in &data.purchase_records {
                        processor.process_record(record);
                    }
                    black_box(processor.into_stats())
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analyze_throughput, bench_join_pass);
criterion_main!(benches);
