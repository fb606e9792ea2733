use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use expense_core::core::aggregation::{by_category, by_month, net_balance};
use expense_core::core::services::{SummaryService, TransactionService};
use expense_core::domain::{TransactionKind, TransactionRecord};

const CATEGORIES: [&str; 6] = [
    "Food & Dining",
    "Transport",
    "Shopping",
    "Travel",
    "Salary",
    "Gift",
];

fn build_sample_records(count: usize) -> Vec<TransactionRecord> {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap().fixed_offset();
    (0..count)
        .map(|idx| {
            let kind = if idx % 5 == 0 {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            let occurred_at = (idx % 97 != 0).then(|| start + Duration::days((idx % 730) as i64));
            TransactionRecord::new(
                format!("txn-{idx}"),
                "bench",
                10.0 + (idx % 100) as f64,
                CATEGORIES[idx % CATEGORIES.len()],
                kind,
                "bench-owner",
            )
            .with_occurred_at(occurred_at)
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let records = build_sample_records(black_box(10_000));

    c.bench_function("net_balance_10k", |b| {
        b.iter(|| black_box(net_balance(&records)))
    });
    c.bench_function("by_category_10k", |b| {
        b.iter(|| black_box(by_category(&records, TransactionKind::Expense)))
    });
    c.bench_function("by_month_10k", |b| b.iter(|| black_box(by_month(&records))));
    c.bench_function("statistics_summary_10k", |b| {
        b.iter(|| black_box(SummaryService::statistics(&records)))
    });
}

fn bench_ingest(c: &mut Criterion) {
    let documents: Vec<_> = build_sample_records(10_000)
        .iter()
        .map(|record| serde_json::Value::Object(record.to_document()))
        .collect();

    c.bench_function("ingest_10k", |b| {
        b.iter(|| black_box(TransactionService::ingest("bench-owner", &documents)))
    });
}

criterion_group!(benches, bench_aggregation, bench_ingest);
criterion_main!(benches);
