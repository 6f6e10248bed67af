use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pocket_ledger::{
    ledger::{Category, Transaction},
    query::{filter_by_range, summarize},
    storage::{CsvStorage, LedgerStore},
};
use tempfile::tempdir;

fn build_sample_transactions(txn_count: usize) -> Vec<Transaction> {
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    (0..txn_count)
        .map(|idx| {
            let date = start_date + Duration::days((idx % 365) as i64);
            let category = if idx % 5 == 0 {
                Category::Income
            } else {
                Category::Expense
            };
            Transaction::new(date, 10.0 + (idx % 100) as f64, category, "bench").unwrap()
        })
        .collect()
}

fn bench_filter_and_summarize(c: &mut Criterion) {
    let transactions = build_sample_transactions(black_box(10_000));
    let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();

    c.bench_function("filter_summarize_10k", |b| {
        b.iter(|| {
            let filtered = filter_by_range(&transactions, start, end).expect("valid range");
            black_box(summarize(&filtered));
        })
    });
}

fn bench_read_all(c: &mut Criterion) {
    let dir = tempdir().expect("tempdir");
    let store = CsvStorage::new(dir.path().join("finance_data.csv"));
    store.initialize().expect("initialize");
    for txn in build_sample_transactions(10_000) {
        store.append(&txn).expect("append");
    }

    c.bench_function("csv_read_all_10k", |b| {
        b.iter(|| {
            black_box(store.read_all().expect("read ledger"));
        })
    });
}

criterion_group!(benches, bench_filter_and_summarize, bench_read_all);
criterion_main!(benches);
