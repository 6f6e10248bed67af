#![allow(dead_code)]

use chrono::NaiveDate;
use pocket_ledger::{
    ledger::{Category, Transaction},
    storage::{CsvStorage, LedgerStore},
};
use tempfile::TempDir;

/// Creates an initialized ledger table inside a fresh temporary directory.
pub fn setup_store() -> (CsvStorage, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let store = CsvStorage::new(temp.path().join("finance_data.csv"));
    store.initialize().expect("initialize ledger table");
    (store, temp)
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%d-%m-%Y").expect("valid test date")
}

pub fn txn(raw_date: &str, amount: f64, category: Category, description: &str) -> Transaction {
    Transaction::new(date(raw_date), amount, category, description).expect("valid transaction")
}
