pub mod csv_backend;

use std::path::Path;

use crate::{errors::StorageError, ledger::Transaction};

pub type Result<T> = std::result::Result<T, StorageError>;

/// Column header row of the ledger table.
pub const HEADER: [&str; 4] = ["date", "amount", "category", "description"];

/// Append-only persistence for ledger transactions.
pub trait LedgerStore {
    /// Ensures the backing table exists with its header row. Safe to call repeatedly.
    fn initialize(&self) -> Result<()>;

    /// Adds one transaction to the end of the table.
    fn append(&self, transaction: &Transaction) -> Result<()>;

    /// Returns every stored transaction in storage order.
    ///
    /// A missing or empty table reads as an empty ledger.
    fn read_all(&self) -> Result<Vec<Transaction>>;

    fn path(&self) -> &Path;
}

pub use csv_backend::CsvStorage;
