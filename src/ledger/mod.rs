//! Ledger domain models shared by storage, queries and reports.

pub mod category;
pub mod transaction;

pub use category::Category;
pub use transaction::{parse_ledger_date, Transaction, DATE_FORMAT};
