//! Date-range filtering and aggregation over ledger transactions.

pub mod range;
pub mod summary;

pub use range::{filter_by_range, DateRange};
pub use summary::{daily_totals, summarize, DailyTotals, Summary};
