use chrono::NaiveDate;

use crate::{errors::QueryError, ledger::Transaction};

/// Inclusive calendar range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, QueryError> {
        if start > end {
            return Err(QueryError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Transactions dated inside the range, in their original order.
    pub fn filter(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|txn| self.contains(txn.date))
            .cloned()
            .collect()
    }
}

/// Filters `transactions` to `[start, end]`, rejecting an inverted range.
pub fn filter_by_range(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Transaction>, QueryError> {
    let range = DateRange::new(start, end)?;
    let filtered = range.filter(transactions);
    tracing::debug!(
        start = %start,
        end = %end,
        total = transactions.len(),
        matched = filtered.len(),
        "filtered transactions by date range"
    );
    Ok(filtered)
}
