use chrono::NaiveDate;

use crate::currency::CurrencyFormat;
use crate::ledger::Transaction;
use crate::query::{daily_totals, summarize, DailyTotals, DateRange, Summary};
use crate::report;
use crate::storage::LedgerStore;

use super::ServiceResult;

/// Transactions inside a date range together with their totals.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeReport {
    pub range: DateRange,
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
}

impl RangeReport {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn daily_totals(&self) -> Vec<DailyTotals> {
        daily_totals(&self.transactions, &self.range)
    }

    pub fn render(&self, format: &CurrencyFormat) -> String {
        report::render_report(&self.range, &self.transactions, &self.summary, format)
    }

    pub fn render_chart(&self, format: &CurrencyFormat, width: usize) -> String {
        report::render_chart(&self.daily_totals(), format, width)
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Reads the whole ledger and reports on `[start, end]`.
    ///
    /// The range is checked before any storage access; a malformed stored row fails the query.
    pub fn view_range(
        store: &dyn LedgerStore,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ServiceResult<RangeReport> {
        let range = DateRange::new(start, end)?;
        let all = store.read_all()?;
        let transactions = range.filter(&all);
        let summary = summarize(&transactions);
        tracing::info!(
            start = %start,
            end = %end,
            matched = transactions.len(),
            net = summary.net_savings,
            "range report computed"
        );
        Ok(RangeReport {
            range,
            transactions,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{QueryError, StorageError};
    use crate::ledger::Category;
    use crate::services::ServiceError;
    use crate::storage::CsvStorage;
    use tempfile::TempDir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    #[test]
    fn inverted_range_fails_before_reading() {
        let temp = TempDir::new().unwrap();
        let store = CsvStorage::new(temp.path().join("finance_data.csv"));
        std::fs::write(store.path(), "date,amount,category,description\nbogus,1,Income,\n").unwrap();
        let err = SummaryService::view_range(&store, day(21), day(20)).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Query(QueryError::InvertedRange { .. })
        ));
    }

    #[test]
    fn malformed_row_fails_the_query() {
        let temp = TempDir::new().unwrap();
        let store = CsvStorage::new(temp.path().join("finance_data.csv"));
        std::fs::write(store.path(), "date,amount,category,description\nbogus,1,Income,\n").unwrap();
        let err = SummaryService::view_range(&store, day(20), day(21)).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Storage(StorageError::DateParse { line: 2, .. })
        ));
    }

    #[test]
    fn report_exposes_daily_totals() {
        let temp = TempDir::new().unwrap();
        let store = CsvStorage::new(temp.path().join("finance_data.csv"));
        let txn = Transaction::new(day(20), 30.0, Category::Expense, "Lunch").unwrap();
        store.append(&txn).unwrap();
        let report = SummaryService::view_range(&store, day(19), day(21)).unwrap();
        assert!(!report.is_empty());
        let days = report.daily_totals();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, day(20));
        assert_eq!(days[0].expense, 30.0);
        assert!(report.render(&CurrencyFormat::default()).contains("Lunch"));
    }
}
