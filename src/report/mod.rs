//! Plain-text rendering of filtered transactions, their summary and a daily chart.

pub mod chart;
pub mod table;

use crate::{
    currency::CurrencyFormat,
    ledger::Transaction,
    query::{DateRange, Summary},
};

use self::table::{Alignment, Table, TableColumn};

pub use chart::render_chart;

const DESCRIPTION_WIDTH: usize = 40;

pub const EMPTY_RANGE_MESSAGE: &str = "No transactions found in the given date range.";

/// Tabular listing of `transactions` in the order given.
pub fn render_transactions(transactions: &[Transaction], format: &CurrencyFormat) -> String {
    if transactions.is_empty() {
        return EMPTY_RANGE_MESSAGE.to_string();
    }

    let mut table = Table::new(vec![
        TableColumn::new("Date", Alignment::Left),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Category", Alignment::Left),
        TableColumn::new("Description", Alignment::Left).max_width(DESCRIPTION_WIDTH),
    ]);
    for txn in transactions {
        table.push_row(vec![
            txn.date_label(),
            format.format(txn.amount()),
            txn.category.label().to_string(),
            txn.description.clone(),
        ]);
    }
    table.render()
}

pub fn render_summary(summary: &Summary, format: &CurrencyFormat) -> String {
    [
        format!("Total Income: {}", format.format(summary.total_income)),
        format!("Total Expense: {}", format.format(summary.total_expense)),
        format!("Net Savings: {}", format.format(summary.net_savings)),
    ]
    .join("\n")
}

/// Full report: heading, listing and summary lines.
pub fn render_report(
    range: &DateRange,
    transactions: &[Transaction],
    summary: &Summary,
    format: &CurrencyFormat,
) -> String {
    let heading = format!(
        "Transactions from {} to {}",
        range.start.format(crate::ledger::DATE_FORMAT),
        range.end.format(crate::ledger::DATE_FORMAT)
    );
    format!(
        "{heading}\n{}\n\nSummary:\n{}",
        render_transactions(transactions, format),
        render_summary(summary, format)
    )
}
