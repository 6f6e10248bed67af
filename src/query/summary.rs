use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::ledger::{Category, Transaction};

use super::range::DateRange;

/// Income, expense and net totals over a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_savings: f64,
}

impl Summary {
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.total_income, self.total_expense, self.net_savings)
    }
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    let (total_income, total_expense) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expense), txn| match txn.category {
                Category::Income => (income + txn.amount(), expense),
                Category::Expense => (income, expense + txn.amount()),
            });
    Summary {
        total_income,
        total_expense,
        net_savings: total_income - total_expense,
    }
}

/// Income and expense booked on a single day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
}

/// Per-day totals inside `range`, oldest first. Days without activity are left out.
pub fn daily_totals(transactions: &[Transaction], range: &DateRange) -> Vec<DailyTotals> {
    let mut per_day: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for txn in transactions.iter().filter(|txn| range.contains(txn.date)) {
        let entry = per_day.entry(txn.date).or_insert((0.0, 0.0));
        match txn.category {
            Category::Income => entry.0 += txn.amount(),
            Category::Expense => entry.1 += txn.amount(),
        }
    }
    per_day
        .into_iter()
        .map(|(date, (income, expense))| DailyTotals {
            date,
            income,
            expense,
        })
        .collect()
}
