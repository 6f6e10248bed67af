use chrono::NaiveDate;

use crate::errors::ValidationError;

use super::category::Category;

/// Canonical textual form of a ledger date (`dd-mm-yyyy`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses a `dd-mm-yyyy` date.
///
/// Day and month take one or two digits; the year must be exactly four
/// unsigned digits, which `%Y` alone does not enforce.
pub fn parse_ledger_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('-');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    if !(digits(day, 1, 2) && digits(month, 1, 2) && digits(year, 4, 4)) {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// A single income or expense entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    amount: f64,
    pub category: Category,
    pub description: String,
}

impl Transaction {
    /// Builds a transaction, rejecting amounts that are zero, negative or not finite.
    pub fn new(
        date: NaiveDate,
        amount: f64,
        category: Category,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount(amount.to_string()));
        }
        Ok(Self {
            date,
            amount,
            category,
            description: description.into(),
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}
