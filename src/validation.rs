//! Field validators turning raw user input into ledger values.
//!
//! Every validator is a pure function returning a [`ValidationError`] on bad
//! input; prompting again is left to the caller.

use chrono::{Local, NaiveDate};

use crate::errors::ValidationError;
use crate::ledger::{parse_ledger_date, Category, Transaction, DATE_FORMAT};

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a `dd-mm-yyyy` date. An empty input resolves to `default` when one is given.
pub fn parse_date(raw: &str, default: Option<NaiveDate>) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        if let Some(date) = default {
            return Ok(date);
        }
    }
    parse_ledger_date(trimmed).ok_or_else(|| ValidationError::InvalidDateFormat(raw.to_string()))
}

/// Validates a date and returns it in canonical `dd-mm-yyyy` form.
///
/// With `allow_default`, an empty input yields today's date.
pub fn validate_date(raw: &str, allow_default: bool) -> Result<String, ValidationError> {
    validate_date_on(raw, allow_default, today())
}

/// Same as [`validate_date`] with an explicit value for "today".
pub fn validate_date_on(
    raw: &str,
    allow_default: bool,
    today: NaiveDate,
) -> Result<String, ValidationError> {
    let default = allow_default.then_some(today);
    parse_date(raw, default).map(|date| date.format(DATE_FORMAT).to_string())
}

/// Parses a strictly positive decimal amount.
pub fn validate_amount(raw: &str) -> Result<f64, ValidationError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidAmount(raw.to_string()))?;
    if !value.is_finite() {
        return Err(ValidationError::InvalidAmount(raw.to_string()));
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveAmount(raw.trim().to_string()));
    }
    Ok(value)
}

/// Expands `I`/`E` (any case) to its category.
pub fn validate_category(raw: &str) -> Result<Category, ValidationError> {
    Category::from_shorthand(raw).ok_or_else(|| ValidationError::InvalidCategory(raw.to_string()))
}

/// Descriptions are free text; empty is allowed.
pub fn collect_description(raw: &str) -> String {
    raw.to_string()
}

/// Raw answers for a new transaction, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl TransactionDraft {
    pub fn new(
        date: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            amount: amount.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    /// Validates every field; an empty date falls back to `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<Transaction, ValidationError> {
        let date = parse_date(&self.date, Some(today))?;
        let amount = validate_amount(&self.amount)?;
        let category = validate_category(&self.category)?;
        Transaction::new(date, amount, category, collect_description(&self.description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn canonical_dates_round_trip() {
        for raw in ["20-07-2025", "01-01-2000", "29-02-2024", "31-12-1999"] {
            assert_eq!(validate_date(raw, false).unwrap(), raw);
            assert_eq!(validate_date(raw, true).unwrap(), raw);
        }
    }

    #[test]
    fn equivalent_dates_are_normalized() {
        assert_eq!(validate_date("1-7-2025", false).unwrap(), "01-07-2025");
        assert_eq!(validate_date(" 05-11-2024 ", false).unwrap(), "05-11-2024");
    }

    #[test]
    fn empty_date_defaults_only_when_allowed() {
        let today = day(2025, 7, 21);
        assert_eq!(validate_date_on("", true, today).unwrap(), "21-07-2025");
        assert_eq!(validate_date_on("  ", true, today).unwrap(), "21-07-2025");
        assert!(matches!(
            validate_date_on("", false, today),
            Err(ValidationError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for raw in [
            "2025-07-20",
            "32-01-2025",
            "29-02-2023",
            "20/07/2025",
            "tomorrow",
            "20-07-2025x",
            "20-07-25",
            "01-01-999",
            "01-01-+2025",
            "01-01-0",
        ] {
            assert!(
                matches!(validate_date(raw, true), Err(ValidationError::InvalidDateFormat(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn amount_accepts_positive_decimals() {
        assert_eq!(validate_amount("5000").unwrap(), 5000.0);
        assert_eq!(validate_amount(" 0.01 ").unwrap(), 0.01);
        assert_eq!(validate_amount("12.345").unwrap(), 12.345);
    }

    #[test]
    fn amount_rejects_zero_negative_and_garbage() {
        assert!(matches!(
            validate_amount("0"),
            Err(ValidationError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            validate_amount("-5"),
            Err(ValidationError::NonPositiveAmount(_))
        ));
        for raw in ["abc", "", "$10", "1,000", "NaN", "inf"] {
            assert!(
                matches!(validate_amount(raw), Err(ValidationError::InvalidAmount(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn category_is_case_insensitive() {
        assert_eq!(validate_category("i").unwrap(), Category::Income);
        assert_eq!(validate_category("I").unwrap(), Category::Income);
        assert_eq!(validate_category("e").unwrap(), Category::Expense);
        for raw in ["", "x", "Income", "IE"] {
            assert!(matches!(
                validate_category(raw),
                Err(ValidationError::InvalidCategory(_))
            ));
        }
    }

    #[test]
    fn description_passes_through() {
        assert_eq!(collect_description(""), "");
        assert_eq!(collect_description("Rent, July"), "Rent, July");
    }

    #[test]
    fn draft_validates_into_transaction() {
        let today = day(2025, 7, 21);
        let txn = TransactionDraft::new("", "200", "e", "Snacks")
            .validate(today)
            .unwrap();
        assert_eq!(txn.date, today);
        assert_eq!(txn.amount(), 200.0);
        assert_eq!(txn.category, Category::Expense);
        assert_eq!(txn.description, "Snacks");

        let err = TransactionDraft::new("20-07-2025", "-5", "I", "")
            .validate(today)
            .unwrap_err();
        assert!(matches!(err, ValidationError::NonPositiveAmount(_)));
    }
}
