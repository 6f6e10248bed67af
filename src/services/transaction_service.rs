//! Business logic helpers for recording transactions.

use chrono::NaiveDate;

use crate::ledger::Transaction;
use crate::services::ServiceResult;
use crate::storage::LedgerStore;
use crate::validation::TransactionDraft;

/// Validates and records ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Validates a draft and appends it; nothing is written when validation fails.
    pub fn add(
        store: &dyn LedgerStore,
        draft: &TransactionDraft,
        today: NaiveDate,
    ) -> ServiceResult<Transaction> {
        let transaction = draft.validate(today)?;
        Self::record(store, &transaction)?;
        Ok(transaction)
    }

    /// Appends an already validated transaction.
    pub fn record(store: &dyn LedgerStore, transaction: &Transaction) -> ServiceResult<()> {
        store.append(transaction)?;
        tracing::info!(
            date = %transaction.date_label(),
            amount = transaction.amount(),
            category = %transaction.category,
            "transaction recorded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use crate::services::ServiceError;
    use crate::storage::CsvStorage;
    use tempfile::TempDir;

    fn store() -> (CsvStorage, TempDir) {
        let temp = TempDir::new().unwrap();
        let store = CsvStorage::new(temp.path().join("finance_data.csv"));
        store.initialize().unwrap();
        (store, temp)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 21).unwrap()
    }

    #[test]
    fn add_appends_validated_transaction() {
        let (store, _guard) = store();
        let draft = TransactionDraft::new("20-07-2025", "5000", "i", "Salary");
        let txn = TransactionService::add(&store, &draft, today()).unwrap();
        assert_eq!(txn.description, "Salary");
        assert_eq!(store.read_all().unwrap(), vec![txn]);
    }

    #[test]
    fn invalid_draft_leaves_store_untouched() {
        let (store, _guard) = store();
        let before = std::fs::read_to_string(store.path()).unwrap();
        let draft = TransactionDraft::new("20-07-2025", "-5", "E", "Refund?");
        let err = TransactionService::add(&store, &draft, today()).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::NonPositiveAmount(_))
        ));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }
}
