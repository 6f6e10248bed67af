pub mod summary_service;
pub mod transaction_service;

pub use summary_service::{RangeReport, SummaryService};
pub use transaction_service::TransactionService;

use crate::errors::{QueryError, StorageError, ValidationError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Query(#[from] QueryError),
}
