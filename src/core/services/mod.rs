pub mod summary_service;
pub mod transaction_service;

pub use summary_service::{
    HomeSummary, ProfileSummary, StatisticsSummary, SummaryService, Totals,
};
pub use transaction_service::{Snapshot, TransactionService};

use crate::errors::ExpenseError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Expense(#[from] ExpenseError),
    #[error("{0}")]
    Invalid(String),
    #[error("record {record} belongs to {owner}, not to this snapshot's owner")]
    ForeignOwner { record: String, owner: String },
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Expense(ExpenseError::Serde(err))
    }
}
