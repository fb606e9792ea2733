use thiserror::Error;

/// Crate-level error for everything outside the pure aggregation engine.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    Validation(String),
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("Preference store error: {0}")]
    Preferences(String),
}
