pub mod category;
pub mod common;
pub mod document;
pub mod draft;
pub mod transaction;

pub use common::Identifiable;
pub use document::{Document, SkipReason};
pub use draft::TransactionDraft;
pub use transaction::{TransactionKind, TransactionRecord};
