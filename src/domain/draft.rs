//! The add-transaction form: raw input, its validation messages, and the record it
//! produces once valid.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{category::default_category, TransactionKind, TransactionRecord};
use crate::{currency::Currency, errors::ExpenseError};

pub const MSG_MISSING_FIELDS: &str = "Please fill all fields";
pub const MSG_INVALID_AMOUNT: &str = "Please enter a valid amount";

/// Unvalidated input from the add-transaction form. `amount` is kept as typed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDraft {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub kind: TransactionKind,
}

impl TransactionDraft {
    pub fn new(kind: TransactionKind) -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category: default_category(kind).to_string(),
            kind,
        }
    }

    /// Switches direction and resets the category to that direction's default.
    pub fn set_kind(&mut self, kind: TransactionKind) {
        self.kind = kind;
        self.category = default_category(kind).to_string();
    }

    /// Replaces the amount with a quick-amount preset.
    pub fn apply_quick_amount(&mut self, preset: &str) {
        self.amount = preset.to_string();
    }

    pub fn parsed_amount(&self) -> Result<f64, ExpenseError> {
        if self.title.trim().is_empty() || self.amount.trim().is_empty() {
            return Err(ExpenseError::Validation(MSG_MISSING_FIELDS.into()));
        }
        match self.amount.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
            _ => Err(ExpenseError::Validation(MSG_INVALID_AMOUNT.into())),
        }
    }

    /// Validates the draft and stamps a new record for `owner_id`.
    pub fn into_record(
        self,
        owner_id: &str,
        currency: Currency,
        now: DateTime<FixedOffset>,
    ) -> Result<TransactionRecord, ExpenseError> {
        let amount = self.parsed_amount()?;
        if owner_id.trim().is_empty() {
            return Err(ExpenseError::Validation("no signed-in user".into()));
        }
        Ok(TransactionRecord {
            id: Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            amount,
            category: self.category,
            kind: self.kind,
            occurred_at: Some(now),
            owner_id: owner_id.to_string(),
            currency_code: currency.code().to_string(),
        })
    }
}
