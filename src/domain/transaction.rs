//! The transaction record and its direction discriminator.

use std::fmt;

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

use crate::domain::common::Identifiable;

/// Currency code used when a record carries none.
pub const DEFAULT_CURRENCY_CODE: &str = "INR";

/// Direction of a transaction. Amounts are always non-negative; the kind decides
/// whether a record adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "INCOME",
            TransactionKind::Expense => "EXPENSE",
        }
    }

    /// Case-insensitive match against `INCOME` / `EXPENSE`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("income") {
            Some(TransactionKind::Income)
        } else if value.eq_ignore_ascii_case("expense") {
            Some(TransactionKind::Expense)
        } else {
            None
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// One income or expense entry owned by a single user.
///
/// Records are treated as immutable once loaded; an edit is a new record that
/// replaces the old one by `id`. `occurred_at` keeps the offset the record was
/// written with, so calendar views see the writer's local day and month. It is
/// `None` when the stored timestamp was missing or unreadable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<DateTime<FixedOffset>>,
    pub owner_id: String,
    pub currency_code: String,
}

impl TransactionRecord {
    /// Builds a record stamped with the current local time and the default currency code.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        kind: TransactionKind,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            amount,
            category: category.into(),
            kind,
            occurred_at: Some(Local::now().fixed_offset()),
            owner_id: owner_id.into(),
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
        }
    }

    pub fn with_occurred_at(mut self, occurred_at: Option<DateTime<FixedOffset>>) -> Self {
        self.occurred_at = occurred_at;
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// `"Jan 15, 2024"` in the record's own offset, or `"Unknown Date"`.
    pub fn display_date(&self) -> String {
        match self.occurred_at {
            Some(at) => at.format("%b %d, %Y").to_string(),
            None => "Unknown Date".to_string(),
        }
    }
}

impl Identifiable for TransactionRecord {
    fn id(&self) -> &str {
        &self.id
    }
}
