#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use expense_core::domain::{TransactionKind, TransactionRecord};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn day(year: i32, month: u32, day: u32) -> Option<DateTime<FixedOffset>> {
    Some(Utc.with_ymd_and_hms(year, month, day, 8, 0, 0).unwrap().fixed_offset())
}

pub fn record(
    id: &str,
    kind: TransactionKind,
    amount: f64,
    category: &str,
    occurred_at: Option<DateTime<FixedOffset>>,
) -> TransactionRecord {
    TransactionRecord::new(id, format!("{category} {id}"), amount, category, kind, "owner-1")
        .with_occurred_at(occurred_at)
}

/// Export of a small household ledger, including one foreign and one broken document.
pub fn sample_documents() -> Value {
    json!([
        {"id": "1", "title": "January pay", "amount": 1000, "category": "Salary",
         "type": "INCOME", "timestamp": "2024-01-05T09:00:00Z", "userId": "owner-1"},
        {"id": "2", "title": "Dinner", "amount": 100.0, "category": "Food & Dining",
         "type": "EXPENSE", "timestamp": "2024-01-15T19:00:00Z", "userId": "owner-1"},
        {"id": "3", "title": "Brunch", "amount": 150.0, "category": "Food & Dining",
         "type": "EXPENSE", "timestamp": "2024-02-01T11:00:00Z", "userId": "owner-1"},
        {"id": "4", "title": "Train", "amount": 50.0, "category": "Travel",
         "type": "EXPENSE", "timestamp": {"seconds": 1706918400, "nanoseconds": 0},
         "userId": "owner-1"},
        {"id": "5", "title": "Cash gift", "amount": 20.0, "category": "Gift",
         "type": "INCOME", "userId": "owner-1"},
        {"id": "6", "title": "Not mine", "amount": 999.0, "category": "Travel",
         "type": "EXPENSE", "timestamp": "2024-02-03T00:00:00Z", "userId": "owner-2"},
        {"id": "7", "title": "Corrupt", "amount": "NaN", "category": "Other",
         "type": "EXPENSE", "userId": "owner-1"}
    ])
}
