//! Pure aggregation over an owner's transaction records.
//!
//! Every function here is deterministic, allocation-light and never mutates its
//! input, so callers may re-run them on each new snapshot from persistence.

use std::{cmp::Ordering, collections::HashMap, fmt};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::{TransactionKind, TransactionRecord};

/// Summed amount for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
    /// Percentage of the kind's total, `0` when that total is zero.
    pub share: f64,
}

/// Number of records filed under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Calendar bucket a record falls into, keyed by the first day of its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MonthLabel {
    Month(NaiveDate),
    Unknown,
}

impl MonthLabel {
    /// Bucket for `record`, taken in the offset its timestamp was written with.
    pub fn of(record: &TransactionRecord) -> Self {
        record
            .occurred_at
            .and_then(|at| at.date_naive().with_day(1))
            .map_or(MonthLabel::Unknown, MonthLabel::Month)
    }

    /// `None` for an invalid month.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(MonthLabel::Month)
    }

    /// Newest month first; `Unknown` after every real month.
    fn recency_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (MonthLabel::Month(a), MonthLabel::Month(b)) => b.cmp(a),
            (MonthLabel::Month(_), MonthLabel::Unknown) => Ordering::Less,
            (MonthLabel::Unknown, MonthLabel::Month(_)) => Ordering::Greater,
            (MonthLabel::Unknown, MonthLabel::Unknown) => Ordering::Equal,
        }
    }
}

/// Renders as `MMM yyyy` (e.g. `Feb 2024`) or `Unknown`.
impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthLabel::Month(first) => write!(f, "{}", first.format("%b %Y")),
            MonthLabel::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Income and expense subtotals for one month bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotals {
    pub label: MonthLabel,
    pub income: f64,
    pub expense: f64,
}

impl MonthlyTotals {
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

pub fn total_for(records: &[TransactionRecord], kind: TransactionKind) -> f64 {
    records
        .iter()
        .filter(|record| record.kind == kind)
        .fold(0.0, |acc, record| acc + record.amount)
}

/// Income minus expense; negative when spending exceeds earnings.
pub fn net_balance(records: &[TransactionRecord]) -> f64 {
    total_for(records, TransactionKind::Income) - total_for(records, TransactionKind::Expense)
}

/// `amount` as a percentage of `total`; `0` unless `total` is positive.
pub fn category_share(amount: f64, total: f64) -> f64 {
    if total > 0.0 {
        amount / total * 100.0
    } else {
        0.0
    }
}

/// Per-category sums for `kind`, largest first. Equal sums keep the order in
/// which their categories first appeared.
pub fn by_category(records: &[TransactionRecord], kind: TransactionKind) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for record in records.iter().filter(|record| record.kind == kind) {
        match index.get(record.category.as_str()) {
            Some(&slot) => totals[slot].amount += record.amount,
            None => {
                index.insert(record.category.as_str(), totals.len());
                totals.push(CategoryTotal {
                    category: record.category.clone(),
                    amount: record.amount,
                    share: 0.0,
                });
            }
        }
    }
    let total = total_for(records, kind);
    for entry in &mut totals {
        entry.share = category_share(entry.amount, total);
    }
    totals.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    totals
}

/// Per-category record counts for `kind`, most used first, stable on ties.
pub fn count_by_category(
    records: &[TransactionRecord],
    kind: TransactionKind,
) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for record in records.iter().filter(|record| record.kind == kind) {
        match index.get(record.category.as_str()) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(record.category.as_str(), counts.len());
                counts.push(CategoryCount {
                    category: record.category.clone(),
                    count: 1,
                });
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Buckets every record by calendar month, newest month first, with the
/// `Unknown` bucket (records without a timestamp) last.
pub fn by_month(records: &[TransactionRecord]) -> Vec<MonthlyTotals> {
    let mut buckets: Vec<MonthlyTotals> = Vec::new();
    let mut index: HashMap<MonthLabel, usize> = HashMap::new();
    for record in records {
        let label = MonthLabel::of(record);
        let slot = *index.entry(label).or_insert_with(|| {
            buckets.push(MonthlyTotals {
                label,
                income: 0.0,
                expense: 0.0,
            });
            buckets.len() - 1
        });
        let bucket = &mut buckets[slot];
        match record.kind {
            TransactionKind::Income => bucket.income += record.amount,
            TransactionKind::Expense => bucket.expense += record.amount,
        }
    }
    buckets.sort_by(|a, b| a.label.recency_cmp(&b.label));
    buckets
}

/// First `n` entries of an already ordered sequence.
pub fn top_n<T>(seq: &[T], n: usize) -> &[T] {
    &seq[..n.min(seq.len())]
}

/// Newest first; records without a timestamp sort after all dated ones.
pub fn recency_cmp(a: &TransactionRecord, b: &TransactionRecord) -> Ordering {
    match (a.occurred_at, b.occurred_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The `n` most recent records, newest first.
pub fn recent(records: &[TransactionRecord], n: usize) -> Vec<&TransactionRecord> {
    let mut ordered: Vec<&TransactionRecord> = records.iter().collect();
    ordered.sort_by(|a, b| recency_cmp(a, b));
    ordered.truncate(n);
    ordered
}
