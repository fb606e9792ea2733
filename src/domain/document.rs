//! Validated construction of records from loosely typed persistence documents.
//!
//! A document either becomes a complete [`TransactionRecord`] or is rejected with a
//! [`SkipReason`]; it is never patched up with placeholder values for the fields
//! aggregation depends on.

use chrono::{DateTime, FixedOffset};
use serde_json::{json, Map, Value};
use thiserror::Error;

use super::transaction::{TransactionKind, TransactionRecord, DEFAULT_CURRENCY_CODE};

/// JSON object as delivered by the document store.
pub type Document = Map<String, Value>;

/// Why a persistence document did not produce a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipReason {
    #[error("document is not an object")]
    NotAnObject,
    #[error("missing or empty field `{0}`")]
    MissingField(&'static str),
    #[error("field `amount` is not a number")]
    AmountNotNumeric,
    #[error("field `amount` must be finite and non-negative, got {0}")]
    AmountOutOfRange(f64),
    #[error("unknown transaction type `{0}`")]
    UnknownKind(String),
}

impl TransactionRecord {
    /// Builds a record from a persistence document.
    ///
    /// `id`, `category`, `userId`, `amount` and `type` are required. `title` defaults
    /// to empty and `currency` to `INR`. A missing or unreadable `timestamp` leaves
    /// `occurred_at` unset.
    pub fn from_document(doc: &Document) -> Result<Self, SkipReason> {
        let id = required_str(doc, "id")?;
        let category = required_str(doc, "category")?;
        let owner_id = required_str(doc, "userId")?;
        let amount = parse_amount(doc.get("amount"))?;
        let kind = match doc.get("type").and_then(Value::as_str) {
            Some(raw) => {
                TransactionKind::parse(raw).ok_or_else(|| SkipReason::UnknownKind(raw.to_string()))?
            }
            None => return Err(SkipReason::MissingField("type")),
        };

        let title = doc
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let currency_code = doc
            .get("currency")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .unwrap_or(DEFAULT_CURRENCY_CODE)
            .to_uppercase();
        let occurred_at = doc
            .get("timestamp")
            .or_else(|| doc.get("date"))
            .and_then(parse_timestamp);

        Ok(Self {
            id,
            title,
            amount,
            category,
            kind,
            occurred_at,
            owner_id,
            currency_code,
        })
    }

    /// Same as [`TransactionRecord::from_document`] for an arbitrary JSON value.
    pub fn from_value(value: &Value) -> Result<Self, SkipReason> {
        match value {
            Value::Object(doc) => Self::from_document(doc),
            _ => Err(SkipReason::NotAnObject),
        }
    }

    /// Inverse of [`TransactionRecord::from_document`]; timestamps are written as RFC 3339.
    pub fn to_document(&self) -> Document {
        let mut doc = Map::new();
        doc.insert("id".into(), json!(self.id));
        doc.insert("title".into(), json!(self.title));
        doc.insert("amount".into(), json!(self.amount));
        doc.insert("category".into(), json!(self.category));
        doc.insert("type".into(), json!(self.kind.as_str()));
        if let Some(at) = self.occurred_at {
            doc.insert("timestamp".into(), json!(at.to_rfc3339()));
        }
        doc.insert("userId".into(), json!(self.owner_id));
        doc.insert("currency".into(), json!(self.currency_code));
        doc
    }
}

fn required_str(doc: &Document, key: &'static str) -> Result<String, SkipReason> {
    doc.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(SkipReason::MissingField(key))
}

fn parse_amount(value: Option<&Value>) -> Result<f64, SkipReason> {
    let value = value.ok_or(SkipReason::MissingField("amount"))?;
    let amount = value.as_f64().ok_or(SkipReason::AmountNotNumeric)?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(SkipReason::AmountOutOfRange(amount));
    }
    Ok(amount)
}

/// RFC 3339 string (offset kept), or epoch seconds / a `{seconds, nanoseconds}`
/// object, which carry no offset and are read as UTC.
fn parse_timestamp(value: &Value) -> Option<DateTime<FixedOffset>> {
    match value {
        Value::String(raw) => DateTime::parse_from_rfc3339(raw.trim()).ok(),
        Value::Number(number) => {
            DateTime::from_timestamp(number.as_i64()?, 0).map(|at| at.fixed_offset())
        }
        Value::Object(fields) => {
            let seconds = fields
                .get("seconds")
                .or_else(|| fields.get("_seconds"))
                .and_then(Value::as_i64)?;
            let nanos = fields
                .get("nanoseconds")
                .or_else(|| fields.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .and_then(|nanos| u32::try_from(nanos).ok())
                .unwrap_or(0);
            DateTime::from_timestamp(seconds, nanos).map(|at| at.fixed_offset())
        }
        _ => None,
    }
}
