//! Boundary between the document store and the aggregation engine.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::aggregation::recency_cmp;
use crate::core::services::{ServiceError, ServiceResult};
use crate::currency::Currency;
use crate::domain::{Identifiable, TransactionDraft, TransactionRecord};

/// One owner's records as of a single push from persistence, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub owner_id: String,
    pub records: Vec<TransactionRecord>,
    /// Documents dropped because they were malformed or belonged to another owner.
    pub skipped: usize,
}

impl Snapshot {
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Inserts `record`, replacing any record with the same id.
    pub fn upsert(&mut self, record: TransactionRecord) -> ServiceResult<()> {
        if record.owner_id != self.owner_id {
            return Err(ServiceError::ForeignOwner {
                record: record.id,
                owner: record.owner_id,
            });
        }
        self.records.retain(|existing| existing.id() != record.id());
        self.records.push(record);
        self.records.sort_by(recency_cmp);
        Ok(())
    }
}

pub struct TransactionService;

impl TransactionService {
    /// Parses a batch of persistence documents into an owner-scoped snapshot.
    ///
    /// A later document with an already seen `id` replaces the earlier one.
    pub fn ingest<'a, I>(owner_id: &str, documents: I) -> Snapshot
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut records: Vec<TransactionRecord> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut skipped = 0;
        for (position, document) in documents.into_iter().enumerate() {
            let record = match TransactionRecord::from_value(document) {
                Ok(record) => record,
                Err(reason) => {
                    let id = document.get("id").and_then(Value::as_str).unwrap_or("?");
                    warn!(position, id, %reason, "skipping transaction document");
                    skipped += 1;
                    continue;
                }
            };
            if record.owner_id != owner_id {
                warn!(id = %record.id, "dropping record owned by another user");
                skipped += 1;
                continue;
            }
            match positions.get(&record.id).copied() {
                Some(slot) => {
                    debug!(id = %record.id, "document replaces an earlier one with the same id");
                    records[slot] = record;
                }
                None => {
                    positions.insert(record.id.clone(), records.len());
                    records.push(record);
                }
            }
        }
        records.sort_by(recency_cmp);
        info!(
            owner = owner_id,
            loaded = records.len(),
            skipped,
            "transaction snapshot ready"
        );
        Snapshot {
            owner_id: owner_id.to_string(),
            records,
            skipped,
        }
    }

    /// Parses a JSON array of documents as exported from the document store.
    pub fn ingest_json(owner_id: &str, raw: &str) -> ServiceResult<Snapshot> {
        let value: Value = serde_json::from_str(raw)?;
        let documents = value.as_array().ok_or_else(|| {
            ServiceError::Invalid("expected a JSON array of transaction documents".into())
        })?;
        Ok(Self::ingest(owner_id, documents))
    }

    /// Validates a form draft and produces the record to hand to persistence.
    pub fn create(
        draft: TransactionDraft,
        owner_id: &str,
        currency: Currency,
        now: DateTime<FixedOffset>,
    ) -> ServiceResult<TransactionRecord> {
        let record = draft.into_record(owner_id, currency, now)?;
        debug!(id = %record.id, owner = owner_id, kind = %record.kind, "transaction created");
        Ok(record)
    }
}
