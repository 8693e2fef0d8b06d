//! Bounded, most-recent-first conversion history.

use crate::core::conversion::ConversionRecord;
use anyhow::{Context, Result};
use chrono::{SubsecRound, Utc};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Maximum number of records kept.
pub const HISTORY_LIMIT: usize = 20;

/// Storage key holding the JSON encoded history.
pub const HISTORY_KEY: &str = "conversionHistory";

/// String key/value storage, shaped after browser local storage.
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Persistence for completed conversions.
///
/// Implementations never surface storage failures: history is non-essential
/// and must not block a conversion.
pub trait HistoryRepository: Send + Sync {
    /// Stamps `record` with the current time and prepends it.
    fn append(&self, record: ConversionRecord);

    /// All records, most recent first. Empty if nothing usable is stored.
    fn list(&self) -> Vec<ConversionRecord>;

    fn clear(&self);

    fn filter_by_currency(&self, code: &str) -> Vec<ConversionRecord> {
        self.list()
            .into_iter()
            .filter(|r| r.involves(code))
            .collect()
    }

    fn recent(&self, count: usize) -> Vec<ConversionRecord> {
        let mut records = self.list();
        records.truncate(count);
        records
    }
}

/// Sorted set of every currency appearing in `records`.
pub fn currencies_used(records: &[ConversionRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| [r.from.clone(), r.to.clone()])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub struct HistoryStore {
    storage: Arc<dyn KeyValueStorage>,
    // Serializes read-modify-write cycles within the process.
    write_lock: Mutex<()>,
}

impl HistoryStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    fn read(&self) -> Result<Vec<ConversionRecord>> {
        match self.storage.get_item(HISTORY_KEY)? {
            Some(raw) => serde_json::from_str(&raw).context("Failed to parse stored history"),
            None => Ok(Vec::new()),
        }
    }

    fn write(&self, records: &[ConversionRecord]) -> Result<()> {
        let raw = serde_json::to_string(records).context("Failed to serialize history")?;
        self.storage.set_item(HISTORY_KEY, &raw)
    }
}

impl HistoryRepository for HistoryStore {
    fn append(&self, mut record: ConversionRecord) {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        record.timestamp = Some(Utc::now().trunc_subsecs(0));

        let mut records = self.read().unwrap_or_else(|e| {
            warn!(error = %e, "Discarding unreadable history");
            Vec::new()
        });
        records.insert(0, record);
        records.truncate(HISTORY_LIMIT);

        match self.write(&records) {
            Ok(()) => debug!(count = records.len(), "Saved conversion history"),
            Err(e) => warn!(error = %e, "Error saving conversion history"),
        }
    }

    fn list(&self) -> Vec<ConversionRecord> {
        self.read().unwrap_or_else(|e| {
            warn!(error = %e, "Error loading conversion history");
            Vec::new()
        })
    }

    fn clear(&self) {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        match self.storage.remove_item(HISTORY_KEY) {
            Ok(()) => debug!("Cleared conversion history"),
            Err(e) => warn!(error = %e, "Error clearing conversion history"),
        }
    }
}
