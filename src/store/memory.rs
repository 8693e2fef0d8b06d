use crate::core::history::KeyValueStorage;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// In-memory storage implementation using HashMap and Mutex
#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates a new, empty MemoryStorage instance
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.inner.lock().map_err(|e| anyhow!("{e}"))?;
        let value = items.get(key).cloned();
        debug!(key, hit = value.is_some(), "Memory storage GET");
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.inner.lock().map_err(|e| anyhow!("{e}"))?;
        debug!(key, "Memory storage SET");
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.inner.lock().map_err(|e| anyhow!("{e}"))?;
        items.remove(key);
        debug!(key, "Memory storage REMOVE");
        Ok(())
    }
}
