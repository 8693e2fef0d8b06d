use crate::core::history::KeyValueStorage;
use anyhow::{Context, Result};
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

const PARTITION_NAME: &str = "fxconv";

/// Client-local storage backed by a fjall keyspace with a single partition.
pub struct DiskStorage {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskStorage {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create data directory: {}", path.display()))?;

        let keyspace = Config::new(path)
            .open()
            .with_context(|| format!("Failed to open storage at {}", path.display()))?;
        let partition = keyspace
            .open_partition(PARTITION_NAME, PartitionCreateOptions::default())
            .context("Failed to open storage partition")?;
        debug!("Opened disk storage at {}", path.display());

        Ok(Self {
            keyspace,
            partition,
        })
    }
}

impl KeyValueStorage for DiskStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self.partition.get(key.as_bytes())?;
        debug!(key, hit = value.is_some(), "Disk storage GET");
        value
            .map(|bytes| String::from_utf8(bytes.to_vec()).context("Stored value is not UTF-8"))
            .transpose()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.partition.insert(key.as_bytes(), value.as_bytes())?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!(key, "Disk storage SET");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.partition.remove(key.as_bytes())?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!(key, "Disk storage REMOVE");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_disk_storage_get_set() {
        let dir = tempdir().unwrap();
        let storage = DiskStorage::open(dir.path()).unwrap();

        // Initially, storage is empty
        assert!(storage.get_item("key1").unwrap().is_none());

        storage.set_item("key1", r#"[{"a":1}]"#).unwrap();
        assert_eq!(
            storage.get_item("key1").unwrap().as_deref(),
            Some(r#"[{"a":1}]"#)
        );

        assert!(storage.get_item("key2").unwrap().is_none());
    }

    #[test]
    fn test_disk_storage_remove() {
        let dir = tempdir().unwrap();
        let storage = DiskStorage::open(dir.path()).unwrap();

        storage.set_item("key1", "value").unwrap();
        storage.remove_item("key1").unwrap();
        assert!(storage.get_item("key1").unwrap().is_none());

        storage.remove_item("key1").unwrap();
    }

    #[test]
    fn test_disk_storage_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested").join("history");
        let storage = DiskStorage::open(&nested).unwrap();
        storage.set_item("key", "value").unwrap();
        assert!(nested.exists());
    }
}
