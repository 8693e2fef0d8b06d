pub mod disk;
pub mod memory;

use crate::core::history::KeyValueStorage;
use disk::DiskStorage;
use memory::MemoryStorage;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Opens the on-disk storage at `path`, falling back to a process-local
/// in-memory store when it can't be opened. History is then kept for the
/// current run only.
pub fn open_storage(path: &Path) -> Arc<dyn KeyValueStorage> {
    match DiskStorage::open(path) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            warn!(error = %e, "Falling back to in-memory history storage");
            Arc::new(MemoryStorage::new())
        }
    }
}
