use super::backend::{DataFile, StorageBackend};
use crate::error::{ClinicError, Result};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded.
/// This keeps `StorageBackend` on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    files: RefCell<HashMap<DataFile, String>>,
    failing_writes: RefCell<HashSet<DataFile>>,
    failing_reads: RefCell<HashSet<DataFile>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write to `file` fail, to exercise per-file error handling.
    pub fn fail_writes_to(&self, file: DataFile) {
        self.failing_writes.borrow_mut().insert(file);
    }

    /// Make every read of `file` fail with an I/O error.
    pub fn fail_reads_of(&self, file: DataFile) {
        self.failing_reads.borrow_mut().insert(file);
    }

    /// Test helper to place raw file content directly, bypassing the codec.
    pub fn put_raw(&self, file: DataFile, content: impl Into<String>) {
        self.files.borrow_mut().insert(file, content.into());
    }

    /// Test helper to inspect what was last written.
    pub fn raw(&self, file: DataFile) -> Option<String> {
        self.files.borrow().get(&file).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, file: DataFile) -> Result<Option<String>> {
        if self.failing_reads.borrow().contains(&file) {
            return Err(ClinicError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("simulated read error on {}", file),
            )));
        }
        Ok(self.files.borrow().get(&file).cloned())
    }

    fn write(&self, file: DataFile, content: &str) -> Result<()> {
        if self.failing_writes.borrow().contains(&file) {
            return Err(ClinicError::Store(format!(
                "Simulated write error on {}",
                file
            )));
        }
        self.files.borrow_mut().insert(file, content.to_string());
        Ok(())
    }

    fn location(&self, file: DataFile) -> PathBuf {
        PathBuf::from("memory").join(file.file_name())
    }
}
