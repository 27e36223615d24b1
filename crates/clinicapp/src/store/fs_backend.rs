use super::backend::{DataFile, StorageBackend};
use crate::error::{ClinicError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Keeps the data files side by side in one directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ClinicError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, file: DataFile) -> Result<Option<String>> {
        match fs::read_to_string(self.location(file)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClinicError::Io(e)),
        }
    }

    fn write(&self, file: DataFile, content: &str) -> Result<()> {
        self.ensure_dir()?;

        let target = self.location(file);
        let tmp_file = self
            .root
            .join(format!(".{}.{}.tmp", file.file_name(), std::process::id()));

        fs::write(&tmp_file, content).map_err(ClinicError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ClinicError::Io(e));
        }
        Ok(())
    }

    fn location(&self, file: DataFile) -> PathBuf {
        self.root.join(file.file_name())
    }
}
