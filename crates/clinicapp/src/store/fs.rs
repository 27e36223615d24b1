use super::clinic_store::ClinicStore;
use super::fs_backend::FsBackend;
use crate::config::ClinicConfig;
use std::path::PathBuf;

/// Production store: data files in a directory on disk.
pub type FileStore = ClinicStore<FsBackend>;

impl FileStore {
    pub fn new(root: PathBuf, config: ClinicConfig) -> Self {
        ClinicStore::with_backend(FsBackend::new(root), config)
    }

    pub fn root(&self) -> &std::path::Path {
        self.backend.root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Doctor, RecordKind};
    use crate::store::backend::DataFile;

    #[test]
    fn save_then_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf(), ClinicConfig::default());
        store
            .records_mut()
            .create(|id| Doctor {
                id,
                name: "Dr. Lee".into(),
                specialization: "Cardiology".into(),
                availability: "Mon-Fri 9-5".into(),
            })
            .unwrap();
        assert!(store.save().is_clean());
        assert!(dir.path().join(DataFile::Counters.file_name()).exists());

        let mut reopened = FileStore::new(dir.path().to_path_buf(), ClinicConfig::default());
        assert!(reopened.load().is_clean());
        assert_eq!(reopened.records(), store.records());
        assert_eq!(reopened.records().len(RecordKind::Doctor), 1);
    }
}
