use super::backend::{DataFile, StorageBackend};
use super::codec::{self, Decoded};
use super::records::{Records, Stored};
use crate::config::ClinicConfig;
use crate::error::Result;
use crate::model::{
    is_valid_id, Appointment, Bill, Counters, Doctor, Patient, Record, RecordKind,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Outcome of a load or save pass over the data files.
///
/// Problems with one file never stop the others; they are collected here as
/// human-readable diagnostics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PersistReport {
    pub files_ok: usize,
    pub files_failed: usize,
    pub diagnostics: Vec<String>,
}

impl PersistReport {
    pub fn is_clean(&self) -> bool {
        self.files_failed == 0 && self.diagnostics.is_empty()
    }

    fn warn(&mut self, diagnostic: String) {
        tracing::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

/// The record store: in-memory records bound to a storage backend.
pub struct ClinicStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    config: ClinicConfig,
    records: Records,
}

impl<B: StorageBackend> ClinicStore<B> {
    /// An empty store. Call [`ClinicStore::load`] to read existing files.
    pub fn with_backend(backend: B, config: ClinicConfig) -> Self {
        let records = Records::new(&config);
        Self {
            backend,
            config,
            records,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &ClinicConfig {
        &self.config
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut Records {
        &mut self.records
    }

    /// Replaces the in-memory state with what is on storage.
    ///
    /// Missing files are a first run: empty collections and counters at 1.
    pub fn load(&mut self) -> PersistReport {
        let mut report = PersistReport::default();
        self.records.clear();

        match self.backend.read(DataFile::Counters) {
            Ok(Some(raw)) => match codec::decode_counters(&raw) {
                Ok(counters) => {
                    self.records.set_counters(counters);
                    report.files_ok += 1;
                }
                Err(e) => {
                    report.files_failed += 1;
                    report.warn(format!("Could not read counters file: {}", e));
                }
            },
            Ok(None) => {
                self.records.set_counters(Counters::default());
                report.files_ok += 1;
            }
            Err(e) => {
                report.files_failed += 1;
                report.warn(format!("Could not open counters file: {}", e));
            }
        }

        self.load_collection::<Patient>(&mut report);
        self.load_collection::<Doctor>(&mut report);
        self.load_collection::<Appointment>(&mut report);
        self.load_collection::<Bill>(&mut report);

        for (kind, next) in self.records.reconcile_counters() {
            report.warn(format!(
                "{} counter was out of date; next {} id is now {}.",
                kind.title(),
                kind,
                next
            ));
        }

        tracing::debug!(
            patients = self.records.len(RecordKind::Patient),
            doctors = self.records.len(RecordKind::Doctor),
            appointments = self.records.len(RecordKind::Appointment),
            bills = self.records.len(RecordKind::Bill),
            "loaded records"
        );
        report
    }

    fn load_collection<T>(&mut self, report: &mut PersistReport)
    where
        T: Stored + DeserializeOwned,
    {
        let kind = T::KIND;
        let file = DataFile::Records(kind);

        let raw = match self.backend.read(file) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                report.files_ok += 1;
                return;
            }
            Err(e) => {
                report.files_failed += 1;
                report.warn(format!("Could not open {} file: {}", kind, e));
                return;
            }
        };

        let Decoded {
            records,
            diagnostics,
        } = codec::decode_collection::<T>(&raw, self.config.capacity(kind));

        if diagnostics.is_empty() {
            report.files_ok += 1;
        } else {
            report.files_failed += 1;
        }
        for diagnostic in diagnostics {
            report.warn(diagnostic);
        }

        for record in records {
            let id = record.id();
            if !is_valid_id(id) {
                report.warn(format!(
                    "Skipped {} record {}: identifier out of range",
                    kind, id
                ));
                continue;
            }
            if let Err(e) = self.records.restore(record) {
                report.warn(format!("Skipped {} record {}: {}", kind, id, e));
            }
        }
    }

    /// Writes every data file from the in-memory state.
    ///
    /// Each file is written on its own; a failure is reported and the
    /// remaining files are still written.
    pub fn save(&self) -> PersistReport {
        let mut report = PersistReport::default();

        for file in DataFile::ALL {
            let outcome = self
                .encode(file)
                .and_then(|content| self.backend.write(file, &content));

            match outcome {
                Ok(()) => {
                    tracing::debug!(file = %file, "saved");
                    report.files_ok += 1;
                }
                Err(e) => {
                    tracing::error!(file = %file, error = %e, "save failed");
                    report.files_failed += 1;
                    report.diagnostics.push(format!(
                        "Error writing {}: {}",
                        self.backend.location(file).display(),
                        e
                    ));
                }
            }
        }

        report
    }

    fn encode(&self, file: DataFile) -> Result<String> {
        let records = &self.records;
        match file {
            DataFile::Records(RecordKind::Patient) => encode_all(records.patients().iter()),
            DataFile::Records(RecordKind::Doctor) => encode_all(records.doctors().iter()),
            DataFile::Records(RecordKind::Appointment) => {
                encode_all(records.appointments().iter())
            }
            DataFile::Records(RecordKind::Bill) => encode_all(records.bills().iter()),
            DataFile::Counters => codec::encode_counters(records.counters()),
        }
    }
}

fn encode_all<'a, T: Serialize + 'a>(records: impl Iterator<Item = &'a T>) -> Result<String> {
    codec::encode_collection(records)
}
