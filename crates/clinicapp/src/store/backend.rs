use crate::error::Result;
use crate::model::RecordKind;
use std::fmt;
use std::path::PathBuf;

/// One of the five persisted files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFile {
    Records(RecordKind),
    Counters,
}

impl DataFile {
    /// Every file, in the order they are saved: collections first, counters last.
    pub const ALL: [DataFile; 5] = [
        DataFile::Records(RecordKind::Patient),
        DataFile::Records(RecordKind::Doctor),
        DataFile::Records(RecordKind::Appointment),
        DataFile::Records(RecordKind::Bill),
        DataFile::Counters,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            DataFile::Records(RecordKind::Patient) => "patients.json",
            DataFile::Records(RecordKind::Doctor) => "doctors.json",
            DataFile::Records(RecordKind::Appointment) => "appointments.json",
            DataFile::Records(RecordKind::Bill) => "bills.json",
            DataFile::Counters => "counters.json",
        }
    }
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `ClinicStore` handles the "what" (decoding, limits, diagnostics).
pub trait StorageBackend {
    /// Read a whole file.
    /// Returns Ok(None) if the file does not exist (first run).
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, file: DataFile) -> Result<Option<String>>;

    /// Replace a whole file.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, file: DataFile, content: &str) -> Result<()>;

    /// Where the file lives. For `MemBackend`, a virtual path.
    fn location(&self, file: DataFile) -> PathBuf;
}
