//! # Configuration
//!
//! Clinic configuration is loaded with [`confique`] from an optional
//! `clinic.toml` in the data directory, layered over compiled defaults.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `patient_capacity` | `100` | Maximum number of patients |
//! | `doctor_capacity` | `50` | Maximum number of doctors |
//! | `appointment_capacity` | `200` | Maximum number of appointments |
//! | `bill_capacity` | `200` | Maximum number of bills |
//!
//! Capacities bound both creation and loading: a data file holding more
//! records than its capacity is truncated on load.

use crate::error::{ClinicError, Result};
use crate::model::RecordKind;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILENAME: &str = "clinic.toml";

/// Configuration for the clinic store, stored in `clinic.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClinicConfig {
    /// Maximum number of patient records
    #[config(default = 100)]
    pub patient_capacity: usize,

    /// Maximum number of doctor records
    #[config(default = 50)]
    pub doctor_capacity: usize,

    /// Maximum number of appointments
    #[config(default = 200)]
    pub appointment_capacity: usize,

    /// Maximum number of bills
    #[config(default = 200)]
    pub bill_capacity: usize,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            patient_capacity: 100,
            doctor_capacity: 50,
            appointment_capacity: 200,
            bill_capacity: 200,
        }
    }
}

impl ClinicConfig {
    /// Load `clinic.toml` from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        ClinicConfig::builder()
            .file(&config_path)
            .load()
            .map_err(|e| ClinicError::Config(format!("{}: {}", config_path.display(), e)))
    }

    pub fn capacity(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Patient => self.patient_capacity,
            RecordKind::Doctor => self.doctor_capacity,
            RecordKind::Appointment => self.appointment_capacity,
            RecordKind::Bill => self.bill_capacity,
        }
    }

    /// Same capacity for every collection. Handy in tests.
    pub fn uniform(capacity: usize) -> Self {
        Self {
            patient_capacity: capacity,
            doctor_capacity: capacity,
            appointment_capacity: capacity,
            bill_capacity: capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = ClinicConfig::default();
        assert_eq!(config.capacity(RecordKind::Patient), 100);
        assert_eq!(config.capacity(RecordKind::Doctor), 50);
        assert_eq!(config.capacity(RecordKind::Appointment), 200);
        assert_eq!(config.capacity(RecordKind::Bill), 200);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = ClinicConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, ClinicConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            "patient_capacity = 3\n",
        )
        .unwrap();

        let config = ClinicConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.patient_capacity, 3);
        assert_eq!(config.doctor_capacity, 50);
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            "patient_capacity = \"lots\"\n",
        )
        .unwrap();

        let err = ClinicConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ClinicError::Config(_)));
    }
}
