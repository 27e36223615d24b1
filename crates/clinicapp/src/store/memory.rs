use super::clinic_store::ClinicStore;
use super::mem_backend::MemBackend;
use crate::config::ClinicConfig;

pub type InMemoryStore = ClinicStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ClinicStore::with_backend(MemBackend::new(), ClinicConfig::default())
    }

    pub fn with_config(config: ClinicConfig) -> Self {
        ClinicStore::with_backend(MemBackend::new(), config)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Doctor, Patient};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_config(config: ClinicConfig) -> Self {
            Self {
                store: InMemoryStore::with_config(config),
            }
        }

        pub fn with_patient(mut self, name: &str) -> Self {
            self.store
                .records_mut()
                .create(|id| Patient {
                    id,
                    name: name.to_string(),
                    age: 30,
                    gender: "F".to_string(),
                    disease: "Flu".to_string(),
                    contact: "555-1111".to_string(),
                })
                .unwrap();
            self
        }

        pub fn with_patients(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_patient(&format!("Patient {}", i + 1));
            }
            self
        }

        pub fn with_doctor(mut self, name: &str, specialization: &str) -> Self {
            self.store
                .records_mut()
                .create(|id| Doctor {
                    id,
                    name: name.to_string(),
                    specialization: specialization.to_string(),
                    availability: "Mon-Fri 9-5".to_string(),
                })
                .unwrap();
            self
        }
    }
}
