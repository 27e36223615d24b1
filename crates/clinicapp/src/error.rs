use crate::model::RecordKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Maximum {kind} limit reached ({capacity})")]
    CapacityExceeded { kind: RecordKind, capacity: usize },

    #[error("{} with ID {id} not found", kind.title())]
    NotFound { kind: RecordKind, id: u32 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl ClinicError {
    pub fn not_found(kind: RecordKind, id: u32) -> Self {
        ClinicError::NotFound { kind, id }
    }
}

pub type Result<T> = std::result::Result<T, ClinicError>;
