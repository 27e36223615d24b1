//! On-disk format of the data files.
//!
//! A collection file is a JSON envelope with a declared record count followed
//! by the records themselves:
//!
//! ```json
//! { "count": 2, "records": [ { "id": 1, ... }, { "id": 3, ... } ] }
//! ```
//!
//! Records are named-field objects, so adding a field with a serde default
//! does not break older files. The counters file is a flat object.

use crate::error::{ClinicError, Result};
use crate::model::{Counters, Record};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct CollectionFile<'a, T> {
    count: usize,
    records: Vec<&'a T>,
}

#[derive(Deserialize)]
struct RawCollectionFile {
    count: i64,
    #[serde(default)]
    records: Vec<serde_json::Value>,
}

/// Records recovered from a collection file, plus what went wrong on the way.
#[derive(Debug)]
pub struct Decoded<T> {
    pub records: Vec<T>,
    pub diagnostics: Vec<String>,
}

pub fn encode_collection<'a, T, I>(records: I) -> Result<String>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let records: Vec<&T> = records.into_iter().collect();
    let file = CollectionFile {
        count: records.len(),
        records,
    };
    serde_json::to_string_pretty(&file).map_err(ClinicError::Serialization)
}

/// Decodes a collection file, keeping at most `capacity` records.
///
/// Never fails: anything unreadable becomes a diagnostic and the records read
/// up to that point are returned.
pub fn decode_collection<T>(raw: &str, capacity: usize) -> Decoded<T>
where
    T: Record + DeserializeOwned,
{
    let kind = T::KIND;
    let mut diagnostics = Vec::new();

    let file: RawCollectionFile = match serde_json::from_str(raw) {
        Ok(file) => file,
        Err(e) => {
            diagnostics.push(format!("Could not read count from {} file: {}", kind, e));
            return Decoded {
                records: Vec::new(),
                diagnostics,
            };
        }
    };

    if file.count < 0 {
        diagnostics.push(format!("Invalid count ({}) in {} file.", file.count, kind));
        return Decoded {
            records: Vec::new(),
            diagnostics,
        };
    }

    let declared = usize::try_from(file.count).unwrap_or(usize::MAX);
    let wanted = if declared > capacity {
        diagnostics.push(format!(
            "{} file contains more records ({}) than the {} capacity ({}). Loading truncated list.",
            kind.title(),
            declared,
            kind,
            capacity
        ));
        capacity
    } else {
        declared
    };

    let mut records = Vec::with_capacity(wanted.min(file.records.len()));
    for (position, value) in file.records.into_iter().take(wanted).enumerate() {
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                diagnostics.push(format!(
                    "Unreadable {} record at position {}: {}",
                    kind,
                    position + 1,
                    e
                ));
                break;
            }
        }
    }

    if records.len() < wanted {
        diagnostics.push(format!(
            "Mismatch in expected ({}) and read ({}) {} records.",
            wanted,
            records.len(),
            kind
        ));
    }

    Decoded {
        records,
        diagnostics,
    }
}

pub fn encode_counters(counters: &Counters) -> Result<String> {
    serde_json::to_string_pretty(counters).map_err(ClinicError::Serialization)
}

pub fn decode_counters(raw: &str) -> Result<Counters> {
    serde_json::from_str(raw).map_err(ClinicError::Serialization)
}
