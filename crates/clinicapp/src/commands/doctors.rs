use super::helpers::required_text;
use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Doctor, NewDoctor};
use crate::store::backend::StorageBackend;
use crate::store::ClinicStore;

pub fn add<B: StorageBackend>(store: &mut ClinicStore<B>, new: NewDoctor) -> Result<CmdResult> {
    let name = required_text("Doctor name", &new.name)?;

    let doctor = store
        .records_mut()
        .create(|id| Doctor {
            id,
            name,
            specialization: new.specialization.trim().to_string(),
            availability: new.availability.trim().to_string(),
        })?
        .clone();
    tracing::debug!(id = doctor.id, "doctor added");

    let mut result = CmdResult::default().modified();
    result.add_message(CmdMessage::success(format!(
        "Doctor added successfully with ID: {}",
        doctor.id
    )));
    Ok(result.with_doctors(vec![doctor]))
}

pub fn list<B: StorageBackend>(store: &ClinicStore<B>) -> CmdResult {
    let doctors = store.records().doctors().iter().cloned().collect();
    CmdResult::default().with_doctors(doctors)
}

/// Doctors whose name or specialization contains `query`.
///
/// Matching is case-sensitive; an empty query matches everyone.
pub fn search<B: StorageBackend>(store: &ClinicStore<B>, query: &str) -> CmdResult {
    let doctors: Vec<Doctor> = store
        .records()
        .doctors()
        .iter()
        .filter(|d| d.name.contains(query) || d.specialization.contains(query))
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if doctors.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No doctors found matching '{}'.",
            query
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Found {} doctor(s) matching '{}'.",
            doctors.len(),
            query
        )));
    }
    result.with_doctors(doctors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClinicError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_assigns_ids_from_one() {
        let mut store = InMemoryStore::new();
        let result = add(
            &mut store,
            NewDoctor {
                name: "Dr. Lee".into(),
                specialization: "Cardiology".into(),
                availability: "Mon-Fri".into(),
            },
        )
        .unwrap();

        assert_eq!(result.doctors[0].id, 1);
        assert_eq!(list(&store).doctors.len(), 1);
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut store = InMemoryStore::new();
        let err = add(
            &mut store,
            NewDoctor {
                name: "".into(),
                specialization: "Cardiology".into(),
                availability: "".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ClinicError::InvalidInput(_)));
    }

    #[test]
    fn search_matches_name_or_specialization() {
        let store = StoreFixture::new()
            .with_doctor("Dr. Lee", "Cardiology")
            .with_doctor("Dr. Cardin", "Dermatology")
            .with_doctor("Dr. Park", "Pediatrics")
            .store;

        let ids: Vec<u32> = search(&store, "Card").doctors.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn search_is_case_sensitive() {
        let store = StoreFixture::new().with_doctor("Dr. Lee", "Cardiology").store;

        let result = search(&store, "cardio");
        assert!(result.doctors.is_empty());
        assert!(result.messages[0].content.starts_with("No doctors found"));
    }
}
