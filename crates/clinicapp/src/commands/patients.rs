use super::helpers::required_text;
use super::{CmdMessage, CmdResult, Confirmation};
use crate::error::Result;
use crate::model::{NewPatient, Patient, PatientUpdate};
use crate::store::backend::StorageBackend;
use crate::store::ClinicStore;

pub fn add<B: StorageBackend>(store: &mut ClinicStore<B>, new: NewPatient) -> Result<CmdResult> {
    let name = required_text("Patient name", &new.name)?;

    let patient = store
        .records_mut()
        .create(|id| Patient {
            id,
            name,
            age: new.age,
            gender: new.gender.trim().to_string(),
            disease: new.disease.trim().to_string(),
            contact: new.contact.trim().to_string(),
        })?
        .clone();
    tracing::debug!(id = patient.id, "patient added");

    let mut result = CmdResult::default().modified();
    result.add_message(CmdMessage::success(format!(
        "Patient added successfully with ID: {}",
        patient.id
    )));
    Ok(result.with_patients(vec![patient]))
}

pub fn list<B: StorageBackend>(store: &ClinicStore<B>) -> CmdResult {
    let patients = store.records().patients().iter().cloned().collect();
    CmdResult::default().with_patients(patients)
}

pub fn show<B: StorageBackend>(store: &ClinicStore<B>, id: u32) -> Result<CmdResult> {
    let patient = store.records().require::<Patient>(id)?.clone();
    Ok(CmdResult::default().with_patients(vec![patient]))
}

/// Applies a field-level patch. Omitted fields keep their value.
pub fn edit<B: StorageBackend>(
    store: &mut ClinicStore<B>,
    id: u32,
    update: &PatientUpdate,
) -> Result<CmdResult> {
    let patient = store.records_mut().require_mut::<Patient>(id)?;
    let changed = update.apply(patient);
    let patient = patient.clone();

    let mut result = CmdResult::default();
    if changed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No changes for patient ID {}.",
            id
        )));
    } else {
        tracing::debug!(id, fields = ?changed, "patient updated");
        result = result.modified();
        result.add_message(CmdMessage::success(format!(
            "Patient information updated successfully ({}).",
            changed.join(", ")
        )));
    }
    Ok(result.with_patients(vec![patient]))
}

/// Removes a patient once the caller has confirmed.
///
/// Appointments and bills that reference the patient are left alone; the
/// result says how many there are.
pub fn delete<B: StorageBackend>(
    store: &mut ClinicStore<B>,
    id: u32,
    confirmation: Confirmation,
) -> Result<CmdResult> {
    store.records().require::<Patient>(id)?;

    let mut result = CmdResult::default();
    if !confirmation.is_confirmed() {
        result.add_message(CmdMessage::info("Deletion cancelled."));
        return Ok(result);
    }

    let removed = store.records_mut().remove::<Patient>(id)?;
    tracing::debug!(id, "patient deleted");
    result = result.modified();
    result.add_message(CmdMessage::success(format!(
        "Patient with ID {} deleted successfully.",
        id
    )));

    let records = store.records();
    let appointments = records
        .appointments()
        .iter()
        .filter(|a| a.patient_id == id)
        .count();
    let bills = records
        .bills()
        .iter()
        .filter(|b| b.patient_id == id)
        .count();
    if appointments + bills > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} appointment(s) and {} bill(s) still reference patient ID {}.",
            appointments, bills, id
        )));
    }

    Ok(result.with_patients(vec![removed]))
}
