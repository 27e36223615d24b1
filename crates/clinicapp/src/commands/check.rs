use super::{CmdMessage, CmdResult};
use crate::store::backend::StorageBackend;
use crate::store::ClinicStore;

/// Reports appointments and bills whose patient or doctor no longer exists.
/// Nothing is repaired.
pub fn run<B: StorageBackend>(store: &ClinicStore<B>) -> CmdResult {
    let records = store.records();
    let mut problems = Vec::new();

    for appt in records.appointments().iter() {
        if !records.patients().contains(appt.patient_id) {
            problems.push(format!(
                "Appointment {} references missing patient {}.",
                appt.id, appt.patient_id
            ));
        }
        if !records.doctors().contains(appt.doctor_id) {
            problems.push(format!(
                "Appointment {} references missing doctor {}.",
                appt.id, appt.doctor_id
            ));
        }
    }

    for bill in records.bills().iter() {
        if !records.patients().contains(bill.patient_id) {
            problems.push(format!(
                "Bill {} references missing patient {}.",
                bill.id, bill.patient_id
            ));
        }
        if let Some(doctor_id) = bill.doctor_id {
            if !records.doctors().contains(doctor_id) {
                problems.push(format!(
                    "Bill {} references missing doctor {}.",
                    bill.id, doctor_id
                ));
            }
        }
    }

    let mut result = CmdResult::default();
    if problems.is_empty() {
        result.add_message(CmdMessage::success("No inconsistencies found."));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Found {} dangling reference(s):",
            problems.len()
        )));
        for problem in problems {
            result.add_message(CmdMessage::warning(format!("  - {}", problem)));
        }
    }
    result
}
