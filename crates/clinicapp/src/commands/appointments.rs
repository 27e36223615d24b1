use super::helpers::appointment_view;
use super::{CmdMessage, CmdResult, Confirmation};
use crate::error::Result;
use crate::model::{Appointment, Doctor, NewAppointment, Patient};
use crate::store::backend::StorageBackend;
use crate::store::ClinicStore;

/// Books a patient with a doctor. Both must exist at scheduling time.
pub fn schedule<B: StorageBackend>(
    store: &mut ClinicStore<B>,
    new: NewAppointment,
) -> Result<CmdResult> {
    let records = store.records_mut();
    records.require::<Patient>(new.patient_id)?;
    records.require::<Doctor>(new.doctor_id)?;

    let appointment = records
        .create(|id| Appointment {
            id,
            patient_id: new.patient_id,
            doctor_id: new.doctor_id,
            date: new.date,
            time: new.time,
        })?
        .clone();
    tracing::debug!(
        id = appointment.id,
        patient = appointment.patient_id,
        doctor = appointment.doctor_id,
        "appointment scheduled"
    );

    let view = appointment_view(store.records(), &appointment);
    let mut result = CmdResult::default().modified();
    result.add_message(CmdMessage::success(format!(
        "Appointment scheduled successfully with ID: {}",
        appointment.id
    )));
    Ok(result.with_appointments(vec![view]))
}

pub fn list<B: StorageBackend>(store: &ClinicStore<B>) -> CmdResult {
    let records = store.records();
    let views = records
        .appointments()
        .iter()
        .map(|a| appointment_view(records, a))
        .collect();
    CmdResult::default().with_appointments(views)
}

pub fn cancel<B: StorageBackend>(
    store: &mut ClinicStore<B>,
    id: u32,
    confirmation: Confirmation,
) -> Result<CmdResult> {
    store.records().require::<Appointment>(id)?;

    let mut result = CmdResult::default();
    if !confirmation.is_confirmed() {
        result.add_message(CmdMessage::info("Cancellation aborted."));
        return Ok(result);
    }

    let removed = store.records_mut().remove::<Appointment>(id)?;
    tracing::debug!(id, "appointment cancelled");

    let view = appointment_view(store.records(), &removed);
    result = result.modified();
    result.add_message(CmdMessage::success(format!(
        "Appointment with ID {} cancelled successfully.",
        id
    )));
    Ok(result.with_appointments(vec![view]))
}
