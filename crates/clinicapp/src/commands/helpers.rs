use crate::error::{ClinicError, Result};
use crate::model::{Appointment, AppointmentView, Bill, BillView, Doctor, Patient};
use crate::store::Records;

/// Name of the patient with `id`, if that patient still exists.
pub fn patient_name(records: &Records, id: u32) -> Option<&str> {
    records.get::<Patient>(id).map(|p| p.name.as_str())
}

/// Name of the doctor with `id`, if that doctor exists.
pub fn doctor_name(records: &Records, id: u32) -> Option<&str> {
    records.get::<Doctor>(id).map(|d| d.name.as_str())
}

pub fn appointment_view(records: &Records, appointment: &Appointment) -> AppointmentView {
    AppointmentView {
        appointment: appointment.clone(),
        patient_name: patient_name(records, appointment.patient_id).map(str::to_string),
        doctor_name: doctor_name(records, appointment.doctor_id).map(str::to_string),
    }
}

pub fn bill_view(records: &Records, bill: &Bill) -> BillView {
    BillView {
        bill: bill.clone(),
        patient_name: patient_name(records, bill.patient_id).map(str::to_string),
    }
}

/// Trims `value` and rejects it if nothing is left.
pub fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClinicError::InvalidInput(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Fees must be finite and not negative.
pub fn valid_amount(field: &str, amount: f64) -> Result<f64> {
    if !amount.is_finite() {
        return Err(ClinicError::InvalidInput(format!("{} must be a number", field)));
    }
    if amount < 0.0 {
        return Err(ClinicError::InvalidInput(format!(
            "{} cannot be negative",
            field
        )));
    }
    Ok(amount)
}
