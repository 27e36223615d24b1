use crate::error::{ClinicError, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four record collections kept by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Patient,
    Doctor,
    Appointment,
    Bill,
}

impl RecordKind {
    /// Capitalized name, used at the start of messages.
    pub fn title(&self) -> &'static str {
        match self {
            RecordKind::Patient => "Patient",
            RecordKind::Doctor => "Doctor",
            RecordKind::Appointment => "Appointment",
            RecordKind::Bill => "Bill",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Patient => "patient",
            RecordKind::Doctor => "doctor",
            RecordKind::Appointment => "appointment",
            RecordKind::Bill => "bill",
        };
        f.write_str(name)
    }
}

/// Anything stored in a [`crate::store::collection::Collection`].
pub trait Record {
    const KIND: RecordKind;

    fn id(&self) -> u32;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub disease: String,
    pub contact: String,
}

impl Record for Patient {
    const KIND: RecordKind = RecordKind::Patient;

    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialization: String,
    pub availability: String,
}

impl Record for Doctor {
    const KIND: RecordKind = RecordKind::Doctor;

    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub patient_id: u32,
    pub doctor_id: u32,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
}

impl Record for Appointment {
    const KIND: RecordKind = RecordKind::Appointment;

    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: u32,
    pub patient_id: u32,
    // Absent when the bill is not tied to a consultation
    pub doctor_id: Option<u32>,
    pub doctor_fee: f64,
    pub total_amount: f64,
    pub date: NaiveDate,
}

impl Record for Bill {
    const KIND: RecordKind = RecordKind::Bill;

    fn id(&self) -> u32 {
        self.id
    }
}

/// The individual amounts a bill is made of.
///
/// Only the consultation fee exists today; new components get a field here
/// and a term in [`Charges::total`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Charges {
    pub doctor_fee: f64,
}

impl Charges {
    pub fn total(&self) -> f64 {
        self.doctor_fee
    }
}

/// Next identifier to hand out for each collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    #[serde(default = "first_id")]
    pub patient: u32,
    #[serde(default = "first_id")]
    pub doctor: u32,
    #[serde(default = "first_id")]
    pub appointment: u32,
    #[serde(default = "first_id")]
    pub bill: u32,
}

fn first_id() -> u32 {
    1
}

impl Default for Counters {
    fn default() -> Self {
        Self {
            patient: first_id(),
            doctor: first_id(),
            appointment: first_id(),
            bill: first_id(),
        }
    }
}

impl Counters {
    pub fn peek(&self, kind: RecordKind) -> u32 {
        match kind {
            RecordKind::Patient => self.patient,
            RecordKind::Doctor => self.doctor,
            RecordKind::Appointment => self.appointment,
            RecordKind::Bill => self.bill,
        }
    }

    fn slot(&mut self, kind: RecordKind) -> &mut u32 {
        match kind {
            RecordKind::Patient => &mut self.patient,
            RecordKind::Doctor => &mut self.doctor,
            RecordKind::Appointment => &mut self.appointment,
            RecordKind::Bill => &mut self.bill,
        }
    }

    /// Returns the current value and advances the counter.
    ///
    /// Fails without moving the counter once it can no longer advance, so
    /// `u32::MAX` is never handed out.
    pub fn issue(&mut self, kind: RecordKind) -> Result<u32> {
        let slot = self.slot(kind);
        let id = *slot;
        let next = id
            .checked_add(1)
            .ok_or_else(|| ClinicError::Store(format!("no {} identifiers left", kind)))?;
        *slot = next;
        Ok(id)
    }

    /// Raises the counter so it is strictly greater than `max_id`.
    /// Returns true when the counter had to move.
    ///
    /// Saturates at `u32::MAX`, which [`Counters::issue`] refuses to hand out.
    pub fn ensure_above(&mut self, kind: RecordKind, max_id: u32) -> bool {
        let slot = self.slot(kind);
        if *slot <= max_id {
            *slot = max_id.saturating_add(1);
            true
        } else {
            false
        }
    }
}

/// Whether `id` can belong to a stored record: positive and below the value
/// the counters can never issue.
pub fn is_valid_id(id: u32) -> bool {
    id != 0 && id != u32::MAX
}

// --- Caller input ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub disease: String,
    pub contact: String,
}

/// Field-level patch for a patient. `None` or a blank string keeps the
/// current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub disease: Option<String>,
    pub contact: Option<String>,
}

impl PatientUpdate {
    pub fn is_empty(&self) -> bool {
        fn blank(field: &Option<String>) -> bool {
            field.as_deref().map_or(true, |s| s.trim().is_empty())
        }
        blank(&self.name)
            && self.age.is_none()
            && blank(&self.gender)
            && blank(&self.disease)
            && blank(&self.contact)
    }

    /// Applies the patch and returns the names of the fields that changed.
    pub fn apply(&self, patient: &mut Patient) -> Vec<&'static str> {
        let mut changed = Vec::new();

        if replace_text(&mut patient.name, &self.name) {
            changed.push("name");
        }
        if let Some(age) = self.age {
            if patient.age != age {
                patient.age = age;
                changed.push("age");
            }
        }
        if replace_text(&mut patient.gender, &self.gender) {
            changed.push("gender");
        }
        if replace_text(&mut patient.disease, &self.disease) {
            changed.push("disease");
        }
        if replace_text(&mut patient.contact, &self.contact) {
            changed.push("contact");
        }

        changed
    }
}

fn replace_text(current: &mut String, new: &Option<String>) -> bool {
    match new.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() && value != current.as_str() => {
            *current = value.to_string();
            true
        }
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
    pub availability: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub patient_id: u32,
    pub doctor_id: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// A doctor consultation billed on a new bill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Consultation {
    pub doctor_id: u32,
    pub fee: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBill {
    pub patient_id: u32,
    pub consultation: Option<Consultation>,
    pub date: NaiveDate,
}

// --- Views ---

/// An appointment with its references resolved to names where possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentView {
    pub appointment: Appointment,
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillView {
    pub bill: Bill,
    pub patient_name: Option<String>,
}

/// Everything printed on an invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub bill: Bill,
    pub patient: Patient,
    pub doctor_name: Option<String>,
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        ClinicError::InvalidInput(format!(
            "'{}' is not a date (expected YYYY-MM-DD)",
            input
        ))
    })
}

pub fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT).map_err(|_| {
        ClinicError::InvalidInput(format!(
            "'{}' is not a time (expected HH:MM)",
            input
        ))
    })
}

/// Stores times as `HH:MM`, which is all the precision an appointment has.
mod hh_mm {
    use super::TIME_FORMAT;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Patient {
        Patient {
            id: 1,
            name: "Alice".into(),
            age: 30,
            gender: "F".into(),
            disease: "Flu".into(),
            contact: "555-1111".into(),
        }
    }

    #[test]
    fn empty_update_keeps_every_field() {
        let mut patient = alice();
        let update = PatientUpdate {
            name: Some("  ".into()),
            ..Default::default()
        };
        assert!(update.is_empty());
        assert!(update.apply(&mut patient).is_empty());
        assert_eq!(patient, alice());
    }

    #[test]
    fn single_field_update_changes_only_that_field() {
        let mut patient = alice();
        let update = PatientUpdate {
            contact: Some("555-2222".into()),
            ..Default::default()
        };
        assert_eq!(update.apply(&mut patient), vec!["contact"]);
        assert_eq!(patient.contact, "555-2222");
        assert_eq!(patient.name, "Alice");
        assert_eq!(patient.age, 30);
    }

    #[test]
    fn counters_issue_post_increments() {
        let mut counters = Counters::default();
        assert_eq!(counters.issue(RecordKind::Bill).unwrap(), 1);
        assert_eq!(counters.issue(RecordKind::Bill).unwrap(), 2);
        assert_eq!(counters.peek(RecordKind::Bill), 3);
        assert_eq!(counters.peek(RecordKind::Patient), 1);
    }

    #[test]
    fn counters_ensure_above_only_raises() {
        let mut counters = Counters::default();
        assert!(counters.ensure_above(RecordKind::Doctor, 4));
        assert_eq!(counters.peek(RecordKind::Doctor), 5);
        assert!(!counters.ensure_above(RecordKind::Doctor, 2));
        assert_eq!(counters.peek(RecordKind::Doctor), 5);
    }

    #[test]
    fn exhausted_counter_refuses_to_issue() {
        let mut counters = Counters {
            patient: u32::MAX,
            ..Counters::default()
        };
        assert!(matches!(
            counters.issue(RecordKind::Patient),
            Err(ClinicError::Store(_))
        ));
        assert_eq!(counters.peek(RecordKind::Patient), u32::MAX);

        let mut counters = Counters::default();
        assert!(counters.ensure_above(RecordKind::Doctor, u32::MAX));
        assert_eq!(counters.peek(RecordKind::Doctor), u32::MAX);
    }

    #[test]
    fn ids_must_be_positive_and_issuable() {
        assert!(is_valid_id(1));
        assert!(is_valid_id(u32::MAX - 1));
        assert!(!is_valid_id(0));
        assert!(!is_valid_id(u32::MAX));
    }

    #[test]
    fn appointment_time_is_stored_as_hh_mm() {
        let appt = Appointment {
            id: 1,
            patient_id: 1,
            doctor_id: 1,
            date: parse_date("2024-05-01").unwrap(),
            time: parse_time("09:00").unwrap(),
        };
        let json = serde_json::to_value(&appt).unwrap();
        assert_eq!(json["time"], "09:00");
        assert_eq!(json["date"], "2024-05-01");
    }

    #[test]
    fn missing_counter_fields_default_to_one() {
        let counters: Counters = serde_json::from_str(r#"{"patient": 7}"#).unwrap();
        assert_eq!(counters.patient, 7);
        assert_eq!(counters.bill, 1);
    }

    #[test]
    fn rejects_malformed_dates_and_times() {
        assert!(parse_date("05/01/2024").is_err());
        assert!(parse_time("9am").is_err());
    }
}
