use super::collection::Collection;
use crate::config::ClinicConfig;
use crate::error::{ClinicError, Result};
use crate::model::{Appointment, Bill, Counters, Doctor, Patient, Record, RecordKind};

/// The in-memory model: four collections and their identifier counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Records {
    patients: Collection<Patient>,
    doctors: Collection<Doctor>,
    appointments: Collection<Appointment>,
    bills: Collection<Bill>,
    counters: Counters,
}

/// Record types that live in [`Records`], with access to their collection.
pub trait Stored: Record + Sized {
    fn collection(records: &Records) -> &Collection<Self>;
    fn collection_mut(records: &mut Records) -> &mut Collection<Self>;
}

impl Stored for Patient {
    fn collection(records: &Records) -> &Collection<Self> {
        &records.patients
    }
    fn collection_mut(records: &mut Records) -> &mut Collection<Self> {
        &mut records.patients
    }
}

impl Stored for Doctor {
    fn collection(records: &Records) -> &Collection<Self> {
        &records.doctors
    }
    fn collection_mut(records: &mut Records) -> &mut Collection<Self> {
        &mut records.doctors
    }
}

impl Stored for Appointment {
    fn collection(records: &Records) -> &Collection<Self> {
        &records.appointments
    }
    fn collection_mut(records: &mut Records) -> &mut Collection<Self> {
        &mut records.appointments
    }
}

impl Stored for Bill {
    fn collection(records: &Records) -> &Collection<Self> {
        &records.bills
    }
    fn collection_mut(records: &mut Records) -> &mut Collection<Self> {
        &mut records.bills
    }
}

impl Records {
    pub fn new(config: &ClinicConfig) -> Self {
        Self {
            patients: Collection::new(config.capacity(RecordKind::Patient)),
            doctors: Collection::new(config.capacity(RecordKind::Doctor)),
            appointments: Collection::new(config.capacity(RecordKind::Appointment)),
            bills: Collection::new(config.capacity(RecordKind::Bill)),
            counters: Counters::default(),
        }
    }

    pub fn patients(&self) -> &Collection<Patient> {
        &self.patients
    }

    pub fn doctors(&self) -> &Collection<Doctor> {
        &self.doctors
    }

    pub fn appointments(&self) -> &Collection<Appointment> {
        &self.appointments
    }

    pub fn bills(&self) -> &Collection<Bill> {
        &self.bills
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn len(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Patient => self.patients.len(),
            RecordKind::Doctor => self.doctors.len(),
            RecordKind::Appointment => self.appointments.len(),
            RecordKind::Bill => self.bills.len(),
        }
    }

    pub fn get<T: Stored>(&self, id: u32) -> Option<&T> {
        T::collection(self).get(id)
    }

    /// Like [`Records::get`], but a missing record is a `NotFound` error.
    pub fn require<T: Stored>(&self, id: u32) -> Result<&T> {
        self.get(id)
            .ok_or_else(|| ClinicError::not_found(T::KIND, id))
    }

    pub fn require_mut<T: Stored>(&mut self, id: u32) -> Result<&mut T> {
        T::collection_mut(self)
            .get_mut(id)
            .ok_or_else(|| ClinicError::not_found(T::KIND, id))
    }

    /// Assigns the next identifier and appends the record built from it.
    ///
    /// Capacity is checked first so a full collection never consumes an id.
    pub fn create<T: Stored>(&mut self, build: impl FnOnce(u32) -> T) -> Result<&T> {
        let collection = T::collection(self);
        if collection.is_full() {
            return Err(ClinicError::CapacityExceeded {
                kind: T::KIND,
                capacity: collection.capacity(),
            });
        }
        let id = self.counters.issue(T::KIND)?;
        T::collection_mut(self).insert(build(id))
    }

    /// Removes one record, keeping the order of the rest.
    pub fn remove<T: Stored>(&mut self, id: u32) -> Result<T> {
        T::collection_mut(self)
            .remove(id)
            .ok_or_else(|| ClinicError::not_found(T::KIND, id))
    }

    // --- Loading ---

    pub(crate) fn clear(&mut self) {
        self.patients.clear();
        self.doctors.clear();
        self.appointments.clear();
        self.bills.clear();
        self.counters = Counters::default();
    }

    pub(crate) fn set_counters(&mut self, counters: Counters) {
        self.counters = counters;
    }

    /// Adds a record read from storage, keeping its stored identifier.
    pub(crate) fn restore<T: Stored>(&mut self, record: T) -> Result<()> {
        T::collection_mut(self).insert(record).map(|_| ())
    }

    /// Raises any counter that would reissue an identifier already present,
    /// or that sits at 0. Returns the kinds whose counter moved.
    pub(crate) fn reconcile_counters(&mut self) -> Vec<(RecordKind, u32)> {
        let maxima = [
            (RecordKind::Patient, self.patients.max_id()),
            (RecordKind::Doctor, self.doctors.max_id()),
            (RecordKind::Appointment, self.appointments.max_id()),
            (RecordKind::Bill, self.bills.max_id()),
        ];

        maxima
            .into_iter()
            .filter_map(|(kind, max)| {
                self.counters
                    .ensure_above(kind, max.unwrap_or(0))
                    .then(|| (kind, self.counters.peek(kind)))
            })
            .collect()
    }
}
