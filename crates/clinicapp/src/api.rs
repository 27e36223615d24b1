//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every clinic operation, whichever UI is in front of it.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Owns** the [`ClinicStore`] for the lifetime of a session
//! - **Dispatches** to the matching function in `commands/*.rs`
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and does no terminal I/O. Confirmation for
//! destructive operations arrives as a [`Confirmation`] value; how the UI
//! obtained it is not the facade's concern.
//!
//! ## Persistence
//!
//! Mutations change the in-memory records only. UIs call [`ClinicApi::save`]
//! when they want the data files rewritten (the CLI does so after every
//! command that reports `modified`).
//!
//! ## Generic Over the Backend
//!
//! `ClinicApi<B: StorageBackend>` runs over:
//! - Production: `ClinicApi<FsBackend>` (a [`FileStore`](crate::store::fs::FileStore))
//! - Testing: `ClinicApi<MemBackend>` (an [`InMemoryStore`](crate::store::memory::InMemoryStore))
//!
//! API tests check dispatch and argument passing. Command logic is tested in
//! the command modules.

use crate::commands;
use crate::error::Result;
use crate::model::{NewAppointment, NewBill, NewDoctor, NewPatient, PatientUpdate};
use crate::store::backend::StorageBackend;
use crate::store::ClinicStore;

/// The main API facade for clinic operations.
pub struct ClinicApi<B: StorageBackend> {
    store: ClinicStore<B>,
}

impl<B: StorageBackend> ClinicApi<B> {
    pub fn new(store: ClinicStore<B>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ClinicStore<B> {
        &self.store
    }

    /// Replaces in-memory state with the data files; diagnostics come back as warnings.
    pub fn load(&mut self) -> CmdResult {
        commands::storage::load(&mut self.store)
    }

    pub fn save(&self) -> CmdResult {
        commands::storage::save(&self.store)
    }

    // --- Patients ---

    pub fn add_patient(&mut self, patient: NewPatient) -> Result<CmdResult> {
        commands::patients::add(&mut self.store, patient)
    }

    pub fn list_patients(&self) -> Result<CmdResult> {
        Ok(commands::patients::list(&self.store))
    }

    pub fn show_patient(&self, id: u32) -> Result<CmdResult> {
        commands::patients::show(&self.store, id)
    }

    pub fn edit_patient(&mut self, id: u32, update: &PatientUpdate) -> Result<CmdResult> {
        commands::patients::edit(&mut self.store, id, update)
    }

    pub fn delete_patient(&mut self, id: u32, confirmation: Confirmation) -> Result<CmdResult> {
        commands::patients::delete(&mut self.store, id, confirmation)
    }

    // --- Doctors ---

    pub fn add_doctor(&mut self, doctor: NewDoctor) -> Result<CmdResult> {
        commands::doctors::add(&mut self.store, doctor)
    }

    pub fn list_doctors(&self) -> Result<CmdResult> {
        Ok(commands::doctors::list(&self.store))
    }

    pub fn search_doctors(&self, query: &str) -> Result<CmdResult> {
        Ok(commands::doctors::search(&self.store, query))
    }

    // --- Appointments ---

    pub fn schedule_appointment(&mut self, appointment: NewAppointment) -> Result<CmdResult> {
        commands::appointments::schedule(&mut self.store, appointment)
    }

    pub fn list_appointments(&self) -> Result<CmdResult> {
        Ok(commands::appointments::list(&self.store))
    }

    pub fn cancel_appointment(
        &mut self,
        id: u32,
        confirmation: Confirmation,
    ) -> Result<CmdResult> {
        commands::appointments::cancel(&mut self.store, id, confirmation)
    }

    // --- Bills ---

    pub fn generate_bill(&mut self, bill: NewBill) -> Result<CmdResult> {
        commands::bills::generate(&mut self.store, bill)
    }

    pub fn list_bills(&self) -> Result<CmdResult> {
        Ok(commands::bills::list(&self.store))
    }

    pub fn invoice(&self, bill_id: u32) -> Result<CmdResult> {
        commands::bills::invoice(&self.store, bill_id)
    }

    // --- Maintenance ---

    pub fn check(&self) -> Result<CmdResult> {
        Ok(commands::check::run(&self.store))
    }

    pub fn config(&self) -> Result<CmdResult> {
        Ok(commands::config::show(&self.store))
    }
}

pub use crate::commands::{CmdMessage, CmdResult, Confirmation, MessageLevel};
