//! # Command Layer
//!
//! This module contains the **core business logic** of the clinic store. Each
//! entity has its own submodule of pure Rust functions that operate on a
//! [`ClinicStore`](crate::store::ClinicStore).
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr, or prompts
//! - **Argument parsing**: that's the CLI layer's job
//! - **User interaction**: confirmations arrive as a [`Confirmation`] value
//!
//! Commands mutate the in-memory records only. Persisting is a separate,
//! explicit step ([`storage::save`]), so callers decide when files are written.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. It carries the records the
//! command produced or touched, resolved views (appointments and bills with
//! names), an optional invoice or configuration, and leveled messages.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and never touch the filesystem.
//!
//! ## Command Modules
//!
//! - [`patients`]: add, list, show, edit, delete
//! - [`doctors`]: add, list, search
//! - [`appointments`]: schedule, list, cancel
//! - [`bills`]: generate, list, invoice
//! - [`storage`]: load and save the data files
//! - [`check`]: report dangling references
//! - [`config`]: show effective configuration
//! - [`helpers`]: name resolution and input validation

use crate::config::ClinicConfig;
use crate::model::{AppointmentView, BillView, Doctor, Invoice, Patient};

pub mod appointments;
pub mod bills;
pub mod check;
pub mod config;
pub mod doctors;
pub mod helpers;
pub mod patients;
pub mod storage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
    pub appointments: Vec<AppointmentView>,
    pub bills: Vec<BillView>,
    pub invoice: Option<Invoice>,
    pub config: Option<ClinicConfig>,
    /// Whether the command changed the in-memory records.
    pub modified: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }

    pub fn with_patients(mut self, patients: Vec<Patient>) -> Self {
        self.patients = patients;
        self
    }

    pub fn with_doctors(mut self, doctors: Vec<Doctor>) -> Self {
        self.doctors = doctors;
        self
    }

    pub fn with_appointments(mut self, appointments: Vec<AppointmentView>) -> Self {
        self.appointments = appointments;
        self
    }

    pub fn with_bills(mut self, bills: Vec<BillView>) -> Self {
        self.bills = bills;
        self
    }

    pub fn with_invoice(mut self, invoice: Invoice) -> Self {
        self.invoice = Some(invoice);
        self
    }

    pub fn with_config(mut self, config: ClinicConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True if any message is a warning or an error.
    pub fn has_problems(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}

/// The caller's answer to "are you sure?" before a destructive command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// Only the exact answer `yes` confirms.
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim() == "yes" {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Confirmation::Confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_yes_confirms() {
        assert!(Confirmation::from_answer("yes").is_confirmed());
        assert!(Confirmation::from_answer("yes\n").is_confirmed());
        assert!(!Confirmation::from_answer("Yes").is_confirmed());
        assert!(!Confirmation::from_answer("y").is_confirmed());
        assert!(!Confirmation::from_answer("").is_confirmed());
    }
}
