//! # Clinic Architecture
//!
//! `clinicapp` is a **UI-agnostic record store** for a small clinic: patients,
//! doctors, appointments, and bills, persisted as JSON files in a data
//! directory. The `clinic` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (clinic crate)                                         │
//! │  - Parses arguments, prompts, renders tables and invoices   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business rules: validation, references, confirmation     │
//! │  - Returns CmdResult with records and leveled messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Records: bounded collections plus identifier counters    │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifiers
//!
//! Each collection has its own counter, persisted next to the records.
//! Identifiers are handed out in increasing order and never reused, even
//! after a delete. Loading raises a counter that lags behind the stored
//! records.
//!
//! ## Logging
//!
//! The library emits [`tracing`] events (mutations at `debug`, load problems
//! at `warn`, failed writes at `error`) and installs no subscriber. Problems
//! a user should see are also returned as messages in the `CmdResult`.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade UIs talk to
//! - [`commands`]: business logic per entity
//! - [`config`]: capacities from `clinic.toml`
//! - [`error`]: the `ClinicError` taxonomy
//! - [`model`]: record, input, and view types
//! - [`store`]: collections, backends, and the file format

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
