//! # Storage Layer
//!
//! The store is both the in-memory data model and the persistence boundary.
//!
//! ## Pieces
//!
//! - [`collection::Collection`]: an ordered, bounded set of one record type.
//! - [`records::Records`]: the four collections plus identifier counters.
//!   All create/remove primitives live here.
//! - [`backend::StorageBackend`]: raw file I/O, implemented by
//!   [`fs_backend::FsBackend`] (production) and [`mem_backend::MemBackend`]
//!   (tests).
//! - [`codec`]: the JSON envelope each data file is written in.
//! - [`clinic_store::ClinicStore`]: binds `Records` to a backend and
//!   implements load/save with per-file diagnostics.
//!
//! ## Storage Layout
//!
//! ```text
//! <data-dir>/
//! ├── patients.json       # { "count": n, "records": [...] }
//! ├── doctors.json
//! ├── appointments.json
//! ├── bills.json
//! ├── counters.json       # next id per collection
//! └── clinic.toml         # optional configuration
//! ```
//!
//! ## Consistency
//!
//! Files are written one at a time, each atomically. Nothing ties them
//! together: a crash between writes can leave an appointment pointing at a
//! patient the patients file never received. Loading tolerates this, and the
//! `check` command reports such dangling references.

pub mod backend;
pub mod clinic_store;
pub mod codec;
pub mod collection;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod records;

pub use clinic_store::{ClinicStore, PersistReport};
pub use records::{Records, Stored};
