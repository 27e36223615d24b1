//! # CLI Behavior
//!
//! One-shot subcommands over the clinic data directory.
//!
//! ## Session
//!
//! Every invocation:
//!
//! 1. Installs the log subscriber (`RUST_LOG`, else `warn`, or `debug` with `-v`)
//! 2. Reads `clinic.toml` from the data directory
//! 3. Loads the data files, printing any load problems as warnings
//! 4. Runs the command and prints its result
//! 5. Saves, if the command changed anything
//!
//! The data directory is `--data-dir`, else `CLINIC_DATA_DIR`, else the
//! current directory.
//!
//! ## Confirmation
//!
//! `patient delete` and `appointment cancel` ask before removing anything.
//! Only the exact answer `yes` proceeds. `--yes` skips the prompt.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers
//! - `render`: tables, invoices, and messages
//! - `setup`: argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
