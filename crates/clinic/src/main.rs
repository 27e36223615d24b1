//! # Clinic CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, and this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/clinic/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring, prompts, dispatch, auto-save (commands.rs)│
//! │  - Tables, invoices, and messages (render.rs)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/clinicapp/src/api.rs)                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from the API inward is UI agnostic. The CLI owns every
//! user-facing concern: arguments, the confirmation prompt, rendering, logging
//! setup, and the exit code.
//!
//! ## Testing Approach
//!
//! End-to-end tests in `tests/` run the built binary against a temporary data
//! directory. Business rules are tested in the library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
