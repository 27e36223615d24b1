use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clinic", bin_name = "clinic", version)]
#[command(about = "Patient, doctor, appointment and billing records for a small clinic", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the data files (defaults to the current directory)
    #[arg(
        long,
        global = true,
        env = "CLINIC_DATA_DIR",
        value_name = "DIR",
        help_heading = "Options"
    )]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage patients
    #[command(subcommand, display_order = 1)]
    Patient(PatientCommands),

    /// Manage doctors
    #[command(subcommand, display_order = 2)]
    Doctor(DoctorCommands),

    /// Manage appointments
    #[command(subcommand, alias = "appt", display_order = 3)]
    Appointment(AppointmentCommands),

    /// Generate and view bills
    #[command(subcommand, display_order = 4)]
    Bill(BillCommands),

    /// Rewrite every data file from the loaded records
    #[command(display_order = 10)]
    Save,

    /// Report appointments and bills that point at missing records
    #[command(display_order = 11)]
    Check,

    /// Show the effective configuration
    #[command(display_order = 12)]
    Config,
}

#[derive(Subcommand, Debug)]
pub enum PatientCommands {
    /// Register a new patient
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: u32,
        #[arg(long, default_value = "")]
        gender: String,
        /// Condition being treated
        #[arg(long, default_value = "")]
        disease: String,
        #[arg(long, default_value = "")]
        contact: String,
    },

    /// List all patients
    #[command(alias = "ls")]
    List,

    /// Show one patient
    Show { id: u32 },

    /// Change some fields of a patient; omitted fields are kept
    Edit {
        id: u32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        disease: Option<String>,
        #[arg(long)]
        contact: Option<String>,
    },

    /// Delete a patient
    #[command(alias = "rm")]
    Delete {
        id: u32,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum DoctorCommands {
    /// Register a new doctor
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        specialization: String,
        /// Free-form schedule, e.g. "Mon-Fri 9-5"
        #[arg(long, default_value = "")]
        availability: String,
    },

    /// List all doctors
    #[command(alias = "ls")]
    List,

    /// Find doctors by name or specialization (case-sensitive)
    Search { query: String },
}

#[derive(Subcommand, Debug)]
pub enum AppointmentCommands {
    /// Book a patient with a doctor
    Schedule {
        #[arg(long = "patient", value_name = "ID")]
        patient_id: u32,
        #[arg(long = "doctor", value_name = "ID")]
        doctor_id: u32,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// HH:MM
        #[arg(long)]
        time: String,
    },

    /// List all appointments
    #[command(alias = "ls")]
    List,

    /// Cancel an appointment
    Cancel {
        id: u32,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum BillCommands {
    /// Bill a patient, optionally for a doctor's consultation
    Generate {
        #[arg(long = "patient", value_name = "ID")]
        patient_id: u32,
        #[arg(long = "doctor", value_name = "ID", requires = "fee")]
        doctor_id: Option<u32>,
        /// Consultation fee
        #[arg(long, requires = "doctor_id")]
        fee: Option<f64>,
        /// YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List all bills
    #[command(alias = "ls")]
    List,

    /// Print the invoice for a bill
    Invoice { id: u32 },
}
