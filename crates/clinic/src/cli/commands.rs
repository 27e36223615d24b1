//! # CLI Layer
//!
//! The only place in the workspace that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Installs a log subscriber
//! - Decides when data files are written
//!
//! ## Structure
//!
//! - `run()`: parse, set up, load, dispatch, save (called by `main.rs`)
//! - `init_context()`: builds the `AppContext` over a `FileStore`
//! - `handle_*()`: per-command handlers that call the API and render output
//! - `finish()`: prints messages and saves when the command changed anything
//!
//! A load that reported problems turns auto-save off for that run: a file that
//! failed to load came back empty, and saving would overwrite it. `clinic save`
//! is the explicit way to write the loaded state anyway.

use super::render::{
    print_messages, render_appointments, render_bills, render_config, render_doctors,
    render_invoice, render_patient_detail, render_patients,
};
use super::setup::{
    AppointmentCommands, BillCommands, Cli, Commands, DoctorCommands, PatientCommands,
};
use anyhow::{bail, Context, Result};
use clap::Parser;
use clinicapp::api::{ClinicApi, CmdResult, Confirmation};
use clinicapp::config::ClinicConfig;
use clinicapp::model::{
    parse_date, parse_time, Appointment, Consultation, NewAppointment, NewBill, NewDoctor,
    NewPatient, Patient, PatientUpdate,
};
use clinicapp::store::fs::FileStore;
use clinicapp::store::fs_backend::FsBackend;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

struct AppContext {
    api: ClinicApi<FsBackend>,
    load_had_problems: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let loaded = ctx.api.load();
    print_messages(&loaded.messages);
    ctx.load_had_problems = loaded.has_problems();

    match cli.command {
        Commands::Patient(cmd) => match cmd {
            PatientCommands::Add {
                name,
                age,
                gender,
                disease,
                contact,
            } => handle_patient_add(
                &mut ctx,
                NewPatient {
                    name,
                    age,
                    gender,
                    disease,
                    contact,
                },
            ),
            PatientCommands::List => handle_patient_list(&mut ctx),
            PatientCommands::Show { id } => handle_patient_show(&mut ctx, id),
            PatientCommands::Edit {
                id,
                name,
                age,
                gender,
                disease,
                contact,
            } => handle_patient_edit(
                &mut ctx,
                id,
                PatientUpdate {
                    name,
                    age,
                    gender,
                    disease,
                    contact,
                },
            ),
            PatientCommands::Delete { id, yes } => handle_patient_delete(&mut ctx, id, yes),
        },
        Commands::Doctor(cmd) => match cmd {
            DoctorCommands::Add {
                name,
                specialization,
                availability,
            } => handle_doctor_add(
                &mut ctx,
                NewDoctor {
                    name,
                    specialization,
                    availability,
                },
            ),
            DoctorCommands::List => handle_doctor_list(&mut ctx),
            DoctorCommands::Search { query } => handle_doctor_search(&mut ctx, &query),
        },
        Commands::Appointment(cmd) => match cmd {
            AppointmentCommands::Schedule {
                patient_id,
                doctor_id,
                date,
                time,
            } => handle_appointment_schedule(&mut ctx, patient_id, doctor_id, &date, &time),
            AppointmentCommands::List => handle_appointment_list(&mut ctx),
            AppointmentCommands::Cancel { id, yes } => {
                handle_appointment_cancel(&mut ctx, id, yes)
            }
        },
        Commands::Bill(cmd) => match cmd {
            BillCommands::Generate {
                patient_id,
                doctor_id,
                fee,
                date,
            } => handle_bill_generate(&mut ctx, patient_id, doctor_id, fee, date.as_deref()),
            BillCommands::List => handle_bill_list(&mut ctx),
            BillCommands::Invoice { id } => handle_bill_invoice(&mut ctx, id),
        },
        Commands::Save => handle_save(&mut ctx),
        Commands::Check => handle_check(&mut ctx),
        Commands::Config => handle_config(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Logs go to stderr so stdout carries only command output
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    tracing::debug!(data_dir = %data_dir.display(), "opening clinic data");

    let config = ClinicConfig::load(&data_dir).context("Failed to load configuration")?;
    let store = FileStore::new(data_dir, config);

    Ok(AppContext {
        api: ClinicApi::new(store),
        load_had_problems: false,
    })
}

/// Prints the command's messages and writes the data files if it changed anything.
fn finish(ctx: &mut AppContext, result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    if !result.modified {
        return Ok(());
    }
    if ctx.load_had_problems {
        bail!(
            "Changes not saved: some data files did not load cleanly. \
             Fix them, or run `clinic save` to overwrite them with the records loaded above"
        );
    }

    let saved = ctx.api.save();
    if saved.has_problems() {
        print_messages(&saved.messages);
        bail!("Some data files could not be saved");
    }
    Ok(())
}

/// Asks on stdin unless `--yes` was given. Only the exact answer `yes` confirms.
fn confirm(prompt: &str, yes: bool) -> Result<Confirmation> {
    if yes {
        return Ok(Confirmation::Confirmed);
    }

    print!("{} Type 'yes' to confirm: ", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(Confirmation::from_answer(&answer))
}

// --- Patients ---

fn handle_patient_add(ctx: &mut AppContext, patient: NewPatient) -> Result<()> {
    let result = ctx.api.add_patient(patient)?;
    finish(ctx, result)
}

fn handle_patient_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_patients()?;
    print!("{}", render_patients(&result.patients));
    finish(ctx, result)
}

fn handle_patient_show(ctx: &mut AppContext, id: u32) -> Result<()> {
    let result = ctx.api.show_patient(id)?;
    for patient in &result.patients {
        print!("{}", render_patient_detail(patient));
    }
    finish(ctx, result)
}

fn handle_patient_edit(ctx: &mut AppContext, id: u32, update: PatientUpdate) -> Result<()> {
    let result = ctx.api.edit_patient(id, &update)?;
    for patient in &result.patients {
        print!("{}", render_patient_detail(patient));
    }
    finish(ctx, result)
}

fn handle_patient_delete(ctx: &mut AppContext, id: u32, yes: bool) -> Result<()> {
    let name = ctx.api.store().records().require::<Patient>(id)?.name.clone();
    let confirmation = confirm(
        &format!("Delete patient '{}' (ID: {})?", name, id),
        yes,
    )?;
    let result = ctx.api.delete_patient(id, confirmation)?;
    finish(ctx, result)
}

// --- Doctors ---

fn handle_doctor_add(ctx: &mut AppContext, doctor: NewDoctor) -> Result<()> {
    let result = ctx.api.add_doctor(doctor)?;
    finish(ctx, result)
}

fn handle_doctor_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_doctors()?;
    print!("{}", render_doctors(&result.doctors));
    finish(ctx, result)
}

fn handle_doctor_search(ctx: &mut AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search_doctors(query)?;
    if !result.doctors.is_empty() {
        print!("{}", render_doctors(&result.doctors));
    }
    finish(ctx, result)
}

// --- Appointments ---

fn handle_appointment_schedule(
    ctx: &mut AppContext,
    patient_id: u32,
    doctor_id: u32,
    date: &str,
    time: &str,
) -> Result<()> {
    let appointment = NewAppointment {
        patient_id,
        doctor_id,
        date: parse_date(date)?,
        time: parse_time(time)?,
    };
    let result = ctx.api.schedule_appointment(appointment)?;
    finish(ctx, result)
}

fn handle_appointment_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_appointments()?;
    print!("{}", render_appointments(&result.appointments));
    finish(ctx, result)
}

fn handle_appointment_cancel(ctx: &mut AppContext, id: u32, yes: bool) -> Result<()> {
    ctx.api.store().records().require::<Appointment>(id)?;
    let confirmation = confirm(&format!("Cancel appointment {}?", id), yes)?;
    let result = ctx.api.cancel_appointment(id, confirmation)?;
    finish(ctx, result)
}

// --- Bills ---

fn handle_bill_generate(
    ctx: &mut AppContext,
    patient_id: u32,
    doctor_id: Option<u32>,
    fee: Option<f64>,
    date: Option<&str>,
) -> Result<()> {
    let date = match date {
        Some(raw) => parse_date(raw)?,
        None => chrono::Local::now().date_naive(),
    };
    let consultation = match (doctor_id, fee) {
        (Some(doctor_id), Some(fee)) => Some(Consultation { doctor_id, fee }),
        (None, None) => None,
        _ => bail!("--doctor and --fee must be given together"),
    };

    let result = ctx.api.generate_bill(NewBill {
        patient_id,
        consultation,
        date,
    })?;
    finish(ctx, result)
}

fn handle_bill_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_bills()?;
    print!("{}", render_bills(&result.bills));
    finish(ctx, result)
}

fn handle_bill_invoice(ctx: &mut AppContext, id: u32) -> Result<()> {
    let result = ctx.api.invoice(id)?;
    if let Some(invoice) = &result.invoice {
        print!("{}", render_invoice(invoice));
    }
    finish(ctx, result)
}

// --- Maintenance ---

fn handle_save(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.save();
    print_messages(&result.messages);
    if result.has_problems() {
        bail!("Some data files could not be saved");
    }
    Ok(())
}

fn handle_check(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.check()?;
    finish(ctx, result)
}

fn handle_config(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.config()?;
    if let Some(config) = &result.config {
        print!("{}", render_config(config));
    }
    finish(ctx, result)
}
