//! # Rendering
//!
//! Turns `CmdResult` contents into terminal text. Every `render_*` function
//! returns a `String` so output can be checked without a terminal; the
//! handlers print it.
//!
//! Tables are laid out with `unicode-width` so names with wide characters
//! still line up. Cells longer than [`MAX_CELL_WIDTH`] are cut with `…`.

use clinicapp::api::{CmdMessage, MessageLevel};
use clinicapp::config::ClinicConfig;
use clinicapp::model::{
    AppointmentView, BillView, Doctor, Invoice, Patient, DATE_FORMAT, TIME_FORMAT,
};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const MAX_CELL_WIDTH: usize = 30;
const UNKNOWN_PATIENT: &str = "Unknown Patient";
const UNKNOWN_DOCTOR: &str = "Unknown Doctor";
const RULE_WIDTH: usize = 40;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_patients(patients: &[Patient]) -> String {
    if patients.is_empty() {
        return "No patients found.\n".to_string();
    }
    let rows = patients
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.name.clone(),
                p.age.to_string(),
                p.gender.clone(),
                p.disease.clone(),
                p.contact.clone(),
            ]
        })
        .collect();
    render_table(&["ID", "Name", "Age", "Gender", "Disease", "Contact"], rows)
}

pub(super) fn render_patient_detail(patient: &Patient) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", "Patient".bold(), patient.id));
    out.push_str(&format!("  Name:    {}\n", patient.name));
    out.push_str(&format!("  Age:     {}\n", patient.age));
    out.push_str(&format!("  Gender:  {}\n", patient.gender));
    out.push_str(&format!("  Disease: {}\n", patient.disease));
    out.push_str(&format!("  Contact: {}\n", patient.contact));
    out
}

pub(super) fn render_doctors(doctors: &[Doctor]) -> String {
    if doctors.is_empty() {
        return "No doctors found.\n".to_string();
    }
    let rows = doctors
        .iter()
        .map(|d| {
            vec![
                d.id.to_string(),
                d.name.clone(),
                d.specialization.clone(),
                d.availability.clone(),
            ]
        })
        .collect();
    render_table(&["ID", "Name", "Specialization", "Availability"], rows)
}

pub(super) fn render_appointments(appointments: &[AppointmentView]) -> String {
    if appointments.is_empty() {
        return "No appointments found.\n".to_string();
    }
    let rows = appointments
        .iter()
        .map(|view| {
            let appt = &view.appointment;
            vec![
                appt.id.to_string(),
                view.patient_name.as_deref().unwrap_or(UNKNOWN_PATIENT).to_string(),
                view.doctor_name.as_deref().unwrap_or(UNKNOWN_DOCTOR).to_string(),
                appt.date.format(DATE_FORMAT).to_string(),
                appt.time.format(TIME_FORMAT).to_string(),
            ]
        })
        .collect();
    render_table(&["ID", "Patient", "Doctor", "Date", "Time"], rows)
}

pub(super) fn render_bills(bills: &[BillView]) -> String {
    if bills.is_empty() {
        return "No bills found.\n".to_string();
    }
    let rows = bills
        .iter()
        .map(|view| {
            let bill = &view.bill;
            vec![
                bill.id.to_string(),
                view.patient_name.as_deref().unwrap_or(UNKNOWN_PATIENT).to_string(),
                bill.date.format(DATE_FORMAT).to_string(),
                format!("{:.2}", bill.total_amount),
            ]
        })
        .collect();
    render_table(&["ID", "Patient", "Date", "Total"], rows)
}

pub(super) fn render_invoice(invoice: &Invoice) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let thin = "-".repeat(RULE_WIDTH);
    let bill = &invoice.bill;
    let patient = &invoice.patient;

    let mut out = String::new();
    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!("{}\n", "INVOICE".bold()));
    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!("Bill ID: {}\n", bill.id));
    out.push_str(&format!("Date:    {}\n", bill.date.format(DATE_FORMAT)));
    out.push_str(&format!("{}\n", thin));
    out.push_str(&format!("Patient: {} (ID: {})\n", patient.name, patient.id));
    out.push_str(&format!("Age:     {}\n", patient.age));
    out.push_str(&format!("Gender:  {}\n", patient.gender));
    out.push_str(&format!("Contact: {}\n", patient.contact));
    out.push_str(&format!("{}\n", thin));
    let doctor = match (bill.doctor_id, &invoice.doctor_name) {
        (Some(_), Some(name)) => name.clone(),
        (Some(id), None) => format!("{} (ID: {})", UNKNOWN_DOCTOR, id),
        (None, _) => "none".to_string(),
    };
    out.push_str(&format!("Doctor:     {}\n", doctor));
    out.push_str(&format!("Doctor fee: {:>10.2}\n", bill.doctor_fee));
    out.push_str(&format!("{}\n", thin));
    out.push_str(&format!(
        "{} {:>10.2}\n",
        "Total:     ".bold(),
        bill.total_amount
    ));
    out.push_str(&format!("{}\n", rule));
    out
}

pub(super) fn render_config(config: &ClinicConfig) -> String {
    let entries = [
        ("patient_capacity", config.patient_capacity),
        ("doctor_capacity", config.doctor_capacity),
        ("appointment_capacity", config.appointment_capacity),
        ("bill_capacity", config.bill_capacity),
    ];
    entries
        .iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

fn render_table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| truncate_to_width(&cell, MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad_to_width(h, *w))
        .collect();
    out.push_str(&format!("{}\n", header_line.join("  ").trim_end().bold()));

    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&format!("{}\n", "-".repeat(total).dimmed()));

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad_to_width(cell, *w))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
