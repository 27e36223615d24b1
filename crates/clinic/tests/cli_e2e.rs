#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn clinic_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("clinic"));
    cmd.env("CLINIC_DATA_DIR", data.path().as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn add_alice(data: &TempDir) {
    clinic_cmd(data)
        .args([
            "patient", "add", "--name", "Alice", "--age", "30", "--gender", "F", "--disease",
            "Flu", "--contact", "555-1111",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Patient added successfully with ID: 1"));
}

fn add_dr_lee(data: &TempDir) {
    clinic_cmd(data)
        .args([
            "doctor",
            "add",
            "--name",
            "Dr. Lee",
            "--specialization",
            "Cardiology",
            "--availability",
            "Mon-Fri 9-5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Doctor added successfully with ID: 1"));
}

#[test]
fn test_clinic_day_workflow() {
    let data = TempDir::new().unwrap();

    add_alice(&data);
    add_dr_lee(&data);

    // 1. Schedule and bill
    clinic_cmd(&data)
        .args([
            "appointment", "schedule", "--patient", "1", "--doctor", "1", "--date",
            "2024-05-01", "--time", "09:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment scheduled successfully with ID: 1"));

    clinic_cmd(&data)
        .args([
            "bill", "generate", "--patient", "1", "--doctor", "1", "--fee", "50", "--date",
            "2024-05-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 50.00"));

    clinic_cmd(&data)
        .args(["bill", "invoice", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Patient: Alice (ID: 1)"))
        .stdout(predicate::str::contains("Dr. Lee"))
        .stdout(predicate::str::contains("50.00"));

    // 2. Cancel and delete
    clinic_cmd(&data)
        .args(["appointment", "cancel", "1", "--yes"])
        .assert()
        .success();
    clinic_cmd(&data)
        .args(["appointment", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No appointments found."));

    clinic_cmd(&data)
        .args(["patient", "delete", "1"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Patient with ID 1 deleted successfully."))
        .stdout(predicate::str::contains("1 bill(s) still reference"));

    clinic_cmd(&data)
        .args(["patient", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No patients found."));

    // 3. The bill stays, pointing at nobody
    clinic_cmd(&data)
        .args(["bill", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown Patient"));
    clinic_cmd(&data)
        .args(["check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bill 1 references missing patient 1."));
}

#[test]
fn test_data_files_written_after_change() {
    let data = TempDir::new().unwrap();
    add_alice(&data);

    for name in [
        "patients.json",
        "doctors.json",
        "appointments.json",
        "bills.json",
        "counters.json",
    ] {
        assert!(data.path().join(name).exists(), "missing {}", name);
    }
    let patients = fs::read_to_string(data.path().join("patients.json")).unwrap();
    assert!(patients.contains("\"count\": 1"));
    assert!(patients.contains("Alice"));
}

#[test]
fn test_delete_needs_exact_yes() {
    let data = TempDir::new().unwrap();
    add_alice(&data);

    clinic_cmd(&data)
        .args(["patient", "delete", "1"])
        .write_stdin("Yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled."));

    clinic_cmd(&data)
        .args(["patient", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn test_edit_keeps_omitted_fields() {
    let data = TempDir::new().unwrap();
    add_alice(&data);

    clinic_cmd(&data)
        .args(["patient", "edit", "1", "--age", "31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Age:     31"))
        .stdout(predicate::str::contains("Contact: 555-1111"));
}

#[test]
fn test_unknown_id_fails() {
    let data = TempDir::new().unwrap();

    clinic_cmd(&data)
        .args(["patient", "show", "9"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Patient with ID 9 not found"));

    clinic_cmd(&data)
        .args(["bill", "generate", "--patient", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Patient with ID 9 not found"));
}

#[test]
fn test_bad_date_is_rejected() {
    let data = TempDir::new().unwrap();
    add_alice(&data);
    add_dr_lee(&data);

    clinic_cmd(&data)
        .args([
            "appointment", "schedule", "--patient", "1", "--doctor", "1", "--date",
            "05/01/2024", "--time", "09:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a date"));
}

#[test]
fn test_capacity_from_config_file() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("clinic.toml"), "patient_capacity = 1\n").unwrap();
    add_alice(&data);

    clinic_cmd(&data)
        .args(["patient", "add", "--name", "Bob", "--age", "40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Maximum patient limit reached (1)"));

    clinic_cmd(&data)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("patient_capacity = 1"));
}

#[test]
fn test_corrupt_file_warns_and_continues() {
    let data = TempDir::new().unwrap();
    add_alice(&data);
    fs::write(data.path().join("doctors.json"), "{ not json").unwrap();

    clinic_cmd(&data)
        .args(["patient", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not read count from doctor file"))
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn test_changes_not_saved_over_unreadable_file() {
    let data = TempDir::new().unwrap();
    add_alice(&data);
    let patients = data.path().join("patients.json");
    fs::write(&patients, "{ not json").unwrap();

    clinic_cmd(&data)
        .args(["doctor", "add", "--name", "Dr. Park"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Could not read count from patient file"))
        .stderr(predicate::str::contains("Changes not saved"));
    assert_eq!(fs::read_to_string(&patients).unwrap(), "{ not json");

    // An explicit save is the way to accept the loss
    clinic_cmd(&data).args(["save"]).assert().success();
    assert!(fs::read_to_string(&patients)
        .unwrap()
        .contains("\"count\": 0"));
}

#[test]
fn test_doctor_search() {
    let data = TempDir::new().unwrap();
    add_dr_lee(&data);

    clinic_cmd(&data)
        .args(["doctor", "search", "Cardio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dr. Lee"))
        .stdout(predicate::str::contains("Found 1 doctor(s)"));

    clinic_cmd(&data)
        .args(["doctor", "search", "cardio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No doctors found matching 'cardio'."));
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    clinic_cmd(&env_dir)
        .args(["--data-dir"])
        .arg(flag_dir.path())
        .args(["doctor", "add", "--name", "Dr. Park"])
        .assert()
        .success();

    assert!(flag_dir.path().join("doctors.json").exists());
    assert!(!env_dir.path().join("doctors.json").exists());
}
