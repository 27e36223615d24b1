use super::helpers::{bill_view, doctor_name, valid_amount};
use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Bill, Charges, Doctor, Invoice, NewBill, Patient};
use crate::store::backend::StorageBackend;
use crate::store::ClinicStore;

/// Creates a bill for an existing patient.
///
/// With a consultation, the doctor must exist and the fee is charged.
/// Without one, the bill has no doctor and a zero fee.
pub fn generate<B: StorageBackend>(
    store: &mut ClinicStore<B>,
    new: NewBill,
) -> Result<CmdResult> {
    let records = store.records_mut();
    records.require::<Patient>(new.patient_id)?;

    let (doctor_id, charges) = match new.consultation {
        Some(consultation) => {
            records.require::<Doctor>(consultation.doctor_id)?;
            let fee = valid_amount("Doctor fee", consultation.fee)?;
            (Some(consultation.doctor_id), Charges { doctor_fee: fee })
        }
        None => (None, Charges::default()),
    };

    let bill = records
        .create(|id| Bill {
            id,
            patient_id: new.patient_id,
            doctor_id,
            doctor_fee: charges.doctor_fee,
            total_amount: charges.total(),
            date: new.date,
        })?
        .clone();
    tracing::debug!(
        id = bill.id,
        patient = bill.patient_id,
        total = bill.total_amount,
        "bill generated"
    );

    let view = bill_view(store.records(), &bill);
    let mut result = CmdResult::default().modified();
    result.add_message(CmdMessage::success(format!(
        "Bill generated successfully with ID: {}. Total: {:.2}",
        bill.id, bill.total_amount
    )));
    Ok(result.with_bills(vec![view]))
}

pub fn list<B: StorageBackend>(store: &ClinicStore<B>) -> CmdResult {
    let records = store.records();
    let views = records.bills().iter().map(|b| bill_view(records, b)).collect();
    CmdResult::default().with_bills(views)
}

/// Assembles the invoice for one bill.
///
/// Fails if the bill is unknown or its patient no longer exists. A missing
/// doctor is tolerated and left unnamed.
pub fn invoice<B: StorageBackend>(store: &ClinicStore<B>, bill_id: u32) -> Result<CmdResult> {
    let records = store.records();
    let bill = records.require::<Bill>(bill_id)?;
    let patient = records.require::<Patient>(bill.patient_id)?;
    let doctor_name = bill
        .doctor_id
        .and_then(|id| doctor_name(records, id))
        .map(str::to_string);

    Ok(CmdResult::default().with_invoice(Invoice {
        bill: bill.clone(),
        patient: patient.clone(),
        doctor_name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClinicError;
    use crate::model::{parse_date, Consultation, RecordKind};
    use crate::store::memory::fixtures::StoreFixture;

    fn bill_for(patient_id: u32, consultation: Option<Consultation>) -> NewBill {
        NewBill {
            patient_id,
            consultation,
            date: parse_date("2024-05-01").unwrap(),
        }
    }

    fn consultation(fee: f64) -> Option<Consultation> {
        Some(Consultation { doctor_id: 1, fee })
    }

    #[test]
    fn total_equals_doctor_fee() {
        let mut store = StoreFixture::new()
            .with_patient("Alice")
            .with_doctor("Dr. Lee", "Cardiology")
            .store;

        let result = generate(&mut store, bill_for(1, consultation(150.0))).unwrap();
        let bill = &result.bills[0].bill;
        assert_eq!(bill.doctor_id, Some(1));
        assert_eq!(bill.doctor_fee, 150.0);
        assert_eq!(bill.total_amount, 150.0);
    }

    #[test]
    fn bill_without_consultation_is_zero() {
        let mut store = StoreFixture::new().with_patient("Alice").store;

        let result = generate(&mut store, bill_for(1, None)).unwrap();
        let bill = &result.bills[0].bill;
        assert_eq!(bill.doctor_id, None);
        assert_eq!(bill.total_amount, 0.0);
    }

    #[test]
    fn generate_validates_references_and_fee() {
        let mut store = StoreFixture::new()
            .with_patient("Alice")
            .with_doctor("Dr. Lee", "Cardiology")
            .store;

        assert!(matches!(
            generate(&mut store, bill_for(2, None)),
            Err(ClinicError::NotFound {
                kind: RecordKind::Patient,
                ..
            })
        ));
        let missing_doctor = Some(Consultation {
            doctor_id: 4,
            fee: 10.0,
        });
        assert!(matches!(
            generate(&mut store, bill_for(1, missing_doctor)),
            Err(ClinicError::NotFound {
                kind: RecordKind::Doctor,
                ..
            })
        ));
        assert!(matches!(
            generate(&mut store, bill_for(1, consultation(-5.0))),
            Err(ClinicError::InvalidInput(_))
        ));
        assert_eq!(store.records().len(RecordKind::Bill), 0);
    }

    #[test]
    fn invoice_names_patient_and_doctor() {
        let mut store = StoreFixture::new()
            .with_patient("Alice")
            .with_doctor("Dr. Lee", "Cardiology")
            .store;
        generate(&mut store, bill_for(1, consultation(150.0))).unwrap();

        let invoice = invoice(&store, 1).unwrap().invoice.unwrap();
        assert_eq!(invoice.patient.name, "Alice");
        assert_eq!(invoice.doctor_name.as_deref(), Some("Dr. Lee"));
        assert_eq!(invoice.bill.total_amount, 150.0);
    }

    #[test]
    fn invoice_fails_when_patient_is_gone() {
        let mut store = StoreFixture::new().with_patient("Alice").store;
        generate(&mut store, bill_for(1, None)).unwrap();
        store.records_mut().remove::<Patient>(1).unwrap();

        assert!(matches!(
            invoice(&store, 1),
            Err(ClinicError::NotFound {
                kind: RecordKind::Patient,
                id: 1
            })
        ));
        // The bill itself is still listed
        assert_eq!(list(&store).bills[0].patient_name, None);
    }

    #[test]
    fn invoice_for_unknown_bill_is_not_found() {
        let store = StoreFixture::new().store;
        assert!(matches!(
            invoice(&store, 1),
            Err(ClinicError::NotFound {
                kind: RecordKind::Bill,
                id: 1
            })
        ));
    }
}
