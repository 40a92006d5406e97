// libs/patient-cell/tests/patient_service_test.rs

use assert_matches::assert_matches;

use patient_cell::models::{CreatePatientRequest, Gender, Mrn, PatientError};
use patient_cell::services::{MrnAllocator, PatientService};

fn request(first: &str, last: &str, gender: &str, dob: &str) -> CreatePatientRequest {
    CreatePatientRequest {
        first_name: first.to_string(),
        last_name: last.to_string(),
        gender: gender.to_string(),
        date_of_birth: dob.to_string(),
    }
}

#[tokio::test]
async fn sequential_patients_get_consecutive_mrns_from_1001() {
    let service = PatientService::new();

    let first = service.create_patient(request("jane", "doe", "F", "01/15/1990")).await.unwrap();
    let second = service.create_patient(request("john", "roe", "male", "11/02/1984")).await.unwrap();

    assert_eq!(first.mrn, Mrn(1001));
    assert_eq!(second.mrn.0 - first.mrn.0, 1);
    assert_eq!(first.first_name, "Jane");
    assert_eq!(second.gender, Gender::Male);
}

#[tokio::test]
async fn rejected_requests_do_not_consume_an_mrn() {
    let service = PatientService::new();

    let err = service.create_patient(request("a", "b", "Z", "01/01/2000")).await.unwrap_err();
    assert_matches!(err, PatientError::InvalidGender(_));

    let err = service.create_patient(request("a", "b", "F", "02/30/2000")).await.unwrap_err();
    assert_matches!(err, PatientError::InvalidDate(_));

    let patient = service.create_patient(request("a", "b", "O", "02/29/2000")).await.unwrap();
    assert_eq!(patient.mrn, Mrn(1001));
    assert_eq!(service.len().await, 1);
}

#[tokio::test]
async fn lookup_and_listing() {
    let service = PatientService::with_allocator(MrnAllocator::starting_at(5000));
    assert!(service.is_empty().await);

    service.create_patient(request("ann", "one", "F", "03/03/1973")).await.unwrap();
    service.create_patient(request("bob", "two", "M", "04/04/1974")).await.unwrap();

    assert!(service.contains(Mrn(5001)).await);
    assert_eq!(service.get_patient(Mrn(5000)).await.unwrap().first_name, "Ann");
    assert_matches!(service.get_patient(Mrn(42)).await, Err(PatientError::NotFound(Mrn(42))));

    let listed = service.list_patients().await;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].index, 1);
    assert_eq!(listed[1].index, 2);
    assert_eq!(listed[1].item.mrn, Mrn(5001));
}

#[tokio::test]
async fn exhausted_allocator_rejects_new_patients() {
    let service = PatientService::with_allocator(MrnAllocator::starting_at(u32::MAX));

    let last = service.create_patient(request("ann", "one", "F", "03/03/1973")).await.unwrap();
    assert_eq!(last.mrn, Mrn(u32::MAX));

    let err = service.create_patient(request("bob", "two", "M", "04/04/1974")).await.unwrap_err();
    assert_eq!(err, PatientError::MrnExhausted);
    assert_eq!(service.len().await, 1);
}
