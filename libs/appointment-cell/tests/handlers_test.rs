// libs/appointment-cell/tests/handlers_test.rs

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use appointment_cell::{schedule_routes, ScheduleRegistry};
use patient_cell::{CreatePatientRequest, Mrn, PatientService};

// ==============================================================================
// TEST FIXTURES AND UTILITIES
// ==============================================================================

struct TestApp {
    router: Router,
    registry: Arc<ScheduleRegistry>,
}

impl TestApp {
    fn new() -> Self {
        let registry = Arc::new(ScheduleRegistry::new(Arc::new(PatientService::new())));
        Self {
            router: schedule_routes(registry.clone()),
            registry,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn create_doctor(&self) -> String {
        let (status, body) = self.post("/", json!({
            "first_name": "john",
            "last_name": "smith",
            "license_number": "MD-44821",
            "specialty": "Family Medicine",
            "role": "doctor"
        })).await;
        assert_eq!(status, StatusCode::CREATED);
        body["provider"]["id"].as_str().unwrap().to_string()
    }

    async fn create_patient(&self) -> Mrn {
        self.registry
            .patients()
            .create_patient(CreatePatientRequest {
                first_name: "ann".to_string(),
                last_name: "lee".to_string(),
                gender: "F".to_string(),
                date_of_birth: "04/01/1970".to_string(),
            })
            .await
            .unwrap()
            .mrn
    }
}

// ==============================================================================
// SCHEDULE SETUP
// ==============================================================================

#[tokio::test]
async fn create_and_list_schedules() {
    let app = TestApp::new();

    let (status, body) = app.post("/", json!({
        "first_name": "mary",
        "last_name": "jones",
        "license_number": "RN-1",
        "specialty": "Pediatrics",
        "role": "nurse"
    })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["display_name"], "Mary Jones, RN");
    assert_eq!(body["message"], "Mary Jones, RN's schedule has successfully been created.");

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["providers"][0]["index"], 1);
    assert_eq!(body["providers"][0]["role"], "nurse");
}

#[tokio::test]
async fn unknown_provider_is_not_found() {
    let app = TestApp::new();
    let (status, body) = app.get(&format!("/{}/week", uuid::Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

// ==============================================================================
// BOOKING FLOW
// ==============================================================================

#[tokio::test]
async fn book_view_and_cancel() {
    let app = TestApp::new();
    let provider = app.create_doctor().await;
    let mrn = app.create_patient().await;

    let (status, body) = app.post(&format!("/{}/appointments", provider), json!({
        "day": 2,
        "slot": "09:00 am",
        "mrn": mrn,
        "appointment_type": "Physical Exam"
    })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Physical Exam appointment booked for MRN# 1001!");
    assert_eq!(body["booking"]["slot"], "09:00 AM");
    assert_eq!(body["booking"]["day"], "Monday");

    let (status, body) = app.get(&format!("/{}/availability?day=2&slot=09:00%20AM", provider)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], false);

    let (_, body) = app.get(&format!("/{}/days/2", provider)).await;
    assert_eq!(body["columns"], json!(["Monday"]));
    assert_eq!(body["rows"][0]["slot"], "09:00 AM");
    assert_eq!(body["rows"][0]["entries"][0], "MRN: 1001 Physical Exam");

    let (_, body) = app.get(&format!("/{}/patients/{}", provider, mrn)).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["appointments"][0], json!({ "day": "Monday", "slot": "09:00 AM" }));

    let (status, body) = app.post(&format!("/{}/cancel", provider), json!({ "day": 2, "slot": "09:00 AM" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Appointment canceled for Monday at 09:00 AM.");

    let (_, body) = app.get(&format!("/{}/days/2/available", provider)).await;
    assert_eq!(body["total"], 16);
}

#[tokio::test]
async fn booking_unknown_mrn_is_not_found() {
    let app = TestApp::new();
    let provider = app.create_doctor().await;

    let (status, _) = app.post(&format!("/{}/appointments", provider), json!({
        "day": 2,
        "slot": "09:00 AM",
        "mrn": 4242,
        "appointment_type": "Labwork"
    })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_day_and_slot_are_bad_requests() {
    let app = TestApp::new();
    let provider = app.create_doctor().await;
    let mrn = app.create_patient().await;

    let (status, _) = app.post(&format!("/{}/appointments", provider), json!({
        "day": 7,
        "slot": "09:00 AM",
        "mrn": mrn,
        "appointment_type": "Labwork"
    })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.post(&format!("/{}/block", provider), json!({ "day": 2, "slot": "05:00 PM" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get(&format!("/{}/days/1", provider)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ==============================================================================
// BLOCKING
// ==============================================================================

#[tokio::test]
async fn blocked_slot_conflicts_on_booking_and_cancel() {
    let app = TestApp::new();
    let provider = app.create_doctor().await;
    let mrn = app.create_patient().await;

    let (status, body) = app.post(&format!("/{}/block", provider), json!({ "day": 3, "slot": "02:00 PM" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Tuesday at 02:00 PM has been blocked.");

    let (status, _) = app.post(&format!("/{}/appointments", provider), json!({
        "day": 3,
        "slot": "02:00 PM",
        "mrn": mrn,
        "appointment_type": "Labwork"
    })).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.post(&format!("/{}/cancel", provider), json!({ "day": 3, "slot": "02:00 PM" })).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.post(&format!("/{}/block", provider), json!({ "day": 3, "slot": "02:00 PM" })).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.post(&format!("/{}/unblock", provider), json!({ "day": 3, "slot": "02:00 PM" })).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get(&format!("/{}/week", provider)).await;
    assert_eq!(body["rows"][10]["slot"], "02:00 PM");
    assert_eq!(body["rows"][10]["entries"][1], "OPEN");
}

#[tokio::test]
async fn cancel_on_open_slot_reports_nothing_to_cancel() {
    let app = TestApp::new();
    let provider = app.create_doctor().await;

    let (status, body) = app.post(&format!("/{}/cancel", provider), json!({ "day": 4, "slot": "11:00 AM" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "There's no appointment in that slot.");
}
