use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_models::Listed;

use crate::models::{CreatePatientRequest, Mrn, PatientError, PatientInfo};
use crate::services::PatientService;

impl From<PatientError> for AppError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::InvalidGender(_) | PatientError::InvalidDate(_) => {
                AppError::ValidationError(err.to_string())
            }
            PatientError::NotFound(_) => AppError::NotFound(err.to_string()),
            PatientError::MrnExhausted => AppError::Internal(err.to_string()),
        }
    }
}

#[axum::debug_handler]
pub async fn create_patient(
    State(patients): State<Arc<PatientService>>,
    Json(request): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let patient = patients.create_patient(request).await?;

    Ok((StatusCode::CREATED, Json(json!({
        "patient": patient,
        "message": format!("Patient was successfully created in the system. MRN is: {}", patient.mrn)
    }))))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(patients): State<Arc<PatientService>>,
    Path(mrn): Path<Mrn>,
) -> Result<Json<Value>, AppError> {
    let patient = patients.get_patient(mrn).await?;
    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn list_patients(
    State(patients): State<Arc<PatientService>>,
) -> Result<Json<Value>, AppError> {
    let rows: Vec<Listed<PatientInfo>> = patients
        .list_patients()
        .await
        .into_iter()
        .map(|listed| Listed { index: listed.index, item: listed.item.info() })
        .collect();

    Ok(Json(json!({
        "patients": rows,
        "total": rows.len()
    })))
}
