// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use doctor_cell::CreateProviderRequest;
use patient_cell::Mrn;
use shared_models::error::AppError;

use crate::error::{CalendarError, RegistryError};
use crate::models::{normalize_slot_label, BookAppointmentRequest, CancelOutcome, SlotRequest};
use crate::services::ScheduleRegistry;

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::ProviderNotFound(_) | RegistryError::PatientNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            RegistryError::Calendar(ref calendar_err) => match calendar_err {
                CalendarError::InvalidDay(_) | CalendarError::InvalidSlotLabel(_) => {
                    AppError::BadRequest(err.to_string())
                }
                CalendarError::SlotUnavailable { .. }
                | CalendarError::SlotNotOpen { .. }
                | CalendarError::SlotNotBlocked { .. } => AppError::Conflict(err.to_string()),
            },
        }
    }
}

// ==============================================================================
// SCHEDULE SETUP
// ==============================================================================

#[axum::debug_handler]
pub async fn create_schedule(
    State(registry): State<Arc<ScheduleRegistry>>,
    Json(request): Json<CreateProviderRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let provider = registry.create_schedule(request).await;

    Ok((StatusCode::CREATED, Json(json!({
        "provider": provider,
        "display_name": provider.display_name(),
        "message": format!("{}'s schedule has successfully been created.", provider)
    }))))
}

#[axum::debug_handler]
pub async fn list_schedules(
    State(registry): State<Arc<ScheduleRegistry>>,
) -> Result<Json<Value>, AppError> {
    let providers = registry.list_providers().await;

    Ok(Json(json!({
        "providers": providers,
        "total": providers.len()
    })))
}

// ==============================================================================
// VIEWS AND QUERIES
// ==============================================================================

#[axum::debug_handler]
pub async fn view_week(
    State(registry): State<Arc<ScheduleRegistry>>,
    Path(provider_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let table = registry.render_week(provider_id).await?;
    Ok(Json(json!(table)))
}

#[axum::debug_handler]
pub async fn view_day(
    State(registry): State<Arc<ScheduleRegistry>>,
    Path((provider_id, day)): Path<(Uuid, i32)>,
) -> Result<Json<Value>, AppError> {
    let table = registry.render_day(provider_id, day).await?;
    Ok(Json(json!(table)))
}

#[axum::debug_handler]
pub async fn available_slots(
    State(registry): State<Arc<ScheduleRegistry>>,
    Path((provider_id, day)): Path<(Uuid, i32)>,
) -> Result<Json<Value>, AppError> {
    let provider = registry.provider(provider_id).await?;
    let slots = registry.available_slots(provider_id, day).await?;

    Ok(Json(json!({
        "provider": provider.display_name(),
        "available": slots,
        "total": slots.len()
    })))
}

#[axum::debug_handler]
pub async fn check_availability(
    State(registry): State<Arc<ScheduleRegistry>>,
    Path(provider_id): Path<Uuid>,
    Query(query): Query<SlotRequest>,
) -> Result<Json<Value>, AppError> {
    let slot = normalize_slot_label(&query.slot);
    let available = registry.is_available(provider_id, query.day, &slot).await?;

    Ok(Json(json!({
        "day": query.day,
        "slot": slot,
        "available": available
    })))
}

#[axum::debug_handler]
pub async fn patient_appointments(
    State(registry): State<Arc<ScheduleRegistry>>,
    Path((provider_id, mrn)): Path<(Uuid, Mrn)>,
) -> Result<Json<Value>, AppError> {
    let appointments = registry.find_by_patient(provider_id, mrn).await?;

    Ok(Json(json!({
        "mrn": mrn,
        "appointments": appointments,
        "total": appointments.len()
    })))
}

// ==============================================================================
// MUTATIONS
// ==============================================================================

#[axum::debug_handler]
pub async fn book_appointment(
    State(registry): State<Arc<ScheduleRegistry>>,
    Path(provider_id): Path<Uuid>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let slot = normalize_slot_label(&request.slot);
    let booking = registry
        .book(provider_id, request.day, &slot, request.mrn, &request.appointment_type)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({
        "booking": booking,
        "message": booking.confirmation()
    }))))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(registry): State<Arc<ScheduleRegistry>>,
    Path(provider_id): Path<Uuid>,
    Json(request): Json<SlotRequest>,
) -> Result<Json<Value>, AppError> {
    let slot = normalize_slot_label(&request.slot);

    match registry.cancel(provider_id, request.day, &slot).await? {
        CancelOutcome::Cancelled(booking) => Ok(Json(json!({
            "cancelled": booking,
            "message": format!("Appointment canceled for {} at {}.", booking.day, booking.slot)
        }))),
        CancelOutcome::NothingToCancel => {
            Err(AppError::Conflict("There's no appointment in that slot.".to_string()))
        }
    }
}

#[axum::debug_handler]
pub async fn block_slot(
    State(registry): State<Arc<ScheduleRegistry>>,
    Path(provider_id): Path<Uuid>,
    Json(request): Json<SlotRequest>,
) -> Result<Json<Value>, AppError> {
    let slot = normalize_slot_label(&request.slot);
    let blocked = registry.block(provider_id, request.day, &slot).await?;

    Ok(Json(json!({
        "blocked": blocked,
        "message": format!("{} has been blocked.", blocked)
    })))
}

#[axum::debug_handler]
pub async fn unblock_slot(
    State(registry): State<Arc<ScheduleRegistry>>,
    Path(provider_id): Path<Uuid>,
    Json(request): Json<SlotRequest>,
) -> Result<Json<Value>, AppError> {
    let slot = normalize_slot_label(&request.slot);
    let reopened = registry.unblock(provider_id, request.day, &slot).await?;

    Ok(Json(json!({
        "reopened": reopened,
        "message": format!("{} is open for booking again.", reopened)
    })))
}
