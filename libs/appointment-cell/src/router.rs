// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::services::ScheduleRegistry;

pub fn schedule_routes(registry: Arc<ScheduleRegistry>) -> Router {
    Router::new()
        .route("/", get(handlers::list_schedules).post(handlers::create_schedule))

        // Views
        .route("/{provider_id}/week", get(handlers::view_week))
        .route("/{provider_id}/days/{day}", get(handlers::view_day))
        .route("/{provider_id}/days/{day}/available", get(handlers::available_slots))
        .route("/{provider_id}/availability", get(handlers::check_availability))
        .route("/{provider_id}/patients/{mrn}", get(handlers::patient_appointments))

        // Slot mutations
        .route("/{provider_id}/appointments", post(handlers::book_appointment))
        .route("/{provider_id}/cancel", post(handlers::cancel_appointment))
        .route("/{provider_id}/block", post(handlers::block_slot))
        .route("/{provider_id}/unblock", post(handlers::unblock_slot))

        .with_state(registry)
}
