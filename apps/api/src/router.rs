use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::{schedule_routes, ScheduleRegistry};
use patient_cell::{patient_routes, PatientService};
use shared_config::AppConfig;

pub fn create_router(
    config: Arc<AppConfig>,
    patients: Arc<PatientService>,
    schedules: Arc<ScheduleRegistry>,
) -> Router {
    let banner = format!("{} API is running!", config.practice_name);

    Router::new()
        .route("/", get(move || async move { banner }))
        .nest("/patients", patient_routes(patients))
        .nest("/schedules", schedule_routes(schedules))
}
