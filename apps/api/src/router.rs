use std::sync::Arc;

use axum::{routing::get, Router};

use doctor_cell::router::doctor_routes;
use doctor_cell::DoctorDirectory;
use scheduling_cell::handlers::SchedulingState;
use scheduling_cell::router::scheduling_routes;

pub fn create_router(
    directory: Arc<DoctorDirectory>,
    scheduling_state: Arc<SchedulingState>,
) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic booking API is running!" }))
        .nest("/doctors", doctor_routes(directory))
        .nest("/schedule", scheduling_routes(scheduling_state))
}
