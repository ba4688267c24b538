use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{self, SchedulingState};

pub fn scheduling_routes(state: Arc<SchedulingState>) -> Router {
    Router::new()
        .route(
            "/doctors/{doctor_id}/events",
            get(handlers::get_calendar_events),
        )
        .route("/bookings", post(handlers::book_slot))
        .route("/bookings/{booking_id}", delete(handlers::cancel_slot))
        .with_state(state)
}
