use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use doctor_cell::DoctorDirectory;
use shared_models::{booking::Booking, error::AppError};
use shared_store::{remove_booking, BookingStore};

use crate::booking::{cancel_booking, create_booking};
use crate::events::build_events;
use crate::models::{BookSlotRequest, BookingError};

pub struct SchedulingState {
    pub directory: Arc<DoctorDirectory>,
    pub store: BookingStore,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsQuery {
    pub user_id: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelQuery {
    pub user_id: i64,
}

#[axum::debug_handler]
pub async fn get_calendar_events(
    State(state): State<Arc<SchedulingState>>,
    Path(doctor_id): Path<i64>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Value>, AppError> {
    let doctor = state
        .directory
        .doctor_by_id(doctor_id)
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

    let bookings = state.store.read().await;
    let lookup = |id: i64| state.directory.doctor_by_id(id).cloned();
    let events = build_events(
        doctor,
        bookings.as_slice(),
        query.user_id,
        Utc::now().naive_utc(),
        query.start,
        query.end,
        &lookup,
    );

    Ok(Json(json!({
        "doctorId": doctor_id,
        "events": events,
        "total": events.len()
    })))
}

#[axum::debug_handler]
pub async fn book_slot(
    State(state): State<Arc<SchedulingState>>,
    Json(request): Json<BookSlotRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    // Validate-then-append under one write guard: concurrent booking
    // commands against the same collection are serialized here.
    let mut bookings = state.store.write().await;
    let booking = create_booking(&request, bookings.as_slice(), Utc::now().naive_utc())
        .map_err(map_booking_error)?;
    bookings.push(booking.clone());

    info!(
        "Booking {} created for user {} with doctor {}",
        booking.id, booking.user_id, booking.doctor_id
    );
    Ok((StatusCode::CREATED, Json(booking)))
}

#[axum::debug_handler]
pub async fn cancel_slot(
    State(state): State<Arc<SchedulingState>>,
    Path(booking_id): Path<Uuid>,
    Query(query): Query<CancelQuery>,
) -> Result<Json<Value>, AppError> {
    let mut bookings = state.store.write().await;
    let removed_id =
        cancel_booking(booking_id, query.user_id, bookings.as_slice()).map_err(map_booking_error)?;
    remove_booking(&mut bookings, removed_id);

    info!("Booking {} cancelled by user {}", removed_id, query.user_id);
    Ok(Json(json!({ "cancelled": removed_id })))
}

fn map_booking_error(err: BookingError) -> AppError {
    match err {
        BookingError::Conflict => AppError::Conflict(err.to_string()),
        BookingError::NotFound => AppError::NotFound(err.to_string()),
        BookingError::Unauthorized => AppError::Forbidden(err.to_string()),
    }
}
