use chrono::{Datelike, NaiveDateTime};
use tracing::debug;
use uuid::Uuid;

use shared_models::booking::Booking;

use crate::conflict::user_commitment_at;
use crate::models::{weekday_name, BookSlotRequest, BookingError};

/// Validate and build a new booking. A user may never hold two bookings
/// at the same `(date, time)`, with any doctor. Persistence stays with
/// the caller: the returned value must be appended to the same collection
/// that was passed in, under the caller's write serialization.
pub fn create_booking(
    request: &BookSlotRequest,
    existing: &[Booking],
    now: NaiveDateTime,
) -> Result<Booking, BookingError> {
    if user_commitment_at(existing, request.user_id, request.date, request.time).is_some() {
        debug!(
            "Rejected booking for user {} at {} {}: already committed",
            request.user_id, request.date, request.time
        );
        return Err(BookingError::Conflict);
    }

    Ok(Booking {
        id: Uuid::new_v4(),
        user_id: request.user_id,
        doctor_id: request.doctor_id,
        date: request.date,
        // Derived rather than trusted, so `day` always equals the weekday
        // of `date`.
        day: weekday_name(request.date.weekday()).to_string(),
        time: request.time,
        notify: request.notify,
        booked_at: now,
    })
}

/// Validate a cancellation. On success the caller removes the returned id
/// from the collection.
pub fn cancel_booking(
    booking_id: Uuid,
    user_id: i64,
    existing: &[Booking],
) -> Result<Uuid, BookingError> {
    let booking = existing
        .iter()
        .find(|b| b.id == booking_id)
        .ok_or(BookingError::NotFound)?;

    if booking.user_id != user_id {
        return Err(BookingError::Unauthorized);
    }

    Ok(booking.id)
}
