use chrono::{NaiveDate, NaiveDateTime};

use doctor_cell::models::Doctor;
use shared_models::booking::Booking;

use crate::conflict::classify;
use crate::models::CalendarEvent;
use crate::slots::materialize;

/// Materialize a doctor's slots over the range and classify each one.
/// Every slot yields exactly one event, whatever its status; nothing is
/// suppressed.
pub fn build_events(
    doctor: &Doctor,
    bookings: &[Booking],
    user_id: i64,
    now: NaiveDateTime,
    range_start: NaiveDate,
    range_end: NaiveDate,
    doctor_lookup: &dyn Fn(i64) -> Option<Doctor>,
) -> Vec<CalendarEvent> {
    materialize(&doctor.availability, doctor.id, range_start, range_end)
        .map(|slot| {
            let classification = classify(&slot, bookings, now, user_id, doctor_lookup);
            CalendarEvent {
                title: classification.status.label().to_string(),
                start: slot.start,
                end: slot.end,
                day: slot.day,
                time: slot.time,
                status: classification.status,
                tooltip: classification.tooltip,
                booking_id: classification.booking_id,
            }
        })
        .collect()
}
