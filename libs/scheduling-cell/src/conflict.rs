use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use doctor_cell::models::Doctor;
use shared_models::booking::Booking;

use crate::models::{
    MaterializedSlot, SlotClassification, SlotStatus, BOOKING_CUTOFF_MINUTES,
};

/// The requester's existing commitment at `(date, time)`, with any
/// doctor. This is the single predicate behind both the write-path
/// rejection in `booking::create_booking` and the read-path
/// `schedule-conflict` status, so the two cannot drift apart.
pub fn user_commitment_at<'a>(
    bookings: &'a [Booking],
    user_id: i64,
    date: NaiveDate,
    time: NaiveTime,
) -> Option<&'a Booking> {
    bookings
        .iter()
        .find(|b| b.user_id == user_id && b.date == date && b.time == time)
}

/// Whoever holds this doctor's slot, requester or not.
pub fn slot_occupant<'a>(
    bookings: &'a [Booking],
    doctor_id: i64,
    date: NaiveDate,
    time: NaiveTime,
) -> Option<&'a Booking> {
    bookings
        .iter()
        .find(|b| b.doctor_id == doctor_id && b.date == date && b.time == time)
}

/// Classify one materialized slot against the booking snapshot and the
/// injected clock value. Precedence, first match wins: past, the
/// requester's own booking, someone else's booking, a cross-doctor
/// commitment, then lateness. Lateness is the lowest-priority non-default
/// signal; past slots are never actionable regardless of bookings.
pub fn classify(
    slot: &MaterializedSlot,
    bookings: &[Booking],
    now: NaiveDateTime,
    user_id: i64,
    doctor_lookup: &dyn Fn(i64) -> Option<Doctor>,
) -> SlotClassification {
    if slot.start < now {
        return SlotClassification::bare(SlotStatus::Past);
    }

    let own = bookings.iter().find(|b| {
        b.user_id == user_id
            && b.doctor_id == slot.doctor_id
            && b.date == slot.date
            && b.time == slot.time
    });
    if let Some(own) = own {
        return SlotClassification {
            status: SlotStatus::BookedByUser,
            booking_id: Some(own.id),
            tooltip: Some("Click to cancel".to_string()),
        };
    }

    if let Some(other) = slot_occupant(bookings, slot.doctor_id, slot.date, slot.time) {
        return SlotClassification {
            status: SlotStatus::Booked,
            booking_id: Some(other.id),
            tooltip: Some("This slot is booked by another patient".to_string()),
        };
    }

    let elsewhere = user_commitment_at(bookings, user_id, slot.date, slot.time)
        .filter(|b| b.doctor_id != slot.doctor_id);
    if let Some(elsewhere) = elsewhere {
        let tooltip = match doctor_lookup(elsewhere.doctor_id) {
            Some(doctor) => format!(
                "You have an appointment with Dr. {name} at this time. \
                 To book this slot, please cancel your appointment with Dr. {name} first.",
                name = doctor.name
            ),
            None => "You have an appointment with another doctor at this time.".to_string(),
        };
        return SlotClassification {
            status: SlotStatus::ScheduleConflict,
            booking_id: None,
            tooltip: Some(tooltip),
        };
    }

    // Strict <: a gap of exactly the cutoff is still bookable.
    if slot.start - now < Duration::minutes(BOOKING_CUTOFF_MINUTES) {
        return SlotClassification {
            status: SlotStatus::TooLateToBook,
            booking_id: None,
            tooltip: Some(
                "This slot is within 15 minutes of the current time and can no longer be booked."
                    .to_string(),
            ),
        };
    }

    SlotClassification::bare(SlotStatus::Available)
}
