use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use shared_models::booking::Booking;

/// Fixed slot length, matching the feed's generation granularity.
pub const SLOT_MINUTES: i64 = 30;

/// Slots starting closer than this to "now" can no longer be booked. The
/// boundary is exclusive: a gap of exactly this many minutes is still
/// bookable.
pub const BOOKING_CUTOFF_MINUTES: i64 = 15;

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A concrete 30-minute slot derived from a weekly template and a date.
/// Produced fresh on every materialization, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterializedSlot {
    pub doctor_id: i64,
    pub date: NaiveDate,
    pub day: String,
    pub time: NaiveTime,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotStatus {
    Available,
    Past,
    TooLateToBook,
    BookedByUser,
    Booked,
    ScheduleConflict,
}

impl SlotStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SlotStatus::Available => "Available",
            SlotStatus::Past => "Past",
            SlotStatus::TooLateToBook => "Too Late to Book",
            SlotStatus::BookedByUser => "Your Booking",
            SlotStatus::Booked => "Booked",
            SlotStatus::ScheduleConflict => "Schedule Conflict",
        }
    }
}

/// Outcome of classifying one slot. Computed fresh per query; carries no
/// identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotClassification {
    pub status: SlotStatus,
    pub booking_id: Option<Uuid>,
    pub tooltip: Option<String>,
}

impl SlotClassification {
    pub(crate) fn bare(status: SlotStatus) -> Self {
        Self {
            status,
            booking_id: None,
            tooltip: None,
        }
    }
}

/// Display-ready record for one materialized slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub day: String,
    pub time: NaiveTime,
    pub status: SlotStatus,
    pub tooltip: Option<String>,
    pub booking_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSlotRequest {
    pub user_id: i64,
    pub doctor_id: i64,
    pub date: NaiveDate,
    /// Redundant weekday name kept for snapshot compatibility; the
    /// validator re-derives it from `date`.
    #[serde(default)]
    pub day: Option<String>,
    pub time: NaiveTime,
    #[serde(default)]
    pub notify: bool,
}

/// Expected command outcomes, surfaced as distinguishable values so the
/// presentation layer can render a specific message per kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("You already have an appointment at this time")]
    Conflict,

    #[error("Booking not found")]
    NotFound,

    #[error("You can only cancel your own bookings")]
    Unauthorized,
}
