use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A confirmed slot occupancy. `(doctor_id, date, time)` identifies the
/// slot; `(user_id, date, time)` identifies the user's time commitment
/// regardless of doctor. `day` is redundant and always equals the weekday
/// of `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub user_id: i64,
    pub doctor_id: i64,
    pub date: NaiveDate,
    pub day: String,
    pub time: NaiveTime,
    pub notify: bool,
    pub booked_at: NaiveDateTime,
}
