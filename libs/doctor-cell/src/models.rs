use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Specialities assigned cyclically to feed doctors, in feed order.
pub const SPECIALITIES: [&str; 6] = [
    "General Practitioner",
    "Cardiologist",
    "Dermatologist",
    "Pediatrician",
    "Neurologist",
    "Orthopedic Surgeon",
];

/// One raw row of the remote availability feed.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEntry {
    pub name: String,
    pub timezone: String,
    pub day_of_week: String,
    pub available_at: String,
    pub available_until: String,
}

/// A doctor's recurring hours on one weekday: unique slot start times,
/// sorted ascending. Independent of any concrete date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityTemplate {
    pub day: String,
    pub hours: Vec<NaiveTime>,
}

/// Directory entry built from the feed. Immutable once loaded; the
/// scheduling engine only ever reads it. `timezone` is an opaque label
/// and is never applied to slot times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub speciality: String,
    pub timezone: String,
    pub availability: Vec<AvailabilityTemplate>,
}
