use chrono::{Datelike, Duration, NaiveDate};

use doctor_cell::models::AvailabilityTemplate;

use crate::models::{weekday_name, MaterializedSlot, SLOT_MINUTES};

/// Expand a weekly availability template across `[range_start, range_end]`
/// (both inclusive). Pure calendar geometry: consults neither bookings
/// nor the clock. An inverted range yields nothing rather than an error.
///
/// The returned iterator is lazy, finite and restartable; identical
/// inputs enumerate identical slots in identical order.
pub fn materialize(
    availability: &[AvailabilityTemplate],
    doctor_id: i64,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> impl Iterator<Item = MaterializedSlot> + '_ {
    range_start
        .iter_days()
        .take_while(move |date| *date <= range_end)
        .flat_map(move |date| {
            let day = weekday_name(date.weekday());
            availability
                .iter()
                .find(|template| template.day == day)
                .map(|template| template.hours.as_slice())
                .unwrap_or(&[])
                .iter()
                .map(move |&time| {
                    let start = date.and_time(time);
                    MaterializedSlot {
                        doctor_id,
                        date,
                        day: day.to_string(),
                        time,
                        start,
                        end: start + Duration::minutes(SLOT_MINUTES),
                    }
                })
        })
}
