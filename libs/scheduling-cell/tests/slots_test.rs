use chrono::{Duration, NaiveDate, NaiveTime};

use doctor_cell::models::AvailabilityTemplate;
use scheduling_cell::slots::materialize;

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn template(day: &str, hours: &[NaiveTime]) -> AvailabilityTemplate {
    AvailabilityTemplate {
        day: day.to_string(),
        hours: hours.to_vec(),
    }
}

#[test]
fn monday_template_materializes_two_slots_over_range() {
    // 2025-03-31 is a Monday; the rest of the range has no template entry.
    let availability = vec![template("Monday", &[time(10, 0), time(11, 0)])];

    let slots: Vec<_> = materialize(&availability, 10, date(2025, 3, 31), date(2025, 4, 2)).collect();

    assert_eq!(slots.len(), 2);
    assert!(slots.iter().all(|s| s.date == date(2025, 3, 31)));
    assert!(slots.iter().all(|s| s.day == "Monday"));
    assert!(slots.iter().all(|s| s.doctor_id == 10));
    assert_eq!(slots[0].time, time(10, 0));
    assert_eq!(slots[1].time, time(11, 0));
    assert_eq!(slots[0].start, date(2025, 3, 31).and_time(time(10, 0)));
    assert_eq!(slots[0].end, slots[0].start + Duration::minutes(30));
}

#[test]
fn inverted_range_yields_nothing() {
    let availability = vec![template("Monday", &[time(10, 0)])];

    let slots: Vec<_> = materialize(&availability, 1, date(2025, 4, 2), date(2025, 3, 31)).collect();

    assert!(slots.is_empty());
}

#[test]
fn dates_without_template_entry_yield_no_slots() {
    let availability = vec![template("Monday", &[time(10, 0)])];

    // Tuesday through Wednesday only.
    let slots: Vec<_> = materialize(&availability, 1, date(2025, 4, 1), date(2025, 4, 2)).collect();

    assert!(slots.is_empty());
}

#[test]
fn slots_follow_calendar_order_across_days() {
    let availability = vec![
        template("Wednesday", &[time(9, 0)]),
        template("Monday", &[time(11, 0)]),
    ];

    let slots: Vec<_> = materialize(&availability, 1, date(2025, 3, 31), date(2025, 4, 2)).collect();

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].day, "Monday");
    assert_eq!(slots[0].time, time(11, 0));
    assert_eq!(slots[1].day, "Wednesday");
    assert_eq!(slots[1].time, time(9, 0));
    assert!(slots[0].start < slots[1].start);
}

#[test]
fn materialization_is_idempotent_and_order_preserving() {
    let availability = vec![
        template("Monday", &[time(10, 0), time(10, 30), time(11, 0)]),
        template("Tuesday", &[time(14, 0)]),
    ];

    let first: Vec<_> = materialize(&availability, 7, date(2025, 3, 31), date(2025, 4, 6)).collect();
    let second: Vec<_> = materialize(&availability, 7, date(2025, 3, 31), date(2025, 4, 6)).collect();

    assert_eq!(first, second);
    assert!(first.windows(2).all(|pair| pair[0].start < pair[1].start));
}
