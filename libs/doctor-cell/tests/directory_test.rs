use chrono::NaiveTime;
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use doctor_cell::models::FeedEntry;
use doctor_cell::services::directory::{transform_doctors, DirectoryService};

fn row(name: &str, day: &str, at: &str, until: &str) -> FeedEntry {
    FeedEntry {
        name: name.to_string(),
        timezone: "Australia/Sydney".to_string(),
        day_of_week: day.to_string(),
        available_at: at.to_string(),
        available_until: until.to_string(),
    }
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn rows_are_grouped_by_doctor_with_synthetic_sequential_ids() {
    let doctors = transform_doctors(vec![
        row("John Carter", "Monday", "9:00AM", "10:00AM"),
        row("Jane Smith", "Tuesday", "1:00PM", "2:00PM"),
        row("John Carter", "Wednesday", "9:00AM", "9:30AM"),
    ]);

    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors[0].id, 1);
    assert_eq!(doctors[0].name, "John Carter");
    assert_eq!(doctors[0].availability.len(), 2);
    assert_eq!(doctors[1].id, 2);
    assert_eq!(doctors[1].name, "Jane Smith");
}

#[test]
fn slots_are_enumerated_at_half_hour_granularity() {
    let doctors = transform_doctors(vec![row("John Carter", "Monday", "9:00AM", "11:00AM")]);

    let monday = &doctors[0].availability[0];
    assert_eq!(monday.day, "Monday");
    assert_eq!(
        monday.hours,
        vec![time(9, 0), time(9, 30), time(10, 0), time(10, 30)]
    );
}

#[test]
fn overlapping_rows_for_one_day_are_deduped_and_sorted() {
    let doctors = transform_doctors(vec![
        row("John Carter", "Monday", "10:00AM", "11:00AM"),
        row("John Carter", "Monday", "9:30AM", "10:30AM"),
    ]);

    let monday = &doctors[0].availability[0];
    assert_eq!(
        monday.hours,
        vec![time(9, 30), time(10, 0), time(10, 30)]
    );
}

#[test]
fn specialities_cycle_through_the_fixed_list() {
    let names = ["A", "B", "C", "D", "E", "F", "G"];
    let rows = names
        .iter()
        .map(|name| row(name, "Monday", "9:00AM", "9:30AM"))
        .collect();

    let doctors = transform_doctors(rows);

    assert_eq!(doctors[0].speciality, "General Practitioner");
    assert_eq!(doctors[1].speciality, "Cardiologist");
    assert_eq!(doctors[5].speciality, "Orthopedic Surgeon");
    // Seventh doctor wraps back to the start of the list.
    assert_eq!(doctors[6].speciality, "General Practitioner");
}

#[test]
fn padded_and_spaced_feed_times_parse() {
    let doctors = transform_doctors(vec![row("John Carter", "Friday", " 9:00AM", "10:00 AM")]);

    assert_eq!(doctors[0].availability[0].hours.len(), 2);
}

#[test]
fn malformed_rows_degrade_to_no_slots_that_day() {
    let doctors = transform_doctors(vec![
        row("John Carter", "Monday", "not a time", "10:00AM"),
        row("John Carter", "Tuesday", "9:00AM", "10:00AM"),
    ]);

    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0].availability.len(), 1);
    assert_eq!(doctors[0].availability[0].day, "Tuesday");
}

#[tokio::test]
async fn feed_is_fetched_and_reshaped() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "John Carter",
                "timezone": "Australia/Sydney",
                "day_of_week": "Monday",
                "available_at": "9:00AM",
                "available_until": "10:00AM"
            },
            {
                "name": "Jane Smith",
                "timezone": "Europe/London",
                "day_of_week": "Friday",
                "available_at": "2:00PM",
                "available_until": "3:00PM"
            }
        ])))
        .mount(&mock_server)
        .await;

    let directory = DirectoryService::with_feed_url(mock_server.uri()).load().await;

    assert_eq!(directory.len(), 2);
    let carter = directory.doctor_by_id(1).unwrap();
    assert_eq!(carter.name, "John Carter");
    assert_eq!(carter.availability[0].hours, vec![time(9, 0), time(9, 30)]);
    assert!(directory.doctor_by_id(3).is_none());
}

#[tokio::test]
async fn feed_failure_yields_an_empty_directory() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let directory = DirectoryService::with_feed_url(mock_server.uri()).load().await;

    assert!(directory.is_empty());
}

#[tokio::test]
async fn undecodable_feed_yields_an_empty_directory() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let directory = DirectoryService::with_feed_url(mock_server.uri()).load().await;

    assert!(directory.is_empty());
}
