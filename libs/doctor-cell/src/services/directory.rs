use std::collections::HashMap;

use anyhow::{anyhow, Result};
use chrono::{Duration, NaiveTime};
use tracing::{debug, info, warn};

use shared_config::AppConfig;

use crate::models::{AvailabilityTemplate, Doctor, FeedEntry, SPECIALITIES};

/// Loaded doctor directory. Built once at startup and read-only after
/// that; lookups back both the `/doctors` routes and the scheduling
/// engine's conflicting-doctor tooltips.
#[derive(Debug, Default)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    pub fn doctor_by_id(&self, id: i64) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}

pub struct DirectoryService {
    client: reqwest::Client,
    feed_url: String,
}

impl DirectoryService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_feed_url(config.availability_feed_url.clone())
    }

    pub fn with_feed_url(feed_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            feed_url: feed_url.into(),
        }
    }

    /// Fetch and reshape the availability feed. A network or decode
    /// failure yields an empty directory rather than an error, so slot
    /// computation for already-resident doctors is never aborted by the
    /// feed being down.
    pub async fn load(&self) -> DoctorDirectory {
        match self.fetch().await {
            Ok(rows) => {
                let doctors = transform_doctors(rows);
                info!("Loaded {} doctors from availability feed", doctors.len());
                DoctorDirectory::new(doctors)
            }
            Err(err) => {
                warn!("Failed to load availability feed, directory is empty: {err:#}");
                DoctorDirectory::default()
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<FeedEntry>> {
        debug!("Fetching availability feed from {}", self.feed_url);
        let response = self
            .client
            .get(&self.feed_url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Reshape raw feed rows into the doctor directory: group by doctor name
/// in first-seen order, enumerate 30-minute slot starts per day, then
/// assign synthetic sequential ids and cycle through the fixed speciality
/// list.
pub fn transform_doctors(rows: Vec<FeedEntry>) -> Vec<Doctor> {
    struct Grouped {
        name: String,
        timezone: String,
        days: Vec<(String, Vec<NaiveTime>)>,
    }

    let mut grouped: Vec<Grouped> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let slots = match enumerate_slots(&row.available_at, &row.available_until) {
            Ok(slots) => slots,
            Err(err) => {
                warn!("Skipping malformed feed row for {:?}: {err}", row.name);
                continue;
            }
        };

        let index = *index_by_name.entry(row.name.clone()).or_insert_with(|| {
            grouped.push(Grouped {
                name: row.name.clone(),
                timezone: row.timezone.clone(),
                days: Vec::new(),
            });
            grouped.len() - 1
        });

        let entry = &mut grouped[index];
        match entry.days.iter_mut().find(|(day, _)| *day == row.day_of_week) {
            Some((_, hours)) => hours.extend(slots),
            None => entry.days.push((row.day_of_week, slots)),
        }
    }

    grouped
        .into_iter()
        .enumerate()
        .map(|(position, entry)| Doctor {
            id: (position + 1) as i64,
            name: entry.name,
            speciality: SPECIALITIES[position % SPECIALITIES.len()].to_string(),
            timezone: entry.timezone,
            availability: entry
                .days
                .into_iter()
                .map(|(day, mut hours)| {
                    hours.sort();
                    hours.dedup();
                    AvailabilityTemplate { day, hours }
                })
                .collect(),
        })
        .collect()
}

/// 30-minute slot starts in `[start, end)`. The feed generates slots at
/// this fixed granularity; so does the scheduling engine.
fn enumerate_slots(start: &str, end: &str) -> Result<Vec<NaiveTime>> {
    let start = parse_feed_time(start)?;
    let end = parse_feed_time(end)?;

    let mut slots = Vec::new();
    let mut current = start;
    while current < end {
        slots.push(current);
        let (next, wrapped) = current.overflowing_add_signed(Duration::minutes(30));
        if wrapped != 0 {
            break;
        }
        current = next;
    }
    Ok(slots)
}

/// Feed times are 12-hour strings with inconsistent padding and spacing
/// (" 9:00AM", "5:30 PM").
fn parse_feed_time(raw: &str) -> Result<NaiveTime> {
    let normalized: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    NaiveTime::parse_from_str(&normalized, "%I:%M%p")
        .map_err(|err| anyhow!("unparseable feed time {raw:?}: {err}"))
}
