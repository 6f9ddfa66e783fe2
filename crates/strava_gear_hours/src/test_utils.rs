//! Shared test fixtures and an in-memory `StravaClient` used by unit tests.
#![cfg(test)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Mutex;
use strava_client::{ActivitySummary, AthleteProfile, GearSummary, StravaClient, StravaError};

/// Serves a fixed activity list in pages and records every page requested.
pub struct MockClient {
    pub profile: AthleteProfile,
    pub activities: Vec<ActivitySummary>,
    /// Page number that answers with a 500 instead of data.
    pub fail_page: Option<u32>,
    pub fail_profile: bool,
    pub requested_pages: Mutex<Vec<u32>>,
}

impl MockClient {
    pub fn new(activities: Vec<ActivitySummary>) -> Self {
        Self {
            profile: three_bike_profile(),
            activities,
            fail_page: None,
            fail_profile: false,
            requested_pages: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<u32> {
        self.requested_pages.lock().unwrap().clone()
    }
}

#[async_trait]
impl StravaClient for MockClient {
    async fn get_athlete_profile(&self) -> Result<AthleteProfile, StravaError> {
        if self.fail_profile {
            return Err(StravaError::from_status(500, "error".into()));
        }
        Ok(self.profile.clone())
    }

    async fn list_activities_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<ActivitySummary>, StravaError> {
        self.requested_pages.lock().unwrap().push(page);
        if self.fail_page == Some(page) {
            return Err(StravaError::from_status(500, "error".into()));
        }
        let start = ((page - 1) * per_page) as usize;
        Ok(self
            .activities
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect())
    }
}

pub fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn activity(name: &str, gear_id: &str, start: DateTime<Utc>, moving: u64) -> ActivitySummary {
    ActivitySummary {
        name: name.to_string(),
        gear_id: (!gear_id.is_empty()).then(|| gear_id.to_string()),
        start_date: start,
        moving_time: moving,
    }
}

/// Five rides split across two bikes in January and February 2016.
pub fn five_rides() -> Vec<ActivitySummary> {
    vec![
        activity("ride 1", "123", noon(2016, 1, 1), 3600),
        activity("ride 2", "456", noon(2016, 2, 1), 0),
        activity("ride 3", "123", noon(2016, 1, 2), 7200),
        activity("ride 4", "456", noon(2016, 2, 2), 2700),
        activity("ride 5", "123", noon(2016, 1, 3), 30),
    ]
}

pub fn gear(id: &str, name: &str) -> GearSummary {
    GearSummary {
        id: id.to_string(),
        name: name.to_string(),
        distance: 0.0,
    }
}

pub fn three_bike_profile() -> AthleteProfile {
    AthleteProfile {
        bikes: vec![
            gear("1", "road bike"),
            gear("2", "my best bike"),
            gear("3", "fat bike"),
        ],
    }
}

pub fn names(activities: &[ActivitySummary]) -> Vec<&str> {
    activities.iter().map(|a| a.name.as_str()).collect()
}
