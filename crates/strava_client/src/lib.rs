//! Minimal `StravaClient` trait and the data it returns.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub mod config;
pub mod http_client;

#[derive(Debug, Error)]
pub enum StravaError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{}", describe_status(*.status))]
    Server { status: u16, message: String },
    #[error("configuration error: {0}")]
    Config(String),
}

impl StravaError {
    /// Build the catch-all error for a non-success status code.
    pub fn from_status(status: u16, message: String) -> Self {
        StravaError::Server { status, message }
    }
}

fn describe_status(status: u16) -> String {
    if (500..600).contains(&status) {
        "server error".to_string()
    } else {
        format!("unexpected status {status}")
    }
}

/// A piece of equipment as embedded in the athlete profile.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GearSummary {
    pub id: String,
    pub name: String,
    /// Metres.
    #[serde(default)]
    pub distance: f64,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct AthleteProfile {
    #[serde(default, deserialize_with = "deserialize_null_vec")]
    pub bikes: Vec<GearSummary>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ActivitySummary {
    pub name: String,
    #[serde(default)]
    pub gear_id: Option<String>,
    pub start_date: DateTime<Utc>,
    /// Seconds.
    #[serde(default)]
    pub moving_time: u64,
}

fn deserialize_null_vec<'de, D>(deserializer: D) -> Result<Vec<GearSummary>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<GearSummary>>::deserialize(deserializer)?.unwrap_or_default())
}

#[async_trait]
pub trait StravaClient: Send + Sync {
    /// Fetch the authenticated athlete, including their gear.
    async fn get_athlete_profile(&self) -> Result<AthleteProfile, StravaError>;

    /// Fetch one page of the authenticated athlete's activities, most recent first.
    /// Pages are numbered from 1.
    async fn list_activities_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<ActivitySummary>, StravaError>;
}
