//! Error types for the gear-hours pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GearHoursError {
    /// Failure reported by the API client, passed through unchanged.
    #[error(transparent)]
    Api(#[from] strava_client::StravaError),

    #[error("gear not found: {0}")]
    GearNotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type GearHoursResult<T> = Result<T, GearHoursError>;
