use crate::StravaError;
use secrecy::SecretString;

pub const DEFAULT_BASE_URL: &str = "https://www.strava.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub access_token: SecretString,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, StravaError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function, so tests never have to mutate the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, StravaError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let token = get("STRAVA_ACCESS_TOKEN")
            .filter(|t| !t.is_empty())
            .ok_or_else(|| StravaError::Config("STRAVA_ACCESS_TOKEN missing".into()))?;
        let base_url = get("STRAVA_BASE_URL")
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Ok(Self {
            access_token: SecretString::new(token.into()),
            base_url,
        })
    }
}
