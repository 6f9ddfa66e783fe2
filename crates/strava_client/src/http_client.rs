//! HTTP client implementation for the Strava v3 API.
//!
//! This module provides a reqwest-based implementation of the [`StravaClient`](crate::StravaClient) trait.

use crate::{ActivitySummary, AthleteProfile, StravaClient, StravaError};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// Client for the Strava API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestStravaClient {
    base_url: String,
    access_token: SecretString,
    client: reqwest::Client,
}

impl ReqwestStravaClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Strava API (e.g., "https://www.strava.com")
    /// * `access_token` - OAuth access token sent as a bearer token
    pub fn new(base_url: &str, access_token: SecretString) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from environment-derived configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(&config.base_url, config.access_token.clone())
    }

    /// Build an authenticated GET request.
    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .bearer_auth(self.access_token.expose_secret())
    }

    /// Execute a request and expect a JSON response.
    async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, StravaError> {
        let resp = request.send().await?;
        self.handle_response(resp).await
    }

    /// Handle a response, converting status codes to appropriate errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, StravaError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> StravaError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();
        tracing::debug!(status, body = %body_snippet, "strava api error response");

        match status {
            404 => StravaError::NotFound(body_snippet),
            401 | 403 => StravaError::Auth(body_snippet),
            _ => StravaError::from_status(status, body_snippet),
        }
    }
}

#[async_trait]
impl StravaClient for ReqwestStravaClient {
    async fn get_athlete_profile(&self) -> Result<AthleteProfile, StravaError> {
        let url = format!("{}/api/v3/athlete", self.base_url);
        tracing::debug!(%url, "fetching athlete profile");
        self.execute_json(self.get_request(&url)).await
    }

    async fn list_activities_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<ActivitySummary>, StravaError> {
        let url = format!("{}/api/v3/athlete/activities", self.base_url);
        tracing::debug!(%url, page, per_page, "fetching activities page");
        let qp = [("page", page.to_string()), ("per_page", per_page.to_string())];
        self.execute_json(self.get_request(&url).query(&qp)).await
    }
}
