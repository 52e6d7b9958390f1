use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::constants::{GEO_JSON, NWS_API_BASE, USER_AGENT};
use crate::error::WeatherError;
use crate::models::{AlertResponse, ForecastResponse, PointsResponse};

/// Client for the National Weather Service API. Holds one `reqwest::Client`
/// carrying the `Accept` and `User-Agent` headers the API requires; built
/// once at startup and shared by every tool call.
pub struct NwsClient {
    http: Client,
}

impl NwsClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GEO_JSON));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { http })
    }

    /// Fetches the point metadata for a coordinate pair.
    pub async fn point_metadata(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<PointsResponse, WeatherError> {
        self.get_json(&points_url(latitude, longitude)).await
    }

    /// Fetches a forecast from the absolute URL named in point metadata.
    pub async fn forecast(&self, url: &str) -> Result<ForecastResponse, WeatherError> {
        self.get_json(url).await
    }

    /// Fetches the active alerts for a US state.
    pub async fn active_alerts(&self, state: &str) -> Result<AlertResponse, WeatherError> {
        self.get_json(&alerts_url(state)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Coordinates go into the path exactly as received, using the default
/// float formatting; no rounding.
fn points_url(latitude: f64, longitude: f64) -> String {
    format!("{}/points/{},{}", NWS_API_BASE, latitude, longitude)
}

fn alerts_url(state: &str) -> String {
    format!("{}/alerts/active/area/{}", NWS_API_BASE, state.to_uppercase())
}
