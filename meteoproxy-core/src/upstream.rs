use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::{config::Config, coords::Coordinates};

/// Everything that can go wrong between sending the upstream request and
/// extracting the current-weather record from its body.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request produced no usable HTTP response, or the body could not
    /// be read (DNS failure, connection refused, timeout).
    #[error("Error calling weather API: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status; its body is kept
    /// verbatim so the caller can pass it through.
    #[error("weather API returned status {status}")]
    Status { status: u16, body: String },

    /// Upstream answered 2xx but the JSON lacks the `current_weather` object.
    #[error("Unexpected response format from weather API (missing current_weather).")]
    MissingCurrentWeather,

    /// Upstream answered 2xx with a body that is not JSON of the expected
    /// shape (unparseable, or missing/mistyped fields inside
    /// `current_weather`).
    #[error("Unexpected response format from weather API (malformed body).")]
    Format(#[from] serde_json::Error),
}

/// The slice of the Open-Meteo forecast document this proxy consumes.
#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: Option<CurrentWeather>,
}

/// Current-weather record as Open-Meteo reports it. All three fields are
/// required; anything else in the object is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub time: String,
}

/// Client for the Open-Meteo forecast endpoint.
///
/// Holds one `reqwest::Client` for the life of the process; reqwest pools
/// connections internally, so reuse across invocations is free.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    endpoint: String,
}

impl OpenMeteoClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, endpoint: config.endpoint.clone() })
    }

    /// One GET against the forecast endpoint. The query string carries the
    /// caller's original `lat`/`lon` text, untouched.
    pub async fn fetch_current(
        &self,
        coords: &Coordinates,
    ) -> Result<CurrentWeather, UpstreamError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            lat = coords.lat_raw(),
            lon = coords.lon_raw(),
            "querying weather API"
        );

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("latitude", coords.lat_raw()),
                ("longitude", coords.lon_raw()),
                ("current_weather", "true"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::Status { status: status.as_u16(), body });
        }

        let parsed: OmForecastResponse = serde_json::from_str(&body)?;

        parsed.current_weather.ok_or(UpstreamError::MissingCurrentWeather)
    }
}
