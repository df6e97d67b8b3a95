use crate::{
    config::Config,
    coords::Coordinates,
    model::{CurrentConditions, ProxyRequest, ProxyResponse},
    upstream::{OpenMeteoClient, UpstreamError},
};

/// The proxy itself: validate the coordinates, fetch current weather from
/// upstream, reshape the answer.
///
/// Construct once per process and reuse across invocations; the only shared
/// state is the upstream client's connection pool.
#[derive(Debug, Clone)]
pub struct WeatherProxyHandler {
    upstream: OpenMeteoClient,
}

impl WeatherProxyHandler {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self { upstream: OpenMeteoClient::new(config)? })
    }

    /// Run one invocation. Every failure path becomes a well-formed
    /// response; this function itself never fails.
    pub async fn handle(&self, request: &ProxyRequest) -> ProxyResponse {
        let coords = match Coordinates::from_params(request.param("lat"), request.param("lon"))
        {
            Ok(coords) => coords,
            Err(rejection) => return ProxyResponse::text(400, rejection.to_string()),
        };

        let current = match self.upstream.fetch_current(&coords).await {
            Ok(current) => current,
            Err(err) => return upstream_failure(err),
        };

        let payload = CurrentConditions {
            latitude: coords.lat_raw().to_string(),
            longitude: coords.lon_raw().to_string(),
            temperatura: current.temperature,
            vento: current.windspeed,
            hora: current.time,
        };

        match payload.to_pretty_json() {
            Ok(body) => ProxyResponse::json(200, body),
            Err(err) => ProxyResponse::text(500, format!("Failed to serialize response: {err}")),
        }
    }
}

fn upstream_failure(err: UpstreamError) -> ProxyResponse {
    tracing::warn!(error = %err, "upstream request failed");

    match err {
        // Upstream application errors pass through with their own status.
        UpstreamError::Status { status, body } => ProxyResponse::json(status, body),
        UpstreamError::Transport(_) => ProxyResponse::text(500, err.to_string()),
        UpstreamError::MissingCurrentWeather | UpstreamError::Format(_) => {
            ProxyResponse::text(502, err.to_string())
        }
    }
}
