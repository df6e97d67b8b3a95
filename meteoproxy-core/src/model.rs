use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const APPLICATION_JSON: &str = "application/json";

/// One incoming request as handed over by the hosting platform: just the
/// query-string parameters. Only `lat` and `lon` are ever consulted; a
/// request may carry no parameter collection at all.
#[derive(Debug, Clone, Default)]
pub struct ProxyRequest {
    pub query: Option<HashMap<String, String>>,
}

impl ProxyRequest {
    pub fn new(query: HashMap<String, String>) -> Self {
        Self { query: Some(query) }
    }

    /// A request without any query parameter collection.
    pub fn empty() -> Self {
        Self { query: None }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.query.as_ref()?.get(name).map(String::as_str)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for ProxyRequest {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }
}

/// Response returned to the hosting platform. `headers` always carries at
/// least `Content-Type`.
#[derive(Debug, Clone)]
pub struct ProxyResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ProxyResponse {
    /// Plain-text response, used for locally produced error messages.
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self::with_content_type(status, TEXT_PLAIN, body)
    }

    /// JSON response, used for the success payload and upstream passthrough.
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self::with_content_type(status, APPLICATION_JSON, body)
    }

    fn with_content_type(status: u16, content_type: &str, body: impl Into<String>) -> Self {
        let headers =
            HashMap::from([(CONTENT_TYPE.to_string(), content_type.to_string())]);

        Self { status, headers, body: body.into() }
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).map(String::as_str)
    }
}

/// Reshaped payload returned on success.
///
/// `latitude`/`longitude` echo the caller's parameter strings untouched, so
/// the values never go through a float-to-string round trip. Declaration
/// order here is the serialization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub latitude: String,
    pub longitude: String,
    pub temperatura: f64,
    pub vento: f64,
    pub hora: String,
}

impl CurrentConditions {
    /// Multi-line JSON rendering, the wire format of the 200 response.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
