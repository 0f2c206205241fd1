use async_trait::async_trait;
use serde::Serialize;

use crate::HttpMethod;

/// A single call to the console proxy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    pub method: HttpMethod,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Passed through untouched: `None` and `Some(false)` are different
    /// requests as far as the client is concerned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_long_numerals_support: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Failure to obtain any HTTP response at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The HTTP client the console proxy is reached through.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: ProxyRequest) -> Result<HttpResponse, HttpError>;
}
