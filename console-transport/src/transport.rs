use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde::Serialize;

use crate::{
    collapse_literal_strings, extract_deprecation_messages, HttpClient, ProxyRequest, RawRequest,
    RequestBatch, RequestResult, ResponseInfo, ResponseSet, SentRequest, TransportError,
};

/// Per-run options handed to the transport.
///
/// `with_long_numerals_support` is only present when the settings lookup
/// produced a boolean; the serialized form omits the key otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_long_numerals_support: Option<bool>,
}

impl TransportOptions {
    pub fn with_long_numerals(flag: Option<bool>) -> Self {
        Self {
            with_long_numerals_support: flag,
        }
    }
}

/// Sends a whole batch; either every request succeeds or the batch fails
/// with one error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_requests(
        &self,
        requests: RequestBatch,
        http: Arc<dyn HttpClient>,
        options: TransportOptions,
    ) -> Result<ResponseSet, TransportError>;
}

/// Transport that routes every request through the console proxy.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProxyTransport;

#[async_trait]
impl Transport for ProxyTransport {
    async fn send_requests(
        &self,
        requests: RequestBatch,
        http: Arc<dyn HttpClient>,
        options: TransportOptions,
    ) -> Result<ResponseSet, TransportError> {
        send_requests(requests.as_slice(), http.as_ref(), options).await
    }
}

/// Send `requests` one after another, stopping at the first failure.
pub async fn send_requests(
    requests: &[RawRequest],
    http: &dyn HttpClient,
    options: TransportOptions,
) -> Result<ResponseSet, TransportError> {
    let multi = requests.len() > 1;
    let mut results = Vec::with_capacity(requests.len());

    for req in requests {
        let data = request_body(req);
        let proxy = ProxyRequest {
            method: req.method,
            path: req.url.clone(),
            body: data.clone(),
            with_long_numerals_support: options.with_long_numerals_support,
        };

        tracing::debug!(method = %req.method, path = %req.url, "sending request");
        let started = Instant::now();
        let response = http.send(proxy).await?;
        let time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        if is_success(response.status) {
            let mut value = response.body.clone();
            if let Some(warnings) = response.header("warning") {
                let deprecations = extract_deprecation_messages(warnings);
                value = format!("{}\n{}", deprecations.join("\n"), value);
            }
            if multi {
                value = prefix_with_request(req, &value);
            }
            results.push(RequestResult {
                request: SentRequest {
                    method: req.method,
                    path: req.url.clone(),
                    data,
                },
                response: ResponseInfo {
                    time_ms,
                    status_code: response.status,
                    status_text: response.status_text.clone(),
                    content_type: response.header("content-type").map(str::to_string),
                    value,
                },
            });
        } else {
            let (value, content_type) = if response.body.is_empty() {
                (
                    format!(
                        "Request failed to get to the server (status code: {})",
                        response.status
                    ),
                    Some("text/plain".to_string()),
                )
            } else {
                (
                    response.body.clone(),
                    response.header("content-type").map(str::to_string),
                )
            };
            let value = if multi {
                prefix_with_request(req, &value)
            } else {
                value
            };
            tracing::warn!(
                method = %req.method,
                path = %req.url,
                status = response.status,
                "request rejected by backend"
            );
            let info = ResponseInfo {
                time_ms,
                status_code: response.status,
                status_text: response.status_text,
                content_type,
                value,
            };
            let response = serde_json::to_value(&info).map_err(TransportError::unknown)?;
            return Err(TransportError::Known { response });
        }
    }

    Ok(results)
}

fn request_body(req: &RawRequest) -> Option<String> {
    let joined = collapse_literal_strings(&req.data.join("\n"));
    if joined.is_empty() {
        None
    } else {
        // bulk bodies must end with a newline
        Some(joined + "\n")
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status) || status == 404
}

fn prefix_with_request(req: &RawRequest, value: &str) -> String {
    format!("# {} {}\n{}", req.method, req.url, value)
}
