#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use console_runner::{
    EditorRequestSource, HttpClient, RawRequest, RequestBatch, ResponseSet, SettingsError,
    SettingsReader, Transport, TransportError, TransportOptions,
};
use console_transport::{
    HttpError, HttpMethod, HttpResponse, ProxyRequest, RequestResult, ResponseInfo, SentRequest,
};
use serde_json::Value;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Fixed selection.
pub struct StaticSource(pub Vec<RawRequest>);

impl StaticSource {
    pub fn single(url: &str) -> Self {
        StaticSource(vec![RawRequest::new(HttpMethod::Get, url)])
    }
}

impl EditorRequestSource for StaticSource {
    fn requests_in_range(&self) -> RequestBatch {
        RequestBatch::from(self.0.clone())
    }
}

/// HTTP client that must never be reached; the scripted transport does not
/// use it.
pub struct UnusedClient;

#[async_trait]
impl HttpClient for UnusedClient {
    async fn send(&self, _request: ProxyRequest) -> Result<HttpResponse, HttpError> {
        Err(HttpError::new("unused client"))
    }
}

pub type Script = dyn Fn(&RequestBatch) -> Result<ResponseSet, TransportError> + Send + Sync;

/// Transport that records each call and answers from a script.
pub struct ScriptedTransport {
    script: Box<Script>,
    delay: Option<Box<dyn Fn(&RequestBatch) -> Duration + Send + Sync>>,
    calls: Mutex<Vec<(RequestBatch, TransportOptions)>>,
}

impl ScriptedTransport {
    pub fn new(
        script: impl Fn(&RequestBatch) -> Result<ResponseSet, TransportError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            script: Box::new(script),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding(responses: ResponseSet) -> Self {
        Self::new(move |_| Ok(responses.clone()))
    }

    pub fn failing(err: TransportError) -> Self {
        Self::new(move |_| Err(err.clone()))
    }

    pub fn with_delay(
        mut self,
        delay: impl Fn(&RequestBatch) -> Duration + Send + Sync + 'static,
    ) -> Self {
        self.delay = Some(Box::new(delay));
        self
    }

    pub fn calls(&self) -> Vec<(RequestBatch, TransportOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send_requests(
        &self,
        requests: RequestBatch,
        _http: Arc<dyn HttpClient>,
        options: TransportOptions,
    ) -> Result<ResponseSet, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((requests.clone(), options));
        if let Some(delay) = &self.delay {
            tokio::time::sleep(delay(&requests)).await;
        }
        (self.script)(&requests)
    }
}

/// Settings backend that is always down.
pub struct BrokenSettings;

#[async_trait]
impl SettingsReader for BrokenSettings {
    async fn get(&self, _key: &str) -> Result<Option<Value>, SettingsError> {
        Err(SettingsError::Unavailable("offline".into()))
    }
}

pub fn result_for(request: &RawRequest, value: &str) -> RequestResult {
    RequestResult {
        request: SentRequest {
            method: request.method,
            path: request.url.clone(),
            data: None,
        },
        response: ResponseInfo {
            time_ms: 1,
            status_code: 200,
            status_text: "OK".into(),
            content_type: Some("application/json".into()),
            value: value.into(),
        },
    }
}
