use serde::Serialize;

use crate::HttpMethod;

/// What was actually sent for one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SentRequest {
    pub method: HttpMethod,
    pub path: String,
    pub data: Option<String>,
}

/// Backend response as rendered by the console.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInfo {
    pub time_ms: u64,
    pub status_code: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RequestResult {
    pub request: SentRequest,
    pub response: ResponseInfo,
}

/// One result per request, in batch order.
pub type ResponseSet = Vec<RequestResult>;
