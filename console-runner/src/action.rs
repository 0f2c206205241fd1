use console_transport::ResponseSet;
use serde::Serialize;
use serde_json::Value;

/// Payload of a failed run: the backend response carried by a known error.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorPayload {
    pub response: Value,
}

/// Actions a run emits to the request store.
///
/// Serializes as `{"type": ..., "payload": ...}`. `SendRequest` marks a run
/// in flight; `RequestSuccess` and `RequestFail` are terminal and exactly one
/// of them concludes every non-empty run.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum RequestAction {
    SendRequest,
    RequestSuccess { data: ResponseSet },
    RequestFail(Option<ErrorPayload>),
}

impl RequestAction {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestAction::SendRequest)
    }
}
