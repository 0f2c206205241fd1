use console_transport::ResponseSet;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{ErrorPayload, RequestAction};

/// Outcome of the most recent run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LastResult {
    pub data: Option<ResponseSet>,
    pub error: Option<ErrorPayload>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestState {
    pub request_in_flight: bool,
    pub last_result: LastResult,
}

impl RequestState {
    pub fn reduce(&mut self, action: &RequestAction) {
        match action {
            RequestAction::SendRequest => {
                self.request_in_flight = true;
                self.last_result = LastResult::default();
            }
            RequestAction::RequestSuccess { data } => {
                self.request_in_flight = false;
                self.last_result = LastResult {
                    data: Some(data.clone()),
                    error: None,
                };
            }
            RequestAction::RequestFail(payload) => {
                self.request_in_flight = false;
                self.last_result = LastResult {
                    data: None,
                    error: payload.clone(),
                };
            }
        }
    }
}

/// Single writer over [`RequestState`]: actions are applied strictly one at
/// a time in arrival order.
#[derive(Debug, Default)]
pub struct RequestStore {
    state: RequestState,
    applied: usize,
}

impl RequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Number of actions reduced so far.
    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn apply(&mut self, action: &RequestAction) {
        tracing::trace!(?action, "reducing action");
        self.state.reduce(action);
        self.applied += 1;
    }

    /// Apply every action already queued, without waiting.
    pub fn drain(&mut self, rx: &mut UnboundedReceiver<RequestAction>) -> usize {
        let mut count = 0;
        while let Ok(action) = rx.try_recv() {
            self.apply(&action);
            count += 1;
        }
        count
    }

    /// Apply actions until every sender is gone.
    pub async fn run(mut self, mut rx: UnboundedReceiver<RequestAction>) -> Self {
        while let Some(action) = rx.recv().await {
            self.apply(&action);
        }
        self
    }
}
