use std::sync::Arc;

use console_core::{Router, Toast};
use console_core_macros::Redacted;
use console_transport::{HttpClient, ResponseSet, Transport, TransportError, TransportOptions};
use serde_json::Value;

use crate::{
    read_flag, ConsoleSettings, EditorRequestSource, ErrorPayload, History, RequestAction,
    SettingsReader, UsageTracker, DATA_WITH_LONG_NUMERALS,
};

/// Toast title for failures that carry no backend response.
pub const UNKNOWN_REQUEST_ERROR: &str = "Unknown Request Error";
/// Toast title for a request that ran but could not be recorded.
pub const HISTORY_SAVE_ERROR: &str = "Could not save request to history";

/// Reloads autocomplete data (indices, aliases, mappings) after a run that
/// may have changed them.
pub trait AutocompleteRefresher: Send + Sync {
    fn refresh(&self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome {
    /// Nothing was selected; nothing was sent or dispatched.
    Empty,
    Succeeded { responses: ResponseSet },
    KnownError { response: Value },
    UnknownError { message: String },
}

/// What a single run did.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// Options handed to the transport; `None` when nothing was sent.
    pub options: Option<TransportOptions>,
    pub outcome: RunOutcome,
}

impl RunReport {
    /// The terminal action this run dispatched, if any.
    pub fn terminal_action(&self) -> Option<RequestAction> {
        match &self.outcome {
            RunOutcome::Empty => None,
            RunOutcome::Succeeded { responses } => Some(RequestAction::RequestSuccess {
                data: responses.clone(),
            }),
            RunOutcome::KnownError { response } => {
                Some(RequestAction::RequestFail(Some(ErrorPayload {
                    response: response.clone(),
                })))
            }
            RunOutcome::UnknownError { .. } => Some(RequestAction::RequestFail(None)),
        }
    }
}

/// Runs the requests selected in the editor.
///
/// Each call to [`RequestRunner::run`] is independent: nothing is shared
/// between runs besides the collaborators, and overlapping runs are neither
/// serialized nor cancelled.
#[derive(Redacted)]
pub struct RequestRunner {
    #[redact]
    settings: Arc<dyn SettingsReader>,
    #[redact]
    transport: Arc<dyn Transport>,
    #[redact]
    http: Arc<dyn HttpClient>,
    #[redact]
    router: Router<RequestAction, Toast>,
    #[redact]
    history: Option<Arc<dyn History>>,
    #[redact]
    tracker: Option<Arc<dyn UsageTracker>>,
    #[redact]
    autocomplete: Option<Arc<dyn AutocompleteRefresher>>,
    config: ConsoleSettings,
}

impl RequestRunner {
    pub fn new(
        settings: Arc<dyn SettingsReader>,
        transport: Arc<dyn Transport>,
        http: Arc<dyn HttpClient>,
        router: Router<RequestAction, Toast>,
    ) -> Self {
        Self {
            settings,
            transport,
            http,
            router,
            history: None,
            tracker: None,
            autocomplete: None,
            config: ConsoleSettings::default(),
        }
    }

    pub fn with_config(mut self, config: ConsoleSettings) -> Self {
        self.config = config;
        self
    }

    pub fn with_history(mut self, history: Arc<dyn History>) -> Self {
        self.history = Some(history);
        self
    }

    pub fn with_tracker(mut self, tracker: Arc<dyn UsageTracker>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    pub fn with_autocomplete(mut self, autocomplete: Arc<dyn AutocompleteRefresher>) -> Self {
        self.autocomplete = Some(autocomplete);
        self
    }

    /// Send what `source` has selected and settle the outcome.
    ///
    /// An empty selection is a no-op. Otherwise `SendRequest` is dispatched,
    /// the batch is sent, and exactly one terminal action follows. Transport
    /// and settings failures never escape.
    pub async fn run(&self, source: &dyn EditorRequestSource) -> RunReport {
        let requests = source.requests_in_range();
        if requests.is_empty() {
            tracing::debug!("no requests selected; skipping run");
            return RunReport {
                options: None,
                outcome: RunOutcome::Empty,
            };
        }

        let flag = read_flag(self.settings.as_ref(), DATA_WITH_LONG_NUMERALS).await;
        let options = TransportOptions::with_long_numerals(flag);

        if let Some(tracker) = &self.tracker {
            tracker.track(requests.as_slice());
        }

        tracing::debug!(count = requests.len(), ?options, "sending requests");
        self.router.dispatch(RequestAction::SendRequest);

        let outcome = match self
            .transport
            .send_requests(requests, Arc::clone(&self.http), options)
            .await
        {
            Ok(responses) => {
                self.record_history(&responses);
                if self.config.polling {
                    if let Some(autocomplete) = &self.autocomplete {
                        autocomplete.refresh();
                    }
                }
                self.router.dispatch(RequestAction::RequestSuccess {
                    data: responses.clone(),
                });
                RunOutcome::Succeeded { responses }
            }
            Err(TransportError::Known { response }) => {
                tracing::debug!("request failed with a backend response");
                self.router
                    .dispatch(RequestAction::RequestFail(Some(ErrorPayload {
                        response: response.clone(),
                    })));
                RunOutcome::KnownError { response }
            }
            Err(TransportError::Unknown { message }) => {
                tracing::warn!(error = %message, "request failed without a backend response");
                self.router.dispatch(RequestAction::RequestFail(None));
                self.router
                    .notify(Toast::error(message.clone(), UNKNOWN_REQUEST_ERROR));
                RunOutcome::UnknownError { message }
            }
        };

        RunReport {
            options: Some(options),
            outcome,
        }
    }

    fn record_history(&self, responses: &ResponseSet) {
        let Some(history) = &self.history else {
            return;
        };
        for result in responses {
            let request = &result.request;
            if let Err(err) = history.add(request.method, &request.path, request.data.as_deref()) {
                tracing::warn!(error = %err, path = %request.path, "failed to save history");
                self.router
                    .notify(Toast::error(err.to_string(), HISTORY_SAVE_ERROR));
            }
        }
    }
}
