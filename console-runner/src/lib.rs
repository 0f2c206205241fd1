//! Console request execution.
//!
//! [`RequestRunner`] turns the requests selected in the editor into one
//! transport call and settles the outcome into exactly one terminal
//! [`RequestAction`]. [`RequestStore`] reduces those actions into
//! [`RequestState`] one at a time.

mod action;
mod config;
mod history;
mod runner;
mod settings;
mod source;
mod store;
mod track;

pub use action::{ErrorPayload, RequestAction};
pub use config::{ConfigError, ConsoleSettings};
pub use history::{History, HistoryEntry, HistoryError, MemoryHistory};
pub use runner::{
    AutocompleteRefresher, RequestRunner, RunOutcome, RunReport, HISTORY_SAVE_ERROR,
    UNKNOWN_REQUEST_ERROR,
};
pub use settings::{
    read_flag, MemorySettings, SettingsError, SettingsReader, DATA_WITH_LONG_NUMERALS,
};
pub use source::{parse_requests, EditorRequestSource, LineRange, ParsedRequest, TextRequestSource};
pub use store::{LastResult, RequestState, RequestStore};
pub use track::{metric_name, MetricCounter, UsageTracker};

pub use console_core::{Router, RouterChannels, Toast, ToastKind};
pub use console_transport::{
    HttpClient, HttpMethod, ProxyTransport, RawRequest, RequestBatch, ResponseSet, Transport,
    TransportError, TransportOptions,
};
