//! Request types and the transport that carries them to the backend.
//!
//! The runner only sees [`Transport`]; [`ProxyTransport`] is the stock
//! implementation that routes every request through the console proxy
//! endpoint of an [`HttpClient`].

mod client;
mod error;
mod literal;
mod request;
mod response;
mod transport;
mod warning;

pub use client::{HttpClient, HttpError, HttpResponse, ProxyRequest};
pub use error::TransportError;
pub use literal::collapse_literal_strings;
pub use request::{HttpMethod, ParseMethodError, RawRequest, RequestBatch};
pub use response::{RequestResult, ResponseInfo, ResponseSet, SentRequest};
pub use transport::{send_requests, ProxyTransport, Transport, TransportOptions};
pub use warning::extract_deprecation_messages;
