use serde_json::Value;

use crate::HttpError;

/// Outcome of a failed batch.
///
/// `Known` carries a backend response that the failure UI renders inline;
/// `Unknown` is anything else and is reported to the user as a toast.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("backend rejected the request: {response}")]
    Known { response: Value },
    #[error("{message}")]
    Unknown { message: String },
}

impl TransportError {
    pub fn known(response: impl Into<Value>) -> Self {
        TransportError::Known {
            response: response.into(),
        }
    }

    pub fn unknown(message: impl std::fmt::Display) -> Self {
        TransportError::Unknown {
            message: message.to_string(),
        }
    }
}

impl From<HttpError> for TransportError {
    fn from(err: HttpError) -> Self {
        TransportError::Unknown {
            message: err.message,
        }
    }
}
