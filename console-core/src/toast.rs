use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ToastKind {
    Error,
    Warning,
}

/// User-facing notification delivered to the notifier channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    /// Rendered form of the value that caused the toast.
    pub message: String,
}

impl Toast {
    pub fn error(message: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Warning,
            title: title.into(),
            message: message.into(),
        }
    }
}
