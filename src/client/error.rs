use std::error::Error as StdError;

use crate::transport::TransportError;

#[derive(Debug, thiserror::Error)]
/// Failures raised while executing a request, before normalization.
///
/// Resource methods never return this type directly; it is converted into
/// [`ErrorResult`] at the resource boundary.
pub enum TermiiError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// 2xx body that is not an envelope holding the declared type.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request could not be built (bad base URL, empty path, unencodable body).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<TransportError> for TermiiError {
    fn from(value: TransportError) -> Self {
        Self::InvalidRequest(value.to_string())
    }
}

impl From<url::ParseError> for TermiiError {
    fn from(value: url::ParseError) -> Self {
        Self::InvalidRequest(format!("invalid URL: {value}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Which stage of a call failed.
pub enum ErrorKind {
    /// No response was obtained.
    Transport,
    /// A response was obtained with a non-2xx status.
    Http,
    /// A 2xx response whose body did not have the declared shape.
    Decode,
    /// Anything else, e.g. a request that could not be constructed.
    Unexpected,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
/// Uniform failure value returned by every resource method.
///
/// `status` and `body` are only set for [`ErrorKind::Http`].
pub struct ErrorResult {
    pub kind: ErrorKind,
    pub message: String,
    pub status: Option<u16>,
    pub body: Option<String>,
}

impl ErrorResult {
    /// Convert any execution failure into the uniform shape. Never panics.
    pub fn normalize(err: TermiiError) -> Self {
        match err {
            TermiiError::Transport(source) => Self {
                kind: ErrorKind::Transport,
                message: format!("transport error: {source}"),
                status: None,
                body: None,
            },
            TermiiError::HttpStatus { status, body } => {
                let remote = body.as_deref().and_then(remote_message);
                let message = match remote {
                    Some(remote) => format!("unexpected HTTP status {status}: {remote}"),
                    None => format!("unexpected HTTP status {status}"),
                };
                Self {
                    kind: ErrorKind::Http,
                    message,
                    status: Some(status),
                    body,
                }
            }
            err @ TermiiError::Decode(_) => Self {
                kind: ErrorKind::Decode,
                message: err.to_string(),
                status: None,
                body: None,
            },
            err @ TermiiError::InvalidRequest(_) => Self {
                kind: ErrorKind::Unexpected,
                message: err.to_string(),
                status: None,
                body: None,
            },
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind == ErrorKind::Transport
    }

    pub fn is_http(&self) -> bool {
        self.kind == ErrorKind::Http
    }

    /// The remote error body parsed as JSON, when it is JSON.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

impl From<TermiiError> for ErrorResult {
    fn from(value: TermiiError) -> Self {
        Self::normalize(value)
    }
}

// Termii error bodies look like `{"code": "...", "message": "..."}`.
fn remote_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}
