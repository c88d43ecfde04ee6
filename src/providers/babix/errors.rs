use std::fmt;

use serde_json::Value;

/// Categories of service errors for consistent logging.
///
/// The session treats every kind uniformly as "answer failed"; the kind
/// only matters for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    /// Connection-level failure (DNS, refused, reset).
    Transport,
    /// Request or connect timeout.
    Timeout,
    /// HTTP status error (4xx, 5xx).
    HttpStatus,
    /// Failed to parse the response body.
    Parse,
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceErrorKind::Transport => write!(f, "transport"),
            ServiceErrorKind::Timeout => write!(f, "timeout"),
            ServiceErrorKind::HttpStatus => write!(f, "http_status"),
            ServiceErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Structured error from the answering service with kind and details.
#[derive(Debug, Clone)]
pub struct ServiceError {
    /// Error category.
    pub kind: ServiceErrorKind,
    /// One-line summary suitable for logging.
    pub message: String,
    /// Optional additional details (e.g., raw error body).
    pub details: Option<String>,
}

impl ServiceError {
    /// Creates a new service error.
    pub fn new(kind: ServiceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an HTTP status error, extracting the backend's error message
    /// from the body when present.
    pub fn http_status(status: u16, body: &str) -> Self {
        let details = if body.is_empty() {
            None
        } else {
            Some(body.to_string())
        };
        // FastAPI-style backends put the message under "detail".
        if let Ok(json) = serde_json::from_str::<Value>(body)
            && let Some(msg) = json
                .get("detail")
                .or_else(|| json.get("error"))
                .and_then(|v| v.as_str())
        {
            return Self {
                kind: ServiceErrorKind::HttpStatus,
                message: format!("HTTP {}: {}", status, msg),
                details,
            };
        }
        Self {
            kind: ServiceErrorKind::HttpStatus,
            message: format!("HTTP {}", status),
            details,
        }
    }

    /// Creates a transport or timeout error from a reqwest failure.
    pub fn from_request(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(ServiceErrorKind::Timeout, "request timed out")
        } else {
            Self::new(ServiceErrorKind::Transport, err.to_string())
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::Parse, message)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ServiceError {}
