use reqwest::StatusCode;
use thiserror::Error;

/// Result type returned by every [`super::Gateway`] operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while talking to the Todoist REST API.
///
/// Failures are classified so callers can branch on the kind of failure instead of parsing
/// message text. No variant is ever retried by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was missing or two arguments conflicted. Raised before any request
    /// is sent.
    #[error("invalid arguments: {0}")]
    Validation(String),
    /// The request could not be sent or the connection failed.
    #[error("unable to send request: {0}")]
    Transport(#[source] reqwest::Error),
    /// The request did not finish within the configured timeout.
    #[error("request timed out")]
    Timeout,
    /// The API answered with 404.
    #[error("resource not found: {body}")]
    NotFound {
        /// Raw response body for debugging.
        body: String,
    },
    /// The API rejected the token (401 or 403).
    #[error("unauthorized ({status}): {body}")]
    Unauthorized {
        /// Status code as received.
        status: StatusCode,
        /// Raw response body for debugging.
        body: String,
    },
    /// The API answered with a status code the operation did not expect.
    #[error("bad response from API: {status} - {body}")]
    Status {
        /// Status code as received.
        status: StatusCode,
        /// Raw response body for debugging.
        body: String,
    },
    /// The response body could not be parsed into the expected shape.
    #[error("unable to parse API response: {0}")]
    Decode(#[source] serde_json::Error),
    /// The request body could not be serialized.
    #[error("unable to serialize request: {0}")]
    Encode(#[source] serde_json::Error),
    /// The endpoint URL could not be built from the base URL.
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Creates a [`Error::Validation`] from a message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Classifies a non-expected status code.
    pub(super) fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::NotFound { body },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized { status, body },
            _ => Self::Status { status, body },
        }
    }

    /// Status code carried by the error, if the failure came from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            Self::Unauthorized { status, .. } | Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error was raised locally before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err)
        }
    }
}

/// Fails with [`Error::Validation`] if `value` is empty or only whitespace.
pub(super) fn require(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("`{what}` is required")));
    }
    Ok(())
}

/// Like [`require`] for an id that becomes a path segment.
///
/// `.` and `..` are rejected as well, since a URL path can't carry them as a plain segment.
pub(super) fn require_id(id: &str) -> Result<()> {
    require(id, "id")?;
    if matches!(id, "." | "..") {
        return Err(Error::validation(format!("`{id}` is not a valid id")));
    }
    Ok(())
}
