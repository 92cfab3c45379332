//! Error families for recognition calls
//!
//! Transport failures and server-reported failures are kept in separate
//! enums so call sites handle each family exhaustively. [`ClientError`]
//! is the union delivered with every failed outcome.

use thiserror::Error;

/// Transport and connectivity failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NetworkError {
    /// Unknown or unsupported transport failure
    #[error("unknown network error")]
    Unknown,

    /// No network connection is available
    #[error("not connected to the internet")]
    NotConnectedToInternet,

    /// Data roaming is switched off on the device
    #[error("international roaming is off")]
    InternationalRoamingOff,

    /// Timeout, DNS failure, or unreachable host
    #[error("could not reach the server")]
    NotReachedServer,

    /// The connection dropped mid-request
    #[error("network connection lost")]
    ConnectionLost,

    /// Malformed, oversized, or undecodable response
    #[error("incorrect data returned from the server")]
    IncorrectDataReturned,

    /// The request was cancelled by the caller
    #[error("request cancelled")]
    RequestCancelled,
}

/// Failures reported by the recognition service itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognitionError {
    /// Response body is not valid JSON
    #[error("failed to parse response JSON ({} bytes)", .raw.len())]
    FailedParse {
        /// The undecodable response body, kept for diagnostics
        raw: Vec<u8>,
    },

    /// The image was not recognized as math
    #[error("not math: {message}")]
    NotMath {
        /// Message supplied by the server
        message: String,
    },

    /// The app id / app key pair was rejected
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Error delivered for a failed recognition call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Transport-level failure
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Server-reported failure
    #[error(transparent)]
    Recognition(#[from] RecognitionError),

    /// State that correct server behavior never produces
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl ClientError {
    /// Whether this outcome is the result of a cancellation
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Network(NetworkError::RequestCancelled))
    }

    /// Raw response body, when the server answered with something unparseable
    #[must_use]
    pub fn raw_body(&self) -> Option<&[u8]> {
        match self {
            Self::Recognition(RecognitionError::FailedParse { raw }) => Some(raw),
            _ => None,
        }
    }

    /// Text to show the user, or `None` when the error should stay silent
    ///
    /// Cancellation is never shown. Of the network kinds, only timeouts and
    /// missing connectivity are worth interrupting the user for.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Network(NetworkError::NotReachedServer) => Some(
                "The server took too long to respond. Check your connection and try again."
                    .to_string(),
            ),
            Self::Network(NetworkError::NotConnectedToInternet) => {
                Some("No internet connection. Connect to a network and try again.".to_string())
            },
            Self::Network(_) => None,
            Self::Recognition(RecognitionError::FailedParse { .. }) => {
                Some("The server returned a response that could not be read.".to_string())
            },
            Self::Recognition(RecognitionError::NotMath { message }) => Some(message.clone()),
            Self::Recognition(RecognitionError::InvalidCredentials) => {
                Some("Invalid API credentials. Set a correct app id and app key.".to_string())
            },
            Self::Unexpected(_) => Some("Unexpected error, contact support.".to_string()),
        }
    }
}

/// Failure preparing a request, before any identifier is issued
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The image could not be encoded as JPEG
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    /// The request body could not be serialized
    #[error("failed to serialize request: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Configuration problems
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No app id / app key pair was configured
    #[error("API credentials are not set (run `mathpix config set` or set MATHPIX_APP_ID and MATHPIX_APP_KEY)")]
    MissingCredentials,

    /// A credential value cannot be sent as an HTTP header
    #[error("invalid {field}: {reason}")]
    InvalidCredentials {
        /// Which credential was rejected
        field: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// No tokio runtime to run requests on
    #[error("no tokio runtime available: {0}")]
    Runtime(#[from] tokio::runtime::TryCurrentError),

    /// Reading or writing the settings file failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid TOML
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings could not be serialized
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
