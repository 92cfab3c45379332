//! Transport error classification
//!
//! A `reqwest::Error` is first reduced to a [`TransportFault`], a plain
//! description of what went wrong, and that is then mapped onto the
//! closed set of [`NetworkError`] kinds.

use std::error::Error as _;
use std::io;

use crate::core::models::NetworkError;

/// What the transport reported, independent of the HTTP library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFault {
    /// The request hit its timeout
    TimedOut,
    /// Connecting failed, with the OS error kind when one was reported
    Connect(Option<io::ErrorKind>),
    /// An I/O error after the connection was established
    Io(io::ErrorKind),
    /// The connection closed before the response completed
    Closed,
    /// The response body could not be decoded
    Decode,
    /// Reading the response body failed
    Body,
    /// Redirect policy was violated
    Redirect,
    /// The request could not be built
    Builder,
    /// Anything else
    Other,
}

impl TransportFault {
    /// Reduce a `reqwest::Error` to a fault description
    #[must_use]
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::TimedOut;
        }
        let io_kind = io_error_kind(err);
        if err.is_connect() {
            return Self::Connect(io_kind);
        }
        if let Some(kind) = io_kind {
            return Self::Io(kind);
        }
        if chain_mentions(err, "connection closed before message completed") {
            return Self::Closed;
        }
        if err.is_decode() {
            Self::Decode
        } else if err.is_body() {
            Self::Body
        } else if err.is_redirect() {
            Self::Redirect
        } else if err.is_builder() {
            Self::Builder
        } else {
            Self::Other
        }
    }
}

impl From<TransportFault> for NetworkError {
    fn from(fault: TransportFault) -> Self {
        match fault {
            TransportFault::TimedOut => Self::NotReachedServer,
            TransportFault::Connect(kind) => match kind.map(classify_io_kind) {
                Some(Self::NotConnectedToInternet) => Self::NotConnectedToInternet,
                _ => Self::NotReachedServer,
            },
            TransportFault::Io(kind) => classify_io_kind(kind),
            TransportFault::Closed | TransportFault::Body => Self::ConnectionLost,
            TransportFault::Decode => Self::IncorrectDataReturned,
            TransportFault::Redirect | TransportFault::Builder | TransportFault::Other => {
                Self::Unknown
            },
        }
    }
}

impl From<&reqwest::Error> for NetworkError {
    fn from(err: &reqwest::Error) -> Self {
        TransportFault::from_reqwest(err).into()
    }
}

/// Map an OS-level I/O error kind onto a network error
#[must_use]
pub fn classify_io_kind(kind: io::ErrorKind) -> NetworkError {
    match kind {
        io::ErrorKind::NetworkUnreachable | io::ErrorKind::NetworkDown => {
            NetworkError::NotConnectedToInternet
        },
        io::ErrorKind::TimedOut
        | io::ErrorKind::ConnectionRefused
        | io::ErrorKind::HostUnreachable
        | io::ErrorKind::AddrNotAvailable => NetworkError::NotReachedServer,
        io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::BrokenPipe
        | io::ErrorKind::UnexpectedEof => NetworkError::ConnectionLost,
        io::ErrorKind::InvalidData => NetworkError::IncorrectDataReturned,
        _ => NetworkError::Unknown,
    }
}

fn io_error_kind(err: &reqwest::Error) -> Option<io::ErrorKind> {
    let mut source = err.source();
    while let Some(current) = source {
        if let Some(io_err) = current.downcast_ref::<io::Error>() {
            return Some(io_err.kind());
        }
        source = current.source();
    }
    None
}

fn chain_mentions(err: &reqwest::Error, needle: &str) -> bool {
    let mut source = err.source();
    while let Some(current) = source {
        if current.to_string().contains(needle) {
            return true;
        }
        source = current.source();
    }
    false
}
