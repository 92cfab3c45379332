//! Response interpretation
//!
//! Turns whatever the transport produced into exactly one [`Outcome`].
//! This module has no I/O dependencies.

use crate::core::models::{NetworkError, Outcome, RecognitionResult};

/// Map a transport result onto a recognition outcome
///
/// Transport errors pass through as network-class errors. Any body,
/// including an empty one, is parsed, and server-reported errors become
/// recognition-class errors.
#[must_use]
pub fn interpret(body: Result<Vec<u8>, NetworkError>) -> Outcome {
    Ok(RecognitionResult::from_bytes(body?)?)
}
