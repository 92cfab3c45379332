//! Domain models for recognition calls
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`OutputFormat`] - Which representations the server should return
//! - [`RequestId`] - Token identifying one call
//! - [`RecognitionRequest`] - The JSON body sent to the server
//! - [`RecognitionResult`] - A successful, parsed response
//! - [`ClientError`] - Network-class or recognition-class failure

mod error;
mod format;
mod id;
mod request;
mod result;

pub use error::{ClientError, ConfigError, NetworkError, RecognitionError, SubmitError};
pub use format::{OutputFormat, formats_object};
pub use id::RequestId;
pub use request::{DATA_URL_PREFIX, OCR_MODES, RecognitionRequest};
pub use result::{INVALID_CREDENTIALS_MESSAGE, RecognitionResult};

/// Result of one recognition call: exactly one of success or error
pub type Outcome = Result<RecognitionResult, ClientError>;
