//! mathpix-client - submit images of math to the Mathpix recognition API
//!
//! This library builds recognition requests, tracks them by identifier so
//! they can be cancelled, and delivers exactly one typed outcome per call.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod client;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;

pub use client::{ClientConfig, Credentials, PendingRecognition, RecognitionClient};
pub use crate::core::models::{
    ClientError, NetworkError, Outcome, OutputFormat, RecognitionError, RecognitionResult,
    RequestId,
};
