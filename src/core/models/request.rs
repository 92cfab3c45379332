//! Request body sent to the recognition endpoint

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use serde_json::{Map, Value};

use super::format::{OutputFormat, formats_object};

/// Prefix of the inline image data URL
pub const DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// OCR modes requested with every call
pub const OCR_MODES: [&str; 1] = ["math"];

/// JSON body of a recognition request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecognitionRequest {
    /// Inline JPEG as a data URL
    pub url: String,
    /// Requested output representations
    pub formats: Map<String, Value>,
    /// OCR modes
    pub ocr: Vec<String>,
}

impl RecognitionRequest {
    /// Build a request from already-encoded JPEG bytes
    #[must_use]
    pub fn from_jpeg(jpeg: &[u8], formats: &[OutputFormat]) -> Self {
        Self {
            url: format!("{DATA_URL_PREFIX}{}", BASE64.encode(jpeg)),
            formats: formats_object(formats),
            ocr: OCR_MODES.iter().map(|mode| (*mode).to_string()).collect(),
        }
    }

    /// Serialize to the JSON bytes sent over the wire
    pub fn to_body(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Copy with the image data elided, for logging
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            url: "...".to_string(),
            formats: self.formats.clone(),
            ocr: self.ocr.clone(),
        }
    }
}
