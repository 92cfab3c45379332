//! Parsed recognition results
//!
//! The server answers every request with a JSON document. A non-empty
//! top-level `error` string turns the document into a [`RecognitionError`];
//! anything else is a success and the full document is handed back.

use serde_json::{Map, Value};

use super::error::RecognitionError;

/// Server message that signals rejected credentials
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// A successful recognition response
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    document: Value,
    raw: Vec<u8>,
}

impl RecognitionResult {
    /// Interpret a response body
    ///
    /// An `error` field that is missing, empty, or not a string counts as success.
    pub fn from_bytes(raw: Vec<u8>) -> Result<Self, RecognitionError> {
        let document: Value = match serde_json::from_slice(&raw) {
            Ok(document) => document,
            Err(_) => return Err(RecognitionError::FailedParse { raw }),
        };

        if let Some(message) = document.get("error").and_then(Value::as_str) {
            if message == INVALID_CREDENTIALS_MESSAGE {
                return Err(RecognitionError::InvalidCredentials);
            }
            if !message.is_empty() {
                return Err(RecognitionError::NotMath {
                    message: message.to_string(),
                });
            }
        }

        Ok(Self { document, raw })
    }

    /// The full response document
    #[must_use]
    pub const fn document(&self) -> &Value {
        &self.document
    }

    /// The response document as a key/value map, if it is a JSON object
    #[must_use]
    pub fn parsed(&self) -> Option<&Map<String, Value>> {
        self.document.as_object()
    }

    /// The raw response bytes
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Consume the result, returning the document and raw bytes
    #[must_use]
    pub fn into_parts(self) -> (Value, Vec<u8>) {
        (self.document, self.raw)
    }

    /// The `latex` field
    #[must_use]
    pub fn latex(&self) -> Option<&str> {
        self.string_field("latex")
    }

    /// The `mathml` field, present when MathML output was requested
    #[must_use]
    pub fn mathml(&self) -> Option<&str> {
        self.string_field("mathml")
    }

    /// The `wolfram` field, present when Wolfram output was requested
    #[must_use]
    pub fn wolfram(&self) -> Option<&str> {
        self.string_field("wolfram")
    }

    /// The `latex_list` field, when every entry is a string
    #[must_use]
    pub fn latex_list(&self) -> Option<Vec<&str>> {
        self.document
            .get("latex_list")?
            .as_array()?
            .iter()
            .map(Value::as_str)
            .collect()
    }

    /// Render `latex_list` as a bracketed list of quoted entries
    ///
    /// Backslashes inside each entry are doubled, so `\frac` becomes `\\frac`.
    #[must_use]
    pub fn latex_list_string(&self) -> Option<String> {
        let entries: Vec<String> = self
            .latex_list()?
            .into_iter()
            .map(|entry| format!("\"{}\"", entry.replace('\\', "\\\\")))
            .collect();
        Some(format!("[{}]", entries.join(",")))
    }

    fn string_field(&self, key: &str) -> Option<&str> {
        self.document.get(key).and_then(Value::as_str)
    }
}
