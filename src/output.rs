//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;
use serde_json::Value;

use crate::core::models::{OutputFormat, RecognitionResult, RequestId};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a recognize operation
#[derive(Debug, Serialize)]
pub struct RecognizeReport {
    /// Identifier of the call
    pub id: RequestId,
    /// LaTeX output, if returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latex: Option<String>,
    /// LaTeX list rendered as a string, if returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latex_list: Option<String>,
    /// MathML output, if requested and returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mathml: Option<String>,
    /// Wolfram Alpha query, if requested and returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wolfram: Option<String>,
    /// The full response document
    pub response: Value,
}

impl RecognizeReport {
    /// Summarize a successful recognition
    #[must_use]
    pub fn from_result(id: RequestId, result: &RecognitionResult) -> Self {
        Self {
            id,
            latex: result.latex().map(String::from),
            latex_list: result.latex_list_string(),
            mathml: result.mathml().map(String::from),
            wolfram: result.wolfram().map(String::from),
            response: result.document().clone(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let mut printed = false;
        for (label, value) in [
            ("LaTeX", &self.latex),
            ("LaTeX list", &self.latex_list),
            ("MathML", &self.mathml),
            ("Wolfram", &self.wolfram),
        ] {
            if let Some(value) = value {
                println!("{label}: {value}");
                printed = true;
            }
        }
        if !printed {
            println!("{}", serde_json::to_string_pretty(&self.response).unwrap_or_default());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Failed recognize operation, for JSON mode
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    /// Identifier of the call
    pub id: RequestId,
    /// Error family: "network", "recognition", or "unexpected"
    pub kind: String,
    /// Error description
    pub error: String,
}

impl ErrorReport {
    /// Render the report as JSON
    pub fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// One entry of the format listing
#[derive(Debug, Serialize)]
pub struct FormatInfo {
    /// Tag accepted by `--format`
    pub tag: String,
    /// Key in the request's `formats` object
    pub key: String,
    /// Value sent for that key
    pub value: Value,
}

/// Result of the formats command
#[derive(Debug, Serialize)]
pub struct FormatListResult {
    /// Every available format
    pub formats: Vec<FormatInfo>,
}

impl FormatListResult {
    /// Describe every output format
    #[must_use]
    pub fn all() -> Self {
        let formats = OutputFormat::ALL
            .into_iter()
            .map(|format| {
                let (key, value) = format.json_entry();
                FormatInfo {
                    tag: format.to_string(),
                    key: key.to_string(),
                    value,
                }
            })
            .collect();
        Self { formats }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for info in &self.formats {
                    println!("  {:<18} {} = {}", info.tag, info.key, info.value);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Result of the config show command
#[derive(Debug, Serialize)]
pub struct ConfigReport {
    /// Settings file location
    pub path: String,
    /// Configured app id
    pub app_id: Option<String>,
    /// Configured app key, masked
    pub app_key: Option<String>,
    /// Configured endpoint
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ConfigReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Config file: {}", self.path);
                println!("  app_id:   {}", self.app_id.as_deref().unwrap_or("(not set)"));
                println!("  app_key:  {}", self.app_key.as_deref().unwrap_or("(not set)"));
                println!("  endpoint: {}", self.endpoint);
                println!("  timeout:  {}s", self.timeout_secs);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
