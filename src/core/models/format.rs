//! Output format selectors
//!
//! Each selector asks the server to include one representation of the
//! recognized math in its response. Selectors map onto entries of the
//! `formats` object in the request body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Representation of recognized math the server should return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Unmodified OCR output
    LatexRaw,
    /// OCR output with extraneous spaces removed
    LatexDefault,
    /// Spaces removed, operator shortcuts applied, split into lists where appropriate
    LatexSimplified,
    /// Add a `mathml` field with MathML markup
    MathmlOn,
    /// Add a `wolfram` field compatible with Wolfram Alpha
    WolframOn,
}

impl OutputFormat {
    /// Every selector, in declaration order
    pub const ALL: [Self; 5] = [
        Self::LatexRaw,
        Self::LatexDefault,
        Self::LatexSimplified,
        Self::MathmlOn,
        Self::WolframOn,
    ];

    /// Key/value pair this selector contributes to the `formats` object
    #[must_use]
    pub fn json_entry(self) -> (&'static str, Value) {
        match self {
            Self::LatexRaw => ("latex", Value::from("raw")),
            Self::LatexDefault => ("latex", Value::from("default")),
            Self::LatexSimplified => ("latex", Value::from("simplified")),
            Self::MathmlOn => ("mathml", Value::Bool(true)),
            Self::WolframOn => ("wolfram", Value::Bool(true)),
        }
    }

    /// Tag used on the command line and in config files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LatexRaw => "latex-raw",
            Self::LatexDefault => "latex-default",
            Self::LatexSimplified => "latex-simplified",
            Self::MathmlOn => "mathml-on",
            Self::WolframOn => "wolfram-on",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == lowered)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|f| f.as_str()).collect();
                format!("Invalid output format: {s}. Use: {}", valid.join(", "))
            })
    }
}

/// Build the `formats` object for a request body
///
/// Selectors sharing a key overwrite each other; the last one wins.
#[must_use]
pub fn formats_object(formats: &[OutputFormat]) -> Map<String, Value> {
    let mut object = Map::new();
    for format in formats {
        let (key, value) = format.json_entry();
        object.insert(key.to_string(), value);
    }
    object
}
