//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use mathpix_client::core::models::{RecognitionResult, RequestId};
use mathpix_client::output::{
    ErrorReport, FormatListResult, OperationResult, OutputMode, RecognizeReport,
};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// RecognizeReport Tests
// =============================================================================

#[test]
fn recognize_report_from_result() {
    let result = RecognitionResult::from_bytes(
        br#"{"latex": "x^2", "latex_list": ["x^2"], "wolfram": "x^2"}"#.to_vec(),
    )
    .unwrap();
    let report = RecognizeReport::from_result(RequestId::new(), &result);

    assert_eq!(report.latex.as_deref(), Some("x^2"));
    assert_eq!(report.latex_list.as_deref(), Some(r#"["x^2"]"#));
    assert_eq!(report.wolfram.as_deref(), Some("x^2"));
    assert!(report.mathml.is_none());
}

#[test]
fn recognize_report_serialization_skips_missing_fields() {
    let result = RecognitionResult::from_bytes(br#"{"latex": "y"}"#.to_vec()).unwrap();
    let report = RecognizeReport::from_result(RequestId::new(), &result);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["latex"], "y");
    assert_eq!(json["response"]["latex"], "y");
    assert!(json.get("mathml").is_none());
    assert!(json["id"].is_string());
}

// =============================================================================
// Other results
// =============================================================================

#[test]
fn error_report_serialization() {
    let report = ErrorReport {
        id: RequestId::new(),
        kind: "recognition".to_string(),
        error: "not math: nope".to_string(),
    };
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"kind\":\"recognition\""));
    assert!(json.contains("not math: nope"));
}

#[test]
fn format_list_covers_every_format() {
    let list = FormatListResult::all();
    assert_eq!(list.formats.len(), 5);
    let tags: Vec<&str> = list.formats.iter().map(|f| f.tag.as_str()).collect();
    assert_eq!(
        tags,
        ["latex-raw", "latex-default", "latex-simplified", "mathml-on", "wolfram-on"]
    );
    assert_eq!(list.formats[3].key, "mathml");
    assert_eq!(list.formats[3].value, serde_json::json!(true));
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Saved".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
}
