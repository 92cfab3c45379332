//! Tests for response interpretation into results and recognition errors

use mathpix_client::core::models::{RecognitionError, RecognitionResult};
use serde_json::json;

// =============================================================================
// DOMAIN ERRORS
// =============================================================================

#[test]
fn test_invalid_credentials_message() {
    let result = RecognitionResult::from_bytes(br#"{"error": "Invalid credentials"}"#.to_vec());
    assert_eq!(result, Err(RecognitionError::InvalidCredentials));
}

#[test]
fn test_other_error_is_not_math_with_exact_message() {
    let result = RecognitionResult::from_bytes(br#"{"error": "some other message"}"#.to_vec());
    assert_eq!(
        result,
        Err(RecognitionError::NotMath {
            message: "some other message".to_string()
        })
    );
}

#[test]
fn test_credentials_match_is_exact() {
    let result = RecognitionResult::from_bytes(br#"{"error": "invalid credentials"}"#.to_vec());
    assert!(matches!(result, Err(RecognitionError::NotMath { .. })));
}

/// An empty `error` string is treated as success. This mirrors the
/// service's long-standing client behavior even though it is probably
/// unintended.
#[test]
fn test_empty_error_field_is_success() {
    let result = RecognitionResult::from_bytes(br#"{"error": "", "latex": "x"}"#.to_vec()).unwrap();
    assert_eq!(result.latex(), Some("x"));
}

#[test]
fn test_non_string_error_field_is_success() {
    let result = RecognitionResult::from_bytes(br#"{"error": {"code": 3}}"#.to_vec());
    assert!(result.is_ok());
}

// =============================================================================
// PARSE FAILURES
// =============================================================================

#[test]
fn test_invalid_json_is_failed_parse_with_raw_bytes() {
    let raw = b"<html>502 Bad Gateway</html>".to_vec();
    let result = RecognitionResult::from_bytes(raw.clone());
    assert_eq!(result, Err(RecognitionError::FailedParse { raw }));
}

#[test]
fn test_non_object_document_is_success_without_map() {
    let result = RecognitionResult::from_bytes(b"[1, 2, 3]".to_vec()).unwrap();
    assert!(result.parsed().is_none());
    assert_eq!(result.document(), &json!([1, 2, 3]));
}

// =============================================================================
// ACCESSORS
// =============================================================================

#[test]
fn test_success_keeps_document_and_raw_bytes() {
    let raw = br#"{"latex": "\\frac{1}{2}", "latex_confidence": 0.98}"#.to_vec();
    let result = RecognitionResult::from_bytes(raw.clone()).unwrap();
    assert_eq!(result.raw(), raw.as_slice());
    assert_eq!(result.latex(), Some("\\frac{1}{2}"));
    assert_eq!(result.parsed().unwrap()["latex_confidence"], json!(0.98));
}

#[test]
fn test_optional_representations() {
    let result = RecognitionResult::from_bytes(
        br#"{"latex": "x", "mathml": "<math/>", "wolfram": "x"}"#.to_vec(),
    )
    .unwrap();
    assert_eq!(result.mathml(), Some("<math/>"));
    assert_eq!(result.wolfram(), Some("x"));

    let bare = RecognitionResult::from_bytes(br#"{"latex": "x"}"#.to_vec()).unwrap();
    assert_eq!(bare.mathml(), None);
    assert_eq!(bare.wolfram(), None);
}

#[test]
fn test_latex_list_string_doubles_backslashes() {
    let result = RecognitionResult::from_bytes(
        br#"{"latex_list": ["\\alpha + 1", "y"]}"#.to_vec(),
    )
    .unwrap();
    assert_eq!(result.latex_list(), Some(vec!["\\alpha + 1", "y"]));
    assert_eq!(result.latex_list_string().as_deref(), Some(r#"["\\alpha + 1","y"]"#));
}

#[test]
fn test_latex_list_missing_or_mixed() {
    let missing = RecognitionResult::from_bytes(br#"{"latex": "x"}"#.to_vec()).unwrap();
    assert_eq!(missing.latex_list_string(), None);

    let mixed = RecognitionResult::from_bytes(br#"{"latex_list": ["x", 1]}"#.to_vec()).unwrap();
    assert_eq!(mixed.latex_list(), None);
}

#[test]
fn test_into_parts() {
    let result = RecognitionResult::from_bytes(br#"{"latex": "x"}"#.to_vec()).unwrap();
    let (document, raw) = result.into_parts();
    assert_eq!(document, json!({"latex": "x"}));
    assert_eq!(raw, br#"{"latex": "x"}"#.to_vec());
}
