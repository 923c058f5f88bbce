//! # Response Extractor Tests
//!
//! Validates that the extractor recovers the same normalized payload with
//! or without fenced-block decoration, and that genuinely unparseable
//! output fails with `ExtractionError` instead of returning garbage.

use anyrich::extract::{extract, ExtractionError};

const FENCED: &str = "```json\n{\"summary\":\"Solar costs dropped.\",\"keywords\":\"solar,energy,cost\",\"category\":\"Environment\",\"sentiment\":\"Positive\"}\n```";
const BARE: &str = "{\"summary\":\"Solar costs dropped.\",\"keywords\":\"solar,energy,cost\",\"category\":\"Environment\",\"sentiment\":\"Positive\"}";

#[test]
fn test_extract_recovers_payload_from_fenced_block() {
    let payload = extract(FENCED).expect("fenced payload should extract");

    assert_eq!(payload.summary.as_deref(), Some("Solar costs dropped."));
    assert_eq!(payload.keywords, vec!["solar", "energy", "cost"]);
    assert_eq!(payload.category.as_deref(), Some("Environment"));
    assert_eq!(payload.sentiment.as_deref(), Some("Positive"));
}

#[test]
fn test_extract_is_decoration_invariant() {
    let fenced = extract(FENCED).expect("fenced payload should extract");
    let bare = extract(BARE).expect("bare payload should extract");

    assert_eq!(
        fenced, bare,
        "the same payload must normalize identically regardless of decoration"
    );
}

#[test]
fn test_extract_tolerates_surrounding_prose() {
    let raw = "Here is the analysis you asked for: {\"summary\":\"ok\"} hope that helps!";
    let payload = extract(raw).expect("payload framed by prose should extract");

    assert_eq!(payload.summary.as_deref(), Some("ok"));
}

#[test]
fn test_extract_splits_and_trims_comma_joined_keywords() {
    let raw = "{\"keywords\":\" solar ,  energy,cost \"}";
    let payload = extract(raw).unwrap();

    assert_eq!(payload.keywords, vec!["solar", "energy", "cost"]);
}

#[test]
fn test_extract_accepts_keyword_arrays() {
    let raw = "{\"keywords\":[\"solar\",\" energy \"]}";
    let payload = extract(raw).unwrap();

    assert_eq!(payload.keywords, vec!["solar", "energy"]);
}

#[test]
fn test_extract_defaults_missing_keys() {
    let payload = extract("{}").unwrap();

    assert_eq!(payload.summary, None);
    assert!(payload.keywords.is_empty());
    assert_eq!(payload.category, None);
    assert_eq!(payload.sentiment, None);
}

#[test]
fn test_extract_treats_blank_fields_as_absent() {
    let raw = "{\"summary\":\"\",\"category\":\"  \",\"sentiment\":\"\"}";
    let payload = extract(raw).unwrap();

    assert_eq!(payload.summary, None);
    assert_eq!(payload.category, None);
    assert_eq!(payload.sentiment, None);
}

#[test]
fn test_extract_fails_without_braces() {
    let err = extract("The article talks about solar panels.").unwrap_err();

    assert!(
        matches!(err, ExtractionError::NoJsonObject { .. }),
        "prose without an object must fail with NoJsonObject, got: {err}"
    );
}

#[test]
fn test_extract_fails_on_reversed_braces() {
    let err = extract("} this is backwards {").unwrap_err();

    assert!(matches!(err, ExtractionError::NoJsonObject { .. }));
}

#[test]
fn test_extract_error_carries_truncated_snippet() {
    let long_prose = "x".repeat(500);
    let err = extract(&long_prose).unwrap_err();

    match err {
        ExtractionError::NoJsonObject { snippet } => {
            assert!(snippet.len() <= 80, "snippet should be truncated for diagnostics");
        }
        other => panic!("expected NoJsonObject, got: {other}"),
    }
}

#[test]
fn test_extract_fails_on_invalid_json_between_braces() {
    let err = extract("{summary: not quoted}").unwrap_err();

    assert!(matches!(err, ExtractionError::Parse(_)));
}
