// Unrecognized (domain, code) pairs must fail classification outright,
// never degrade into a partial report.

use uiprobe_core::{ErrorRecord, CODE_ELEMENT_NOT_FOUND, INTERACTION_ERROR_DOMAIN};
use uiprobe_report::{classify, classify_by_reason, format_interaction_failure, ClassifyError};

#[test]
fn test_unknown_code_never_formats() {
    let record = ErrorRecord::new(INTERACTION_ERROR_DOMAIN, 404, "mystery failure");
    let err = format_interaction_failure(&record).unwrap_err();
    assert!(matches!(
        err,
        ClassifyError::UnsupportedCategory { code: 404, .. }
    ));
}

#[test]
fn test_unknown_domain_never_formats() {
    let record = ErrorRecord::new("com.vendor.widgets", CODE_ELEMENT_NOT_FOUND, "not ours");
    assert!(format_interaction_failure(&record).is_err());
}

#[test]
fn test_error_message_names_the_offending_pair() {
    let err = classify("com.vendor.widgets", 404).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("com.vendor.widgets"));
    assert!(text.contains("404"));
}

#[test]
fn test_reason_routing_for_handbuilt_errors() {
    // Hand-built errors carry no domain/code; callers route them by phrase.
    assert!(classify_by_reason(
        "Assertion aborted: multiple elements were matched by accessibilityLabel('OK')."
    ));
    assert!(!classify_by_reason("Device rotation timed out."));
}
