// Generic fallback formatter: fixed sequence, exclusion sets, canonical
// screenshot ordering.

use std::collections::HashSet;

use uiprobe_core::{ErrorRecord, ScreenshotKind};
use uiprobe_report::{format_generic_failure, FailureSite, GenericField};

fn timeout_failure() -> (FailureSite, ErrorRecord) {
    let site = FailureSite {
        failure_name: "Timeout".into(),
        file: Some("CheckoutFlowTest.rs".into()),
        line: Some(42),
        function_name: Some("test_pay_button_enabled".into()),
    };
    let mut record = ErrorRecord::new("com.uiprobe.synchronization", 11, "App did not idle.");
    record.stack_trace = vec![
        "0 test_pay_button_enabled".into(),
        "1 run_test".into(),
        "2 main".into(),
    ];
    record.screenshots.insert(ScreenshotKind::AppAtFailure, "failure_app.png".into());
    record.screenshots.insert(ScreenshotKind::BeforeAction, "before.png".into());
    record.hierarchy = Some("<UIWindow>".into());
    (site, record)
}

#[test]
fn test_full_generic_report_sequence() {
    let (site, record) = timeout_failure();
    let out = format_generic_failure(&site, &record, &HashSet::new());
    let order = [
        "Failure Name: Timeout",
        "Source Location: CheckoutFlowTest.rs:42",
        "Function Name: test_pay_button_enabled",
        "Error Description:",
        "Stack Trace:\n0 test_pay_button_enabled\n1 run_test\n2 main",
        "Screenshots:",
        "UI Hierarchy",
    ];
    let mut last = 0;
    for needle in order {
        let at = out.find(needle).unwrap_or_else(|| panic!("missing `{needle}` in:\n{out}"));
        assert!(at >= last);
        last = at;
    }
}

#[test]
fn test_screenshot_block_is_valid_ordered_json() {
    let (site, record) = timeout_failure();
    let out = format_generic_failure(&site, &record, &HashSet::new());

    let body_start = out.find("Screenshots:\n").unwrap() + "Screenshots:\n".len();
    let body_end = out[body_start..].find("\n\n").unwrap() + body_start;
    let parsed: serde_json::Value = serde_json::from_str(&out[body_start..body_end]).unwrap();
    assert_eq!(parsed["Screenshot Before Action"], "before.png");
    assert_eq!(parsed["App Screenshot At Failure"], "failure_app.png");

    let before_at = out.find("Screenshot Before Action").unwrap();
    let app_at = out.find("App Screenshot At Failure").unwrap();
    assert!(before_at < app_at, "canonical order must win over insertion order");
}

#[test]
fn test_source_location_exclusion_for_siteless_failures() {
    let (site, record) = timeout_failure();
    let exclude: HashSet<GenericField> = [GenericField::SourceLocation].into_iter().collect();
    let out = format_generic_failure(&site, &record, &exclude);
    assert!(!out.contains("Source Location"));
    assert!(out.contains("Failure Name: Timeout"));
    assert!(!out.contains("\n\n\n"));
}

#[test]
fn test_every_field_excluded_yields_bare_newline() {
    let (site, record) = timeout_failure();
    let exclude: HashSet<GenericField> = [
        GenericField::FailureName,
        GenericField::SourceLocation,
        GenericField::FunctionName,
        GenericField::Description,
        GenericField::StackTrace,
        GenericField::Screenshots,
        GenericField::Hierarchy,
    ]
    .into_iter()
    .collect();
    let out = format_generic_failure(&site, &record, &exclude);
    assert_eq!(out, "\n");
}
