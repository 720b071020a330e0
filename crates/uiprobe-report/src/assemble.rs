//! Report assembly.
//!
//! Walks the classified field set in canonical order, renders one labeled
//! block per present evidence field, and joins the blocks with a blank
//! line. Absent evidence is skipped silently; the output is never empty
//! because the reason is always populated.

use uiprobe_core::ErrorRecord;

use crate::classify::{classify, ClassifyError, FieldFlags, ReportField};
use crate::hierarchy::render_hierarchy;

const RECOVERY_SUGGESTION_LABEL: &str = "Recovery Suggestion";
const ELEMENT_MATCHER_LABEL: &str = "Element Matcher";
const ASSERTION_CRITERIA_LABEL: &str = "Assertion Criteria";
const ACTION_NAME_LABEL: &str = "Action Name";
const SEARCH_ACTION_INFO_LABEL: &str = "Search Action Info";
const MATCHED_ELEMENTS_LABEL: &str = "Elements Matched";
const FAILED_CONSTRAINTS_LABEL: &str = "Failed Constraint(s)";
const ELEMENT_DESCRIPTION_LABEL: &str = "Element Description";
const NESTED_ERROR_LABEL: &str = "Underlying Error";

fn labeled_multiline(label: &str, value: &str) -> String {
    format!("{label}:\n{value}")
}

/// Classify `record` and assemble its structured report in one step.
pub fn format_interaction_failure(record: &ErrorRecord) -> Result<String, ClassifyError> {
    let flags = classify(&record.domain, record.code)?;
    Ok(assemble(&flags, record))
}

/// Render the report for an already-classified record.
///
/// `record` is read-only; two calls with the same inputs produce
/// byte-identical output.
pub fn assemble(flags: &FieldFlags, record: &ErrorRecord) -> String {
    let mut blocks: Vec<String> = Vec::new();

    for field in flags.fields() {
        match field {
            ReportField::Reason => {
                // The message is already a full sentence; no label.
                blocks.push(record.message.clone());
            }
            ReportField::RecoverySuggestion => {
                if let Some(suggestion) = &record.recovery_suggestion {
                    blocks.push(format!("{RECOVERY_SUGGESTION_LABEL}: {suggestion}"));
                }
            }
            ReportField::ElementMatcher => {
                if let Some(matcher) = &record.element_matcher {
                    blocks.push(labeled_multiline(ELEMENT_MATCHER_LABEL, matcher));
                }
            }
            ReportField::Criteria => {
                let mut lines = Vec::new();
                if let Some(criteria) = &record.assertion_criteria {
                    lines.push(format!("{ASSERTION_CRITERIA_LABEL}: {criteria}"));
                }
                if let Some(action) = &record.action_name {
                    lines.push(format!("{ACTION_NAME_LABEL}: {action}"));
                }
                if !lines.is_empty() {
                    blocks.push(lines.join("\n"));
                }
            }
            ReportField::SearchActionInfo => {
                // Opaque sub-report from the search collaborator.
                if let Some(info) = &record.search_action_info {
                    blocks.push(labeled_multiline(SEARCH_ACTION_INFO_LABEL, info));
                }
            }
            ReportField::MatchedElements => {
                if !record.matched_elements.is_empty() {
                    let mut block = format!("{MATCHED_ELEMENTS_LABEL}:");
                    for (i, description) in record.matched_elements.iter().enumerate() {
                        block.push_str(&format!("\n{}. {}", i + 1, description));
                    }
                    blocks.push(block);
                }
            }
            ReportField::FailedConstraints => {
                if let Some(constraints) = &record.failed_constraints {
                    blocks.push(labeled_multiline(FAILED_CONSTRAINTS_LABEL, constraints));
                }
            }
            ReportField::ElementDescription => {
                if let Some(description) = &record.element_description {
                    blocks.push(labeled_multiline(ELEMENT_DESCRIPTION_LABEL, description));
                }
            }
            ReportField::NestedError => {
                // Display dump of the prior record, never a second pass
                // through the classifier.
                if let Some(nested) = &record.nested {
                    blocks.push(labeled_multiline(NESTED_ERROR_LABEL, &nested.to_string()));
                }
            }
            ReportField::Hierarchy => {
                if let Some(block) = render_hierarchy(record.hierarchy.as_deref()) {
                    blocks.push(block);
                }
            }
        }
    }

    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}
