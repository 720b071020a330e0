//! Failure classification.
//!
//! Maps an error's `(domain, code)` to the fixed, ordered set of report
//! fields for that failure category. Exactly three interaction categories
//! are recognized; anything else is a contract violation on the caller's
//! side, not a runtime condition to recover from.

use uiprobe_core::{
    CODE_CONSTRAINTS_FAILED, CODE_ELEMENT_NOT_FOUND, CODE_MULTIPLE_ELEMENTS_MATCHED,
    INTERACTION_ERROR_DOMAIN,
};

/// The three structured interaction-failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    ElementNotFound,
    MultipleElementsMatched,
    ConstraintsFailed,
}

impl FailureCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCategory::ElementNotFound => "element_not_found",
            FailureCategory::MultipleElementsMatched => "multiple_elements_matched",
            FailureCategory::ConstraintsFailed => "constraints_failed",
        }
    }
}

impl std::fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One optional section of a structured report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField {
    Reason,
    RecoverySuggestion,
    ElementMatcher,
    Criteria,
    SearchActionInfo,
    MatchedElements,
    FailedConstraints,
    ElementDescription,
    NestedError,
    Hierarchy,
}

const ELEMENT_NOT_FOUND_FIELDS: &[ReportField] = &[
    ReportField::Reason,
    ReportField::RecoverySuggestion,
    ReportField::ElementMatcher,
    ReportField::Criteria,
    ReportField::SearchActionInfo,
    ReportField::NestedError,
    ReportField::Hierarchy,
];

const MULTIPLE_ELEMENTS_FIELDS: &[ReportField] = &[
    ReportField::Reason,
    ReportField::RecoverySuggestion,
    ReportField::ElementMatcher,
    ReportField::MatchedElements,
    ReportField::NestedError,
    ReportField::Hierarchy,
];

const CONSTRAINTS_FAILED_FIELDS: &[ReportField] = &[
    ReportField::Reason,
    ReportField::Criteria,
    ReportField::RecoverySuggestion,
    ReportField::FailedConstraints,
    ReportField::ElementDescription,
    ReportField::NestedError,
    ReportField::Hierarchy,
];

/// The ordered field set selected for one classification.
///
/// Immutable once built; recomputed for every request. Derivation is a pure
/// function of `(domain, code)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFlags {
    category: FailureCategory,
    fields: &'static [ReportField],
}

impl FieldFlags {
    pub fn category(&self) -> FailureCategory {
        self.category
    }

    /// Canonical emission order for this category.
    pub fn fields(&self) -> &'static [ReportField] {
        self.fields
    }

    pub fn contains(&self, field: ReportField) -> bool {
        self.fields.contains(&field)
    }
}

/// Errors raised by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("no report field set for error domain `{domain}` code {code}; the classifier needs a new category")]
    UnsupportedCategory { domain: String, code: i32 },
}

/// Select the field set for a `(domain, code)` pair.
///
/// Returns [`ClassifyError::UnsupportedCategory`] for any pair outside the
/// three recognized interaction categories. Callers must not route such
/// errors through the structured formatter; the error marks a gap in the
/// classifier, not bad input.
pub fn classify(domain: &str, code: i32) -> Result<FieldFlags, ClassifyError> {
    let category = match (domain, code) {
        (INTERACTION_ERROR_DOMAIN, CODE_ELEMENT_NOT_FOUND) => FailureCategory::ElementNotFound,
        (INTERACTION_ERROR_DOMAIN, CODE_MULTIPLE_ELEMENTS_MATCHED) => {
            FailureCategory::MultipleElementsMatched
        }
        (INTERACTION_ERROR_DOMAIN, CODE_CONSTRAINTS_FAILED) => FailureCategory::ConstraintsFailed,
        _ => {
            return Err(ClassifyError::UnsupportedCategory {
                domain: domain.to_string(),
                code,
            })
        }
    };

    let fields = match category {
        FailureCategory::ElementNotFound => ELEMENT_NOT_FOUND_FIELDS,
        FailureCategory::MultipleElementsMatched => MULTIPLE_ELEMENTS_FIELDS,
        FailureCategory::ConstraintsFailed => CONSTRAINTS_FAILED_FIELDS,
    };

    Ok(FieldFlags { category, fields })
}

/// Reason phrase emitted when the element search comes up empty.
pub const ELEMENT_NOT_FOUND_PHRASE: &str = "the desired element was not found";

/// Reason phrase emitted when a matcher is ambiguous.
pub const MULTIPLE_ELEMENTS_PHRASE: &str = "multiple elements were matched";

/// Reason phrase emitted when action preconditions fail.
pub const CONSTRAINTS_FAILED_PHRASE: &str = "constraints failed while performing";

/// Whether a free-text failure reason belongs to one of the structured
/// categories. Lets callers route hand-built errors that carry no
/// domain/code metadata.
pub fn classify_by_reason(reason: &str) -> bool {
    [
        ELEMENT_NOT_FOUND_PHRASE,
        MULTIPLE_ELEMENTS_PHRASE,
        CONSTRAINTS_FAILED_PHRASE,
    ]
    .iter()
    .any(|phrase| reason.contains(phrase))
}
