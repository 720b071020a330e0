//! The evidence bag attached to a failed UI interaction.
//!
//! An [`ErrorRecord`] is an immutable snapshot produced by the interaction
//! engine when a test step fails. Every field except `domain`, `code`, and
//! `message` is optional evidence; formatters omit what is absent rather
//! than substituting placeholder text.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::screenshot::ScreenshotKind;

/// Error domain for failures raised by the UI-interaction engine.
pub const INTERACTION_ERROR_DOMAIN: &str = "com.uiprobe.interaction";

/// The search for the target element exhausted the hierarchy without a match.
pub const CODE_ELEMENT_NOT_FOUND: i32 = 2;

/// The element matcher was ambiguous: more than one element satisfied it.
pub const CODE_MULTIPLE_ELEMENTS_MATCHED: i32 = 5;

/// The matched element failed one or more action preconditions.
pub const CODE_CONSTRAINTS_FAILED: i32 = 7;

/// Diagnostic evidence collected for a single interaction failure.
///
/// Records may chain: `nested` points at the causally-prior record, forming
/// a shallow, acyclic chain (one level in typical usage, arbitrary depth
/// tolerated).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub domain: String,
    pub code: i32,
    /// Primary human-readable description. Always populated.
    pub message: String,
    pub recovery_suggestion: Option<String>,
    pub element_matcher: Option<String>,
    /// Pre-formatted sub-report from the search-action collaborator.
    /// Treated as opaque text by every formatter.
    pub search_action_info: Option<String>,
    /// One description per matched element, in discovery order.
    pub matched_elements: Vec<String>,
    pub failed_constraints: Option<String>,
    pub element_description: Option<String>,
    pub assertion_criteria: Option<String>,
    pub action_name: Option<String>,
    pub nested: Option<Box<ErrorRecord>>,
    pub stack_trace: Vec<String>,
    pub screenshots: HashMap<ScreenshotKind, String>,
    /// Pre-rendered UI hierarchy snapshot, captured back-to-front upstream.
    pub hierarchy: Option<String>,
}

impl ErrorRecord {
    pub fn new(domain: impl Into<String>, code: i32, message: impl Into<String>) -> Self {
        ErrorRecord {
            domain: domain.into(),
            code,
            message: message.into(),
            ..ErrorRecord::default()
        }
    }

    /// Structured dump of the record's identity fields, recursing through
    /// the nested chain. This is the display form used for underlying
    /// errors and for the generic fallback description.
    pub fn dump(&self) -> Value {
        let mut map = Map::new();
        map.insert("Error Domain".into(), json!(self.domain));
        map.insert("Error Code".into(), json!(self.code));
        map.insert("Description".into(), json!(self.message));
        if let Some(suggestion) = &self.recovery_suggestion {
            map.insert("Recovery Suggestion".into(), json!(suggestion));
        }
        if let Some(nested) = &self.nested {
            map.insert("Underlying Error".into(), nested.dump());
        }
        Value::Object(map)
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string_pretty(&self.dump()).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
