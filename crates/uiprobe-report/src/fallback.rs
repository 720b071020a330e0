//! Generic fallback formatter.
//!
//! Handles failures outside the three structured interaction categories,
//! and simple hand-built errors raised in non-interaction contexts. The
//! field sequence is fixed; callers may exclude individual fields (for
//! example file/line when no invocation site exists).

use std::collections::HashSet;

use serde_json::{json, Map, Value};
use uiprobe_core::{ErrorRecord, ScreenshotKind};

use crate::hierarchy::render_hierarchy;

/// One excludable field of the generic report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenericField {
    FailureName,
    SourceLocation,
    FunctionName,
    Description,
    StackTrace,
    Screenshots,
    Hierarchy,
}

/// Where the failure was raised, as tracked by the test runner.
#[derive(Debug, Clone, Default)]
pub struct FailureSite {
    pub failure_name: String,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub function_name: Option<String>,
}

impl FailureSite {
    pub fn new(failure_name: impl Into<String>) -> Self {
        FailureSite {
            failure_name: failure_name.into(),
            ..FailureSite::default()
        }
    }
}

/// Screenshots block body: pretty-printed key/value dump in the canonical
/// [`ScreenshotKind::ALL`] order, absent kinds hidden.
fn screenshots_block(record: &ErrorRecord) -> Option<String> {
    if record.screenshots.is_empty() {
        return None;
    }
    let mut map = Map::new();
    for kind in ScreenshotKind::ALL {
        if let Some(reference) = record.screenshots.get(&kind) {
            map.insert(kind.label().into(), json!(reference));
        }
    }
    let body = serde_json::to_string_pretty(&Value::Object(map)).unwrap_or_default();
    Some(format!("Screenshots:\n{body}"))
}

/// Render the generic failure report.
///
/// Field sequence: failure name, source location, function name, error
/// description, stack trace, screenshots, UI hierarchy. A field is emitted
/// only when its evidence is present and it is not in `exclude`.
pub fn format_generic_failure(
    site: &FailureSite,
    record: &ErrorRecord,
    exclude: &HashSet<GenericField>,
) -> String {
    let mut blocks: Vec<String> = Vec::new();

    if !exclude.contains(&GenericField::FailureName) && !site.failure_name.is_empty() {
        blocks.push(format!("Failure Name: {}", site.failure_name));
    }

    if !exclude.contains(&GenericField::SourceLocation) {
        if let Some(file) = &site.file {
            match site.line {
                Some(line) => blocks.push(format!("Source Location: {file}:{line}")),
                None => blocks.push(format!("Source Location: {file}")),
            }
        }
    }

    if !exclude.contains(&GenericField::FunctionName) {
        if let Some(function) = &site.function_name {
            blocks.push(format!("Function Name: {function}"));
        }
    }

    if !exclude.contains(&GenericField::Description) {
        blocks.push(format!("Error Description:\n{record}"));
    }

    if !exclude.contains(&GenericField::StackTrace) && !record.stack_trace.is_empty() {
        blocks.push(format!("Stack Trace:\n{}", record.stack_trace.join("\n")));
    }

    if !exclude.contains(&GenericField::Screenshots) {
        if let Some(block) = screenshots_block(record) {
            blocks.push(block);
        }
    }

    if !exclude.contains(&GenericField::Hierarchy) {
        if let Some(block) = render_hierarchy(record.hierarchy.as_deref()) {
            blocks.push(block);
        }
    }

    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}
