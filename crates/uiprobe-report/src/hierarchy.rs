//! UI-hierarchy section rendering.
//!
//! The hierarchy snapshot arrives pre-rendered from the capture subsystem,
//! windows already ordered back to front. This module only prepends the
//! fixed header and marker legend; the body passes through verbatim.

/// Header line of every hierarchy section.
pub const HIERARCHY_HEADER: &str = "UI Hierarchy (ordered by window level, back to front):";

/// Marker legend, emitted after the header in this exact order.
pub const HIERARCHY_LEGEND: &str = "Legend:\n\
    [Window 1] = Back-Most Window\n\
    [AX] = Accessibility\n\
    [UIE] = User Interaction Enabled";

/// Render the hierarchy section, or `None` when no snapshot was captured.
/// An absent snapshot omits the whole section, header and legend included.
pub fn render_hierarchy(hierarchy: Option<&str>) -> Option<String> {
    let body = hierarchy?;
    Some(format!("{HIERARCHY_HEADER}\n{HIERARCHY_LEGEND}\n\n{body}"))
}
