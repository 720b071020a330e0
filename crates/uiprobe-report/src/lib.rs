//! Failure-report formatters for uiprobe.
//!
//! Turns an [`ErrorRecord`](uiprobe_core::ErrorRecord) into the deterministic
//! diagnostic text used as a test failure's description:
//! - [`classify`] — Maps `(domain, code)` to the ordered field set for that
//!   failure category
//! - [`assemble`] — Renders the selected fields into blank-line-separated
//!   blocks, omitting absent evidence
//! - [`hierarchy`] — The fixed UI-hierarchy header/legend renderer
//! - [`fallback`] — Generic formatter for failures outside the recognized
//!   interaction categories

pub mod assemble;
pub mod classify;
pub mod fallback;
pub mod hierarchy;

pub use assemble::{assemble, format_interaction_failure};
pub use classify::{classify, classify_by_reason, ClassifyError, FailureCategory, FieldFlags, ReportField};
pub use fallback::{format_generic_failure, FailureSite, GenericField};
pub use hierarchy::render_hierarchy;
