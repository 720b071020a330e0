//! Evidence model for uiprobe failure reports.
//!
//! This crate provides the foundational data structures consumed by the
//! report formatters:
//! - [`record`] — The [`ErrorRecord`](record::ErrorRecord) evidence bag and
//!   the interaction error domain/code constants
//! - [`screenshot`] — The fixed [`ScreenshotKind`](screenshot::ScreenshotKind)
//!   enumeration and its canonical display order

pub mod record;
pub mod screenshot;

pub use record::{
    ErrorRecord, CODE_CONSTRAINTS_FAILED, CODE_ELEMENT_NOT_FOUND, CODE_MULTIPLE_ELEMENTS_MATCHED,
    INTERACTION_ERROR_DOMAIN,
};
pub use screenshot::ScreenshotKind;
