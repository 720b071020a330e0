//! Screenshot evidence kinds.
//!
//! Screenshots are captured by an external collaborator at up to five fixed
//! moments around a failing interaction. The capture order is irrelevant;
//! every formatter renders them in the canonical order of [`ScreenshotKind::ALL`].

use serde::{Deserialize, Serialize};

/// The five display moments a screenshot can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenshotKind {
    BeforeAction,
    ExpectedAfterAction,
    ActualAfterAction,
    AppAtFailure,
    TestHostAtFailure,
}

impl ScreenshotKind {
    /// Canonical display order, independent of capture/insertion order.
    pub const ALL: [ScreenshotKind; 5] = [
        ScreenshotKind::BeforeAction,
        ScreenshotKind::ExpectedAfterAction,
        ScreenshotKind::ActualAfterAction,
        ScreenshotKind::AppAtFailure,
        ScreenshotKind::TestHostAtFailure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenshotKind::BeforeAction => "before_action",
            ScreenshotKind::ExpectedAfterAction => "expected_after_action",
            ScreenshotKind::ActualAfterAction => "actual_after_action",
            ScreenshotKind::AppAtFailure => "app_at_failure",
            ScreenshotKind::TestHostAtFailure => "test_host_at_failure",
        }
    }

    /// Human-readable label used as the key in rendered screenshot blocks.
    pub fn label(&self) -> &'static str {
        match self {
            ScreenshotKind::BeforeAction => "Screenshot Before Action",
            ScreenshotKind::ExpectedAfterAction => "Expected Screenshot After Action",
            ScreenshotKind::ActualAfterAction => "Actual Screenshot After Action",
            ScreenshotKind::AppAtFailure => "App Screenshot At Failure",
            ScreenshotKind::TestHostAtFailure => "Test Host Screenshot At Failure",
        }
    }
}

impl std::fmt::Display for ScreenshotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
