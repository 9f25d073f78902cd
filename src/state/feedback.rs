use strum_macros::{Display, EnumString};

use crate::error::ApiError;
use crate::model::attendance::BulkMarkResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Error,
}

/// One-line notice for the user after a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            message: message.into(),
        }
    }

    pub fn from_api_error(err: &ApiError) -> Self {
        Self::error(err.message())
    }

    pub fn is_error(&self) -> bool {
        self.kind == FeedbackKind::Error
    }

    /// Only counts matter here; skip reasons are not surfaced.
    /// `None` when the backend neither created nor skipped anything.
    pub fn bulk_marked(result: &BulkMarkResult) -> Option<Self> {
        let created = result.created.len();
        let skipped = result.skipped.len();

        match (created, skipped) {
            (0, 0) => None,
            (created, 0) => Some(Self::success(format!(
                "Attendance marked for {} employee{}",
                created,
                if created > 1 { "s" } else { "" }
            ))),
            (0, skipped) => Some(Self::error(format!(
                "All {} employees already have attendance marked",
                skipped
            ))),
            (created, skipped) => Some(Self::success(format!(
                "Marked: {}, Skipped: {} (already marked)",
                created, skipped
            ))),
        }
    }
}
