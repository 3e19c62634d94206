use std::time::Duration;

use crate::domain::value_objects::{InvocationId, ObjectKey};

/// Why an event was ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The event belongs to a bucket this function does not watch
    WrongBucket { expected: String, actual: String },
    /// The object is not a `.pdf` (thumbnails we upload land here too)
    NotPdf { extension: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::WrongBucket { expected, actual } => {
                write!(f, "event for bucket '{}', watching '{}'", actual, expected)
            }
            SkipReason::NotPdf { extension } => {
                write!(f, "not a PDF (extension '{}')", extension)
            }
        }
    }
}

/// A thumbnail written back to the bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedThumbnail {
    pub invocation_id: InvocationId,
    pub source: ObjectKey,
    pub thumbnail: ObjectKey,
}

/// Successful end of an invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailOutcome {
    Generated(GeneratedThumbnail),
    Skipped(SkipReason),
}

impl ThumbnailOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, ThumbnailOutcome::Generated(_))
    }
}

/// Result of one successful external tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRun {
    pub tool: String,
    pub exit_code: Option<i32>,
    pub stderr: String,
    pub elapsed: Duration,
}
