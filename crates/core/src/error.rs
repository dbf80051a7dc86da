// src/error.rs
//! Defines the error types for all report pipeline operations.

use crate::render::RenderError;
use crate::source::SourceError;
use crate::validation::format_grouped;
use thiserror::Error;

/// A report was rejected before rendering. Both kinds are meant to be shown
/// to the end user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("No data available to generate the report with the selected filters.")]
    EmptyResult,
    #[error(
        "The report exceeds the allowed limit of {} records. Please apply more filters.",
        grouped(.limit)
    )]
    OverLimit { limit: usize },
}

fn grouped(limit: &usize) -> String {
    format_grouped(*limit)
}

impl ReportError {
    /// Short reason code: `empty` or `over-limit`.
    pub fn reason(&self) -> &'static str {
        match self {
            ReportError::EmptyResult => "empty",
            ReportError::OverLimit { .. } => "over-limit",
        }
    }
}

/// The main error enum for all high-level operations within the pipeline.
///
/// Data source and renderer failures are carried through untouched in their
/// own variants.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("Data source error: {0}")]
    Source(#[from] SourceError),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    pub fn as_report_error(&self) -> Option<&ReportError> {
        match self {
            PipelineError::Report(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the message is meant for the end user rather than an operator.
    pub fn is_user_facing(&self) -> bool {
        self.as_report_error().is_some()
    }
}
