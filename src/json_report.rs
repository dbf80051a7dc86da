// src/json_report.rs
use quire_core::render::{Orientation, PaperSize, ViewData};
use quire_core::request::{PREVIEW_PARAM, ReportRequest, STREAM_PARAM};
use quire_core::source::{InMemoryQuery, QuerySource, Record, SourceError};
use quire_core::{PipelineError, ReportDefinition};
use serde_json::{Value, json};
use std::fs;
use std::io;
use std::path::Path;

/// A report over an in-memory array of JSON records.
///
/// Every query-string pair of the request, apart from the `preview` and
/// `stream` markers, filters the records by field equality.
#[derive(Debug, Clone)]
pub struct JsonReport {
    records: Vec<Record>,
    view: String,
    filename: String,
    limit_check: bool,
    summary: bool,
    paper: PaperSize,
    orientation: Orientation,
}

impl JsonReport {
    pub fn new(records: Vec<Record>, view: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            records,
            view: view.into(),
            filename: filename.into(),
            limit_check: true,
            summary: true,
            paper: PaperSize::default(),
            orientation: Orientation::default(),
        }
    }

    /// Loads the records from a file holding a JSON array.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        view: impl Into<String>,
        filename: impl Into<String>,
    ) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read data from '{}': {}", path.display(), e),
            ))
        })?;

        let value: Value = serde_json::from_str(&source)?;
        match value {
            Value::Array(records) => {
                log::debug!("Loaded {} record(s) from '{}'", records.len(), path.display());
                Ok(Self::new(records, view, filename))
            }
            _ => Err(PipelineError::Config(format!(
                "Data file '{}' must contain a JSON array of records",
                path.display()
            ))),
        }
    }

    pub fn with_paper(mut self, paper: PaperSize) -> Self {
        self.paper = paper;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_limit_check(mut self, limit_check: bool) -> Self {
        self.limit_check = limit_check;
        self
    }

    /// Drops the `{"count": n}` summary.
    pub fn without_summary(mut self) -> Self {
        self.summary = false;
        self
    }
}

impl ReportDefinition for JsonReport {
    fn source(&self, request: &ReportRequest) -> Result<QuerySource, SourceError> {
        let query = request
            .query()
            .iter()
            .filter(|(key, _)| key.as_str() != PREVIEW_PARAM && key.as_str() != STREAM_PARAM)
            .fold(InMemoryQuery::new(self.records.clone()), |query, (key, value)| {
                query.where_eq(key.clone(), value.clone())
            });
        Ok(QuerySource::query(query))
    }

    fn view_name(&self) -> &str {
        &self.view
    }

    fn output_filename(&self) -> &str {
        &self.filename
    }

    fn requires_limit_check(&self) -> bool {
        self.limit_check
    }

    fn paper(&self) -> PaperSize {
        self.paper
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn summary(&self, records: &[Record]) -> Option<ViewData> {
        if !self.summary {
            return None;
        }
        let mut summary = ViewData::new();
        summary.insert("count".to_string(), json!(records.len()));
        Some(summary)
    }
}
