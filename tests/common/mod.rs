#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use quire::{
    Artifact, Disposition, DocumentRenderer, Orientation, PaperSize, PreviewWindowOpener,
    QuerySource, Queryable, Record, RenderError, RenderMode, ReportDefinition, ReportRequest,
    SourceError, ViewData,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One call received by a [`RecordingRenderer`].
#[derive(Debug, Clone)]
pub struct RenderCall {
    pub mode: RenderMode,
    pub view: String,
    pub data: ViewData,
    pub paper: PaperSize,
    pub orientation: Orientation,
    pub filename: String,
}

impl RenderCall {
    /// Length of the `data` entry when it is an array.
    pub fn data_len(&self) -> Option<usize> {
        self.data.get("data").and_then(|d| d.as_array()).map(|a| a.len())
    }
}

/// A renderer that records every call and returns a small marker document.
#[derive(Default)]
pub struct RecordingRenderer {
    calls: Mutex<Vec<RenderCall>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> RenderCall {
        self.calls().pop().expect("renderer was never called")
    }

    fn record(
        &self,
        mode: RenderMode,
        view: &str,
        data: &ViewData,
        paper: &PaperSize,
        orientation: Orientation,
        filename: &str,
    ) -> Artifact {
        self.calls.lock().unwrap().push(RenderCall {
            mode,
            view: view.to_string(),
            data: data.clone(),
            paper: *paper,
            orientation,
            filename: filename.to_string(),
        });
        Artifact::new(format!("{}:{}", view, filename).into_bytes(), filename, mode.disposition())
    }
}

impl DocumentRenderer for RecordingRenderer {
    fn stream(
        &self,
        view: &str,
        data: &ViewData,
        paper: &PaperSize,
        orientation: Orientation,
        filename: &str,
    ) -> Result<Artifact, RenderError> {
        Ok(self.record(RenderMode::Stream, view, data, paper, orientation, filename))
    }

    fn download(
        &self,
        view: &str,
        data: &ViewData,
        paper: &PaperSize,
        orientation: Orientation,
        filename: &str,
    ) -> Result<Artifact, RenderError> {
        Ok(self.record(RenderMode::Download, view, data, paper, orientation, filename))
    }
}

/// A renderer that always fails.
pub struct FailingRenderer;

impl DocumentRenderer for FailingRenderer {
    fn stream(
        &self,
        _view: &str,
        _data: &ViewData,
        _paper: &PaperSize,
        _orientation: Orientation,
        _filename: &str,
    ) -> Result<Artifact, RenderError> {
        Err(RenderError::Pdf("renderer offline".into()))
    }

    fn download(
        &self,
        _view: &str,
        _data: &ViewData,
        _paper: &PaperSize,
        _orientation: Orientation,
        _filename: &str,
    ) -> Result<Artifact, RenderError> {
        Err(RenderError::Pdf("renderer offline".into()))
    }
}

/// How a [`CountingDefinition`] hands out its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Query,
    SlowQuery,
    Records,
}

/// A definition over fixed records that counts how often its source is resolved.
pub struct CountingDefinition {
    records: Vec<Record>,
    kind: SourceKind,
    limit_check: bool,
    source_calls: AtomicUsize,
}

impl CountingDefinition {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            kind: SourceKind::Query,
            limit_check: true,
            source_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_kind(mut self, kind: SourceKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn without_limit_check(mut self) -> Self {
        self.limit_check = false;
        self
    }

    pub fn source_calls(&self) -> usize {
        self.source_calls.load(Ordering::SeqCst)
    }
}

impl ReportDefinition for CountingDefinition {
    fn source(&self, _request: &ReportRequest) -> Result<QuerySource, SourceError> {
        self.source_calls.fetch_add(1, Ordering::SeqCst);
        let records = self.records.clone();
        Ok(match self.kind {
            SourceKind::Query => QuerySource::query(quire::InMemoryQuery::new(records)),
            SourceKind::SlowQuery => {
                QuerySource::query(quire::InMemoryQuery::new(records).without_pagination_count())
            }
            SourceKind::Records => QuerySource::records(records),
        })
    }

    fn view_name(&self) -> &str {
        "reports.counting"
    }

    fn output_filename(&self) -> &str {
        "counting.pdf"
    }

    fn requires_limit_check(&self) -> bool {
        self.limit_check
    }
}

/// Which step of a [`FailingQuery`] breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingStep {
    /// Both the pagination count and the full count fail.
    Count,
    /// Counting works but fetching the records fails.
    Fetch,
}

/// A query over `records` whose backend fails at one step.
pub struct FailingQuery {
    records: usize,
    step: FailingStep,
}

impl Queryable for FailingQuery {
    fn count_for_pagination(&self) -> Result<usize, SourceError> {
        match self.step {
            FailingStep::Count => Err(SourceError::Count("db down".into())),
            FailingStep::Fetch => Ok(self.records),
        }
    }

    fn count(&self) -> Result<usize, SourceError> {
        self.count_for_pagination()
    }

    fn fetch(&self) -> Result<Vec<Record>, SourceError> {
        match self.step {
            FailingStep::Count => Ok(vec![serde_json::json!({}); self.records]),
            FailingStep::Fetch => Err(SourceError::Fetch("timeout".into())),
        }
    }
}

/// A limit-checked definition backed by a [`FailingQuery`].
pub struct FailingQueryDefinition {
    pub step: FailingStep,
}

impl ReportDefinition for FailingQueryDefinition {
    fn source(&self, _request: &ReportRequest) -> Result<QuerySource, SourceError> {
        Ok(QuerySource::query(FailingQuery {
            records: 3,
            step: self.step,
        }))
    }

    fn view_name(&self) -> &str {
        "reports.failing"
    }

    fn output_filename(&self) -> &str {
        "failing.pdf"
    }

    fn requires_limit_check(&self) -> bool {
        true
    }
}

/// An opener that records every preview window request.
#[derive(Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<(String, ViewData, String)>>,
}

impl RecordingOpener {
    pub fn opened(&self) -> Vec<(String, ViewData, String)> {
        self.opened.lock().unwrap().clone()
    }
}

impl PreviewWindowOpener for RecordingOpener {
    fn open_preview_window(&self, route: &str, params: &ViewData, title: &str) {
        self.opened
            .lock()
            .unwrap()
            .push((route.to_string(), params.clone(), title.to_string()));
    }
}

pub fn assert_disposition(artifact: &Artifact, expected: Disposition) {
    assert_eq!(
        artifact.disposition, expected,
        "unexpected disposition for '{}'",
        artifact.filename
    );
}
