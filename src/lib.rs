//! # quire
//!
//! Report generation on top of a pluggable document renderer.
//!
//! A [`ReportDefinition`] says where a report's records come from and which
//! view renders them. The [`ReportProcessor`] validates the result size,
//! assembles the view data and hands it to a [`DocumentRenderer`]. The
//! [`PreviewGate`] sits in front of the processor for UIs that show reports in
//! a separate preview window.
//!
//! ```ignore
//! let processor = ProcessorBuilder::new()
//!     .with_renderer(renderer)
//!     .with_config_file("reports.json")?
//!     .build()?;
//! let artifact = processor.process(&definition, &request, "Sales")?;
//! ```

mod builder;
mod json_report;
mod preview;
mod processor;

pub use builder::ProcessorBuilder;
pub use json_report::JsonReport;
pub use preview::{PreviewGate, PreviewOutcome, PreviewWindowOpener};
pub use processor::{DEFAULT_TITLE, ReportPipeline, ReportProcessor};

pub use quire_core::render::{
    Artifact, Disposition, DocumentRenderer, Orientation, PaperSize, RenderError, ViewData,
};
pub use quire_core::source::{
    Countable, InMemoryQuery, Materialized, QuerySource, Queryable, Record, SourceError,
};
pub use quire_core::{
    DEFAULT_RECORD_LIMIT, PipelineError, RenderMode, ReportDefinition, ReportError, ReportLimit,
    ReportRequest, ReportsConfig, RouteKey, RouteParam,
};
pub use quire_core::request::{PREVIEW_PARAM, STREAM_PARAM};
pub use quire_render_lopdf::LopdfRenderer;
