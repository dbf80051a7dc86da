// src/processor.rs
use crate::builder::ProcessorBuilder;
use quire_core::render::{Artifact, DocumentRenderer};
use quire_core::request::{RenderMode, ReportRequest};
use quire_core::source::QuerySource;
use quire_core::{PipelineError, ReportDefinition, ReportLimit, build_payload, validation};
use std::sync::Arc;

/// Title used when the caller does not supply one.
pub const DEFAULT_TITLE: &str = "Report";

/// The operations [`crate::PreviewGate`] needs from a report processor.
pub trait ReportPipeline {
    /// Process a report request end to end and return the rendered artifact.
    fn process<D>(
        &self,
        definition: &D,
        request: &ReportRequest,
        title: &str,
    ) -> Result<Artifact, PipelineError>
    where
        D: ReportDefinition + ?Sized;

    /// Validate the size of a source against the current record limit.
    fn validate_query(&self, source: &QuerySource) -> Result<(), PipelineError>;
}

impl<P: ReportPipeline + ?Sized> ReportPipeline for &P {
    fn process<D>(
        &self,
        definition: &D,
        request: &ReportRequest,
        title: &str,
    ) -> Result<Artifact, PipelineError>
    where
        D: ReportDefinition + ?Sized,
    {
        (**self).process(definition, request, title)
    }

    fn validate_query(&self, source: &QuerySource) -> Result<(), PipelineError> {
        (**self).validate_query(source)
    }
}

/// Turns a report definition and a request into a rendered document.
///
/// The processor fetches the definition's source once, validates its size
/// when the definition asks for it, assembles the view data and hands it to
/// the injected [`DocumentRenderer`]. Requests carrying a `preview` or
/// `stream` parameter are rendered inline; everything else is rendered as a
/// download.
#[derive(Clone)]
pub struct ReportProcessor {
    renderer: Arc<dyn DocumentRenderer>,
    limit: ReportLimit,
}

impl ReportProcessor {
    /// Creates a processor with the default record limit.
    pub fn new<R: DocumentRenderer + 'static>(renderer: R) -> Self {
        Self::with_limit(Arc::new(renderer), ReportLimit::default())
    }

    pub(crate) fn with_limit(renderer: Arc<dyn DocumentRenderer>, limit: ReportLimit) -> Self {
        Self { renderer, limit }
    }

    pub fn builder() -> ProcessorBuilder {
        ProcessorBuilder::new()
    }

    /// The live record limit. Changes through this handle apply to the next
    /// validation.
    pub fn limit(&self) -> &ReportLimit {
        &self.limit
    }

    /// Process a report request (stream or download).
    pub fn process<D>(
        &self,
        definition: &D,
        request: &ReportRequest,
        title: &str,
    ) -> Result<Artifact, PipelineError>
    where
        D: ReportDefinition + ?Sized,
    {
        let source = definition.source(request)?;
        log::debug!(
            "Resolved {} source for view '{}'",
            source.kind(),
            definition.view_name()
        );

        if definition.requires_limit_check() {
            self.validate_query(&source)?;
        }

        let mode = RenderMode::for_request(request);
        self.render(definition, request, mode, Some(source), Some(title))
    }

    /// Validate the result size of `source` against the current limit.
    pub fn validate_query(&self, source: &QuerySource) -> Result<(), PipelineError> {
        validation::validate_query(source, self.limit.get())
    }

    /// Render inline, fetching the source afresh.
    pub fn stream<D>(&self, definition: &D, request: &ReportRequest) -> Result<Artifact, PipelineError>
    where
        D: ReportDefinition + ?Sized,
    {
        self.render(definition, request, RenderMode::Stream, None, None)
    }

    /// Render as an attachment, fetching the source afresh.
    pub fn download<D>(&self, definition: &D, request: &ReportRequest) -> Result<Artifact, PipelineError>
    where
        D: ReportDefinition + ?Sized,
    {
        self.render(definition, request, RenderMode::Download, None, None)
    }

    /// Materialize the data, build the payload and delegate to the renderer.
    ///
    /// A `source` already resolved by the caller is reused; otherwise the
    /// definition is asked for one.
    pub fn render<D>(
        &self,
        definition: &D,
        request: &ReportRequest,
        mode: RenderMode,
        source: Option<QuerySource>,
        title: Option<&str>,
    ) -> Result<Artifact, PipelineError>
    where
        D: ReportDefinition + ?Sized,
    {
        let source = match source {
            Some(source) => source,
            None => definition.source(request)?,
        };
        let data = source.materialize()?;
        log::debug!("Materialized {} record(s)", data.len());

        let payload = build_payload(definition, request, data, title.unwrap_or(DEFAULT_TITLE));
        let paper = definition.paper();
        let orientation = definition.orientation();
        let view = definition.view_name();
        let filename = definition.output_filename();

        log::info!("Rendering '{}' as {:?} to '{}'", view, mode, filename);
        let artifact = match mode {
            RenderMode::Stream => self.renderer.stream(view, &payload, &paper, orientation, filename)?,
            RenderMode::Download => self.renderer.download(view, &payload, &paper, orientation, filename)?,
        };
        Ok(artifact)
    }
}

impl ReportPipeline for ReportProcessor {
    fn process<D>(
        &self,
        definition: &D,
        request: &ReportRequest,
        title: &str,
    ) -> Result<Artifact, PipelineError>
    where
        D: ReportDefinition + ?Sized,
    {
        ReportProcessor::process(self, definition, request, title)
    }

    fn validate_query(&self, source: &QuerySource) -> Result<(), PipelineError> {
        ReportProcessor::validate_query(self, source)
    }
}
