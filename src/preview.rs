//! Deferred rendering behind a client-side preview window.
//!
//! A UI that wants to show a report in a new window calls [`PreviewGate::process`]
//! from the triggering request. The gate validates the result size right away,
//! so the user learns about an empty or oversized report immediately, then asks
//! the client to open a window on the stream route instead of rendering inline.
//! The window's own request carries `preview=1` and goes straight through to
//! the processor.

use crate::processor::ReportPipeline;
use quire_core::render::{Artifact, ViewData};
use quire_core::request::{PREVIEW_PARAM, ReportRequest};
use quire_core::{PipelineError, ReportDefinition};
use serde_json::Value;

/// Client-notification side channel that opens a preview window.
pub trait PreviewWindowOpener {
    /// Ask the client to open `route` with `params` in a window titled `title`.
    fn open_preview_window(&self, route: &str, params: &ViewData, title: &str);
}

impl<O: PreviewWindowOpener + ?Sized> PreviewWindowOpener for &O {
    fn open_preview_window(&self, route: &str, params: &ViewData, title: &str) {
        (**self).open_preview_window(route, params, title)
    }
}

/// What the gate hands back to its caller.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewOutcome {
    /// The request already asked for a preview; here is the document.
    Document(Artifact),
    /// A preview window was requested; there is no body to return.
    NoContent,
}

impl PreviewOutcome {
    /// HTTP status matching the outcome.
    pub fn status(&self) -> u16 {
        match self {
            PreviewOutcome::Document(_) => 200,
            PreviewOutcome::NoContent => 204,
        }
    }

    pub fn into_artifact(self) -> Option<Artifact> {
        match self {
            PreviewOutcome::Document(artifact) => Some(artifact),
            PreviewOutcome::NoContent => None,
        }
    }
}

/// Wraps a report pipeline for UIs that show reports in a preview window.
pub struct PreviewGate<P, O> {
    pipeline: P,
    opener: O,
}

impl<P, O> PreviewGate<P, O>
where
    P: ReportPipeline,
    O: PreviewWindowOpener,
{
    pub fn new(pipeline: P, opener: O) -> Self {
        Self { pipeline, opener }
    }

    /// Render directly if the request wants a preview; otherwise validate and
    /// open a preview window on `route`.
    pub fn process<D>(
        &self,
        definition: &D,
        request: &ReportRequest,
        title: &str,
        route: &str,
        extra_params: &ViewData,
    ) -> Result<PreviewOutcome, PipelineError>
    where
        D: ReportDefinition + ?Sized,
    {
        if request.wants_stream() {
            let artifact = self.pipeline.process(definition, request, title)?;
            return Ok(PreviewOutcome::Document(artifact));
        }

        if definition.requires_limit_check() {
            self.pipeline.validate_query(&definition.source(request)?)?;
        }

        let params = preview_params(request, extra_params);
        log::info!("Opening preview window for route '{}' ({} param(s))", route, params.len());
        self.opener.open_preview_window(route, &params, title);

        Ok(PreviewOutcome::NoContent)
    }
}

/// Parameters for the follow-up preview request, later sources overriding
/// earlier ones: route parameters, query string, `extra_params`, then the
/// preview marker.
fn preview_params(request: &ReportRequest, extra_params: &ViewData) -> ViewData {
    let mut params = ViewData::new();

    for (key, param) in request.route_params().unwrap_or_default() {
        match param.safe_value() {
            Some(value) => {
                params.insert(key.clone(), value);
            }
            None => log::debug!("Dropping route parameter '{}' from preview params", key),
        }
    }
    params.extend(request.query().iter().map(|(k, v)| (k.clone(), v.clone())));
    params.extend(extra_params.iter().map(|(k, v)| (k.clone(), v.clone())));
    params.insert(PREVIEW_PARAM.to_string(), Value::from(1));

    params
}
