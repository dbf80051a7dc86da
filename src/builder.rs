// src/builder.rs
use crate::processor::ReportProcessor;
use quire_core::render::DocumentRenderer;
use quire_core::{PipelineError, ReportLimit, ReportsConfig};
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a `ReportProcessor`.
#[derive(Default)]
pub struct ProcessorBuilder {
    renderer: Option<Arc<dyn DocumentRenderer>>,
    config: ReportsConfig,
    shared_limit: Option<ReportLimit>,
}

impl ProcessorBuilder {
    /// Creates a new `ProcessorBuilder` with the default record limit and no renderer.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the renderer documents are handed to. Required.
    pub fn with_renderer<R: DocumentRenderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Sets the maximum number of records a limit-checked report may contain.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.config.limit = limit;
        self
    }

    pub fn with_config(mut self, config: ReportsConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads settings from a JSON config file, replacing any set so far.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        self.config = ReportsConfig::from_file(path)?;
        log::debug!("Loaded report config from '{}'", path.display());
        Ok(self)
    }

    /// Applies environment overrides to the settings gathered so far.
    pub fn with_env_overrides(mut self) -> Result<Self, PipelineError> {
        self.config = self.config.with_env_overrides()?;
        Ok(self)
    }

    /// Uses an existing limit handle, so several processors follow the same
    /// runtime setting. The handle is reset to the configured limit on build.
    pub fn with_shared_limit(mut self, limit: ReportLimit) -> Self {
        self.shared_limit = Some(limit);
        self
    }

    /// Consumes the builder and creates the `ReportProcessor`.
    pub fn build(self) -> Result<ReportProcessor, PipelineError> {
        let renderer = self.renderer.ok_or_else(|| {
            PipelineError::Config("No renderer has been configured. Use `with_renderer`.".to_string())
        })?;

        let limit = match self.shared_limit {
            Some(shared) => {
                shared.set(self.config.limit);
                shared
            }
            None => ReportLimit::from(&self.config),
        };
        log::info!("Building report processor with a record limit of {}.", limit.get());

        Ok(ReportProcessor::with_limit(renderer, limit))
    }
}
