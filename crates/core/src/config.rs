//! Report configuration.
//!
//! The only setting is the record limit. [`ReportsConfig`] is what gets
//! loaded from disk; [`ReportLimit`] is the live, shared value processors
//! read on every validation.

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Maximum number of records a report may contain unless configured otherwise.
pub const DEFAULT_RECORD_LIMIT: usize = 1000;

/// Environment variable overriding the configured record limit.
pub const LIMIT_ENV_VAR: &str = "QUIRE_REPORT_LIMIT";

/// Report settings, typically loaded from a `reports.json` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportsConfig {
    /// The maximum number of records allowed in a report, to prevent memory
    /// exhaustion.
    pub limit: usize,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RECORD_LIMIT,
        }
    }
}

impl ReportsConfig {
    pub fn from_json_str(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json_str(&source)
    }

    /// Applies `QUIRE_REPORT_LIMIT` if it is set.
    pub fn with_env_overrides(self) -> Result<Self, PipelineError> {
        self.with_limit_override(std::env::var(LIMIT_ENV_VAR).ok().as_deref())
    }

    fn with_limit_override(mut self, raw: Option<&str>) -> Result<Self, PipelineError> {
        if let Some(raw) = raw {
            self.limit = raw.trim().parse().map_err(|_| {
                PipelineError::Config(format!(
                    "{} must be a non-negative integer, got '{}'",
                    LIMIT_ENV_VAR, raw
                ))
            })?;
            log::debug!("Record limit overridden from environment: {}", self.limit);
        }
        Ok(self)
    }
}

/// A shared, runtime-adjustable record limit.
///
/// Clones share the same value, so an operator can change the limit between
/// requests without rebuilding the processor.
#[derive(Debug, Clone)]
pub struct ReportLimit(Arc<AtomicUsize>);

impl ReportLimit {
    pub fn new(limit: usize) -> Self {
        Self(Arc::new(AtomicUsize::new(limit)))
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::Acquire)
    }

    pub fn set(&self, limit: usize) {
        log::info!("Record limit changed to {}", limit);
        self.0.store(limit, Ordering::Release);
    }
}

impl Default for ReportLimit {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_LIMIT)
    }
}

impl From<&ReportsConfig> for ReportLimit {
    fn from(config: &ReportsConfig) -> Self {
        Self::new(config.limit)
    }
}
