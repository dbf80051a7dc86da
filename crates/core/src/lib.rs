//! # quire-core
//!
//! Platform-agnostic report pipeline core.
//!
//! This crate provides the building blocks the report processor is made of:
//! - **definition**: the `ReportDefinition` contract supplied by report authors
//! - **request**: the read-only inbound request and its route parameters
//! - **validation**: record counting and the empty / over-limit checks
//! - **payload**: assembly of the data bag handed to the renderer
//! - **config**: the record limit and its shared runtime handle
//! - **error**: error types for the pipeline
//!
//! ## Design Principle
//!
//! Nothing here talks to a database, a renderer or the filesystem beyond
//! loading configuration. Data sources and renderers come in through the
//! `quire-source` and `quire-render-core` traits.

// Re-export foundation crates
pub use quire_render_core as render;
pub use quire_source as source;

pub mod config;
pub mod definition;
pub mod error;
pub mod payload;
pub mod request;
pub mod validation;

pub use config::{DEFAULT_RECORD_LIMIT, ReportLimit, ReportsConfig};
pub use definition::ReportDefinition;
pub use error::{PipelineError, ReportError};
pub use payload::build_payload;
pub use request::{RenderMode, ReportRequest, RouteKey, RouteParam};
pub use validation::{count_records, format_grouped, validate_query};

// Re-export commonly used types from foundation crates
pub use render::{Artifact, Disposition, DocumentRenderer, Orientation, PaperSize, RenderError, ViewData};
pub use source::{Countable, InMemoryQuery, Materialized, QuerySource, Queryable, Record, SourceError};
