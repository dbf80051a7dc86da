//! Core rendering abstractions for report documents.
//!
//! This crate provides the types shared by the report pipeline and its renderers:
//! - `DocumentRenderer` trait implemented by concrete rendering backends
//! - `Artifact` and `Disposition` describing the rendered output
//! - `PaperSize` and `Orientation` page settings
//! - Error types for rendering operations

mod artifact;
mod error;
mod paper;
mod traits;
pub mod utils;

pub use artifact::{Artifact, Disposition};
pub use error::RenderError;
pub use paper::{Orientation, PaperSize};
pub use traits::{DocumentRenderer, ViewData};
