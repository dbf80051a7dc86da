use crate::artifact::Artifact;
use crate::error::RenderError;
use crate::paper::{Orientation, PaperSize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// The data bag handed to a view.
pub type ViewData = Map<String, Value>;

/// A backend that turns a named view and its data into a document.
///
/// Both methods take the same arguments; they differ only in the disposition
/// of the returned [`Artifact`].
pub trait DocumentRenderer: Send + Sync {
    /// Render for inline display.
    fn stream(
        &self,
        view: &str,
        data: &ViewData,
        paper: &PaperSize,
        orientation: Orientation,
        filename: &str,
    ) -> Result<Artifact, RenderError>;

    /// Render as an attachment.
    fn download(
        &self,
        view: &str,
        data: &ViewData,
        paper: &PaperSize,
        orientation: Orientation,
        filename: &str,
    ) -> Result<Artifact, RenderError>;
}

impl<R: DocumentRenderer + ?Sized> DocumentRenderer for Arc<R> {
    fn stream(
        &self,
        view: &str,
        data: &ViewData,
        paper: &PaperSize,
        orientation: Orientation,
        filename: &str,
    ) -> Result<Artifact, RenderError> {
        (**self).stream(view, data, paper, orientation, filename)
    }

    fn download(
        &self,
        view: &str,
        data: &ViewData,
        paper: &PaperSize,
        orientation: Orientation,
        filename: &str,
    ) -> Result<Artifact, RenderError> {
        (**self).download(view, data, paper, orientation, filename)
    }
}
