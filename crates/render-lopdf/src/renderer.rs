use crate::writer::{PageLayout, TextPdfWriter};
use handlebars::Handlebars;
use quire_render_core::{
    Artifact, Disposition, DocumentRenderer, Orientation, PaperSize, RenderError, ViewData,
};
use std::fs;
use std::path::Path;

const DEFAULT_FONT: &str = "Helvetica";
const DEFAULT_FONT_SIZE: f32 = 10.0;
const DEFAULT_MARGIN: f32 = 50.0;

/// A [`DocumentRenderer`] that renders handlebars views to PDF with `lopdf`.
pub struct LopdfRenderer {
    views: Handlebars<'static>,
    base_font: String,
    font_size: f32,
    margin: f32,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        let mut views = Handlebars::new();
        views.set_strict_mode(true);
        views.register_escape_fn(handlebars::no_escape);
        Self {
            views,
            base_font: DEFAULT_FONT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl LopdfRenderer {
    pub fn new() -> Self {
        Default::default()
    }

    /// Registers a view from a handlebars template string.
    pub fn register_view(&mut self, name: &str, template: &str) -> Result<(), RenderError> {
        self.views.register_template_string(name, template)?;
        log::debug!("Registered view '{}'", name);
        Ok(())
    }

    /// Registers a view from a handlebars template file.
    pub fn register_view_file<P: AsRef<Path>>(&mut self, name: &str, path: P) -> Result<(), RenderError> {
        let path = path.as_ref();
        let template = fs::read_to_string(path).map_err(|e| {
            RenderError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read view from '{}': {}", path.display(), e),
            ))
        })?;
        self.register_view(name, &template)
    }

    pub fn has_view(&self, name: &str) -> bool {
        self.views.has_template(name)
    }

    /// Selects one of the 14 standard PDF fonts (e.g. "Courier").
    pub fn with_font(mut self, base_font: impl Into<String>) -> Self {
        self.base_font = base_font.into();
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    fn render_document(
        &self,
        view: &str,
        data: &ViewData,
        paper: &PaperSize,
        orientation: Orientation,
        filename: &str,
        disposition: Disposition,
    ) -> Result<Artifact, RenderError> {
        if !self.has_view(view) {
            return Err(RenderError::UnknownView(view.to_string()));
        }
        let text = self.views.render(view, data)?;
        let layout = PageLayout::new(paper, orientation, self.font_size, self.margin);
        let bytes = TextPdfWriter::new(layout, self.base_font.clone())
            .with_title(filename)
            .write(&text)?;
        log::info!(
            "Rendered view '{}' as {} '{}' ({} bytes, {} {})",
            view,
            disposition.as_str(),
            filename,
            bytes.len(),
            paper,
            orientation
        );
        Ok(Artifact::new(bytes, filename, disposition))
    }
}

impl DocumentRenderer for LopdfRenderer {
    fn stream(
        &self,
        view: &str,
        data: &ViewData,
        paper: &PaperSize,
        orientation: Orientation,
        filename: &str,
    ) -> Result<Artifact, RenderError> {
        self.render_document(view, data, paper, orientation, filename, Disposition::Inline)
    }

    fn download(
        &self,
        view: &str,
        data: &ViewData,
        paper: &PaperSize,
        orientation: Orientation,
        filename: &str,
    ) -> Result<Artifact, RenderError> {
        self.render_document(view, data, paper, orientation, filename, Disposition::Attachment)
    }
}
