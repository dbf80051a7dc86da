//! PDF report renderer using lopdf.
//!
//! Views are handlebars templates registered by name. A view renders to plain
//! text, which is paginated onto pages of the requested paper size and written
//! as a PDF with a standard Type1 font.

mod renderer;
mod writer;

pub use renderer::LopdfRenderer;
pub use writer::{PageLayout, TextPdfWriter};
