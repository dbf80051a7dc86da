use crate::utils::quote_filename;
use serde::Serialize;

/// How a client should present the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Displayed in place (stream mode).
    Inline,
    /// Saved as a file (download mode).
    Attachment,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Inline => "inline",
            Disposition::Attachment => "attachment",
        }
    }
}

/// A rendered document, ready to be returned to the caller.
///
/// Artifacts are always PDF documents; renderers producing other formats
/// are not supported.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub disposition: Disposition,
}

impl Artifact {
    pub fn new(bytes: Vec<u8>, filename: impl Into<String>, disposition: Disposition) -> Self {
        Self {
            bytes,
            filename: filename.into(),
            disposition,
        }
    }

    /// Always `application/pdf`.
    pub fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    /// The `Content-Disposition` header value for this artifact.
    pub fn content_disposition(&self) -> String {
        format!(
            "{}; filename={}",
            self.disposition.as_str(),
            quote_filename(&self.filename)
        )
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
