use lopdf::{Document as LopdfDocument, Object};

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// The raw content streams of every page, concatenated.
    pub fn content_text(&self) -> String {
        let mut text = String::new();
        for page_id in self.doc.get_pages().values() {
            if let Ok(content) = self.doc.get_page_content(*page_id) {
                text.push_str(&String::from_utf8_lossy(&content));
                text.push('\n');
            }
        }
        text
    }

    /// Width and height of the first page's MediaBox, in points.
    pub fn first_page_size(&self) -> Option<(f32, f32)> {
        let page_id = *self.doc.get_pages().values().next()?;
        let page = self.doc.get_object(page_id).ok()?.as_dict().ok()?;
        let media_box = page.get(b"MediaBox").ok()?.as_array().ok()?;
        Some((number(media_box.get(2)?)?, number(media_box.get(3)?)?))
    }

    /// The `Title` entry of the document information dictionary.
    pub fn title(&self) -> Option<String> {
        let info_id = self.doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
        let info = self.doc.get_object(info_id).ok()?.as_dict().ok()?;
        match info.get(b"Title").ok()? {
            Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }
}

fn number(object: &Object) -> Option<f32> {
    match object {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
