use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use quire_render_core::utils::flip_y;
use quire_render_core::{Orientation, PaperSize, RenderError};

/// Page geometry used to paginate plain text, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub font_size: f32,
    pub line_height: f32,
}

impl PageLayout {
    pub fn new(paper: &PaperSize, orientation: Orientation, font_size: f32, margin: f32) -> Self {
        let (width, height) = paper.oriented_dimensions_pt(orientation);
        Self {
            width,
            height,
            margin,
            font_size,
            line_height: font_size * 1.4,
        }
    }

    pub fn lines_per_page(&self) -> usize {
        let usable = self.height - 2.0 * self.margin;
        ((usable / self.line_height).floor() as usize).max(1)
    }

    /// Approximate characters per line; a Helvetica glyph averages half an em.
    pub fn chars_per_line(&self) -> usize {
        let usable = self.width - 2.0 * self.margin;
        ((usable / (self.font_size * 0.5)).floor() as usize).max(1)
    }
}

/// Writes wrapped, paginated text as a PDF document.
pub struct TextPdfWriter {
    layout: PageLayout,
    base_font: String,
    title: Option<String>,
}

impl TextPdfWriter {
    pub fn new(layout: PageLayout, base_font: impl Into<String>) -> Self {
        Self {
            layout,
            base_font: base_font.into(),
            title: None,
        }
    }

    /// Set the `Title` entry of the document information dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Render `text` to PDF bytes. The document always has at least one page.
    pub fn write(&self, text: &str) -> Result<Vec<u8>, RenderError> {
        let lines = wrap_lines(text, self.layout.chars_per_line());
        let mut pages: Vec<&[String]> = lines.chunks(self.layout.lines_per_page()).collect();
        if pages.is_empty() {
            pages.push(&[]);
        }
        log::debug!(
            "Writing {} line(s) over {} page(s) at {}x{}pt",
            lines.len(),
            pages.len(),
            self.layout.width,
            self.layout.height
        );

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => self.base_font.clone(),
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let media_box: Vec<Object> = vec![
            0.into(),
            0.into(),
            self.layout.width.into(),
            self.layout.height.into(),
        ];

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for page_lines in &pages {
            let encoded = self.page_content(page_lines).encode().map_err(pdf_error)?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => media_box.clone(),
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let created = chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
        let mut info = dictionary! {
            "Producer" => Object::string_literal("quire"),
            "CreationDate" => Object::string_literal(created),
        };
        if let Some(title) = &self.title {
            info.set("Title", Object::string_literal(to_win_ansi(title)));
        }
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).map_err(pdf_error)?;
        Ok(bytes)
    }

    fn page_content(&self, lines: &[String]) -> Content {
        let top = flip_y(self.layout.margin + self.layout.font_size, self.layout.height);
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), self.layout.font_size.into()]),
            Operation::new("TL", vec![self.layout.line_height.into()]),
            Operation::new("Td", vec![self.layout.margin.into(), top.into()]),
        ];
        for line in lines {
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(to_win_ansi(line))],
            ));
            operations.push(Operation::new("T*", vec![]));
        }
        operations.push(Operation::new("ET", vec![]));
        Content { operations }
    }
}

fn pdf_error(err: impl std::fmt::Display) -> RenderError {
    RenderError::Pdf(err.to_string())
}

/// Greedy word wrap. Words longer than `width` are split hard; trailing
/// blank lines are dropped.
fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for raw in text.lines() {
        let expanded = raw.replace('\t', "    ");
        let line = expanded.trim_end();
        if line.chars().count() <= width {
            out.push(line.to_string());
            continue;
        }

        let mut current = String::new();
        for word in line.split(' ') {
            let word_len = word.chars().count();
            let current_len = current.chars().count();
            let needed = if current.is_empty() {
                word_len
            } else {
                current_len + 1 + word_len
            };
            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                continue;
            }

            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(width).peekable();
            while let Some(chunk) = chunks.next() {
                let piece: String = chunk.iter().collect();
                if chunks.peek().is_some() {
                    out.push(piece);
                } else {
                    current = piece;
                }
            }
        }
        if !current.is_empty() {
            out.push(current);
        }
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out
}

/// Encode for the standard fonts' WinAnsi encoding. Characters outside
/// Latin-1 become `?`; control characters are dropped.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .filter(|c| !c.is_control())
        .map(|c| if (c as u32) <= 0xFF { c as u32 as u8 } else { b'?' })
        .collect()
}
