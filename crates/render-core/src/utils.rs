/// Convert a top-down layout Y coordinate to a PDF Y coordinate (flip origin).
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Quote a filename for use in a `Content-Disposition` header value.
pub fn quote_filename(filename: &str) -> String {
    let mut quoted = String::with_capacity(filename.len() + 2);
    quoted.push('"');
    for c in filename.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\r' | '\n' => {}
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
