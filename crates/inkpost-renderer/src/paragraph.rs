//! Paragraph wrapping for remaining bare text.
//!
//! Every earlier stage emits blocks that begin with `<`, so a chunk that
//! does not is bare text and gets wrapped. Chunks that already start with a
//! tag pass through unchanged.

const PARAGRAPH_STYLE: &str =
    "line-height: 1.9; margin: 18px 0; color: #333; font-size: 17px; text-align: justify;";

/// Wrap blank-line-separated chunks of bare text in styled paragraphs.
pub(crate) fn wrap(text: &str) -> String {
    let mut wrapped: Vec<String> = Vec::new();
    for chunk in text.split("\n\n") {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        if chunk.starts_with('<') {
            wrapped.push(chunk.to_owned());
        } else {
            wrapped.push(format!(r#"<p style="{PARAGRAPH_STYLE}">{chunk}</p>"#));
        }
    }
    wrapped.join("\n\n")
}
