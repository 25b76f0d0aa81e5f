//! The markup transformation pipeline.

use crate::{blocks, fence, inline, lists, paragraph};

const CONTAINER_STYLE: &str = "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif; max-width: 100%; padding: 0;";

/// Markdown-to-styled-HTML transformer.
///
/// Stages run strictly in order; each stage's output feeds the next:
///
/// 1. Code fences are extracted into an arena behind opaque placeholders.
/// 2. Custom bracket-tag blocks and pipe tables are converted.
/// 3. Headings, emphasis, links, then lists are rewritten.
/// 4. Remaining bare text chunks become styled paragraphs.
/// 5. Placeholders are resolved and the fragment is wrapped in a container.
///
/// The transformer holds no state between calls and never fails: malformed
/// custom markup degrades to literal text.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkupTransformer;

impl MarkupTransformer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render a Markdown document into a single self-contained HTML fragment
    /// with inline styling, suitable for a blog post body.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let (text, code) = fence::extract(markdown);
        let text = blocks::convert(&text);
        let text = inline::convert_headings(&text);
        let text = inline::convert_emphasis(&text);
        let text = inline::convert_links(&text);
        let text = lists::convert(&text);
        let html = paragraph::wrap(&text);
        let html = code.restore(html);
        format!(r#"<div style="{CONTAINER_STYLE}">{html}</div>"#)
    }
}

/// Render with a default transformer.
#[must_use]
pub fn render_html(markdown: &str) -> String {
    MarkupTransformer::new().render(markdown)
}
