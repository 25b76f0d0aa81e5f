//! Code-fence extraction and restoration.
//!
//! Fenced code blocks are pulled out before any other stage runs and
//! replaced with HTML-comment placeholders, so the block/emphasis/paragraph
//! rewrites can never touch code content. The rendered blocks live in an
//! indexed arena and are spliced back in as the final pipeline step.

use std::fmt::Write;

use crate::util::escape_html;

const CONTAINER_STYLE: &str =
    "background: #282c34; border-radius: 8px; padding: 18px 20px; margin: 25px 0; overflow-x: auto;";
const LANG_STYLE: &str = "color: #7f8c8d; font-size: 12px; font-weight: 600; text-transform: uppercase; letter-spacing: 1px; margin-bottom: 10px;";
const PRE_STYLE: &str = "margin: 0; font-family: 'Courier New', Consolas, Monaco, monospace; font-size: 14px; line-height: 1.6; color: #abb2bf; white-space: pre;";

/// Arena of rendered code blocks, addressed by placeholder index.
#[derive(Debug, Default)]
pub(crate) struct CodeArena {
    blocks: Vec<String>,
}

impl CodeArena {
    /// Placeholder token for an arena slot. HTML-comment-shaped so it starts
    /// with `<` (the paragraph stage passes it through) and carries an index
    /// no literal source text can collide with.
    fn placeholder(index: usize) -> String {
        format!("<!--inkpost:code:{index}-->")
    }

    fn insert(&mut self, html: String) -> String {
        let token = Self::placeholder(self.blocks.len());
        self.blocks.push(html);
        token
    }

    /// Substitute every placeholder back with its rendered block.
    pub(crate) fn restore(&self, html: String) -> String {
        let mut restored = html;
        for (index, block) in self.blocks.iter().enumerate() {
            restored = restored.replace(&Self::placeholder(index), block);
        }
        restored
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.blocks.len()
    }
}

/// Extract fenced code blocks, returning the protected text and the arena.
///
/// A fence opens with a line starting (after indentation) with three
/// backticks, optionally followed by a language tag, and closes at the next
/// line starting with three backticks. An opener with no closer before end
/// of input is left in place as literal text.
pub(crate) fn extract(input: &str) -> (String, CodeArena) {
    let mut arena = CodeArena::default();
    let lines: Vec<&str> = input.lines().collect();
    let mut output: Vec<String> = Vec::with_capacity(lines.len());
    let mut idx = 0;

    while idx < lines.len() {
        let line = lines[idx];
        if let Some(lang) = fence_opener(line) {
            if let Some(close) = find_closer(&lines, idx + 1) {
                let body = lines[idx + 1..close].join("\n");
                output.push(arena.insert(render_code_block(lang, &body)));
                idx = close + 1;
                continue;
            }
        }
        output.push(line.to_owned());
        idx += 1;
    }

    (output.join("\n"), arena)
}

/// Language tag of a fence opener line, or `None` if the line is not one.
fn fence_opener(line: &str) -> Option<&str> {
    line.trim().strip_prefix("```").map(str::trim)
}

/// Index of the next closing fence line at or after `from`.
fn find_closer(lines: &[&str], from: usize) -> Option<usize> {
    (from..lines.len()).find(|&idx| lines[idx].trim().starts_with("```"))
}

fn render_code_block(lang: &str, body: &str) -> String {
    let mut block = String::with_capacity(body.len() + 256);
    write!(block, r#"<div style="{CONTAINER_STYLE}">"#).unwrap();
    if !lang.is_empty() {
        write!(block, r#"<div style="{LANG_STYLE}">{}</div>"#, escape_html(lang)).unwrap();
    }
    write!(block, r#"<pre style="{PRE_STYLE}">{}</pre></div>"#, escape_html(body)).unwrap();
    block
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_extract_single_fence() {
        let (text, arena) = extract("before\n```rust\nfn main() {}\n```\nafter");
        assert_eq!(arena.len(), 1);
        assert_eq!(text, "before\n<!--inkpost:code:0-->\nafter");
    }

    #[test]
    fn test_extract_keeps_body_verbatim() {
        let (_, arena) = extract("```\n**not bold**\n- not a list\n```");
        let restored = arena.restore("<!--inkpost:code:0-->".to_owned());
        assert!(restored.contains("**not bold**"));
        assert!(restored.contains("- not a list"));
    }

    #[test]
    fn test_extract_escapes_html() {
        let (text, arena) = extract("```\nif a < b && c > d {}\n```");
        let restored = arena.restore(text);
        assert!(restored.contains("if a &lt; b &amp;&amp; c &gt; d {}"));
    }

    #[test]
    fn test_extract_language_label() {
        let (text, arena) = extract("```python\nprint('hi')\n```");
        let restored = arena.restore(text);
        assert!(restored.contains(">python</div>"));
        assert!(restored.contains("print('hi')"));
    }

    #[test]
    fn test_no_backticks_left_after_extraction() {
        let (text, _) = extract("```python\nx = 1\n```\n\n```\ny = 2\n```");
        assert!(!text.contains("```"));
    }

    #[test]
    fn test_unclosed_fence_stays_literal() {
        let (text, arena) = extract("```rust\nlet x = 1;");
        assert_eq!(arena.len(), 0);
        assert_eq!(text, "```rust\nlet x = 1;");
    }

    #[test]
    fn test_multiple_fences_restore_in_order() {
        let (text, arena) = extract("```\nfirst\n```\nmiddle\n```\nsecond\n```");
        assert_eq!(arena.len(), 2);
        let restored = arena.restore(text);
        let first = restored.find("first").unwrap();
        let second = restored.find("second").unwrap();
        assert!(first < second);
        assert!(!restored.contains("<!--inkpost:code:"));
    }

    #[test]
    fn test_empty_fence_body() {
        let (text, arena) = extract("```\n```");
        assert_eq!(arena.len(), 1);
        assert_eq!(text, "<!--inkpost:code:0-->");
    }
}
