//! Custom block conversion.
//!
//! Bracket-tagged regions and pipe tables are converted by a priority-ordered
//! list of matchers over the classified line stream. Each matcher either
//! consumes a span of lines and yields one rendered HTML block, or declines
//! and leaves the position untouched. Order is part of the contract: the
//! bullet-consuming pros/cons and FAQ matchers run before the timeline
//! matcher, which also consumes bullet lines.
//!
//! Every rendered block is a single line beginning with `<`, which is what
//! the paragraph stage uses to recognize already-converted content. A tag
//! that no matcher accepts stays in the text as literal lines.

mod faq;
mod info_box;
mod pros_cons;
mod table;
mod timeline;

use crate::line::{self, Line};

/// A successful block match: lines consumed and the rendered HTML.
pub(crate) struct BlockMatch {
    pub(crate) consumed: usize,
    pub(crate) html: String,
}

/// Try to match a block starting at `at` in the classified line stream.
pub(crate) trait BlockMatcher {
    fn try_match(&self, lines: &[Line<'_>], at: usize) -> Option<BlockMatch>;
}

/// Convert all custom blocks in the text, leaving other lines untouched.
pub(crate) fn convert(text: &str) -> String {
    let matchers: [&dyn BlockMatcher; 5] = [
        &info_box::InfoBoxMatcher,
        &table::TableMatcher,
        &pros_cons::ProsConsMatcher,
        &faq::FaqMatcher,
        &timeline::TimelineMatcher,
    ];

    let lines: Vec<Line<'_>> = text.lines().map(line::classify).collect();
    let mut output: Vec<String> = Vec::with_capacity(lines.len());
    let mut idx = 0;

    'scan: while idx < lines.len() {
        for matcher in matchers {
            if let Some(found) = matcher.try_match(&lines, idx) {
                output.push(found.html);
                idx += found.consumed;
                continue 'scan;
            }
        }
        output.push(lines[idx].raw.to_owned());
        idx += 1;
    }

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        let text = "just a line\n\nanother one";
        assert_eq!(convert(text), text);
    }

    #[test]
    fn test_block_html_is_single_line_starting_with_tag() {
        let html = convert("[TIP]\nStay safe.");
        assert!(html.starts_with('<'));
        assert!(!html.contains('\n'));
    }

    #[test]
    fn test_surrounding_text_preserved() {
        let html = convert("intro\n\n[TIP]\nBody.\n\noutro");
        assert!(html.starts_with("intro\n\n<div"));
        assert!(html.ends_with("\n\noutro"));
    }

    #[test]
    fn test_lone_cons_tag_stays_literal() {
        let html = convert("[CONS]\n- slow");
        assert!(html.contains("[CONS]"));
        assert!(html.contains("- slow"));
    }
}
