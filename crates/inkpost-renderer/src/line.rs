//! Line classification for block assembly.
//!
//! The block converter works over a classified line stream rather than raw
//! text, so region boundaries (blank line, next bracket tag, heading, end of
//! input) are explicit grammar rules instead of regex side effects.

/// Custom bracket tag kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BlockTag {
    Tip,
    Warning,
    BestPractice,
    KeyTakeaway,
    Pros,
    Cons,
    Faq,
    Timeline,
}

impl BlockTag {
    /// Parse a trimmed line consisting solely of a bracket tag.
    fn parse(trimmed: &str) -> Option<Self> {
        match trimmed {
            "[TIP]" => Some(Self::Tip),
            "[WARNING]" => Some(Self::Warning),
            "[BEST_PRACTICE]" => Some(Self::BestPractice),
            "[KEY_TAKEAWAY]" => Some(Self::KeyTakeaway),
            "[PROS]" => Some(Self::Pros),
            "[CONS]" => Some(Self::Cons),
            "[FAQ]" => Some(Self::Faq),
            "[TIMELINE]" => Some(Self::Timeline),
            _ => None,
        }
    }
}

/// Classified kind of a single source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineKind {
    Blank,
    Tag(BlockTag),
    Bullet,
    Numbered,
    TableRow,
    Heading,
    Text,
}

/// A source line paired with its classification.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Line<'a> {
    pub(crate) raw: &'a str,
    pub(crate) kind: LineKind,
}

impl<'a> Line<'a> {
    /// Content of a bullet line with the `- ` / `* ` marker stripped.
    ///
    /// Only meaningful for `LineKind::Bullet` lines. The result borrows from
    /// the source text, not from this `Line` value.
    pub(crate) fn bullet_text(&self) -> &'a str {
        &self.raw.trim()[2..]
    }
}

/// Classify a raw source line.
pub(crate) fn classify(raw: &str) -> Line<'_> {
    let trimmed = raw.trim();
    let kind = if trimmed.is_empty() {
        LineKind::Blank
    } else if let Some(tag) = BlockTag::parse(trimmed) {
        LineKind::Tag(tag)
    } else if trimmed.starts_with("- ") || trimmed.starts_with("* ") {
        LineKind::Bullet
    } else if is_numbered(trimmed) {
        LineKind::Numbered
    } else if trimmed.starts_with('|') {
        LineKind::TableRow
    } else if trimmed.starts_with('#') {
        LineKind::Heading
    } else {
        LineKind::Text
    };
    Line { raw, kind }
}

/// `1. `, `23. `, ... — digits, a dot, then whitespace.
fn is_numbered(trimmed: &str) -> bool {
    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    let mut rest = trimmed.chars().skip(digits);
    rest.next() == Some('.') && rest.next().is_some_and(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_blank() {
        assert_eq!(classify("").kind, LineKind::Blank);
        assert_eq!(classify("   ").kind, LineKind::Blank);
    }

    #[test]
    fn test_classify_tags() {
        assert_eq!(classify("[TIP]").kind, LineKind::Tag(BlockTag::Tip));
        assert_eq!(classify("  [WARNING]  ").kind, LineKind::Tag(BlockTag::Warning));
        assert_eq!(classify("[BEST_PRACTICE]").kind, LineKind::Tag(BlockTag::BestPractice));
        assert_eq!(classify("[KEY_TAKEAWAY]").kind, LineKind::Tag(BlockTag::KeyTakeaway));
        assert_eq!(classify("[PROS]").kind, LineKind::Tag(BlockTag::Pros));
        assert_eq!(classify("[CONS]").kind, LineKind::Tag(BlockTag::Cons));
        assert_eq!(classify("[FAQ]").kind, LineKind::Tag(BlockTag::Faq));
        assert_eq!(classify("[TIMELINE]").kind, LineKind::Tag(BlockTag::Timeline));
    }

    #[test]
    fn test_unknown_tag_is_text() {
        assert_eq!(classify("[UNKNOWN]").kind, LineKind::Text);
        // A tag with trailing content is not a tag line
        assert_eq!(classify("[TIP] inline").kind, LineKind::Text);
    }

    #[test]
    fn test_classify_bullets() {
        assert_eq!(classify("- item").kind, LineKind::Bullet);
        assert_eq!(classify("* item").kind, LineKind::Bullet);
        assert_eq!(classify("-no space").kind, LineKind::Text);
    }

    #[test]
    fn test_classify_numbered() {
        assert_eq!(classify("1. first").kind, LineKind::Numbered);
        assert_eq!(classify("42. answer").kind, LineKind::Numbered);
        assert_eq!(classify("1.no space").kind, LineKind::Text);
        assert_eq!(classify("1) paren").kind, LineKind::Text);
    }

    #[test]
    fn test_classify_table_and_heading() {
        assert_eq!(classify("| A | B |").kind, LineKind::TableRow);
        assert_eq!(classify("## Section").kind, LineKind::Heading);
    }

    #[test]
    fn test_bullet_text() {
        assert_eq!(classify("- item text").bullet_text(), "item text");
        assert_eq!(classify("  * spaced").bullet_text(), "spaced");
    }
}
