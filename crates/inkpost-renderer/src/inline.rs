//! Heading, emphasis, and link rewrites for standard Markdown.
//!
//! Headings are substituted most-specific-first (`######` before `#`) so a
//! shorter pattern can never fire inside a longer marker. Levels 1-3 are
//! real heading tags with border accents; levels 4-6 are emphasized `<div>`
//! blocks with a leading bullet glyph.

use std::sync::LazyLock;

use regex::Regex;

static H6: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^###### •?\s*(.+)$").unwrap());
static H5: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^##### •?\s*(.+)$").unwrap());
static H4: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#### •?\s*(.+)$").unwrap());
static H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.+)$").unwrap());
static H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.+)$").unwrap());
static H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());

const H6_SUB: &str = r#"<div style="color: #34495e; font-size: 16px; font-weight: 600; margin: 18px 0 10px 20px; line-height: 1.4;"><span style="color: #3498db; margin-right: 8px;">•</span>${1}</div>"#;
const H5_SUB: &str = r#"<div style="color: #34495e; font-size: 17px; font-weight: 600; margin: 20px 0 12px 15px; line-height: 1.4;"><span style="color: #3498db; margin-right: 8px;">•</span>${1}</div>"#;
const H4_SUB: &str = r#"<div style="color: #2c3e50; font-size: 18px; font-weight: 600; margin: 22px 0 12px 10px; line-height: 1.4;"><span style="color: #4CAF50; margin-right: 8px;">•</span>${1}</div>"#;
const H3_SUB: &str = r#"<h3 style="color: #2c3e50; font-size: 22px; font-weight: 600; margin: 28px 0 15px 0; line-height: 1.4; border-left: 4px solid #3498db; padding-left: 15px;">${1}</h3>"#;
const H2_SUB: &str = r#"<h2 style="color: #1a1a1a; font-size: 28px; font-weight: 700; margin: 35px 0 20px 0; padding-bottom: 12px; border-bottom: 3px solid #4CAF50; line-height: 1.3;">${1}</h2>"#;
const H1_SUB: &str = r#"<h1 style="color: #1a1a1a; font-size: 32px; font-weight: 800; margin: 40px 0 25px 0;">${1}</h1>"#;

// A line-leading `**label**:` is a block label; everything else is plain
// inline bold. The label rewrite must run before the generic bold one.
static BOLD_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\*\*([^*\n]+?)\*\*:[ \t]*").unwrap());
static BOLD_STARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static BOLD_UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.+?)__").unwrap());
static ITALIC_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+?)\*").unwrap());
static ITALIC_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_([^_]+?)_").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap());

const BOLD_LABEL_SUB: &str = r#"<strong style="display: block; color: #1a1a1a; font-size: 18px; font-weight: 700; margin: 22px 0 10px 0;">${1}:</strong>"#;
const BOLD_SUB: &str = r#"<strong style="color: #2196F3; font-weight: 600;">${1}</strong>"#;
const ITALIC_SUB: &str = r#"<em style="color: #555;">${1}</em>"#;
const LINK_SUB: &str = r#"<a href="${2}" style="color: #3498db; text-decoration: none; border-bottom: 2px solid #3498db;">${1}</a>"#;

/// Convert heading lines, most specific level first.
pub(crate) fn convert_headings(text: &str) -> String {
    let text = H6.replace_all(text, H6_SUB);
    let text = H5.replace_all(&text, H5_SUB);
    let text = H4.replace_all(&text, H4_SUB);
    let text = H3.replace_all(&text, H3_SUB);
    let text = H2.replace_all(&text, H2_SUB);
    H1.replace_all(&text, H1_SUB).into_owned()
}

/// Convert bold and italic spans, and the line-leading bold-label variant.
pub(crate) fn convert_emphasis(text: &str) -> String {
    let text = BOLD_LABEL.replace_all(text, BOLD_LABEL_SUB);
    let text = BOLD_STARS.replace_all(&text, BOLD_SUB);
    let text = BOLD_UNDERSCORES.replace_all(&text, BOLD_SUB);
    let text = ITALIC_STAR.replace_all(&text, ITALIC_SUB);
    ITALIC_UNDERSCORE.replace_all(&text, ITALIC_SUB).into_owned()
}

/// Convert `[text](url)` links.
pub(crate) fn convert_links(text: &str) -> String {
    LINK.replace_all(text, LINK_SUB).into_owned()
}
