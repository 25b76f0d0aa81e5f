//! Vertical timeline: `[TIMELINE]` followed by bullet entries.
//!
//! Entry syntax is `<title> - <description>`; the ` - ` separator is
//! optional and its absence means the entry has no description.

use std::fmt::Write;

use super::{BlockMatch, BlockMatcher};
use crate::line::{BlockTag, Line, LineKind};

/// Marker colors, rotating with period 3.
const MARKERS: [&str; 3] = ["#3498db", "#4CAF50", "#e67e22"];

const RAIL_STYLE: &str = "border-left: 3px solid #3498db; margin: 25px 0 25px 10px; padding-left: 25px;";
const TITLE_STYLE: &str = "color: #2c3e50; font-weight: 700; font-size: 16px;";
const DESCRIPTION_STYLE: &str = "color: #666; font-size: 15px; margin-top: 4px;";

pub(crate) struct TimelineMatcher;

impl BlockMatcher for TimelineMatcher {
    fn try_match(&self, lines: &[Line<'_>], at: usize) -> Option<BlockMatch> {
        if lines[at].kind != LineKind::Tag(BlockTag::Timeline) {
            return None;
        }

        let mut idx = at + 1;
        let mut entries = Vec::new();
        while idx < lines.len() && lines[idx].kind == LineKind::Bullet {
            entries.push(parse_entry(lines[idx].bullet_text()));
            idx += 1;
        }
        if entries.is_empty() {
            return None;
        }

        Some(BlockMatch {
            consumed: idx - at,
            html: render(&entries),
        })
    }
}

struct Entry {
    title: String,
    description: Option<String>,
}

fn parse_entry(text: &str) -> Entry {
    match text.split_once(" - ") {
        Some((title, description)) => Entry {
            title: title.trim().to_owned(),
            description: Some(description.trim().to_owned()),
        },
        None => Entry {
            title: text.trim().to_owned(),
            description: None,
        },
    }
}

fn render(entries: &[Entry]) -> String {
    let mut html = format!(r#"<div style="{RAIL_STYLE}">"#);
    for (index, entry) in entries.iter().enumerate() {
        let marker = MARKERS[index % MARKERS.len()];
        write!(
            html,
            r#"<div style="position: relative; margin-bottom: 20px;"><span style="position: absolute; left: -32px; top: 4px; width: 12px; height: 12px; border-radius: 50%; background: {marker};"></span><div style="{TITLE_STYLE}">{}</div>"#,
            entry.title
        )
        .unwrap();
        if let Some(description) = &entry.description {
            write!(html, r#"<div style="{DESCRIPTION_STYLE}">{description}</div>"#).unwrap();
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use crate::blocks::convert;

    #[test]
    fn test_timeline_entries() {
        let html = convert("[TIMELINE]\n- 2009: Launch - First release\n- 2015: Upgrade");
        assert_eq!(html.matches("position: relative").count(), 2);
        assert!(html.contains(">2009: Launch</div>"));
        assert!(html.contains(">First release</div>"));
        assert!(html.contains(">2015: Upgrade</div>"));
        assert!(!html.contains("[TIMELINE]"));
    }

    #[test]
    fn test_entry_without_separator_has_no_description() {
        let html = convert("[TIMELINE]\n- 2015: Upgrade");
        assert!(!html.contains("margin-top: 4px"));
    }

    #[test]
    fn test_marker_rotation_period_three() {
        let html = convert("[TIMELINE]\n- a\n- b\n- c\n- d");
        // Rail is #3498db; first and fourth markers reuse it.
        assert_eq!(html.matches("background: #3498db").count(), 2);
        assert_eq!(html.matches("background: #4CAF50").count(), 1);
        assert_eq!(html.matches("background: #e67e22").count(), 1);
    }

    #[test]
    fn test_entries_stop_at_non_bullet() {
        let html = convert("[TIMELINE]\n- 2009: Launch\nplain text");
        assert!(html.contains(">2009: Launch</div>"));
        assert!(html.ends_with("plain text"));
    }

    #[test]
    fn test_tag_without_bullets_stays_literal() {
        let html = convert("[TIMELINE]\nno entries");
        assert!(html.contains("[TIMELINE]"));
    }
}
