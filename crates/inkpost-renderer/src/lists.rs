//! Bullet and numbered list assembly.
//!
//! Sequential line scan with two mutually exclusive "open list" flags.
//! Switching item kind closes the previous list; any non-list line — and end
//! of input — closes whatever list is open, so the output always contains
//! balanced list tags.

use std::sync::LazyLock;

use regex::Regex;

const UL_STYLE: &str = "margin: 20px 0; padding-left: 35px; line-height: 1.9;";
const OL_STYLE: &str = "margin: 20px 0; padding-left: 35px; line-height: 1.9;";
const BULLET_ITEM_STYLE: &str = "margin: 10px 0; color: #444; font-size: 17px; list-style-type: disc;";
const NUMBERED_ITEM_STYLE: &str = "margin: 10px 0; color: #444; font-size: 17px;";

static NUMBERED_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());

/// Wrap consecutive list item lines in styled `<ul>`/`<ol>` containers.
pub(crate) fn convert(text: &str) -> String {
    let mut result: Vec<String> = Vec::new();
    let mut in_bullet = false;
    let mut in_numbered = false;

    for line in text.lines() {
        let stripped = line.trim();

        if stripped.starts_with("- ") || stripped.starts_with("* ") {
            if in_numbered {
                result.push("</ol>".to_owned());
                in_numbered = false;
            }
            if !in_bullet {
                result.push(format!(r#"<ul style="{UL_STYLE}">"#));
                in_bullet = true;
            }
            result.push(format!(r#"<li style="{BULLET_ITEM_STYLE}">{}</li>"#, &stripped[2..]));
        } else if NUMBERED_MARKER.is_match(stripped) {
            if in_bullet {
                result.push("</ul>".to_owned());
                in_bullet = false;
            }
            if !in_numbered {
                result.push(format!(r#"<ol style="{OL_STYLE}">"#));
                in_numbered = true;
            }
            let item = NUMBERED_MARKER.replace(stripped, "");
            result.push(format!(r#"<li style="{NUMBERED_ITEM_STYLE}">{item}</li>"#));
        } else {
            if in_bullet {
                result.push("</ul>".to_owned());
                in_bullet = false;
            }
            if in_numbered {
                result.push("</ol>".to_owned());
                in_numbered = false;
            }
            result.push(line.to_owned());
        }
    }

    if in_bullet {
        result.push("</ul>".to_owned());
    }
    if in_numbered {
        result.push("</ol>".to_owned());
    }

    result.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_list() {
        let html = convert("- one\n- two");
        assert_eq!(html.matches("<ul").count(), 1);
        assert_eq!(html.matches("</ul>").count(), 1);
        assert_eq!(html.matches("<li").count(), 2);
    }

    #[test]
    fn test_numbered_list() {
        let html = convert("1. first\n2. second");
        assert_eq!(html.matches("<ol").count(), 1);
        assert!(html.contains(">first</li>"));
        assert!(html.contains(">second</li>"));
    }

    #[test]
    fn test_switching_kind_closes_previous() {
        let html = convert("- bullet\n1. numbered");
        let close_ul = html.find("</ul>").unwrap();
        let open_ol = html.find("<ol").unwrap();
        assert!(close_ul < open_ol);
    }

    #[test]
    fn test_non_list_line_closes_open_list() {
        let html = convert("- item\nplain");
        assert!(html.contains("</ul>\nplain"));
    }

    #[test]
    fn test_list_closed_at_end_of_input() {
        let html = convert("text\n- trailing item");
        assert!(html.ends_with("</ul>"));
    }

    #[test]
    fn test_balanced_tags_for_mixed_input() {
        let html = convert("- a\n1. b\n- c\n2. d\nplain\n- e");
        assert_eq!(html.matches("<ul").count(), html.matches("</ul>").count());
        assert_eq!(html.matches("<ol").count(), html.matches("</ol>").count());
    }

    #[test]
    fn test_star_bullets() {
        let html = convert("* starred");
        assert!(html.contains(">starred</li>"));
    }

    #[test]
    fn test_non_list_text_unchanged() {
        assert_eq!(convert("just a line"), "just a line");
    }
}
