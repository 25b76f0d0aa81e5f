//! Info boxes: `[TIP]`, `[WARNING]`, `[BEST_PRACTICE]`, `[KEY_TAKEAWAY]`.
//!
//! All four kinds share one structural shape — icon + title + body in a
//! bordered, tinted container — and differ only in color theme and icon.

use std::fmt::Write;

use super::{BlockMatch, BlockMatcher};
use crate::line::{BlockTag, Line, LineKind};

// Stroke-based icons take their color from the title line via currentColor.
const ICON_TIP: &str = r#"<svg viewBox="0 0 16 16" width="15" height="15" style="vertical-align: -2px; margin-right: 7px;" aria-hidden="true"><path d="M8 1.5a4.3 4.3 0 0 0-2.3 7.9c.6.4 1 1 1.1 1.6h2.4c.1-.6.5-1.2 1.1-1.6A4.3 4.3 0 0 0 8 1.5Z" fill="none" stroke="currentColor" stroke-width="1.4"/><path d="M6.7 13h2.6M7.2 14.7h1.6" fill="none" stroke="currentColor" stroke-width="1.4" stroke-linecap="round"/></svg>"#;
const ICON_WARNING: &str = r#"<svg viewBox="0 0 16 16" width="15" height="15" style="vertical-align: -2px; margin-right: 7px;" aria-hidden="true"><path d="M8 2 1.8 13.2h12.4L8 2Z" fill="none" stroke="currentColor" stroke-width="1.4" stroke-linejoin="round"/><path d="M8 6.2v3.2M8 11.4v.2" fill="none" stroke="currentColor" stroke-width="1.4" stroke-linecap="round"/></svg>"#;
const ICON_CHECK: &str = r#"<svg viewBox="0 0 16 16" width="15" height="15" style="vertical-align: -2px; margin-right: 7px;" aria-hidden="true"><circle cx="8" cy="8" r="6.3" fill="none" stroke="currentColor" stroke-width="1.4"/><path d="M5.2 8.2 7.2 10.2 10.8 6" fill="none" stroke="currentColor" stroke-width="1.4" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;
const ICON_KEY: &str = r#"<svg viewBox="0 0 16 16" width="15" height="15" style="vertical-align: -2px; margin-right: 7px;" aria-hidden="true"><circle cx="5.5" cy="10.5" r="3" fill="none" stroke="currentColor" stroke-width="1.4"/><path d="M8 8.5 13.5 3M11.5 5l2 2M9.8 6.7l1.6 1.6" fill="none" stroke="currentColor" stroke-width="1.4" stroke-linecap="round"/></svg>"#;

/// Color theme and title for one info-box kind.
struct Theme {
    title: &'static str,
    icon: &'static str,
    accent: &'static str,
    tint: &'static str,
}

fn theme(tag: BlockTag) -> Option<Theme> {
    match tag {
        BlockTag::Tip => Some(Theme {
            title: "Pro Tip",
            icon: ICON_TIP,
            accent: "#4CAF50",
            tint: "#e8f5e9",
        }),
        BlockTag::Warning => Some(Theme {
            title: "Warning",
            icon: ICON_WARNING,
            accent: "#e67e22",
            tint: "#fff3e0",
        }),
        BlockTag::BestPractice => Some(Theme {
            title: "Best Practice",
            icon: ICON_CHECK,
            accent: "#2196F3",
            tint: "#e3f2fd",
        }),
        BlockTag::KeyTakeaway => Some(Theme {
            title: "Key Takeaway",
            icon: ICON_KEY,
            accent: "#9b59b6",
            tint: "#f3e5f5",
        }),
        _ => None,
    }
}

pub(crate) struct InfoBoxMatcher;

impl BlockMatcher for InfoBoxMatcher {
    fn try_match(&self, lines: &[Line<'_>], at: usize) -> Option<BlockMatch> {
        let LineKind::Tag(tag) = lines[at].kind else {
            return None;
        };
        let theme = theme(tag)?;

        // Region: following non-blank lines up to blank, next tag, or EOF.
        let mut end = at + 1;
        while end < lines.len()
            && lines[end].kind != LineKind::Blank
            && !matches!(lines[end].kind, LineKind::Tag(_))
        {
            end += 1;
        }
        if end == at + 1 {
            // Tag with no body stays literal.
            return None;
        }

        let body = lines[at + 1..end]
            .iter()
            .map(|ln| ln.raw.trim())
            .collect::<Vec<_>>()
            .join(" ");

        Some(BlockMatch {
            consumed: end - at,
            html: render(&theme, &body),
        })
    }
}

fn render(theme: &Theme, body: &str) -> String {
    let Theme { title, icon, accent, tint } = theme;
    let mut html = String::with_capacity(body.len() + 640);
    write!(
        html,
        r#"<div style="background: {tint}; border-left: 4px solid {accent}; border-radius: 8px; padding: 18px 20px; margin: 25px 0;">"#
    )
    .unwrap();
    write!(
        html,
        r#"<div style="color: {accent}; font-weight: 700; font-size: 16px; margin-bottom: 8px;">{icon}{title}</div>"#
    )
    .unwrap();
    write!(
        html,
        r#"<div style="color: #333; font-size: 16px; line-height: 1.8;">{body}</div></div>"#
    )
    .unwrap();
    html
}
