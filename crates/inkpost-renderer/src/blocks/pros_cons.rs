//! Pros/cons comparison grid.
//!
//! The match is atomic: `[PROS]` bullets must be followed (with at most one
//! blank line between) by `[CONS]` bullets, or nothing converts and the tags
//! remain visible as literal text.

use std::fmt::Write;

use super::{BlockMatch, BlockMatcher};
use crate::line::{BlockTag, Line, LineKind};

const GRID_STYLE: &str = "display: grid; grid-template-columns: 1fr 1fr; gap: 20px; margin: 25px 0;";
const LIST_STYLE: &str = "margin: 0; padding-left: 20px;";
const ITEM_STYLE: &str = "margin: 8px 0; color: #333; font-size: 16px; line-height: 1.7;";

pub(crate) struct ProsConsMatcher;

impl BlockMatcher for ProsConsMatcher {
    fn try_match(&self, lines: &[Line<'_>], at: usize) -> Option<BlockMatch> {
        if lines[at].kind != LineKind::Tag(BlockTag::Pros) {
            return None;
        }

        let mut idx = at + 1;
        let pros = collect_bullets(lines, &mut idx);
        if pros.is_empty() {
            return None;
        }
        // Allow a single blank line before [CONS].
        if lines.get(idx).is_some_and(|ln| ln.kind == LineKind::Blank) {
            idx += 1;
        }
        if lines.get(idx).map(|ln| ln.kind) != Some(LineKind::Tag(BlockTag::Cons)) {
            return None;
        }
        idx += 1;
        let cons = collect_bullets(lines, &mut idx);
        if cons.is_empty() {
            return None;
        }

        Some(BlockMatch {
            consumed: idx - at,
            html: render(&pros, &cons),
        })
    }
}

fn collect_bullets<'a>(lines: &[Line<'a>], idx: &mut usize) -> Vec<&'a str> {
    let mut items = Vec::new();
    while *idx < lines.len() && lines[*idx].kind == LineKind::Bullet {
        items.push(lines[*idx].bullet_text());
        *idx += 1;
    }
    items
}

fn render(pros: &[&str], cons: &[&str]) -> String {
    let mut html = format!(r#"<div style="{GRID_STYLE}">"#);
    html.push_str(&column("Pros", "#2e7d32", "#e8f5e9", pros));
    html.push_str(&column("Cons", "#c62828", "#ffebee", cons));
    html.push_str("</div>");
    html
}

fn column(title: &str, accent: &str, tint: &str, items: &[&str]) -> String {
    let mut html = format!(r#"<div style="background: {tint}; border-radius: 8px; padding: 20px;">"#);
    write!(
        html,
        r#"<div style="color: {accent}; font-weight: 700; font-size: 17px; margin-bottom: 12px;">{title}</div>"#
    )
    .unwrap();
    write!(html, r#"<ul style="{LIST_STYLE}">"#).unwrap();
    for item in items {
        write!(html, r#"<li style="{ITEM_STYLE}">{item}</li>"#).unwrap();
    }
    html.push_str("</ul></div>");
    html
}
