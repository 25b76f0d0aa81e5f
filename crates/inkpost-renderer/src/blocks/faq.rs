//! FAQ card stack: `[FAQ]` followed by `Q:` / `A:` pairs.
//!
//! Answers may span multiple lines and run until the next `Q:` line. The
//! whole region ends at the next heading, the next bracket tag, or end of
//! input — blank lines between pairs stay inside the region.

use std::fmt::Write;

use super::{BlockMatch, BlockMatcher};
use crate::line::{BlockTag, Line, LineKind};

/// Card accent colors, rotating with period 3.
const ACCENTS: [&str; 3] = ["#3498db", "#9b59b6", "#e67e22"];

pub(crate) struct FaqMatcher;

impl BlockMatcher for FaqMatcher {
    fn try_match(&self, lines: &[Line<'_>], at: usize) -> Option<BlockMatch> {
        if lines[at].kind != LineKind::Tag(BlockTag::Faq) {
            return None;
        }

        let mut end = at + 1;
        while end < lines.len()
            && lines[end].kind != LineKind::Heading
            && !matches!(lines[end].kind, LineKind::Tag(_))
        {
            end += 1;
        }

        let pairs = parse_pairs(&lines[at + 1..end]);
        if pairs.is_empty() {
            return None;
        }

        Some(BlockMatch {
            consumed: end - at,
            html: render(&pairs),
        })
    }
}

struct QaPair {
    question: String,
    answer: String,
}

fn parse_pairs(region: &[Line<'_>]) -> Vec<QaPair> {
    let mut pairs: Vec<QaPair> = Vec::new();
    let mut question: Option<String> = None;
    let mut answer: Vec<&str> = Vec::new();

    for ln in region {
        let trimmed = ln.raw.trim();
        if let Some(q) = trimmed.strip_prefix("Q:") {
            if let Some(prev) = question.take() {
                pairs.push(QaPair {
                    question: prev,
                    answer: answer.join(" "),
                });
                answer.clear();
            }
            question = Some(q.trim().to_owned());
        } else if let Some(a) = trimmed.strip_prefix("A:") {
            if question.is_some() {
                answer.push(a.trim());
            }
        } else if question.is_some() && !trimmed.is_empty() {
            // Continuation of a multi-line answer.
            answer.push(trimmed);
        }
    }
    if let Some(prev) = question {
        pairs.push(QaPair {
            question: prev,
            answer: answer.join(" "),
        });
    }

    pairs
}

fn render(pairs: &[QaPair]) -> String {
    let mut html = String::from(r#"<div style="margin: 25px 0;">"#);
    for (index, pair) in pairs.iter().enumerate() {
        let accent = ACCENTS[index % ACCENTS.len()];
        write!(
            html,
            r#"<div style="background: #f8f9fa; border-left: 4px solid {accent}; border-radius: 8px; padding: 18px 20px; margin: 15px 0;"><div style="color: {accent}; font-weight: 700; font-size: 17px; margin-bottom: 8px;">Q: {}</div><div style="color: #444; font-size: 16px; line-height: 1.8;">{}</div></div>"#,
            pair.question, pair.answer
        )
        .unwrap();
    }
    html.push_str("</div>");
    html
}
