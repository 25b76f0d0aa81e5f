//! Pipe tables with banded rows and a tinted header.
//!
//! Shape tolerance: column count comes from the header row; short data rows
//! are padded with empty cells and long rows are truncated, never rejected.

use std::fmt::Write;

use super::{BlockMatch, BlockMatcher};
use crate::line::{Line, LineKind};

const TABLE_STYLE: &str = "width: 100%; border-collapse: collapse; margin: 25px 0; font-size: 16px;";
const TH_STYLE: &str = "background: #e8f5e9; color: #2c3e50; font-weight: 700; padding: 12px 15px; border: 1px solid #ddd; text-align: left;";
const TD_STYLE: &str = "padding: 12px 15px; border: 1px solid #ddd; color: #444;";

pub(crate) struct TableMatcher;

impl BlockMatcher for TableMatcher {
    fn try_match(&self, lines: &[Line<'_>], at: usize) -> Option<BlockMatch> {
        if lines[at].kind != LineKind::TableRow {
            return None;
        }
        // Second line must be the dash/colon separator row.
        let separator = lines.get(at + 1)?;
        if separator.kind != LineKind::TableRow || !is_separator_row(separator.raw) {
            return None;
        }

        let mut end = at + 2;
        while end < lines.len() && lines[end].kind == LineKind::TableRow {
            end += 1;
        }

        let header = split_cells(lines[at].raw);
        let rows: Vec<Vec<String>> = lines[at + 2..end]
            .iter()
            .map(|ln| split_cells(ln.raw))
            .collect();

        Some(BlockMatch {
            consumed: end - at,
            html: render(&header, &rows),
        })
    }
}

/// A row made only of dashes, colons, pipes, and whitespace.
fn is_separator_row(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.contains('-') && trimmed.chars().all(|ch| matches!(ch, '-' | ':' | '|' | ' ' | '\t'))
}

/// Split a pipe row into trimmed cells, dropping the outer empty segments.
fn split_cells(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_owned()).collect()
}

fn render(header: &[String], rows: &[Vec<String>]) -> String {
    let mut html = format!(r#"<table style="{TABLE_STYLE}"><tr>"#);
    for cell in header {
        write!(html, r#"<th style="{TH_STYLE}">{cell}</th>"#).unwrap();
    }
    html.push_str("</tr>");
    for (index, row) in rows.iter().enumerate() {
        let band = if index % 2 == 0 { "#ffffff" } else { "#f9f9f9" };
        write!(html, r#"<tr style="background: {band};">"#).unwrap();
        for col in 0..header.len() {
            let cell = row.get(col).map_or("", String::as_str);
            write!(html, r#"<td style="{TD_STYLE}">{cell}</td>"#).unwrap();
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}
