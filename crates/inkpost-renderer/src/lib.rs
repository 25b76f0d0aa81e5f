//! Markdown-to-styled-HTML rendering engine for blog posts.
//!
//! Blogger strips external stylesheets from post bodies, so every element is
//! emitted with inline styling. The input is Markdown plus a small set of
//! custom bracket tags (`[TIP]`, `[WARNING]`, `[BEST_PRACTICE]`,
//! `[KEY_TAKEAWAY]`, `[PROS]`/`[CONS]`, `[FAQ]`, `[TIMELINE]`) that render
//! as magazine-style blocks.
//!
//! # Architecture
//!
//! [`MarkupTransformer`] runs a fixed pipeline over the source text:
//!
//! 1. Fenced code blocks are extracted into an indexed arena and replaced
//!    with opaque placeholders, so no later stage can touch code content.
//! 2. Lines are classified and custom blocks are converted by a
//!    priority-ordered list of block matchers.
//! 3. Headings, emphasis, links, and lists are rewritten.
//! 4. Remaining bare text is wrapped into styled paragraphs.
//! 5. Code placeholders are spliced back and the fragment is wrapped in a
//!    single container `<div>`.
//!
//! The transformer is total: malformed custom markup degrades to literal
//! text, and no input — including the empty string — produces an error.
//!
//! # Example
//!
//! ```
//! use inkpost_renderer::render_html;
//!
//! let html = render_html("## Getting Started\n\nSome **bold** advice.");
//! assert!(html.contains("<h2"));
//! assert!(html.contains("<strong"));
//! ```

mod blocks;
mod fence;
mod inline;
mod line;
mod lists;
mod paragraph;
mod transformer;
mod util;

pub use transformer::{MarkupTransformer, render_html};
pub use util::escape_html;
