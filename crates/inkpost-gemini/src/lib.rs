//! Generative-text API client for inkpost.
//!
//! Talks to the Gemini `generateContent` REST endpoint with a sync `ureq`
//! agent. [`GeminiClient`] is the thin wire-level client;
//! [`ArticleGenerator`] layers the blog-article workflow on top: prompt
//! assembly, retry with linear delay, response cleanup, and a continuation
//! request when the model stops mid-article.

mod article;
mod client;
mod error;

pub use article::{ArticleGenerator, ArticleRequest};
pub use client::{GeminiClient, GenerationConfig};
pub use error::GeminiError;
