//! Blogger v3 REST API client.
//!
//! Sync `ureq`-based client for publishing posts. Authentication is the
//! OAuth2 refresh-token flow: every publish attempt exchanges the long-lived
//! refresh token for a fresh bearer token, so a run never starts with a
//! stale one. Implementing the rest of the OAuth protocol (consent flow,
//! token storage) is explicitly out of scope.

mod auth;
mod client;
mod error;
mod post;

pub use auth::Credentials;
pub use client::BloggerClient;
pub use error::BloggerError;
pub use post::{BlogInfo, NewPost, PublishedPost, featured_image_html};
