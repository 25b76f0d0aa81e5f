//! Blogger REST API client.

use std::time::Duration;

use tracing::{info, warn};
use ureq::Agent;

use crate::auth::{Credentials, default_token_url, refresh_access_token};
use crate::error::BloggerError;
use crate::post::{BlogInfo, NewPost, PublishedPost};

/// Default API base URL.
const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/blogger/v3";

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(10);

/// Blogger REST API client.
pub struct BloggerClient {
    agent: Agent,
    base_url: String,
    token_url: String,
    credentials: Credentials,
}

impl BloggerClient {
    /// Create a client from OAuth2 credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: DEFAULT_BASE_URL.to_owned(),
            token_url: default_token_url(),
            credentials,
        }
    }

    /// Override the API base URL (tests, proxies).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.base_url = self.base_url.trim_end_matches('/').to_owned();
        self
    }

    /// Override the OAuth token endpoint (tests).
    #[must_use]
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    pub(crate) fn posts_url(&self, blog_id: &str) -> String {
        format!("{}/blogs/{blog_id}/posts", self.base_url)
    }

    pub(crate) fn blog_url(&self, blog_id: &str) -> String {
        format!("{}/blogs/{blog_id}", self.base_url)
    }

    /// Publish a post, retrying transient failures.
    ///
    /// Each attempt exchanges the refresh token for a fresh bearer token.
    /// Client errors (4xx) abort immediately: retrying a rejected payload or
    /// bad credentials cannot succeed.
    ///
    /// # Errors
    ///
    /// Returns the final attempt's error when every attempt fails.
    pub fn publish(&self, blog_id: &str, post: &NewPost) -> Result<PublishedPost, BloggerError> {
        let mut attempt = 1;
        loop {
            info!(
                "publishing \"{}\" (attempt {attempt}/{MAX_ATTEMPTS})",
                post.title
            );
            match self.publish_once(blog_id, post) {
                Ok(published) => {
                    info!("post published: {}", published.url);
                    return Ok(published);
                }
                Err(err) if err.is_retryable() && attempt < MAX_ATTEMPTS => {
                    warn!("publish failed (attempt {attempt}/{MAX_ATTEMPTS}): {err}, retrying");
                    std::thread::sleep(RETRY_DELAY);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn publish_once(&self, blog_id: &str, post: &NewPost) -> Result<PublishedPost, BloggerError> {
        let access_token = refresh_access_token(&self.agent, &self.token_url, &self.credentials)?;

        let payload_bytes = serde_json::to_vec(post)?;

        let response = self
            .agent
            .post(&self.posts_url(blog_id))
            .header("Authorization", &format!("Bearer {access_token}"))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status >= 400 {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(BloggerError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(body.read_json()?)
    }

    /// Fetch blog metadata. Used by the setup check to verify credentials.
    ///
    /// # Errors
    ///
    /// Returns [`BloggerError::HttpResponse`] on a non-2xx status.
    pub fn get_blog(&self, blog_id: &str) -> Result<BlogInfo, BloggerError> {
        let access_token = refresh_access_token(&self.agent, &self.token_url, &self.credentials)?;

        let response = self
            .agent
            .get(&self.blog_url(blog_id))
            .header("Authorization", &format!("Bearer {access_token}"))
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status >= 400 {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(BloggerError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(body.read_json()?)
    }
}
