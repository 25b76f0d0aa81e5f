//! OAuth2 refresh-token exchange.

use serde::Deserialize;
use tracing::debug;
use ureq::Agent;

use crate::error::BloggerError;

/// Google OAuth2 token endpoint.
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// OAuth2 client credentials plus the long-lived refresh token.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// OAuth2 client ID.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
}

/// Exchange the refresh token for a fresh bearer token.
pub(crate) fn refresh_access_token(
    agent: &Agent,
    token_url: &str,
    credentials: &Credentials,
) -> Result<String, BloggerError> {
    debug!("refreshing OAuth access token");

    let response = agent.post(token_url).send_form([
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("refresh_token", credentials.refresh_token.as_str()),
        ("grant_type", "refresh_token"),
    ])?;

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

    let token: TokenResponse = body.read_json()?;
    if token.access_token.is_empty() {
        return Err(BloggerError::MissingAccessToken);
    }
    Ok(token.access_token)
}

pub(crate) fn default_token_url() -> String {
    TOKEN_URL.to_owned()
}
