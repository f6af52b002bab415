//! HTTP request helpers
//!
//! This module handles:
//! - Building HTTP clients with the configured user agent and timeout
//! - Sending a request and reading the body as text
//! - Turning transport failures into errors that carry the URL
//!
//! Status codes are logged but never treated as failures; callers look at
//! the body the site sent back.

use crate::config::HttpConfig;
use crate::{BookRagsError, Result};
use reqwest::{cookie::Jar, redirect::Policy, Client, RequestBuilder};
use std::sync::Arc;
use std::time::Duration;

/// Connect timeout cap, in seconds
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Builds an HTTP client that stores cookies in `jar`
///
/// # Arguments
///
/// * `config` - User agent and timeout settings
/// * `jar` - Cookie jar, shared between clients of one session
/// * `redirect` - Redirect policy for this client
///
/// # Example
///
/// ```no_run
/// use bookrags_index::client::build_http_client;
/// use bookrags_index::config::HttpConfig;
/// use reqwest::{cookie::Jar, redirect::Policy};
/// use std::sync::Arc;
///
/// let jar = Arc::new(Jar::default());
/// let client = build_http_client(&HttpConfig::default(), jar, Policy::none()).unwrap();
/// ```
pub fn build_http_client(
    config: &HttpConfig,
    jar: Arc<Jar>,
    redirect: Policy,
) -> std::result::Result<Client, reqwest::Error> {
    let timeout = Duration::from_secs(config.timeout_secs);

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(CONNECT_TIMEOUT_SECS)))
        .redirect(redirect)
        .cookie_provider(jar)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Sends `request` and returns the response body as text
pub(crate) async fn send_for_text(url: &str, request: RequestBuilder) -> Result<String> {
    let response = request.send().await.map_err(|source| BookRagsError::Http {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if status.is_redirection() {
        tracing::debug!("{} redirected with status {}", url, status);
    } else if !status.is_success() {
        tracing::warn!("{} returned status {}", url, status);
    }

    response.text().await.map_err(|source| BookRagsError::Http {
        url: url.to_string(),
        source,
    })
}
