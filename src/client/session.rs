use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::redirect::Policy;
use reqwest::Client;
use url::{Host, Url};

use crate::client::fetcher::{build_http_client, send_for_text};
use crate::config::SiteConfig;
use crate::url::host_matches;
use crate::Result;

/// Cookie-carrying HTTP state for one login
///
/// Holds two clients over one cookie jar: `client` follows redirects for
/// ordinary page fetches, `probe` does not and is used where a redirect
/// itself is the signal. The layout cookie is in the jar before the first
/// request goes out.
#[derive(Debug)]
pub struct Session {
    client: Client,
    probe: Client,
    jar: Arc<Jar>,
    base_url: Url,
}

impl Session {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let base_url = Url::parse(&config.site.base_url)?;

        let jar = Arc::new(Jar::default());
        jar.add_cookie_str(&layout_cookie(config, &base_url), &base_url);

        let client = build_http_client(&config.http, jar.clone(), Policy::default())?;
        let probe = build_http_client(&config.http, jar.clone(), Policy::none())?;

        Ok(Self {
            client,
            probe,
            jar,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an endpoint path against the base URL
    pub fn url_for(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// `Cookie` header the session would send to `url`
    pub fn cookie_header(&self, url: &Url) -> Option<String> {
        self.jar
            .cookies(url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    /// GETs `url`, following redirects, and returns the body
    pub async fn get_text(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        send_for_text(url, self.client.get(url)).await
    }

    /// GETs `url` without following redirects and returns the body
    pub async fn probe_text(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {} (no redirects)", url);
        send_for_text(url, self.probe.get(url)).await
    }

    /// POSTs a urlencoded form to `url` and returns the body
    pub async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String> {
        tracing::debug!("POST {}", url);
        send_for_text(url, self.client.post(url).form(form)).await
    }
}

/// The `layout` cookie, scoped to every host of the site
///
/// A wildcard site pattern covering the base host becomes the cookie's
/// `Domain`. Exact hosts and IP addresses keep a host-only cookie.
fn layout_cookie(config: &SiteConfig, base_url: &Url) -> String {
    let mut cookie = format!("layout={}; Path=/", config.site.layout);
    if let Some(domain) = cookie_domain(&config.site.domain, base_url) {
        cookie.push_str(&format!("; Domain={}", domain));
    }
    cookie
}

fn cookie_domain<'p>(pattern: &'p str, base_url: &Url) -> Option<&'p str> {
    let domain = pattern.strip_prefix("*.")?;
    match base_url.host() {
        Some(Host::Domain(host)) if host_matches(pattern, host) => Some(domain),
        _ => None,
    }
}
