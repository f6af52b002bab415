//! URL helpers for Bookrags-Index
//!
//! Links handed to the client are plain strings. These helpers decide whether
//! a link is an http(s) URL on the configured site before it is classified.

use url::Url;

/// Parses a link, accepting only absolute http(s) URLs
pub fn parse_link(link: &str) -> Option<Url> {
    let url = Url::parse(link.trim()).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}

/// Checks if a host matches a site pattern
///
/// "*.bookrags.com" matches "bookrags.com" and any subdomain of it; any other
/// pattern must equal the host. Comparison is case-insensitive.
///
/// # Examples
///
/// ```
/// use bookrags_index::url::host_matches;
///
/// assert!(host_matches("*.bookrags.com", "www.bookrags.com"));
/// assert!(host_matches("*.bookrags.com", "bookrags.com"));
/// assert!(!host_matches("*.bookrags.com", "notbookrags.com"));
/// assert!(host_matches("127.0.0.1", "127.0.0.1"));
/// ```
pub fn host_matches(pattern: &str, host: &str) -> bool {
    let pattern = pattern.to_lowercase();
    let host = host.to_lowercase();

    match pattern.strip_prefix("*.") {
        Some(base) => host == base || host.ends_with(&format!(".{}", base)),
        None => host == pattern,
    }
}

/// Returns true if `url` is hosted on the site described by `pattern`
pub fn is_site_link(url: &Url, pattern: &str) -> bool {
    url.host_str()
        .map(|host| host_matches(pattern, host))
        .unwrap_or(false)
}
