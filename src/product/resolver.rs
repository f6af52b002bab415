//! Link classification
//!
//! The client asks a [`TypeResolver`] what a link is before it builds a
//! product or a lens from it.

use crate::config::{ClassifyRule, SiteConfig};
use crate::product::ProductType;
use crate::url::{is_site_link, parse_link};

/// Classifies a link into a [`ProductType`]
pub trait TypeResolver {
    /// Returns the type of content `link` points at, or `Unknown`
    fn resolve_type(&self, link: &str) -> ProductType;
}

/// Classifies links by host and path prefix
///
/// The link must be an http(s) URL on the configured site. The first rule
/// whose prefix the URL path starts with decides the type.
#[derive(Debug, Clone)]
pub struct PathResolver {
    domain: String,
    rules: Vec<ClassifyRule>,
}

impl PathResolver {
    pub fn new(domain: impl Into<String>, rules: Vec<ClassifyRule>) -> Self {
        Self {
            domain: domain.into(),
            rules,
        }
    }

    /// Builds a resolver from the site domain and classify rules
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.site.domain.clone(), config.classify.clone())
    }
}

impl TypeResolver for PathResolver {
    fn resolve_type(&self, link: &str) -> ProductType {
        let Some(url) = parse_link(link) else {
            tracing::debug!("Not an http(s) link: {}", link);
            return ProductType::Unknown;
        };

        if !is_site_link(&url, &self.domain) {
            tracing::debug!("Link {} is not on {}", link, self.domain);
            return ProductType::Unknown;
        }

        let path = url.path();
        self.rules
            .iter()
            .find(|rule| path.starts_with(&rule.prefix))
            .map(|rule| rule.product_type)
            .unwrap_or(ProductType::Unknown)
    }
}
