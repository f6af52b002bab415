use crate::config::types::{ClassifyRule, EndpointConfig, HttpConfig, SiteConfig, SiteSection};
use crate::product::ProductType;
use crate::ConfigError;
use url::Url;

/// Upper bound for the request timeout, in seconds
const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
    validate_site(&config.site)?;
    validate_endpoints(&config.endpoints)?;
    validate_http(&config.http)?;
    validate_classify_rules(&config.classify)?;
    Ok(())
}

/// Validates the site section
fn validate_site(site: &SiteSection) -> Result<(), ConfigError> {
    let url = Url::parse(&site.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if site.domain.is_empty() {
        return Err(ConfigError::Validation("domain cannot be empty".to_string()));
    }

    if site.layout.is_empty() {
        return Err(ConfigError::Validation("layout cannot be empty".to_string()));
    }

    Ok(())
}

/// Validates endpoint paths
fn validate_endpoints(endpoints: &EndpointConfig) -> Result<(), ConfigError> {
    let paths = [
        ("session", &endpoints.session),
        ("login", &endpoints.login),
        ("account", &endpoints.account),
        ("logout", &endpoints.logout),
    ];

    for (name, path) in paths {
        if !path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "{} endpoint must start with '/', got '{}'",
                name, path
            )));
        }
    }

    Ok(())
}

/// Validates HTTP client settings
fn validate_http(http: &HttpConfig) -> Result<(), ConfigError> {
    if http.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if http.timeout_secs < 1 || http.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, http.timeout_secs
        )));
    }

    Ok(())
}

/// Validates classification rules
fn validate_classify_rules(rules: &[ClassifyRule]) -> Result<(), ConfigError> {
    for rule in rules {
        if !rule.prefix.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "classify prefix must start with '/', got '{}'",
                rule.prefix
            )));
        }

        if rule.product_type == ProductType::Unknown {
            return Err(ConfigError::Validation(format!(
                "classify prefix '{}' cannot map to unknown",
                rule.prefix
            )));
        }
    }

    Ok(())
}
