//! Bookrags-Index: a client for the BookRags study site
//!
//! This crate logs in to the site, classifies content links into typed
//! products, and reads the cross-references listed on a "lens" page by
//! scanning its comment-delimited HTML blocks.

pub mod client;
pub mod config;
pub mod lens;
pub mod product;
pub mod url;

use thiserror::Error;

/// Main error type for Bookrags-Index operations
#[derive(Debug, Error)]
pub enum BookRagsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected markup at {url}: {what}")]
    Markup { url: String, what: &'static str },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Bookrags-Index operations
pub type Result<T> = std::result::Result<T, BookRagsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use client::{BookRags, Credentials, Session};
pub use config::SiteConfig;
pub use lens::{Block, Lens};
pub use product::{PathResolver, Product, ProductType, TypeResolver};
