//! Configuration module for Bookrags-Index
//!
//! This module handles loading, parsing, and validating TOML site
//! configuration. Every section has defaults pointing at the live site, so a
//! config file is only needed to override endpoints or classification rules.
//!
//! # Example
//!
//! ```no_run
//! use bookrags_index::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("bookrags.toml")).unwrap();
//! println!("Logging in at: {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ClassifyRule, EndpointConfig, HttpConfig, SiteConfig, SiteSection};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
