//! Client module for talking to the site
//!
//! This module contains:
//! - HTTP client construction and request helpers
//! - The cookie-carrying session shared by products and lenses
//! - Login credentials
//! - The `BookRags` client that logs in and resolves links

mod auth;
mod credentials;
mod fetcher;
mod session;

pub use auth::BookRags;
pub use credentials::Credentials;
pub use fetcher::build_http_client;
pub use session::Session;
