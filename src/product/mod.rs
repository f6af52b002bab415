//! Product module
//!
//! A product is one content page on the site (a study guide, an ebook, an
//! essay, ...) identified by its link and type. Products borrow the client's
//! [`Session`] for any further fetches.

mod kind;
mod resolver;

pub use kind::ProductType;
pub use resolver::{PathResolver, TypeResolver};

use crate::client::Session;
use crate::lens::extract_title;
use crate::{BookRagsError, Result};

/// A single resolved content page
#[derive(Debug, Clone)]
pub struct Product<'s> {
    session: &'s Session,
    link: String,
    product_type: ProductType,
}

impl<'s> Product<'s> {
    pub fn new(session: &'s Session, link: impl Into<String>, product_type: ProductType) -> Self {
        Self {
            session,
            link: link.into(),
            product_type,
        }
    }

    /// The link this product was resolved from, unchanged
    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn session(&self) -> &'s Session {
        self.session
    }

    /// Fetches the product page
    pub async fn fetch_content(&self) -> Result<String> {
        self.session.get_text(&self.link).await
    }

    /// Fetches the product page and returns its `<title>` text
    pub async fn fetch_title(&self) -> Result<String> {
        let content = self.fetch_content().await?;
        extract_title(&content)
            .map(str::to_string)
            .ok_or_else(|| BookRagsError::Markup {
                url: self.link.clone(),
                what: "missing <title>",
            })
    }
}

impl PartialEq for Product<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.session, other.session)
            && self.link == other.link
            && self.product_type == other.product_type
    }
}
