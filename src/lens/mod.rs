//! Lens module
//!
//! A lens is the aggregation page for one work. It lists the study guide,
//! encyclopedia articles, ebooks, biographies, essays and lesson plan for
//! that work, each inside its own comment-delimited block. The page is
//! fetched once; every accessor re-scans that snapshot.

mod block;
mod parser;

pub use block::Block;
pub use parser::{extract_block_links, extract_title, extract_upsell_link};

use crate::client::Session;
use crate::product::Product;
use crate::{BookRagsError, Result};

/// A fetched aggregation page
#[derive(Debug, Clone)]
pub struct Lens<'s> {
    session: &'s Session,
    link: String,
    content: String,
}

impl<'s> Lens<'s> {
    /// Fetches the lens page at `link`
    pub async fn fetch(session: &'s Session, link: impl Into<String>) -> Result<Self> {
        let link = link.into();
        tracing::debug!("Fetching lens: {}", link);
        let content = session.get_text(&link).await?;
        Ok(Self::from_content(session, link, content))
    }

    /// Wraps HTML that has already been fetched
    pub fn from_content(
        session: &'s Session,
        link: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            session,
            link: link.into(),
            content: content.into(),
        }
    }

    /// The link this lens was created from, unchanged
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Raw page HTML
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Page title
    ///
    /// # Errors
    ///
    /// `BookRagsError::Markup` if the page has no `<title>` element.
    pub fn title(&self) -> Result<&str> {
        extract_title(&self.content).ok_or_else(|| BookRagsError::Markup {
            url: self.link.clone(),
            what: "missing <title>",
        })
    }

    /// Products listed in `block`, tagged with the block's product type
    pub fn block(&self, block: Block) -> Vec<Product<'s>> {
        extract_block_links(&self.content, block)
            .into_iter()
            .map(|link| Product::new(self.session, link, block.product_type()))
            .collect()
    }

    /// The study guide for this work (at most one)
    pub fn study_guides(&self) -> Vec<Product<'s>> {
        self.block(Block::StudyGuide)
    }

    pub fn encyclopedias(&self) -> Vec<Product<'s>> {
        self.block(Block::Encyclopedia)
    }

    pub fn ebooks(&self) -> Vec<Product<'s>> {
        self.block(Block::Ebooks)
    }

    pub fn biographies(&self) -> Vec<Product<'s>> {
        self.block(Block::Biography)
    }

    pub fn essays(&self) -> Vec<Product<'s>> {
        self.block(Block::Essays)
    }

    /// The lesson plan for this work (at most one)
    pub fn lesson_plans(&self) -> Vec<Product<'s>> {
        self.block(Block::LessonPlan)
    }

    /// Always empty: notes are part of the study guide product
    pub fn notes(&self) -> Vec<Product<'s>> {
        Vec::new()
    }

    /// Study guide, encyclopedias, ebooks, biographies and essays, in that
    /// order. Lesson plans and notes are not part of a study pack.
    pub fn study_pack(&self) -> Vec<Product<'s>> {
        Block::study_pack()
            .into_iter()
            .flat_map(|block| self.block(block))
            .collect()
    }
}
