//! Regex extraction over raw page HTML
//!
//! This module pulls out:
//! - The page title
//! - The links listed inside a lens block
//! - The study plan link in a product page's upsell box
//!
//! Links are the single-quoted `href='...'` values the site writes. Nothing
//! is resolved against a base URL; links come back exactly as written.

use crate::lens::Block;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

const TITLE_PATTERN: &str = r"<title>(.*?)</title>";
const HREF_PATTERN: &str = r"href='(.*?)'";
const UPSELL_PATTERN: &str = r"(?s)<div id='contentSPUpsellBlock'>(.*?)</div>";

static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
static HREF_REGEX: OnceLock<Regex> = OnceLock::new();
static UPSELL_REGEX: OnceLock<Regex> = OnceLock::new();
static REGION_REGEXES: OnceLock<HashMap<Block, Regex>> = OnceLock::new();

fn title_regex() -> &'static Regex {
    TITLE_REGEX.get_or_init(|| Regex::new(TITLE_PATTERN).expect("valid title pattern"))
}

fn href_regex() -> &'static Regex {
    HREF_REGEX.get_or_init(|| Regex::new(HREF_PATTERN).expect("valid href pattern"))
}

fn upsell_regex() -> &'static Regex {
    UPSELL_REGEX.get_or_init(|| Regex::new(UPSELL_PATTERN).expect("valid upsell pattern"))
}

/// Region pattern for a block: everything from its begin marker to the
/// nearest end marker after it, newlines included
fn region_regex(block: Block) -> &'static Regex {
    let regions = REGION_REGEXES.get_or_init(|| {
        Block::all()
            .into_iter()
            .map(|b| {
                let pattern = format!(
                    "(?s){}(.*?){}",
                    regex::escape(b.begin_marker()),
                    regex::escape(b.end_marker())
                );
                (b, Regex::new(&pattern).expect("valid region pattern"))
            })
            .collect()
    });
    &regions[&block]
}

/// Extracts the text of the first `<title>` element
///
/// The title must open and close on the same line.
///
/// # Example
///
/// ```
/// use bookrags_index::lens::extract_title;
///
/// let html = "<html><head><title>Hamlet Lesson Plans</title></head></html>";
/// assert_eq!(extract_title(html), Some("Hamlet Lesson Plans"));
/// ```
pub fn extract_title(html: &str) -> Option<&str> {
    title_regex()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Returns every `href='...'` value in `text`, in document order
fn extract_hrefs(text: &str) -> impl Iterator<Item = &str> {
    href_regex()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts the distinct links listed inside a block
///
/// Returns an empty list when the block is absent. Duplicates are dropped,
/// keeping the first occurrence. For first-only blocks at most one link is
/// returned.
pub fn extract_block_links(html: &str, block: Block) -> Vec<&str> {
    let Some(region) = region_regex(block).find(html) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let links = extract_hrefs(region.as_str()).filter(|link| seen.insert(*link));

    if block.first_only() {
        links.take(1).collect()
    } else {
        links.collect()
    }
}

/// Extracts the study plan link from a product page's upsell box
pub fn extract_upsell_link(html: &str) -> Option<&str> {
    let upsell = upsell_regex().find(html)?;
    extract_hrefs(upsell.as_str()).next()
}
