//! Page extraction.
//!
//! Locates the Next.js data element in a fetched page, decodes the embedded
//! content into a [`Node`] tree and derives a document title.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::Deserialize;
use tracing::{debug, warn};

use nextdown_core::Node;

use crate::error::ExtractError;

/// Title used when the page has no `h1` text
pub const UNTITLED: &str = "Untitled";

static NEXT_DATA: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script#__NEXT_DATA__").expect("static selector"));

static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").expect("static selector"));

/// An extracted page, ready for conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub root: Node,
}

#[derive(Debug, Deserialize)]
struct NextData {
    props: NextProps,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NextProps {
    page_props: PageProps,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    content: String,
}

/// Extract the content tree and title from a page's HTML
pub fn extract_document(html: &str) -> Result<Document, ExtractError> {
    let document = Html::parse_document(html);

    let payload: String = document
        .select(&NEXT_DATA)
        .next()
        .ok_or(ExtractError::MissingData)?
        .text()
        .collect();

    if payload.trim().is_empty() {
        return Err(ExtractError::EmptyData);
    }
    debug!("Found data element ({} bytes)", payload.len());

    let data: NextData = serde_json::from_str(&payload)?;
    let content = data.props.page_props.content;
    if content.is_empty() {
        return Err(ExtractError::EmptyContent);
    }

    let root = nextdown_core::from_str(&content)?;
    let title = extract_title(&document).unwrap_or_else(|| {
        warn!("No h1 text found, using placeholder title");
        UNTITLED.to_string()
    });

    Ok(Document { title, root })
}

/// First text run of the first `h1`, trimmed
fn extract_title(document: &Html) -> Option<String> {
    document
        .select(&HEADING)
        .next()?
        .text()
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}
