//! Public parse API: fetch, extract and convert one page.

use std::time::Duration;

use tracing::info;

use crate::error::{ExtractError, ParseError, Result};
use crate::extract::{extract_document, Document};
use crate::fetch::PageFetcher;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Default request identity
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; nextdown/0.1; +https://github.com/nextdown/nextdown)";

/// Options for [`parse`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Timeout for the network request
    pub timeout: Duration,

    /// User-Agent header sent with the request
    pub user_agent: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ParseOptions {
    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}

/// Result of parsing one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    /// Page title
    pub title: String,

    /// Markdown of the page body
    pub content: String,

    /// Title as an H1 heading, a blank line, then the content
    pub full_markdown: String,
}

impl ParseResult {
    fn from_document(doc: Document) -> std::result::Result<Self, ExtractError> {
        let content = nextdown_core::convert(&doc.root);
        if content.trim().is_empty() {
            return Err(ExtractError::EmptyContent);
        }

        let full_markdown = format!("# {}\n\n{}", doc.title, content);
        Ok(Self {
            title: doc.title,
            content,
            full_markdown,
        })
    }
}

/// Fetch a page and convert its embedded content to Markdown.
///
/// Every failure is wrapped into a [`ParseError`] carrying the URL; no partial
/// Markdown is returned.
pub async fn parse(url: &str, options: &ParseOptions) -> Result<ParseResult> {
    let fetcher = PageFetcher::new(options).map_err(|e| ParseError::new(url, e))?;
    let html = fetcher
        .fetch(url)
        .await
        .map_err(|e| ParseError::new(url, e))?;

    parse_html(url, &html)
}

/// Convert an already fetched page. `url` is only used to annotate errors.
pub fn parse_html(url: &str, html: &str) -> Result<ParseResult> {
    let result = extract_document(html)
        .and_then(ParseResult::from_document)
        .map_err(|e| ParseError::new(url, e))?;

    info!(
        "Parsed {} ({} chars of Markdown)",
        url,
        result.content.len()
    );
    Ok(result)
}
