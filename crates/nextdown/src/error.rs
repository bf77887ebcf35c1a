//! Error types for fetching and extracting pages.

/// A failure at one step of the fetch and extract pipeline
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Request timed out after {0} ms")]
    Timeout(u128),

    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Data element `script#__NEXT_DATA__` not found")]
    MissingData,

    #[error("Data element is empty")]
    EmptyData,

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Page has no content")]
    EmptyContent,
}

impl From<nextdown_core::DecodeError> for ExtractError {
    fn from(err: nextdown_core::DecodeError) -> Self {
        match err {
            nextdown_core::DecodeError::Json(err) => ExtractError::Decode(err),
        }
    }
}

/// The single error kind surfaced by [`crate::parse`], annotated with the URL
#[derive(Debug, thiserror::Error)]
#[error("Failed to parse {url}: {source}")]
pub struct ParseError {
    /// Page that failed
    pub url: String,
    /// Underlying failure
    #[source]
    pub source: ExtractError,
}

impl ParseError {
    pub fn new(url: &str, source: ExtractError) -> Self {
        Self {
            url: url.to_string(),
            source,
        }
    }

    /// Whether the request was aborted by the configured timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self.source, ExtractError::Timeout(_))
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_includes_url() {
        let err = ParseError::new("https://example.com/page", ExtractError::MissingData);
        let message = err.to_string();
        assert!(message.contains("https://example.com/page"));
        assert!(message.contains("__NEXT_DATA__"));
    }

    #[test]
    fn test_is_timeout() {
        assert!(ParseError::new("u", ExtractError::Timeout(10)).is_timeout());
        assert!(!ParseError::new("u", ExtractError::Status(404)).is_timeout());
    }

    #[test]
    fn test_decode_error_conversion() {
        let err = nextdown_core::from_str("{").unwrap_err();
        assert!(matches!(ExtractError::from(err), ExtractError::Decode(_)));
    }
}
