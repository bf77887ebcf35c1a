//! # nextdown
//!
//! Convert statically generated Next.js pages to Markdown.
//!
//! Pages built with Next.js embed their rendered component tree as JSON in a
//! `<script id="__NEXT_DATA__">` element. This crate fetches such a page,
//! extracts that tree and converts it with [`nextdown_core::convert`].
//!
//! ## Example (URL)
//!
//! ```rust,no_run
//! use nextdown::{parse, ParseOptions};
//!
//! # async fn run() -> Result<(), nextdown::ParseError> {
//! let result = parse(
//!     "https://react.dev/reference/react/useState",
//!     &ParseOptions::default(),
//! )
//! .await?;
//! println!("{}", result.full_markdown);
//! # Ok(())
//! # }
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use nextdown::parse_html;
//!
//! let html = r#"<h1>Hello</h1><script id="__NEXT_DATA__">{"props":{"pageProps":{"content":"[[\"$r\",\"p\",null,{\"children\":\"World\"}]]"}}}</script>"#;
//! let result = parse_html("https://example.com", html).unwrap();
//! assert_eq!(result.full_markdown, "# Hello\n\n\nWorld\n");
//! ```

pub mod error;
pub mod extract;
mod fetch;
mod service;

pub use error::{ExtractError, ParseError, Result};
pub use extract::{extract_document, Document};
pub use fetch::PageFetcher;
pub use nextdown_core::{convert, Element, Node};
pub use service::{parse, parse_html, ParseOptions, ParseResult, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
