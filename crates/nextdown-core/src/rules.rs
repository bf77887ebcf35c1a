//! Rule table for element to Markdown conversion.
//!
//! Every element type maps to exactly one [`Rule`]. Block rules self-delimit
//! with leading and trailing newlines so that concatenated siblings end up on
//! separate lines.

use crate::node::{Element, Node};

/// Fence string for fenced code blocks
pub const FENCE: &str = "```";

/// A rendering strategy for one kind of element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `h1`..`h6`, carrying the level
    Heading(usize),
    /// `p`
    Paragraph,
    /// `ul` and `ol`; ordered lists are not numbered
    List,
    /// `li`
    ListItem,
    /// `a`
    Link,
    /// `strong`
    Strong,
    /// `em`
    Emphasis,
    /// `code`, inline or fenced
    Code,
    /// `pre`; fencing is left to a nested `code`
    Preformatted,
    /// `hr`, rendered as a paragraph break
    Break,
    /// `Solution` component
    Solution,
    /// Anything else: emit the children and drop the wrapper
    Unwrap,
}

impl Rule {
    /// Find the rule for an element type
    pub fn for_type(element_type: &str) -> Rule {
        match element_type {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = element_type[1..].parse().unwrap_or(1);
                Rule::Heading(level)
            }
            "p" => Rule::Paragraph,
            "ul" | "ol" => Rule::List,
            "li" => Rule::ListItem,
            "a" => Rule::Link,
            "strong" => Rule::Strong,
            "em" => Rule::Emphasis,
            "code" => Rule::Code,
            "pre" => Rule::Preformatted,
            "hr" => Rule::Break,
            "Solution" => Rule::Solution,
            _ => Rule::Unwrap,
        }
    }

    /// Apply this rule to an element whose children converted to `content`
    pub fn replace(&self, element: &Element, content: &str) -> String {
        match self {
            Rule::Heading(level) => format!("\n{} {}\n", "#".repeat(*level), content),
            Rule::Paragraph | Rule::List | Rule::Preformatted => format!("\n{}\n", content),
            Rule::ListItem => format!("- {}\n", content),
            Rule::Link => format!("[{}]({})", content, element.attr("href").unwrap_or("")),
            Rule::Strong => format!("**{}**", content),
            Rule::Emphasis => format!("*{}*", content),
            Rule::Code => code_replacement(element, content),
            Rule::Break => "\n\n".to_string(),
            Rule::Solution => {
                if element.has_children() {
                    format!("Solution\n\n{}\n\n", content)
                } else {
                    String::new()
                }
            }
            Rule::Unwrap => content.to_string(),
        }
    }
}

/// Whether a `code` element renders as a fenced block.
///
/// Fenced when a language tag is present, or when the direct child is a
/// multi-line text run.
pub fn is_fenced(element: &Element) -> bool {
    element.attr("className").is_some()
        || matches!(element.children(), Some(Node::Text(text)) if text.contains('\n'))
}

fn code_replacement(element: &Element, content: &str) -> String {
    if !is_fenced(element) {
        return format!("`{}`", content);
    }

    let meta = element
        .attr("meta")
        .map(|m| format!("{}\n", m))
        .unwrap_or_default();
    let language = element.attr("className").unwrap_or("");

    format!("{}{}{}\n{}\n{}", meta, FENCE, language, content, FENCE)
}
