//! Serialized UI tree node structure for Markdown conversion.
//!
//! Statically generated pages ship their rendered component tree as JSON.
//! Each value in that tree is a string, a plain array of values, or an
//! element tuple `["$r", type, key, props]`. This module models those three
//! shapes as a closed enum so the converter never has to sniff array shapes.

/// Marker occupying the first slot of a serialized element tuple.
pub const ELEMENT_MARKER: &str = "$r";

/// A node of the serialized UI tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text. `"\n"` is an explicit line break and is kept verbatim.
    Text(String),
    /// Plain ordered list of nodes without element semantics.
    Sequence(Vec<Node>),
    /// Element tuple carrying a type name and properties.
    Element(Element),
}

/// An element tuple `(marker, element_type, key, props)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Semantic kind, e.g. "h1", "p", "code" or a component name like "Solution"
    pub element_type: String,

    /// Opaque reconciliation key, irrelevant to rendering
    pub key: Option<String>,

    /// Element properties
    pub props: Props,
}

/// The subset of element properties the converter reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    /// Child content; `None` is treated as empty
    pub children: Option<Box<Node>>,

    /// Link target for `a` elements
    pub href: Option<String>,

    /// Language tag for fenced `code` blocks
    pub class_name: Option<String>,

    /// Extra line emitted above a fenced code block
    pub meta: Option<String>,
}

impl Node {
    /// Create a text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Create a sequence node
    pub fn sequence(items: Vec<Node>) -> Self {
        Node::Sequence(items)
    }

    /// Create an element node with empty props
    pub fn element(element_type: &str) -> Self {
        Node::Element(Element::new(element_type))
    }

    /// Check whether this node carries no content at all.
    ///
    /// Empty text and empty sequences are blank; elements never are.
    pub fn is_blank(&self) -> bool {
        match self {
            Node::Text(text) => text.is_empty(),
            Node::Sequence(items) => items.is_empty(),
            Node::Element(_) => false,
        }
    }

    /// Iterate over the direct items of a sequence, or over this node alone.
    ///
    /// This is how list elements normalize a lone child into a one-item list.
    pub fn items(&self) -> std::slice::Iter<'_, Node> {
        match self {
            Node::Sequence(items) => items.iter(),
            other => std::slice::from_ref(other).iter(),
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::text(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Sequence(value)
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

impl Element {
    /// Create an element with empty props
    pub fn new(element_type: &str) -> Self {
        Self {
            element_type: element_type.to_string(),
            key: None,
            props: Props::default(),
        }
    }

    /// Set the children
    pub fn with_children(mut self, children: impl Into<Node>) -> Self {
        self.props.children = Some(Box::new(children.into()));
        self
    }

    /// Set the link target
    pub fn with_href(mut self, href: &str) -> Self {
        self.props.href = Some(href.to_string());
        self
    }

    /// Set the code language tag
    pub fn with_class_name(mut self, class_name: &str) -> Self {
        self.props.class_name = Some(class_name.to_string());
        self
    }

    /// Set the caption line of a code block
    pub fn with_meta(mut self, meta: &str) -> Self {
        self.props.meta = Some(meta.to_string());
        self
    }

    /// Get the children, if any
    pub fn children(&self) -> Option<&Node> {
        self.props.children.as_deref()
    }

    /// Check whether the children are absent or blank
    pub fn has_children(&self) -> bool {
        self.children().is_some_and(|c| !c.is_blank())
    }

    /// Get a non-empty string property by its wire name.
    ///
    /// Empty strings count as absent, so `className: ""` does not fence.
    pub fn attr(&self, name: &str) -> Option<&str> {
        let value = match name {
            "href" => self.props.href.as_deref(),
            "className" => self.props.class_name.as_deref(),
            "meta" => self.props.meta.as_deref(),
            _ => None,
        };
        value.filter(|v| !v.is_empty())
    }
}
