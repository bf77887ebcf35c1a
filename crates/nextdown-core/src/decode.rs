//! JSON decoding support.
//!
//! This module turns the JSON-encoded page content into the [`Node`] tree
//! used by the converter. Decoding a [`Value`] never fails: shapes that carry
//! no renderable content collapse to empty text.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::node::{Element, Node, Props, ELEMENT_MARKER};
use crate::Result;

/// Parse a JSON string into a Node tree.
///
/// Nesting depth is not capped: each element tuple spends three JSON levels,
/// so serde_json's default limit of 128 would reject pages nesting more than
/// about 40 elements. The stack grows on demand while deserializing.
///
/// # Example
///
/// ```rust
/// use nextdown_core::{convert, from_str};
///
/// let node = from_str(r#"[["$r", "h1", null, {"children": "Title"}]]"#).unwrap();
/// assert_eq!(convert(&node), "\n# Title\n");
/// ```
pub fn from_str(json: &str) -> Result<Node> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(Node::from_json(&value))
}

impl Node {
    /// Convert a decoded JSON value to our Node structure
    pub fn from_json(value: &Value) -> Node {
        match value {
            Value::String(text) => Node::Text(text.clone()),
            Value::Array(items) if is_element_tuple(items) => Node::Element(element_from_tuple(items)),
            Value::Array(items) => Node::sequence(items.iter().map(Node::from_json).collect()),
            // null, booleans, numbers and bare objects render to nothing
            _ => Node::Text(String::new()),
        }
    }
}

fn is_element_tuple(items: &[Value]) -> bool {
    matches!(items.first(), Some(Value::String(marker)) if marker == ELEMENT_MARKER)
}

fn element_from_tuple(items: &[Value]) -> Element {
    let element_type = items
        .get(1)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let key = items.get(2).and_then(|k| match k {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    });

    let props = match items.get(3) {
        Some(Value::Object(map)) => props_from_map(map),
        _ => Props::default(),
    };

    Element {
        element_type,
        key,
        props,
    }
}

fn props_from_map(map: &Map<String, Value>) -> Props {
    let string_prop = |name: &str| map.get(name).and_then(Value::as_str).map(str::to_string);

    Props {
        children: map
            .get("children")
            .filter(|c| !c.is_null())
            .map(|c| Box::new(Node::from_json(c))),
        href: string_prop("href"),
        class_name: string_prop("className"),
        meta: string_prop("meta"),
    }
}
