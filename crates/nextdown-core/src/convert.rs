//! Convert a serialized UI tree to Markdown
//!
//! The conversion is a depth-first walk: children are converted first and the
//! element's [`Rule`] wraps the result.

use crate::node::{Element, Node};
use crate::rules::Rule;

/// Convert a Node tree to a Markdown fragment.
///
/// Total over every [`Node`]: unknown element types and missing props degrade
/// to pass-through or empty output instead of failing. Recursion depth follows
/// the depth of the tree, so an adversarially deep tree could exhaust the
/// stack; server-rendered pages stay far below that.
pub fn convert(node: &Node) -> String {
    let mut output = String::new();
    convert_node(node, &mut output);
    output
}

fn convert_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Sequence(items) => {
            for item in items {
                convert_node(item, out);
            }
        }
        Node::Element(element) => out.push_str(&convert_element(element)),
    }
}

fn convert_element(element: &Element) -> String {
    let rule = Rule::for_type(&element.element_type);

    // Process children first
    let content = match element.children() {
        Some(children) if rule == Rule::List => {
            let mut content = String::new();
            for item in children.items() {
                convert_node(item, &mut content);
            }
            content
        }
        Some(children) => convert(children),
        None => String::new(),
    };

    rule.replace(element, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(element_type: &str, children: impl Into<Node>) -> Node {
        Element::new(element_type).with_children(children).into()
    }

    #[test]
    fn test_text_identity() {
        assert_eq!(convert(&Node::text("\n")), "\n");
        assert_eq!(convert(&Node::text("hello")), "hello");
        assert_eq!(convert(&Node::text("")), "");
    }

    #[test]
    fn test_text_is_not_escaped() {
        assert_eq!(convert(&Node::text("*raw* [x]")), "*raw* [x]");
    }

    #[test]
    fn test_heading() {
        assert_eq!(convert(&el("h2", "X")), "\n## X\n");
        assert_eq!(convert(&el("h6", "deep")), "\n###### deep\n");
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(convert(&el("p", "Body")), "\nBody\n");
    }

    #[test]
    fn test_sequence_concatenation() {
        let a = el("strong", "a");
        let b = el("p", "b");
        let seq = Node::sequence(vec![a.clone(), b.clone()]);
        assert_eq!(convert(&seq), convert(&a) + &convert(&b));
    }

    #[test]
    fn test_unordered_list() {
        let list = el("ul", vec![el("li", "One"), el("li", "Two")]);
        assert_eq!(convert(&list), "\n- One\n- Two\n\n");
    }

    #[test]
    fn test_ordered_list_uses_dashes() {
        let list = el("ol", vec![el("li", "One"), el("li", "Two")]);
        assert_eq!(convert(&list), "\n- One\n- Two\n\n");
    }

    #[test]
    fn test_list_with_lone_item() {
        let list = el("ul", el("li", "Only"));
        assert_eq!(convert(&list), "\n- Only\n\n");
    }

    #[test]
    fn test_list_without_children() {
        assert_eq!(convert(&Node::element("ul")), "\n\n");
    }

    #[test]
    fn test_link() {
        let link: Node = Element::new("a").with_href("/x").with_children("go").into();
        assert_eq!(convert(&link), "[go](/x)");
    }

    #[test]
    fn test_link_missing_href() {
        assert_eq!(convert(&el("a", "go")), "[go]()");
    }

    #[test]
    fn test_inline_formatting() {
        assert_eq!(convert(&el("strong", "bold")), "**bold**");
        assert_eq!(convert(&el("em", "emphasized")), "*emphasized*");
    }

    #[test]
    fn test_nested_inline() {
        let p = el(
            "p",
            vec![
                Node::text("This is "),
                el("strong", vec![Node::text("very "), el("em", "bold")]),
                Node::text("."),
            ],
        );
        assert_eq!(convert(&p), "\nThis is **very *bold***.\n");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(convert(&el("code", "x")), "`x`");
    }

    #[test]
    fn test_fenced_code_with_class_name() {
        let code: Node = Element::new("code")
            .with_class_name("language-js")
            .with_children("let a = 1;")
            .into();
        assert_eq!(convert(&code), "```language-js\nlet a = 1;\n```");
    }

    #[test]
    fn test_fenced_code_multiline_without_class_name() {
        assert_eq!(convert(&el("code", "a\nb")), "```\na\nb\n```");
    }

    #[test]
    fn test_fenced_code_with_meta() {
        let code: Node = Element::new("code")
            .with_class_name("language-js")
            .with_meta("{1-2}")
            .with_children("x")
            .into();
        assert_eq!(convert(&code), "{1-2}\n```language-js\nx\n```");
    }

    #[test]
    fn test_meta_ignored_for_inline_code() {
        let code: Node = Element::new("code").with_meta("caption").with_children("x").into();
        assert_eq!(convert(&code), "`x`");
    }

    #[test]
    fn test_pre_wraps_code() {
        let code: Node = Element::new("code")
            .with_class_name("language-sh")
            .with_children("ls")
            .into();
        assert_eq!(convert(&el("pre", code)), "\n```language-sh\nls\n```\n");
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(convert(&Node::element("hr")), "\n\n");
    }

    #[test]
    fn test_solution_gating() {
        assert_eq!(convert(&Node::element("Solution")), "");
        assert_eq!(convert(&el("Solution", "")), "");
        assert_eq!(convert(&el("Solution", Vec::<Node>::new())), "");
        assert_eq!(
            convert(&el("Solution", el("p", "Answer"))),
            "Solution\n\n\nAnswer\n\n\n"
        );
    }

    #[test]
    fn test_unknown_type_is_transparent() {
        let inner = vec![el("p", "a"), Node::text("b")];
        let wrapped = el("Intro", inner.clone());
        assert_eq!(convert(&wrapped), convert(&Node::sequence(inner)));
    }

    #[test]
    fn test_unknown_type_without_props() {
        assert_eq!(convert(&Node::element("div")), "");
    }

    #[test]
    fn test_end_to_end_document() {
        let doc = Node::sequence(vec![el("h1", "Title"), el("p", "Body text.")]);
        assert_eq!(convert(&doc), "\n# Title\n\nBody text.\n");
    }

    #[test]
    fn test_deterministic() {
        let doc = Node::sequence(vec![
            el("h3", "Usage"),
            el("ul", vec![el("li", el("code", "a")), el("li", "b")]),
        ]);
        assert_eq!(convert(&doc), convert(&doc));
    }
}
