/*
 * inline.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Convert comrak inline nodes to Pandoc JSON inlines.
 */

use crate::text::tokenize_text;
use comrak::arena_tree::Node;
use comrak::nodes::{Ast, NodeLink, NodeValue};
use serde_json::{Value, json};
use std::cell::RefCell;

fn empty_attr() -> Value {
    json!(["", [], []])
}

/// Convert a comrak node's inline children to Pandoc inlines.
///
/// Adjacent `Str` tokens are joined, since comrak may split one word over
/// several text nodes (around smart punctuation, for instance).
pub fn convert_children_to_inlines<'a>(node: &'a Node<'a, RefCell<Ast>>) -> Vec<Value> {
    let mut inlines: Vec<Value> = Vec::new();
    for inline in node.children().flat_map(|child| convert_inline(child)) {
        if let Some(text) = str_text(&inline) {
            if let Some(prev) = inlines.last_mut().and_then(str_text_mut) {
                prev.push_str(text);
                continue;
            }
        }
        inlines.push(inline);
    }
    inlines
}

fn str_text(inline: &Value) -> Option<&str> {
    if inline.get("t")?.as_str()? != "Str" {
        return None;
    }
    inline.get("c")?.as_str()
}

fn str_text_mut(inline: &mut Value) -> Option<&mut String> {
    if inline.get("t")?.as_str()? != "Str" {
        return None;
    }
    match inline.get_mut("c")? {
        Value::String(text) => Some(text),
        _ => None,
    }
}

/// Convert a comrak inline node to Pandoc inlines.
///
/// Returns a Vec because text expands to several tokens and unknown
/// wrappers are flattened into their children.
fn convert_inline<'a>(node: &'a Node<'a, RefCell<Ast>>) -> Vec<Value> {
    let ast = node.data.borrow();

    match &ast.value {
        NodeValue::Text(text) => tokenize_text(text),

        NodeValue::SoftBreak => vec![json!({"t": "SoftBreak"})],

        NodeValue::LineBreak => vec![json!({"t": "LineBreak"})],

        NodeValue::Code(code) => {
            vec![json!({"t": "Code", "c": [empty_attr(), code.literal]})]
        }

        NodeValue::HtmlInline(html) => vec![json!({"t": "RawInline", "c": ["html", html]})],

        NodeValue::Emph => wrap("Emph", node),
        NodeValue::Strong => wrap("Strong", node),
        NodeValue::Strikethrough => wrap("Strikeout", node),
        NodeValue::Superscript => wrap("Superscript", node),
        NodeValue::Subscript => wrap("Subscript", node),
        NodeValue::Underline => wrap("Underline", node),

        NodeValue::Link(link) => {
            let children = convert_children_to_inlines(node);
            vec![convert_link(link, children)]
        }

        NodeValue::Image(link) => {
            let children = convert_children_to_inlines(node);
            vec![json!({
                "t": "Image",
                "c": [empty_attr(), children, [link.url, link.title]]
            })]
        }

        // Escaped characters, and anything we have no Pandoc counterpart
        // for, contribute their children only
        _ => convert_children_to_inlines(node),
    }
}

fn wrap<'a>(tag: &str, node: &'a Node<'a, RefCell<Ast>>) -> Vec<Value> {
    vec![json!({"t": tag, "c": convert_children_to_inlines(node)})]
}

fn convert_link(link: &NodeLink, children: Vec<Value>) -> Value {
    // Autolinks: the content is exactly the URL
    let is_autolink = match children.as_slice() {
        [only] => only.get("c").and_then(Value::as_str) == Some(link.url.as_str()),
        _ => false,
    };

    let attr = if is_autolink {
        json!(["", ["uri"], []])
    } else {
        empty_attr()
    };

    json!({"t": "Link", "c": [attr, children, [link.url, link.title]]})
}
