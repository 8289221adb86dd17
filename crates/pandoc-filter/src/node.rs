/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The slice of the Pandoc node vocabulary the filters read and write.

use crate::attr::Attr;
use crate::errors::{FilterError, Result};
use serde_json::{Value, json};

/// Nodes that replace a matched node, spliced into its parent list.
pub type Replacement = Vec<Value>;

/// The two code-bearing node kinds the filters act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Fenced code block (`CodeBlock`)
    CodeBlock,
    /// Inline code span (`Code`)
    Code,
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "CodeBlock" => Some(NodeKind::CodeBlock),
            "Code" => Some(NodeKind::Code),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::CodeBlock => "CodeBlock",
            NodeKind::Code => "Code",
        }
    }

    pub fn is_inline(self) -> bool {
        self == NodeKind::Code
    }
}

/// Payload shared by `CodeBlock` and `Code`: `[attr, text]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePayload {
    pub attr: Attr,
    pub text: String,
}

impl CodePayload {
    pub fn from_json(kind: NodeKind, content: &Value) -> Result<Self> {
        let parts = content
            .as_array()
            .ok_or_else(|| FilterError::malformed(kind.tag(), "expected an array"))?;
        let [attr, text] = parts.as_slice() else {
            return Err(FilterError::malformed(
                kind.tag(),
                format!("expected 2 elements, got {}", parts.len()),
            ));
        };
        let text = text
            .as_str()
            .ok_or_else(|| FilterError::malformed(kind.tag(), "text is not a string"))?
            .to_string();
        Ok(CodePayload {
            attr: Attr::from_json(attr)?,
            text,
        })
    }

    pub fn to_json(&self, kind: NodeKind) -> Value {
        json!({"t": kind.tag(), "c": [self.attr.to_json(), self.text]})
    }
}

pub fn raw_block(format: &str, text: &str) -> Value {
    json!({"t": "RawBlock", "c": [format, text]})
}

pub fn raw_inline(format: &str, text: &str) -> Value {
    json!({"t": "RawInline", "c": [format, text]})
}

pub fn plain(inlines: Vec<Value>) -> Value {
    json!({"t": "Plain", "c": inlines})
}

/// Flatten any fragment of the AST to its plain text.
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    stringify_into(value, &mut out);
    out
}

fn stringify_into(value: &Value, out: &mut String) {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Array(items) => items.iter().for_each(|item| stringify_into(item, out)),
        Value::Object(obj) => {
            let content = obj.get("c").unwrap_or(&Value::Null);
            match obj.get("t").and_then(Value::as_str) {
                Some("Str") => stringify_into(content, out),
                Some("Space" | "SoftBreak" | "LineBreak") => out.push(' '),
                // [attr, text] / [mathtype, text]: only the text counts
                Some("Code" | "Math") => {
                    if let Some(text) = content.get(1) {
                        stringify_into(text, out);
                    }
                }
                Some("RawInline" | "RawBlock") => {}
                // Link/Image/Span carry attr and target around the content
                Some("Link" | "Image" | "Span") => {
                    if let Some(inner) = content.get(1) {
                        stringify_into(inner, out);
                    }
                }
                Some(_) => stringify_into(content, out),
                None => {}
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind() {
        assert_eq!(NodeKind::from_tag("CodeBlock"), Some(NodeKind::CodeBlock));
        assert_eq!(NodeKind::from_tag("Code"), Some(NodeKind::Code));
        assert_eq!(NodeKind::from_tag("Para"), None);
        assert!(NodeKind::Code.is_inline());
        assert!(!NodeKind::CodeBlock.is_inline());
    }

    #[test]
    fn test_code_payload() {
        let c = json!([["", ["table"], [["header", "yes"]]], "a,b\n1,2"]);
        let payload = CodePayload::from_json(NodeKind::CodeBlock, &c).unwrap();
        assert_eq!(payload.text, "a,b\n1,2");
        assert!(payload.attr.has_class("table"));
        assert_eq!(
            payload.to_json(NodeKind::CodeBlock),
            json!({"t": "CodeBlock", "c": c})
        );
    }

    #[test]
    fn test_code_payload_rejects_wrong_shape() {
        let err = CodePayload::from_json(NodeKind::Code, &json!(["x"])).unwrap_err();
        assert!(err.to_string().contains("Code"));
    }

    #[test]
    fn test_stringify() {
        let inlines = json!([
            {"t": "Str", "c": "Hello"},
            {"t": "Space"},
            {"t": "Emph", "c": [{"t": "Str", "c": "big"}]},
            {"t": "SoftBreak"},
            {"t": "Code", "c": [["", [], []], "x"]},
            {"t": "Link", "c": [["", [], []], [{"t": "Str", "c": "y"}], ["http://z", ""]]}
        ]);
        assert_eq!(stringify(&inlines), "Hello big xy");
    }

    #[test]
    fn test_constructors() {
        assert_eq!(raw_block("latex", "x"), json!({"t": "RawBlock", "c": ["latex", "x"]}));
        assert_eq!(raw_inline("latex", "x"), json!({"t": "RawInline", "c": ["latex", "x"]}));
        assert_eq!(plain(vec![]), json!({"t": "Plain", "c": []}));
    }
}
