/*
 * listing.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::settings::ListingSettings;
use indoc::formatdoc;
use pandoc_filter::node::{raw_block, raw_inline};
use pandoc_filter::{AttrMap, NodeKind};
use serde_json::Value;

/// Keys and classes that configure this filter and are never passed on
/// to minted.
const RESERVED: &[&str] = &["language", "caption", "minted"];

/// Output format of the generated markup.
pub const FORMAT: &str = "latex";

/// Rendered LaTeX for one code node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingNode {
    pub markup: String,
    /// Replaces inline code rather than a block
    pub inline: bool,
}

impl ListingNode {
    pub fn to_json(&self) -> Value {
        if self.inline {
            raw_inline(FORMAT, &self.markup)
        } else {
            raw_block(FORMAT, &self.markup)
        }
    }
}

/// Minted options from the remaining attributes and classes:
/// `[key="value", class, ...]` sorted, or empty when there are none.
pub fn format_attributes(options: &AttrMap, classes: &[String]) -> String {
    let is_reserved = |key: &str| RESERVED.contains(&key);

    let mut tokens: Vec<String> = options
        .iter()
        .filter(|(key, _)| !is_reserved(key.as_str()))
        .map(|(key, value)| format!("{key}=\"{value}\""))
        .chain(classes.iter().filter(|c| !is_reserved(c.as_str())).cloned())
        .collect();
    tokens.sort();

    if tokens.is_empty() {
        String::new()
    } else {
        format!("[{}]", tokens.join(", "))
    }
}

/// Render the LaTeX for a code node.
pub fn render_listing(
    kind: NodeKind,
    settings: &ListingSettings,
    classes: &[String],
    content: &str,
) -> ListingNode {
    let attributes = format_attributes(&settings.options, classes);
    let language = &settings.language;

    let markup = if kind.is_inline() {
        format!("\\mintinline{attributes}{{{language}}}{{{content}}}")
    } else if !settings.caption.long.is_empty() {
        formatdoc!(
            r"
            \begin{{listing}}[{placement}]
            \begin{{minted}}{attributes}{{{language}}}
            {content}
            \end{{minted}}
            \vspace{{-5pt}}
            \caption{short}{{{long}}}
            \end{{listing}}",
            placement = settings.placement,
            attributes = attributes,
            language = language,
            content = content,
            short = settings.caption.short,
            long = settings.caption.long,
        )
    } else {
        formatdoc!(
            r"
            \begin{{minted}}{attributes}{{{language}}}
            {content}
            \end{{minted}}",
            attributes = attributes,
            language = language,
            content = content,
        )
    };

    ListingNode {
        markup,
        inline: kind.is_inline(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Caption;
    use pretty_assertions::assert_eq;

    fn settings(language: &str, caption: &str) -> ListingSettings {
        ListingSettings {
            language: language.to_string(),
            caption: Caption::split(caption),
            placement: "H".to_string(),
            options: AttrMap::new(),
        }
    }

    #[test]
    fn test_format_attributes_sorted_and_filtered() {
        let mut options = AttrMap::new();
        options.insert("linenos".into(), "true".into());
        options.insert("caption".into(), "ignored".into());
        options.insert("fontsize".into(), "\\small".into());
        let classes = vec!["minted".to_string(), "breaklines".to_string()];
        assert_eq!(
            format_attributes(&options, &classes),
            "[breaklines, fontsize=\"\\small\", linenos=\"true\"]"
        );
    }

    #[test]
    fn test_format_attributes_empty() {
        assert_eq!(format_attributes(&AttrMap::new(), &["minted".to_string()]), "");
    }

    #[test]
    fn test_simple_block() {
        let node = render_listing(NodeKind::CodeBlock, &settings("python", ""), &[], "print(1)");
        assert_eq!(
            node.markup,
            "\\begin{minted}{python}\nprint(1)\n\\end{minted}"
        );
        assert!(!node.inline);
    }

    #[test]
    fn test_content_indentation_is_kept() {
        let node = render_listing(
            NodeKind::CodeBlock,
            &settings("python", ""),
            &[],
            "def f():\n    return 1",
        );
        assert_eq!(
            node.markup,
            "\\begin{minted}{python}\ndef f():\n    return 1\n\\end{minted}"
        );
    }

    #[test]
    fn test_captioned_block() {
        let node = render_listing(
            NodeKind::CodeBlock,
            &settings("text", "Example \\autocite{foo}"),
            &[],
            "x",
        );
        assert_eq!(
            node.markup,
            "\\begin{listing}[H]\n\
             \\begin{minted}{text}\n\
             x\n\
             \\end{minted}\n\
             \\vspace{-5pt}\n\
             \\caption[Example]{Example \\autocite{foo}}\n\
             \\end{listing}"
        );
    }

    #[test]
    fn test_inline_code() {
        let node = render_listing(
            NodeKind::Code,
            &settings("rust", "ignored for inline"),
            &["breaklines".to_string()],
            "let x = 1;",
        );
        assert_eq!(node.markup, "\\mintinline[breaklines]{rust}{let x = 1;}");
        assert!(node.inline);
        assert_eq!(node.to_json()["t"], "RawInline");
    }

    #[test]
    fn test_block_json_is_raw_latex() {
        let node = render_listing(NodeKind::CodeBlock, &settings("c", ""), &[], "int x;");
        assert_eq!(
            node.to_json(),
            serde_json::json!({
                "t": "RawBlock",
                "c": ["latex", "\\begin{minted}{c}\nint x;\n\\end{minted}"]
            })
        );
    }
}
