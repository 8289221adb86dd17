/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Convert short markdown snippets (table cells, captions) to the inline
 * content of a Pandoc JSON paragraph.
 *
 * The snippet is parsed with comrak and only its first paragraph-like
 * block is kept, which is what a filter needs when it wraps the result
 * in a Plain block of its own.
 */

mod inline;
mod text;

pub use inline::convert_children_to_inlines;
pub use text::tokenize_text;

use comrak::nodes::NodeValue;
use comrak::{Arena, Options, parse_document};
use serde_json::Value;

/// Parser options close to pandoc's own markdown: `~x~` is subscript,
/// `~~x~~` strikeout, `^x^` superscript, and punctuation is smart.
fn options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.subscript = true;
    options.extension.superscript = true;
    options.parse.smart = true;
    options
}

/// Convert a markdown snippet to Pandoc JSON inlines.
///
/// Returns `None` when the snippet has no content. If the snippet parses
/// to something other than a paragraph or heading (a list marker such as
/// `1.`, a thematic break), its text is kept verbatim instead.
pub fn markdown_to_inlines(markdown: &str) -> Option<Vec<Value>> {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &options());

    let first = root.first_child()?;
    let is_paragraph_like = matches!(
        first.data.borrow().value,
        NodeValue::Paragraph | NodeValue::Heading(_)
    );
    if is_paragraph_like {
        return Some(convert_children_to_inlines(first));
    }

    let trimmed = markdown.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(tokenize_text(trimmed))
    }
}
