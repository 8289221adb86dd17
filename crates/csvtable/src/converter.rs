/*
 * converter.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde_json::Value;

/// Turns the raw text of a cell into Pandoc inlines.
pub trait MarkdownConverter {
    /// `None` when the text has no content at all.
    fn convert(&self, markdown: &str) -> Option<Vec<Value>>;
}

/// Parses cells as CommonMark with comrak.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComrakConverter;

impl MarkdownConverter for ComrakConverter {
    fn convert(&self, markdown: &str) -> Option<Vec<Value>> {
        comrak_to_pandoc::markdown_to_inlines(markdown)
    }
}
