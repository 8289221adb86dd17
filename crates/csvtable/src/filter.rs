/*
 * filter.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::converter::{ComrakConverter, MarkdownConverter};
use crate::errors::Result;
use crate::settings::TableSettings;
use crate::source::open_source;
use crate::table::build_table;
use pandoc_filter::node::Replacement;
use pandoc_filter::walk::NodeFilter;
use pandoc_filter::{CodePayload, FilterContext, Metadata, NodeKind, TableNode};
use serde_json::Value;

/// The class that marks a code block as CSV data.
pub const TABLE_CLASS: &str = "table";

/// Does the filter apply to this node? Only code blocks carrying the
/// `table` class do.
pub fn check_preconditions(tag: &str, content: &Value) -> bool {
    NodeKind::from_tag(tag) == Some(NodeKind::CodeBlock)
        && content[0][1]
            .as_array()
            .is_some_and(|classes| classes.iter().any(|c| c == TABLE_CLASS))
}

/// The CSV table filter.
#[derive(Debug, Clone, Default)]
pub struct CsvTable<C = ComrakConverter> {
    converter: C,
}

impl<C: MarkdownConverter> CsvTable<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    /// Build the table for a `table` code block.
    ///
    /// A remote source that cannot be downloaded yields an empty table;
    /// a missing local file is an error.
    pub fn table(
        &self,
        block: &CodePayload,
        meta: &Metadata,
        ctx: &mut FilterContext,
    ) -> Result<TableNode> {
        let attrs = block.attr.normalize();
        let settings = TableSettings::resolve(&attrs, meta)?;
        tracing::debug!(source = ?settings.source, header = settings.header, "building table");

        match open_source(&settings.source, &block.text, ctx)? {
            Some(input) => build_table(input, &settings, &self.converter),
            None => Ok(TableNode {
                alignments: Vec::new(),
                widths: Vec::new(),
                header: Vec::new(),
                rows: Vec::new(),
            }),
        }
    }
}

impl<C: MarkdownConverter> NodeFilter for CsvTable<C> {
    fn apply(
        &self,
        tag: &str,
        content: &Value,
        _format: &str,
        meta: &Metadata,
        ctx: &mut FilterContext,
    ) -> pandoc_filter::Result<Option<Replacement>> {
        if !check_preconditions(tag, content) {
            return Ok(None);
        }
        let block = CodePayload::from_json(NodeKind::CodeBlock, content)?;
        let table = self.table(&block, meta, ctx)?;
        Ok(Some(vec![table.to_json()]))
    }
}
