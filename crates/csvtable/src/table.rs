/*
 * table.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::converter::MarkdownConverter;
use crate::errors::Result;
use crate::settings::TableSettings;
use pandoc_filter::node::plain;
use pandoc_filter::settings::Pad;
use pandoc_filter::table::{CellContent, TableRow};
use pandoc_filter::{Alignment, TableNode};
use std::io::Read;

/// Read CSV from `input` and build the table it describes.
///
/// The column count is taken from the first body row, or from the header
/// when there are no body rows, and the alignment and width arrays are
/// padded or cut to it. Rows of other lengths are kept as they are.
pub fn build_table<R: Read, C: MarkdownConverter + ?Sized>(
    input: R,
    settings: &TableSettings,
    converter: &C,
) -> Result<TableNode> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(settings.delimiter)
        .quote(settings.quote)
        .from_reader(input);
    let mut records = reader.records();

    let header = if settings.header {
        records
            .next()
            .transpose()?
            .map(|record| format_row(&record, converter))
            .unwrap_or_default()
    } else {
        Vec::new()
    };
    let rows = collect_rows(records, converter)?;
    Ok(assemble(header, rows, settings))
}

fn collect_rows<C: MarkdownConverter + ?Sized>(
    records: impl Iterator<Item = csv::Result<csv::StringRecord>>,
    converter: &C,
) -> Result<Vec<TableRow>> {
    records
        .map(|record| Ok(format_row(&record?, converter)))
        .collect()
}

fn assemble(header: TableRow, rows: Vec<TableRow>, settings: &TableSettings) -> TableNode {
    let columns = rows.first().map_or(header.len(), Vec::len);
    if rows.iter().any(|row| row.len() != columns) {
        tracing::debug!(columns, "CSV rows have differing lengths");
    }

    TableNode {
        alignments: alignments(&settings.alignment, columns),
        widths: widths(&settings.width, columns),
        header,
        rows,
    }
}

fn format_row<C: MarkdownConverter + ?Sized>(record: &csv::StringRecord, converter: &C) -> TableRow {
    record.iter().map(|field| format_cell(field, converter)).collect()
}

/// A cell is a single Plain block with the converted text, or nothing.
pub fn format_cell<C: MarkdownConverter + ?Sized>(text: &str, converter: &C) -> CellContent {
    converter
        .convert(text)
        .map(|inlines| vec![plain(inlines)])
        .unwrap_or_default()
}

/// One alignment per column, from a string of one-letter codes.
pub fn alignments(codes: &str, columns: usize) -> Vec<Alignment> {
    codes
        .to_string()
        .pad(columns, 'd')
        .chars()
        .map(Alignment::from_code)
        .collect()
}

/// One width per column, from space-separated numbers. Anything that
/// isn't a finite number counts as 0.0.
pub fn widths(values: &str, columns: usize) -> Vec<f64> {
    values
        .split(' ')
        .map(|token| {
            token
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite())
                .unwrap_or(0.0)
        })
        .collect::<Vec<_>>()
        .pad(columns, 0.0)
}
