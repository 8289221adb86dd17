/*
 * table.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attr::Attr;
use serde_json::{Value, json};

/// A table cell: the blocks it contains.
pub type CellContent = Vec<Value>;

/// A table row: one entry per cell.
pub type TableRow = Vec<CellContent>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Default,
}

impl Alignment {
    /// Map a one-letter code (`l`, `c`, `r`, either case) to an alignment.
    /// Any other character means [`Alignment::Default`].
    pub fn from_code(code: char) -> Self {
        match code.to_ascii_lowercase() {
            'l' => Alignment::Left,
            'c' => Alignment::Center,
            'r' => Alignment::Right,
            _ => Alignment::Default,
        }
    }

    pub fn to_json(self) -> Value {
        match self {
            Alignment::Left => json!({"t": "AlignLeft"}),
            Alignment::Center => json!({"t": "AlignCenter"}),
            Alignment::Right => json!({"t": "AlignRight"}),
            Alignment::Default => json!({"t": "AlignDefault"}),
        }
    }
}

/// The simple table shape the filters build: per-column formatting, an
/// optional header row and the body rows. Converted to Pandoc's full
/// table structure by [`TableNode::to_json`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableNode {
    pub alignments: Vec<Alignment>,
    /// Relative column widths; `0.0` leaves the width to the writer.
    pub widths: Vec<f64>,
    /// Empty when the table has no header.
    pub header: TableRow,
    pub rows: Vec<TableRow>,
}

impl TableNode {
    /// Number of columns the formatting arrays describe.
    pub fn column_count(&self) -> usize {
        self.alignments.len()
    }

    pub fn to_json(&self) -> Value {
        let empty_attr = Attr::empty().to_json();

        let colspecs: Vec<Value> = self
            .alignments
            .iter()
            .zip(&self.widths)
            .map(|(align, width)| json!([align.to_json(), write_colwidth(*width)]))
            .collect();

        let head_rows: Vec<Value> = if self.header.is_empty() {
            vec![]
        } else {
            vec![write_row(&self.header)]
        };

        let body_rows: Vec<Value> = self.rows.iter().map(write_row).collect();

        json!({
            "t": "Table",
            "c": [
                empty_attr,
                [null, []],
                colspecs,
                [empty_attr, head_rows],
                [[empty_attr, 0, [], body_rows]],
                [empty_attr, []]
            ]
        })
    }
}

fn write_colwidth(width: f64) -> Value {
    if width == 0.0 {
        json!({"t": "ColWidthDefault"})
    } else {
        json!({"t": "ColWidth", "c": width})
    }
}

// [attr, alignment, rowSpan, colSpan, content]
fn write_cell(cell: &CellContent) -> Value {
    json!([
        Attr::empty().to_json(),
        Alignment::Default.to_json(),
        1,
        1,
        cell
    ])
}

// [attr, cells]
fn write_row(row: &TableRow) -> Value {
    json!([
        Attr::empty().to_json(),
        row.iter().map(write_cell).collect::<Vec<_>>()
    ])
}
