/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Include CSV data as Pandoc tables.
//!
//! A code block with the class `table` is replaced by a table built from
//! CSV: the block's own text, a local file (`file=`) or a remote URL
//! (`url=`). Attributes on the block control the CSV dialect, the header
//! row and per-column alignment and width:
//!
//! ````markdown
//! ```{.table header=yes align=lc width="0.3 0.7"}
//! Name,Description
//! *foo*,the first
//! ```
//! ````

pub mod converter;
pub mod errors;
pub mod filter;
pub mod settings;
pub mod source;
pub mod table;

pub use converter::{ComrakConverter, MarkdownConverter};
pub use errors::CsvTableError;
pub use filter::{CsvTable, check_preconditions};
pub use settings::{Source, TableSettings};
