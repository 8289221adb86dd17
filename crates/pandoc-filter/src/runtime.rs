/*
 * runtime.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The stdin-to-stdout side of a Pandoc JSON filter.

use crate::errors::{FilterError, Result};
use crate::filter_context::FilterContext;
use crate::meta::Metadata;
use crate::walk::{NodeFilter, walk};
use serde_json::Value;
use std::io::{Read, Write};

/// Read a Pandoc JSON document from `input`, apply `filter` to every
/// node and write the result to `output`.
///
/// The document's own `meta` is handed to the filter for every node.
/// Diagnostics collected along the way are returned rather than printed,
/// so the caller decides where they go.
pub fn run_filter<F, R, W>(filter: &F, format: &str, input: R, output: W) -> Result<FilterContext>
where
    F: NodeFilter + ?Sized,
    R: Read,
    W: Write,
{
    let mut ctx = FilterContext::new();
    filter_document(filter, format, input, output, &mut ctx)?;
    Ok(ctx)
}

/// Like [`run_filter`], but write the diagnostics to `diagnostics`, one
/// line each. They are written even when a later node aborts the run.
pub fn run_filter_reporting<F, R, W, D>(
    filter: &F,
    format: &str,
    input: R,
    output: W,
    mut diagnostics: D,
) -> Result<()>
where
    F: NodeFilter + ?Sized,
    R: Read,
    W: Write,
    D: Write,
{
    let mut ctx = FilterContext::new();
    let result = filter_document(filter, format, input, output, &mut ctx);
    ctx.report(&mut diagnostics)?;
    result
}

fn filter_document<F, R, W>(
    filter: &F,
    format: &str,
    input: R,
    mut output: W,
    ctx: &mut FilterContext,
) -> Result<()>
where
    F: NodeFilter + ?Sized,
    R: Read,
    W: Write,
{
    let doc: Value = serde_json::from_reader(input)?;
    if !doc.is_object() {
        return Err(FilterError::other(
            "expected a Pandoc document object at the top level",
        ));
    }
    if doc.get("blocks").is_none() {
        return Err(FilterError::MissingField("blocks".to_string()));
    }
    let meta = Metadata::from_json(doc.get("meta").unwrap_or(&Value::Null));

    let altered = walk(doc, filter, format, &meta, ctx)?;
    tracing::debug!(
        diagnostics = ctx.diagnostics().len(),
        "filter finished"
    );

    serde_json::to_writer(&mut output, &altered)?;
    output.write_all(b"\n")?;
    output.flush()?;
    Ok(())
}
