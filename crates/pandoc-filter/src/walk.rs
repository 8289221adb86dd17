/*
 * walk.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Per-node dispatch over a Pandoc JSON document.

use crate::errors::Result;
use crate::filter_context::FilterContext;
use crate::meta::Metadata;
use crate::node::Replacement;
use serde_json::{Map, Value};

/// A filter's per-node decision.
///
/// Called for every node (any object with a string `t`) that sits in a
/// list. Returning `Ok(None)` keeps the node and descends into it;
/// `Ok(Some(nodes))` splices `nodes` in its place.
pub trait NodeFilter {
    fn apply(
        &self,
        tag: &str,
        content: &Value,
        format: &str,
        meta: &Metadata,
        ctx: &mut FilterContext,
    ) -> Result<Option<Replacement>>;
}

impl<F> NodeFilter for F
where
    F: Fn(&str, &Value, &str, &Metadata, &mut FilterContext) -> Result<Option<Replacement>>,
{
    fn apply(
        &self,
        tag: &str,
        content: &Value,
        format: &str,
        meta: &Metadata,
        ctx: &mut FilterContext,
    ) -> Result<Option<Replacement>> {
        self(tag, content, format, meta, ctx)
    }
}

/// Walk `value` depth-first, offering each node in a list to `filter`.
///
/// Replacement nodes are walked as well, so a filter must not produce a
/// node it would match again.
pub fn walk<F: NodeFilter + ?Sized>(
    value: Value,
    filter: &F,
    format: &str,
    meta: &Metadata,
    ctx: &mut FilterContext,
) -> Result<Value> {
    match value {
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                let replacement = match node_tag(&item) {
                    Some(tag) => {
                        let content = item.get("c").unwrap_or(&Value::Null);
                        filter.apply(tag, content, format, meta, ctx)?
                    }
                    None => None,
                };
                match replacement {
                    None => out.push(walk(item, filter, format, meta, ctx)?),
                    Some(nodes) => {
                        for node in nodes {
                            out.push(walk(node, filter, format, meta, ctx)?);
                        }
                    }
                }
            }
            Ok(Value::Array(out))
        }
        Value::Object(obj) => {
            let mut out = Map::with_capacity(obj.len());
            for (key, child) in obj {
                out.insert(key, walk(child, filter, format, meta, ctx)?);
            }
            Ok(Value::Object(out))
        }
        other => Ok(other),
    }
}

fn node_tag(value: &Value) -> Option<&str> {
    value.as_object()?.get("t")?.as_str()
}
