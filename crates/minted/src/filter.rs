/*
 * filter.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::listing::{ListingNode, render_listing};
use crate::settings::ListingSettings;
use pandoc_filter::node::Replacement;
use pandoc_filter::walk::NodeFilter;
use pandoc_filter::{CodePayload, FilterContext, Metadata, NodeKind};
use serde_json::Value;

/// Classes that are left to other filters unless `minted-exclude` says
/// otherwise.
pub const DEFAULT_EXCLUDE: &[&str] = &["table", "ditaa", "plantuml"];

/// Marker class for opting in when `minted-class` is set.
pub const MINTED_CLASS: &str = "minted";

/// Does the filter apply to this node?
///
/// Code blocks and inline code qualify unless they carry an excluded
/// class. With `minted-class` set, blocks must also opt in with the
/// `minted` class; inline code never needs to.
pub fn check_preconditions(tag: &str, content: &Value, meta: &Metadata) -> bool {
    let Some(kind) = NodeKind::from_tag(tag) else {
        return false;
    };
    let classes: Vec<&str> = content[0][1]
        .as_array()
        .map(|cs| cs.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let excluded = match meta.get_list("minted-exclude") {
        Some(list) => classes.iter().any(|c| list.iter().any(|e| e.as_str() == *c)),
        None => classes.iter().any(|c| DEFAULT_EXCLUDE.contains(c)),
    };
    if excluded {
        return false;
    }

    !meta.is_truthy("minted-class") || classes.contains(&MINTED_CLASS) || kind.is_inline()
}

/// The minted listing filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minted;

impl Minted {
    pub fn listing(&self, kind: NodeKind, code: &CodePayload, meta: &Metadata) -> ListingNode {
        let settings = ListingSettings::resolve(&code.attr.normalize(), meta);
        tracing::debug!(
            kind = kind.tag(),
            language = %settings.language,
            captioned = !settings.caption.long.is_empty(),
            "rendering listing"
        );
        render_listing(kind, &settings, &code.attr.classes, &code.text)
    }
}

impl NodeFilter for Minted {
    fn apply(
        &self,
        tag: &str,
        content: &Value,
        _format: &str,
        meta: &Metadata,
        _ctx: &mut FilterContext,
    ) -> pandoc_filter::Result<Option<Replacement>> {
        if !check_preconditions(tag, content, meta) {
            return Ok(None);
        }
        let Some(kind) = NodeKind::from_tag(tag) else {
            return Ok(None);
        };
        let code = CodePayload::from_json(kind, content)?;
        Ok(Some(vec![self.listing(kind, &code, meta).to_json()]))
    }
}
