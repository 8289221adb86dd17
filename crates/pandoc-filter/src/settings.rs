/*
 * settings.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Primitives for resolving per-node settings.
//!
//! A setting is looked up under one or more alias keys, first among the
//! node's own attributes and then in document metadata, before falling
//! back to a default.

use crate::attr::AttrMap;
use crate::meta::Metadata;

/// Resolves settings for one node from its attributes and, optionally,
/// document metadata.
///
/// Metadata keys are the attribute aliases with `meta_prefix` prepended,
/// so `Lookup::new(&attrs).with_meta(&meta, "minted-")` finds `language`
/// on the block or `minted-language` in the document.
#[derive(Debug, Clone, Copy)]
pub struct Lookup<'a> {
    attrs: &'a AttrMap,
    meta: Option<&'a Metadata>,
    meta_prefix: &'a str,
}

impl<'a> Lookup<'a> {
    pub fn new(attrs: &'a AttrMap) -> Self {
        Self {
            attrs,
            meta: None,
            meta_prefix: "",
        }
    }

    pub fn with_meta(self, meta: &'a Metadata, meta_prefix: &'a str) -> Self {
        Self {
            meta: Some(meta),
            meta_prefix,
            ..self
        }
    }

    /// First alias present in the attributes; failing that, the first
    /// alias present in metadata.
    pub fn get(&self, keys: &[&str]) -> Option<String> {
        if let Some(value) = keys.iter().find_map(|key| self.attrs.get(*key)) {
            return Some(value.clone());
        }
        let meta = self.meta?;
        keys.iter()
            .find_map(|key| meta.get_str(&format!("{}{}", self.meta_prefix, key)))
    }

    pub fn get_or(&self, keys: &[&str], default: &str) -> String {
        self.get(keys).unwrap_or_else(|| default.to_string())
    }

    pub fn flag(&self, keys: &[&str]) -> bool {
        self.get(keys).is_some_and(|v| parse_flag(&v))
    }
}

/// Remove the first alias present in `attrs`.
///
/// Returns the removed value together with the remaining attributes; the
/// input map is left untouched.
pub fn take(keys: &[&str], attrs: &AttrMap) -> (Option<String>, AttrMap) {
    let mut remaining = attrs.clone();
    let value = keys.iter().find_map(|key| remaining.remove(*key));
    (value, remaining)
}

/// Interpret an attribute value as a boolean. Empty values and the usual
/// spellings of "no" are false, everything else is true.
pub fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty()
        || ["false", "no", "0", "off"]
            .iter()
            .any(|f| value.eq_ignore_ascii_case(f)))
}

/// Pad or truncate a sequence to an exact length.
///
/// The pad value must be an element of the sequence: characters for a
/// `String`, `T` for a `Vec<T>`.
pub trait Pad: Sized {
    type Item;

    fn pad(self, len: usize, value: Self::Item) -> Self;
}

impl<T: Clone> Pad for Vec<T> {
    type Item = T;

    fn pad(mut self, len: usize, value: T) -> Self {
        self.resize(len, value);
        self
    }
}

impl Pad for String {
    type Item = char;

    fn pad(self, len: usize, value: char) -> Self {
        if self.chars().count() == len {
            return self;
        }
        self.chars()
            .chain(std::iter::repeat(value))
            .take(len)
            .collect()
    }
}
