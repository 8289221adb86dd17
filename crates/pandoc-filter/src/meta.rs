/*
 * meta.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Read-only access to document metadata as filters see it.
//!
//! Pandoc serializes metadata as tagged `MetaValue`s. Filters only ever
//! want strings, lists of strings or a yes/no answer, so the accessors
//! here flatten the tagged values on the way out.

use crate::node::stringify;
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    entries: Map<String, Value>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `meta` object of a Pandoc JSON document. Anything
    /// that isn't an object is treated as empty metadata.
    pub fn from_json(meta: &Value) -> Self {
        Self {
            entries: meta.as_object().cloned().unwrap_or_default(),
        }
    }

    /// Build metadata whose values are all `MetaString`s.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), json!({"t": "MetaString", "c": v.into()})))
            .collect();
        Self { entries }
    }

    /// Insert a raw `MetaValue`.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// The value under `key` flattened to text. Lists and maps have no
    /// string form and yield `None`.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).and_then(meta_to_string)
    }

    /// The value under `key` as a list of strings. A scalar value is a
    /// one-element list.
    pub fn get_list(&self, key: &str) -> Option<Vec<String>> {
        let value = self.get(key)?;
        match meta_tag(value) {
            Some(("MetaList", Value::Array(items))) => {
                Some(items.iter().filter_map(meta_to_string).collect())
            }
            _ => meta_to_string(value).map(|s| vec![s]),
        }
    }

    pub fn is_truthy(&self, key: &str) -> bool {
        match self.get(key).and_then(meta_tag) {
            None => false,
            Some(("MetaBool", Value::Bool(b))) => *b,
            Some(("MetaList", Value::Array(items))) => !items.is_empty(),
            Some(("MetaMap", Value::Object(map))) => !map.is_empty(),
            Some(_) => self
                .get_str(key)
                .is_some_and(|s| crate::settings::parse_flag(&s)),
        }
    }
}

fn meta_tag(value: &Value) -> Option<(&str, &Value)> {
    let t = value.get("t")?.as_str()?;
    Some((t, value.get("c").unwrap_or(&Value::Null)))
}

fn meta_to_string(value: &Value) -> Option<String> {
    match meta_tag(value)? {
        ("MetaString", Value::String(s)) => Some(s.clone()),
        ("MetaBool", Value::Bool(b)) => Some(b.to_string()),
        ("MetaInlines", content) | ("MetaBlocks", content) => Some(stringify(content)),
        _ => None,
    }
}
