/*
 * attr.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::errors::{FilterError, Result};
use hashlink::LinkedHashMap;
use serde_json::{Value, json};

/// Key-value attributes of a node after normalization.
pub type AttrMap = LinkedHashMap<String, String>;

/// Pandoc's attribute triple: `[id, [classes], [[key, value], ...]]`.
///
/// `attributes` keeps the raw pair list as the parser produced it,
/// duplicates included. Use [`Attr::normalize`] to get a lookup map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attr {
    pub id: String,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
}

impl Attr {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Turn the raw pair list into a map. Later pairs win over earlier
    /// ones with the same key.
    pub fn normalize(&self) -> AttrMap {
        let mut map = AttrMap::new();
        for (key, value) in &self.attributes {
            map.insert(key.clone(), value.clone());
        }
        map
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        let parts = value
            .as_array()
            .ok_or_else(|| FilterError::malformed("Attr", "expected an array"))?;
        let [id, classes, attributes] = parts.as_slice() else {
            return Err(FilterError::malformed(
                "Attr",
                format!("expected 3 elements, got {}", parts.len()),
            ));
        };

        let id = id
            .as_str()
            .ok_or_else(|| FilterError::malformed("Attr", "id is not a string"))?
            .to_string();

        let classes = classes
            .as_array()
            .ok_or_else(|| FilterError::malformed("Attr", "classes is not an array"))?
            .iter()
            .map(|c| {
                c.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| FilterError::malformed("Attr", "class is not a string"))
            })
            .collect::<Result<Vec<_>>>()?;

        let attributes = attributes
            .as_array()
            .ok_or_else(|| FilterError::malformed("Attr", "attributes is not an array"))?
            .iter()
            .map(read_pair)
            .collect::<Result<Vec<_>>>()?;

        Ok(Attr {
            id,
            classes,
            attributes,
        })
    }

    pub fn to_json(&self) -> Value {
        json!([
            self.id,
            self.classes,
            self.attributes
                .iter()
                .map(|(k, v)| json!([k, v]))
                .collect::<Vec<_>>()
        ])
    }
}

fn read_pair(pair: &Value) -> Result<(String, String)> {
    match pair.as_array().map(Vec::as_slice) {
        Some([Value::String(k), Value::String(v)]) => Ok((k.clone(), v.clone())),
        _ => Err(FilterError::malformed(
            "Attr",
            "key-value pair is not a [string, string] array",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let attr = Attr::from_json(&json!(["id1", ["table", "x"], [["header", "true"]]])).unwrap();
        assert_eq!(attr.id, "id1");
        assert_eq!(attr.classes, vec!["table", "x"]);
        assert_eq!(
            attr.attributes,
            vec![("header".to_string(), "true".to_string())]
        );
        assert!(attr.has_class("table"));
        assert!(!attr.has_class("minted"));
    }

    #[test]
    fn test_json_roundtrip_preserves_duplicates() {
        let raw = json!(["", [], [["a", "1"], ["a", "2"]]]);
        let attr = Attr::from_json(&raw).unwrap();
        assert_eq!(attr.to_json(), raw);
    }

    #[test]
    fn test_normalize_last_write_wins() {
        let attr = Attr {
            attributes: vec![
                ("width".into(), "0.5".into()),
                ("align".into(), "l".into()),
                ("width".into(), "0.25".into()),
            ],
            ..Attr::empty()
        };
        let map = attr.normalize();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("width").map(String::as_str), Some("0.25"));
        assert_eq!(map.get("align").map(String::as_str), Some("l"));
    }

    #[test]
    fn test_malformed_attr() {
        assert!(Attr::from_json(&json!("nope")).is_err());
        assert!(Attr::from_json(&json!(["", []])).is_err());
        assert!(Attr::from_json(&json!(["", [1], []])).is_err());
        assert!(Attr::from_json(&json!(["", [], [["k"]]])).is_err());
    }
}
