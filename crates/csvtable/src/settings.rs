/*
 * settings.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::errors::{CsvTableError, Result};
use pandoc_filter::settings::Lookup;
use pandoc_filter::{AttrMap, Metadata};
use std::path::PathBuf;

/// Document metadata keys for table settings carry this prefix, e.g.
/// `csvtable-delimiter: ";"` in the YAML header.
pub const META_PREFIX: &str = "csvtable-";

const SOURCE_KEYS: &[&str] = &["url", "file"];
const DELIMITER_KEYS: &[&str] = &["delimiter"];
const QUOTE_KEYS: &[&str] = &["quotechar", "quote_char"];
const HEADER_KEYS: &[&str] = &["header", "headers"];
const ALIGN_KEYS: &[&str] = &["align", "aligns", "alignment", "alignments"];
const WIDTH_KEYS: &[&str] = &["width", "widths"];

/// Where the CSV text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The code block's own text
    Inline,
    File(PathBuf),
    Url(String),
}

impl Source {
    pub fn from_locator(locator: &str) -> Self {
        if locator.starts_with("http") {
            Source::Url(locator.to_string())
        } else if locator.is_empty() {
            Source::Inline
        } else {
            Source::File(PathBuf::from(locator))
        }
    }
}

/// Everything needed to turn one code block into a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSettings {
    pub source: Source,
    pub delimiter: u8,
    pub quote: u8,
    pub header: bool,
    /// One alignment code per column (`l`, `c`, `r`, anything else = default)
    pub alignment: String,
    /// Space-separated relative column widths
    pub width: String,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            source: Source::Inline,
            delimiter: b',',
            quote: b'"',
            header: false,
            alignment: String::new(),
            width: String::new(),
        }
    }
}

impl TableSettings {
    /// Resolve settings from the block's attributes, then document
    /// metadata, then defaults. The data source is only ever taken from
    /// the block itself.
    pub fn resolve(attrs: &AttrMap, meta: &Metadata) -> Result<Self> {
        let source = Source::from_locator(&Lookup::new(attrs).get_or(SOURCE_KEYS, ""));
        let lookup = Lookup::new(attrs).with_meta(meta, META_PREFIX);

        let delimiter = match lookup.get(DELIMITER_KEYS) {
            Some(value) => single_byte("delimiter", &value)?,
            None => b',',
        };
        let quote = match lookup.get(QUOTE_KEYS) {
            Some(value) => single_byte("quotechar", &value)?,
            None => b'"',
        };

        Ok(TableSettings {
            source,
            delimiter,
            quote,
            header: lookup.flag(HEADER_KEYS),
            alignment: lookup.get_or(ALIGN_KEYS, ""),
            width: lookup.get_or(WIDTH_KEYS, ""),
        })
    }
}

/// The CSV reader works on single ASCII bytes. `\t` and `tab` spell a tab.
fn single_byte(key: &str, value: &str) -> Result<u8> {
    if value == "\\t" || value.eq_ignore_ascii_case("tab") {
        return Ok(b'\t');
    }
    let invalid = |reason: &str| CsvTableError::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        (Some(_), None) => Err(invalid("must be an ASCII character")),
        _ => Err(invalid("must be a single character")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> AttrMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let settings = TableSettings::resolve(&AttrMap::new(), &Metadata::new()).unwrap();
        assert_eq!(settings, TableSettings::default());
    }

    #[test]
    fn test_source_from_locator() {
        assert_eq!(Source::from_locator(""), Source::Inline);
        assert_eq!(
            Source::from_locator("https://example.com/a.csv"),
            Source::Url("https://example.com/a.csv".to_string())
        );
        assert_eq!(
            Source::from_locator("data/a.csv"),
            Source::File(PathBuf::from("data/a.csv"))
        );
    }

    #[test]
    fn test_aliases() {
        let a = attrs(&[
            ("file", "x.csv"),
            ("quote_char", "'"),
            ("headers", "true"),
            ("alignments", "rl"),
            ("widths", "0.2 0.8"),
            ("delimiter", ";"),
        ]);
        let settings = TableSettings::resolve(&a, &Metadata::new()).unwrap();
        assert_eq!(settings.source, Source::File(PathBuf::from("x.csv")));
        assert_eq!(settings.quote, b'\'');
        assert_eq!(settings.delimiter, b';');
        assert!(settings.header);
        assert_eq!(settings.alignment, "rl");
        assert_eq!(settings.width, "0.2 0.8");
    }

    #[test]
    fn test_url_alias_comes_first() {
        let a = attrs(&[("file", "x.csv"), ("url", "http://h/x.csv")]);
        let settings = TableSettings::resolve(&a, &Metadata::new()).unwrap();
        assert_eq!(settings.source, Source::Url("http://h/x.csv".to_string()));
    }

    #[test]
    fn test_metadata_defaults_and_precedence() {
        let meta = Metadata::from_pairs([
            ("csvtable-delimiter", ";"),
            ("csvtable-header", "yes"),
            ("csvtable-align", "c"),
            ("csvtable-file", "ignored.csv"),
        ]);
        let settings = TableSettings::resolve(&attrs(&[("align", "r")]), &meta).unwrap();
        assert_eq!(settings.delimiter, b';');
        assert!(settings.header);
        assert_eq!(settings.alignment, "r");
        assert_eq!(settings.source, Source::Inline);
    }

    #[test]
    fn test_tab_delimiter() {
        for spelling in ["\\t", "tab", "\t"] {
            let settings =
                TableSettings::resolve(&attrs(&[("delimiter", spelling)]), &Metadata::new())
                    .unwrap();
            assert_eq!(settings.delimiter, b'\t');
        }
    }

    #[test]
    fn test_invalid_delimiter() {
        for bad in ["", ";;", "§"] {
            let err = TableSettings::resolve(&attrs(&[("delimiter", bad)]), &Metadata::new())
                .unwrap_err();
            assert!(matches!(err, CsvTableError::InvalidSetting { .. }), "{bad:?}");
        }
    }
}
