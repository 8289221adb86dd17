/*
 * settings.rs
 * Copyright (c) 2025 Posit, PBC
 */

use pandoc_filter::settings::take;
use pandoc_filter::{AttrMap, Metadata};

const CITE_MARKER: &str = "\\autocite";

/// A listing caption. `short` is either empty or already bracketed, ready
/// to be used as the optional argument of `\caption`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caption {
    pub long: String,
    pub short: String,
}

impl Caption {
    /// Citations don't belong in the list of listings, so a caption with
    /// exactly one `\autocite` gets the text before it as short caption.
    pub fn split(text: &str) -> Self {
        let short = match text.split_once(CITE_MARKER) {
            Some((before, after)) if !after.contains(CITE_MARKER) => {
                format!("[{}]", before.trim())
            }
            _ => String::new(),
        };
        Caption {
            long: text.to_string(),
            short,
        }
    }
}

/// Settings for one code block or inline code span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSettings {
    pub language: String,
    pub caption: Caption,
    /// Float placement of captioned listings
    pub placement: String,
    /// Attributes left over once the settings above are taken out; they
    /// become minted options.
    pub options: AttrMap,
}

impl ListingSettings {
    pub fn resolve(attrs: &AttrMap, meta: &Metadata) -> Self {
        let (language, rest) = take(&["language"], attrs);
        let (caption, options) = take(&["caption"], &rest);

        let language = language
            .filter(|l| !l.is_empty())
            .or_else(|| meta.get_str("minted-language"))
            .unwrap_or_else(|| "text".to_string());
        let placement = meta
            .get_str("minted-figure")
            .unwrap_or_else(|| "H".to_string());

        ListingSettings {
            language,
            caption: Caption::split(&caption.unwrap_or_default()),
            placement,
            options,
        }
    }
}
