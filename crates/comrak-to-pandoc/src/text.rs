/*
 * text.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Text tokenization: comrak keeps a run of text as one node, Pandoc
 * splits it into Str and Space tokens.
 */

use serde_json::{Value, json};

/// Tokenize a text string into Pandoc inlines.
///
/// Runs of whitespace collapse to a single `Space`, including leading
/// and trailing runs, since the text may sit next to other inlines.
pub fn tokenize_text(text: &str) -> Vec<Value> {
    let mut result = Vec::new();
    let mut word = String::new();
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            if !word.is_empty() {
                result.push(json!({"t": "Str", "c": std::mem::take(&mut word)}));
            }
            pending_space = true;
        } else {
            if pending_space {
                result.push(json!({"t": "Space"}));
                pending_space = false;
            }
            word.push(c);
        }
    }

    if !word.is_empty() {
        result.push(json!({"t": "Str", "c": word}));
    }
    if pending_space {
        result.push(json!({"t": "Space"}));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        assert_eq!(
            tokenize_text("a  b"),
            vec![json!({"t": "Str", "c": "a"}), json!({"t": "Space"}), json!({"t": "Str", "c": "b"})]
        );
    }

    #[test]
    fn test_edge_whitespace() {
        assert_eq!(
            tokenize_text(" a "),
            vec![json!({"t": "Space"}), json!({"t": "Str", "c": "a"}), json!({"t": "Space"})]
        );
        assert_eq!(tokenize_text("   "), vec![json!({"t": "Space"})]);
        assert!(tokenize_text("").is_empty());
    }
}
