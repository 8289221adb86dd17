/*
 * errors.rs
 * Copyright (c) 2025 Posit, PBC
 */

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Malformed {node} node: {reason}")]
    MalformedNode { node: String, reason: String },

    #[error("{node} transform failed: {source}")]
    Transform {
        node: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{0}")]
    Other(String),
}

impl FilterError {
    pub fn malformed(node: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedNode {
            node: node.into(),
            reason: reason.into(),
        }
    }

    /// Wrap a filter-specific failure raised while rewriting `node`.
    pub fn transform(
        node: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transform {
            node: node.into(),
            source: Box::new(source),
        }
    }

    /// Create an error from any message.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
