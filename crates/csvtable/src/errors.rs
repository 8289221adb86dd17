/*
 * errors.rs
 * Copyright (c) 2025 Posit, PBC
 */

use pandoc_filter::FilterError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvTableError {
    #[error("Cannot open CSV file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid value {value:?} for `{key}`: {reason}")]
    InvalidSetting {
        key: String,
        value: String,
        reason: String,
    },
}

impl From<CsvTableError> for FilterError {
    fn from(err: CsvTableError) -> Self {
        FilterError::transform("CodeBlock", err)
    }
}

pub type Result<T> = std::result::Result<T, CsvTableError>;
