/*
 * source.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Acquire the CSV text for a table.
//!
//! Each source is opened as a reader owned by the caller. Files and
//! response bodies are closed when that reader is dropped, which happens
//! on every path out of the table builder, errors included.

use crate::errors::{CsvTableError, Result};
use crate::settings::Source;
use pandoc_filter::FilterContext;
use std::fs::File;
use std::io::Read;
use ureq::{Agent, BodyReader};

/// Open the CSV data for a block.
///
/// `Ok(None)` means a remote source could not be downloaded; a diagnostic
/// has been recorded in `ctx` and the caller should build an empty table.
pub fn open_source<'a>(
    source: &Source,
    inline: &'a str,
    ctx: &mut FilterContext,
) -> Result<Option<Box<dyn Read + 'a>>> {
    match source {
        Source::Inline => Ok(Some(Box::new(inline.as_bytes()))),
        Source::File(path) => {
            let file = File::open(path).map_err(|source| CsvTableError::OpenFile {
                path: path.clone(),
                source,
            })?;
            Ok(Some(Box::new(file)))
        }
        Source::Url(url) => Ok(fetch(url, ctx).map(|r| Box::new(r) as Box<dyn Read + 'a>)),
    }
}

fn create_agent() -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .into()
}

fn download_failed(url: &str, ctx: &mut FilterContext) {
    ctx.warn(format!("CsvTable - Couldn't download: {url}"));
}

fn fetch(url: &str, ctx: &mut FilterContext) -> Option<BodyReader<'static>> {
    let response = match create_agent().get(url).call() {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(url, error = %e, "request failed");
            download_failed(url, ctx);
            return None;
        }
    };

    let status = response.status().as_u16();
    if status >= 400 {
        tracing::debug!(url, status, "unexpected HTTP status");
        download_failed(url, ctx);
        return None;
    }

    tracing::debug!(url, status, "downloaded CSV");
    Some(response.into_body().into_reader())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_subscriber::layer::{self, Layer, SubscriberExt};

    fn read_all(mut reader: Box<dyn Read + '_>) -> String {
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_inline_source() {
        let mut ctx = FilterContext::new();
        let reader = open_source(&Source::Inline, "a,b\n1,2", &mut ctx)
            .unwrap()
            .unwrap();
        assert_eq!(read_all(reader), "a,b\n1,2");
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x;y").unwrap();
        let mut ctx = FilterContext::new();
        let source = Source::File(file.path().to_path_buf());
        let reader = open_source(&source, "ignored", &mut ctx).unwrap().unwrap();
        assert_eq!(read_all(reader), "x;y\n");
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let mut ctx = FilterContext::new();
        let source = Source::File(PathBuf::from("/definitely/not/here.csv"));
        let err = open_source(&source, "", &mut ctx).err().unwrap();
        assert!(matches!(err, CsvTableError::OpenFile { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }

    #[test]
    fn test_unreachable_url_degrades() {
        let mut ctx = FilterContext::new();
        let url = "http://127.0.0.1:1/data.csv";
        let source = Source::Url(url.to_string());
        let reader = open_source(&source, "ignored", &mut ctx).unwrap();
        assert!(reader.is_none());
        assert_eq!(
            ctx.diagnostics()[0].message,
            format!("CsvTable - Couldn't download: {url}")
        );
    }

    /// Counts events at WARN or above.
    struct LoudEvents(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for LoudEvents {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: layer::Context<'_, S>) {
            if *event.metadata().level() <= tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_failed_download_only_logs_at_debug() {
        let loud = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(LoudEvents(loud.clone()));

        let mut ctx = FilterContext::new();
        tracing::subscriber::with_default(subscriber, || {
            let source = Source::Url("http://127.0.0.1:1/data.csv".to_string());
            assert!(open_source(&source, "", &mut ctx).unwrap().is_none());
        });

        assert_eq!(ctx.diagnostics().len(), 1);
        assert_eq!(loud.load(Ordering::SeqCst), 0);
    }
}
