/*
 * filter_context.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Context for filter execution, enabling diagnostics.

use std::fmt;
use std::io::Write;

/// A problem a filter recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Context for filter execution.
///
/// Threaded through the walk so a filter can report problems that do not
/// stop the run. The collected messages are printed when the run ends,
/// also when a later node made it fail.
#[derive(Debug, Default)]
pub struct FilterContext {
    diagnostics: Vec<Diagnostic>,
}

impl FilterContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning
    pub fn warn(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            message: message.into(),
        });
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Write every diagnostic as one line.
    pub fn report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for diagnostic in &self.diagnostics {
            writeln!(out, "{diagnostic}")?;
        }
        out.flush()
    }
}
