/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Shared plumbing for standalone Pandoc JSON filters.
//!
//! Pandoc hands a filter the whole document as JSON on stdin and expects
//! the (possibly rewritten) document back on stdout. This crate owns that
//! protocol so the filters themselves only have to supply a per-node
//! action: see [`runtime::run_filter`] and [`walk::walk`].

pub mod attr;
pub mod errors;
pub mod filter_context;
pub mod meta;
pub mod node;
pub mod runtime;
pub mod settings;
pub mod table;
pub mod walk;

pub use attr::{Attr, AttrMap};
pub use errors::{FilterError, Result};
pub use filter_context::{Diagnostic, FilterContext};
pub use meta::Metadata;
pub use node::{CodePayload, NodeKind, Replacement};
pub use runtime::{run_filter, run_filter_reporting};
pub use table::{Alignment, TableNode};
