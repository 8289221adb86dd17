/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Typeset code blocks and inline code with the LaTeX `minted` package.
//!
//! Code blocks become `minted` environments (inside a floating `listing`
//! when they have a caption) and inline code becomes `\mintinline`.
//! Block attributes other than `language` and `caption` are passed on as
//! minted options.
//!
//! Document metadata:
//!
//! - `minted-language`: language used when a block sets none (`text`)
//! - `minted-class`: when true, only blocks with the `minted` class are
//!   converted; inline code always is
//! - `minted-exclude`: classes that are never converted
//!   (`table`, `ditaa`, `plantuml`)
//! - `minted-figure`: placement of captioned listings (`H`)

pub mod filter;
pub mod listing;
pub mod settings;

pub use filter::{Minted, check_preconditions};
pub use listing::{ListingNode, format_attributes, render_listing};
pub use settings::{Caption, ListingSettings};
