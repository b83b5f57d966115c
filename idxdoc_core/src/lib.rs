//! `idxdoc_core` turns a directory of indexer definition files into the
//! markdown tables published on the documentation site: the list of supported
//! indexers with their IRC and RSS support, and the list of indexers that
//! expose freeleech filtering.
//!
//! ## Processing Pipeline
//!
//! ```text
//! *.yaml definitions
//!   → Loader (pattern-matches name, description, supports and vars)
//!   → Transformer (alphabetical order, generic indexers last)
//!   → Renderer (indexers table, freeleech table)
//!   → Engine (writes the outputs or checks them for drift)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `idxdoc.toml`.
//! - [`loader`] — Definition discovery and field extraction.
//! - [`transform`] — Record ordering.
//! - [`render`] — Markdown table rendering.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use idxdoc_core::{IdxdocConfig, check_outputs, generate, write_outputs};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let config = IdxdocConfig::load_or_default(root).unwrap();
//! let docs = generate(&config, root).unwrap();
//!
//! if !check_outputs(&docs).unwrap().is_ok() {
//!     write_outputs(&docs).unwrap();
//! }
//! ```

pub use config::*;
pub use engine::*;
pub use error::*;
pub use record::*;

pub mod config;
mod engine;
#[allow(unused_assignments)]
mod error;
pub mod loader;
mod record;
pub mod render;
pub mod transform;

#[cfg(test)]
mod __fixtures;
