#![doc = svgbobdoc::transform!(
//! A small static site builder.
//!
//! # Overview
//!
//! Zebec watches a source tree and, whenever a file changes, writes the file's
//! transformed counterpart into a mirrored destination tree. Markup documents
//! (`.ktml`, markdown with marker lines) become HTML pages; scripts and
//! stylesheets are minified.
//!
//! ```svgbob
//!  +---------+   ChangedFile   +----------+  PathPlan  +--------------+
//!  | watcher +---------------->| Pipeline +----------->| PathResolver |
//!  +---------+                 +----+-----+            +--------------+
//!                                   |
//!                                   | extension
//!                                   v
//!                          +--------+---------+
//!                          | transform        |
//!                          |  ktml -> .html   +---> html::Builder
//!                          |  js   -> .min.js +---> minifier
//!                          |  css  -> .min.css+---> grass
//!                          +--------+---------+
//!                                   |
//!                                   v
//!                        destination/<dir>/<stem>.<ext>
//! ```
//!
//! ## Handling an event
//!
//! 1. The changed path is rebased from the source root onto the destination
//!    root. Paths outside the source root are ignored.
//! 2. The file is read and dispatched on its extension. Unsupported types and
//!    content that fails to transform produce no output.
//! 3. Missing destination directories are created and the output is written,
//!    replacing whatever was there.
//!
//! Only I/O failures are errors; everything else is "nothing to write".
)]

#[macro_use]
pub mod error;
pub mod util;
pub mod io;
pub mod config;
pub mod html;
pub mod markdown;
pub mod blog;
pub mod transform;
pub mod pipeline;

pub use error::{Error, Result};
pub use config::{Configuration, Ingest};
pub use pipeline::{ChangedFile, Pipeline, Summary};

pub use rayon;
