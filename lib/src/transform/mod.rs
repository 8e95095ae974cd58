//! Per-extension content transforms.
//!
//! A transform maps a file's content to a [`TransformResult`] or to nothing.
//! Nothing covers both unsupported types and content that failed to
//! transform: no partial output is ever produced.

mod mapper;
mod markup;

pub use mapper::*;

use chrono::{DateTime, Utc};

use crate::config::Configuration;

/// A transformed artifact and the file name it's written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    pub content: String,
    pub file_name: String,
}

/// What a transform knows about the file besides its content.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub stem: &'a str,
    pub config: &'a Configuration,
    pub created: DateTime<Utc>,
    pub verbose: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Kind {
    Markup,
    Script,
    Stylesheet,
}

impl Kind {
    pub fn from_ext(ext: &str) -> Option<Kind> {
        match ext {
            "ktml" => Some(Kind::Markup),
            "js" => Some(Kind::Script),
            "css" => Some(Kind::Stylesheet),
            _ => None,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Kind::Markup => ".html",
            Kind::Script => ".min.js",
            Kind::Stylesheet => ".min.css",
        }
    }

    pub fn file_name(&self, stem: &str) -> String {
        format!("{stem}{}", self.suffix())
    }
}

/// Transforms `content`, read from a file with extension `ext`.
pub fn dispatch(ctx: &Context<'_>, ext: &str, content: &str) -> Option<TransformResult> {
    let Some(kind) = Kind::from_ext(ext) else {
        if ctx.verbose {
            log::warn!("Unsupported content type {ext}");
        }

        return None;
    };

    let result = match kind {
        Kind::Markup => markup::render(ctx, content),
        Kind::Script => minify(Asset::Script, content),
        Kind::Stylesheet => minify(Asset::Stylesheet, content),
    };

    match result {
        Ok(content) => Some(TransformResult { content, file_name: kind.file_name(ctx.stem) }),
        Err(e) => {
            if ctx.verbose {
                log::warn!("{}: no output\n{e}", kind.file_name(ctx.stem));
            }

            None
        }
    }
}
