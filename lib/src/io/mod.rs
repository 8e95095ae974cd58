mod source;
mod sink;

pub use source::*;
pub use sink::*;

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

/// When `path` was created, or now if the platform or file can't say.
pub fn created(path: &Path) -> DateTime<Utc> {
    fs::metadata(path)
        .and_then(|metadata| metadata.created())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now())
}
