//! Blog entries: markdown with marker lines declaring metadata.

mod metadata;
mod view;

pub use metadata::*;
pub use view::*;

/// Renders a blog entry's markdown as a lone `<body>` element.
pub fn process(content: &str) -> Option<String> {
    let body = crate::markdown::render_body(content).ok()?;
    Some(format!("<body>{}</body>", body.trim()))
}
