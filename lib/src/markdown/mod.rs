mod plugin;
mod markdown;
mod markers;
mod excerpt;

pub use plugin::*;
pub use markdown::*;
pub use markers::*;
pub use excerpt::*;

use crate::error::Result;

/// Renders `content` as an HTML fragment with marker lines removed.
pub fn render_body(content: &str) -> Result<String> {
    Markdown::from(content).plugin(MarkerLines).run()
}
