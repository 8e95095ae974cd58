//! Change events in, artifacts out.

mod path;
mod locks;
mod handler;

pub use path::*;
pub use locks::*;
pub use handler::*;
