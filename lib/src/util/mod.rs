mod macros;
mod path_ext;

pub use path_ext::*;
pub use macros::*;

/// Formats `bytes` with binary prefixes: `512 B`, `1.5 KiB`, `2.0 MiB`.
pub fn human_bytes(bytes: usize) -> String {
    const UNITS: &[&str] = &["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.1} {}", UNITS[unit])
}
