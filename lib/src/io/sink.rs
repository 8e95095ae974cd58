use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::fmt::Debug;

use crate::error::{Result, Chainable};

/// Something text can be written to. Writes replace prior contents.
pub trait Sink: Debug {
    fn write(&self, content: &str) -> Result<()>;
}

impl Sink for &Path {
    fn write(&self, content: &str) -> Result<()> {
        let mut file = fs::File::create(self).chain_with(|| error! {
            "failed to open/create file for writing",
            "file path" => self.display(),
        })?;

        file.write_all(content.as_bytes()).chain_with(|| error! {
            "failed to write file",
            "file path" => self.display(),
        })
    }
}

impl Sink for PathBuf {
    fn write(&self, content: &str) -> Result<()> {
        <&Path as Sink>::write(&self.as_path(), content)
    }
}

impl<T: Sink> Sink for &T {
    fn write(&self, content: &str) -> Result<()> {
        <T as Sink>::write(self, content)
    }
}
