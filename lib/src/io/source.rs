use std::fs;
use std::path::{Path, PathBuf};
use std::fmt::Debug;

use crate::error::{Result, Chainable};

/// Something text can be read from.
pub trait Source: Debug {
    fn read(self) -> Result<String>;

    /// The file backing this source, if there is one.
    fn path(&self) -> Option<&Path> {
        None
    }
}

impl Source for String {
    fn read(self) -> Result<String> {
        Ok(self)
    }
}

impl Source for &str {
    fn read(self) -> Result<String> {
        Ok(self.to_owned())
    }
}

/// Invalid UTF-8 is replaced with `U+FFFD`; only I/O failures are errors.
impl Source for &Path {
    fn read(self) -> Result<String> {
        let bytes = fs::read(self).chain_with(|| error! {
            "failed to read file as text",
            "file path" => self.display(),
        })?;

        match String::from_utf8(bytes) {
            Ok(string) => Ok(string),
            Err(e) => Ok(String::from_utf8_lossy(e.as_bytes()).into_owned()),
        }
    }

    fn path(&self) -> Option<&Path> {
        Some(self)
    }
}

impl Source for &PathBuf {
    fn read(self) -> Result<String> {
        self.as_path().read()
    }

    fn path(&self) -> Option<&Path> {
        Some(self.as_path())
    }
}
