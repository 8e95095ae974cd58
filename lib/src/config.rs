use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::{Chainable, ConfigError, Result};
use crate::io::Source;
use crate::util::PathExt;

pub const CONFIG_FILE: &str = "zebec.toml";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_EXTENSIONS: &[&str] = &["css", "js", "ktml", "md"];

/// A resolved configuration. Paths are absolute if the base path was.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Reserved for a preview server; nothing in the pipeline reads it.
    pub port: u16,
    pub extensions: Vec<String>,
    pub templates: Option<FxHashMap<String, PathBuf>>,
    /// Analytics site id appended to every generated document.
    pub analytics: Option<String>,
}

/// The configuration file as written: every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ingestible {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub port: Option<u16>,
    pub extensions: Option<Vec<String>>,
    pub templates: Option<FxHashMap<String, String>>,
    pub analytics: Option<String>,
}

/// Resolves [`Ingestible`]s relative to a base directory.
#[derive(Debug, Clone)]
pub struct Ingest {
    base: PathBuf,
}

impl Ingest {
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        Ingest { base: base.as_ref().to_path_buf() }
    }

    /// Reads the TOML file at `path`, resolving paths relative to the file's
    /// directory.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Configuration> {
        let path = path.as_ref();
        let string = path.read()?;
        let ingestible: Ingestible = toml::from_str(&string).chain_with(|| error! {
            "failed to parse configuration",
            "file path" => path.display(),
        })?;

        let base = path.parent().unwrap_or(Path::new("."));
        Ok(Ingest::new(base).configure(ingestible)?)
    }

    pub fn configure(&self, config: Ingestible) -> Result<Configuration, ConfigError> {
        let source = config.source.ok_or(ConfigError::MissingField("source"))?;
        let source = self.resolve(&source);
        let destination = config.destination
            .map(|destination| self.resolve(&destination))
            .unwrap_or_else(|| source.clone());

        let extensions = config.extensions
            .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect());

        let templates = config.templates.map(|templates| templates.into_iter()
            .map(|(name, path)| (name, self.resolve(&path)))
            .collect());

        Ok(Configuration {
            source,
            destination,
            port: config.port.unwrap_or(DEFAULT_PORT),
            extensions,
            templates,
            analytics: config.analytics,
        })
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base.join(path).collapse_cur_dir()
    }
}

impl Configuration {
    /// Whether files with extension `ext` are compiled.
    pub fn watches(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }

    pub fn template(&self, name: &str) -> Option<&Path> {
        self.templates.as_ref()?.get(name).map(|p| p.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<Configuration, ConfigError> {
        Ingest::new("/site").configure(toml::from_str(source).unwrap())
    }

    #[test]
    fn missing_source_is_fatal() {
        let error = parse("destination = 'public'").unwrap_err();
        assert!(matches!(error, ConfigError::MissingField("source")));
        assert_eq!(error.to_string(), "Invalid configuration, missing source");
    }

    #[test]
    fn defaults() {
        let config = parse("source = './src'").unwrap();
        assert_eq!(config.source, Path::new("/site/src"));
        assert_eq!(config.destination, config.source);
        assert_eq!(config.port, 8080);
        assert_eq!(config.extensions, vec!["css", "js", "ktml", "md"]);
        assert!(config.templates.is_none());
        assert!(config.watches("ktml"));
        assert!(!config.watches("scss"));
    }

    #[test]
    fn explicit_values() {
        let config = parse(r#"
            source = "src"
            destination = "./public/."
            port = 4000
            extensions = ["js"]
            analytics = "UA-1234"

            [templates]
            blog = "templates/blog.html"
        "#).unwrap();

        assert_eq!(config.destination, Path::new("/site/public"));
        assert_eq!(config.port, 4000);
        assert_eq!(config.extensions, vec!["js"]);
        assert_eq!(config.template("blog"), Some(Path::new("/site/templates/blog.html")));
        assert_eq!(config.template("page"), None);
        assert_eq!(config.analytics.as_deref(), Some("UA-1234"));
    }

    #[test]
    fn read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "source = 'content'\n").unwrap();

        let config = Ingest::read(&path).unwrap();
        assert_eq!(config.source, dir.path().join("content"));

        std::fs::write(&path, "port = 'eighty'\n").unwrap();
        let error = Ingest::read(&path).unwrap_err();
        assert_eq!(error.messages()[0], "failed to parse configuration");
    }
}
