use std::path::Path;

use crate::error::Result;
use crate::io::{Source, Sink};

/// Maps the text of a [`Source`] to new text.
pub trait Mapper {
    fn map<I: Source>(&self, input: I) -> Result<String>;

    fn map_copy<I: Source, O: Sink>(&self, input: I, output: O) -> Result<()> {
        output.write(&self.map(input)?)
    }
}

/// Compiles and compresses stylesheets with `grass`. Sources backed by a
/// file resolve `@import`s relative to it.
#[derive(Debug)]
pub struct Css {
    options: grass::Options<'static>,
}

impl Default for Css {
    fn default() -> Self {
        Css { options: grass::Options::default().style(grass::OutputStyle::Compressed) }
    }
}

impl Mapper for Css {
    fn map<I: Source>(&self, input: I) -> Result<String> {
        let result = match input.path().map(Path::to_path_buf) {
            Some(path) => grass::from_path(path, &self.options),
            None => grass::from_string(input.read()?, &self.options),
        };

        result.map_err(|e| error!("failed to minify stylesheet", e))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Js;

impl Mapper for Js {
    fn map<I: Source>(&self, input: I) -> Result<String> {
        let script = input.read()?;
        Ok(minifier::js::minify(&script).to_string())
    }
}

/// The asset kinds the minifier handles.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Asset {
    Script,
    Stylesheet,
}

pub fn minify(asset: Asset, content: &str) -> Result<String> {
    match asset {
        Asset::Script => Js.map(content),
        Asset::Stylesheet => Css::default().map(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet() {
        let css = minify(Asset::Stylesheet, "a {\n  color: red;\n}\n\n.b .c { margin: 0 }\n").unwrap();
        assert_eq!(css.trim_end(), "a{color:red}.b .c{margin:0}");
    }

    #[test]
    fn broken_stylesheet() {
        let error = minify(Asset::Stylesheet, "a { color: red;").unwrap_err();
        assert_eq!(error.messages()[0], "failed to minify stylesheet");
    }

    #[test]
    fn script() {
        let js = minify(Asset::Script, "function add(a, b) {\n    return a + b;\n}\n").unwrap();
        assert!(js.len() < 40);
        assert!(js.contains("return a+b"));
    }

    #[test]
    fn copy_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let (input, output) = (dir.path().join("site.css"), dir.path().join("site.min.css"));
        std::fs::write(&input, "p { color: blue; }").unwrap();

        Css::default().map_copy(&input, &output).unwrap();
        let css = std::fs::read_to_string(&output).unwrap();
        assert_eq!(css.trim_end(), "p{color:blue}");
    }
}
