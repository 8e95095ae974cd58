use std::borrow::Cow;

use crate::error::Result;

/// Every marker line starts with this, followed by the rest of its key.
pub const MARKER_PREFIX: &str = "[//]: # (z";

/// Splits a marker line, `[//]: # (zkey: value)`, into `key` and `value`.
/// The `z` and the key match in any case.
pub fn marker(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
    let prefix = line.get(..MARKER_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(MARKER_PREFIX) {
        return None;
    }

    let rest = line[MARKER_PREFIX.len()..].strip_suffix(')')?;
    let (key, value) = rest.split_once(": ")?;
    let valid = !key.is_empty() && key.bytes().all(|b| b.is_ascii_alphabetic());
    valid.then_some((key, value))
}

/// Removes marker lines so none of their text reaches the rendered page.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkerLines;

impl crate::markdown::Plugin for MarkerLines {
    fn preprocess<'a>(&self, input: &'a str) -> Result<Cow<'a, str>> {
        let opening = &MARKER_PREFIX.as_bytes()[..MARKER_PREFIX.len() - 1];
        if memchr::memmem::find(input.as_bytes(), opening).is_none() {
            return Ok(Cow::Borrowed(input));
        }

        let output = input.split_inclusive('\n')
            .filter(|line| marker(line).is_none())
            .collect::<String>();

        Ok(Cow::Owned(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::Plugin;

    #[test]
    fn marker_lines() {
        assert_eq!(marker("[//]: # (ztitle: A title)"), Some(("title", "A title")));
        assert_eq!(marker("[//]: # (ztags: a, b)\r\n"), Some(("tags", "a, b")));
        assert_eq!(marker("[//]: # (title: missing z)"), None);
        assert_eq!(marker("[//]: # (z: empty key)"), None);
        assert_eq!(marker("  [//]: # (ztitle: indented)"), None);
        assert_eq!(marker("[//]: # (ztitle: unterminated"), None);
        assert_eq!(marker("[//]: # (ZAUTHOR: Ada)"), Some(("AUTHOR", "Ada")));
        assert_eq!(marker("[//]: # (Ztitle: Mixed)"), Some(("title", "Mixed")));
    }

    #[test]
    fn strips_only_marker_lines() {
        let input = "[//]: # (ztitle: Title)\nBody [//]: # (zfake: x)\n[//]: # (zauthor: Me)\nEnd";
        let output = MarkerLines.preprocess(input).unwrap();
        assert_eq!(output, "Body [//]: # (zfake: x)\nEnd");

        let shouted = MarkerLines.preprocess("[//]: # (ZAUTHOR: Ada)\nBody\n").unwrap();
        assert_eq!(shouted, "Body\n");

        let untouched = MarkerLines.preprocess("no markers here").unwrap();
        assert!(matches!(untouched, Cow::Borrowed(_)));
    }
}
