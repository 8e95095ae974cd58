use std::fmt;

/// Attribute name/value pairs in insertion order.
///
/// Values are rendered inside single quotes as-is; nothing is escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Attributes(vec![])
    }

    /// Sets `key` to `value`. An existing key keeps its position.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        let (key, value) = (key.into(), value.into());
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }

        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Renders as ` key='value'` for every pair, or nothing at all.
impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.0 {
            write!(f, " {key}='{value}'")?;
        }

        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }

        attributes
    }
}

/// The `rel` of a `<link>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LinkRel {
    Shortcut,
    Stylesheet,
    Alternate,
}

impl LinkRel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkRel::Shortcut => "shortcut icon",
            LinkRel::Stylesheet => "stylesheet",
            LinkRel::Alternate => "alternate",
        }
    }
}

#[inline]
fn merge(attributes: Option<Attributes>, key: &str, value: &str) -> Attributes {
    let mut attributes = attributes.unwrap_or_default();
    attributes.insert(key, value);
    attributes
}

/// Anchors: `href`.
pub fn merge_href(attributes: Option<Attributes>, href: &str) -> Attributes {
    merge(attributes, "href", href)
}

/// Scripts: `src`.
pub fn merge_src(attributes: Option<Attributes>, src: &str) -> Attributes {
    merge(attributes, "src", src)
}

/// Images: `src`, and an empty `alt` unless one was given.
pub fn merge_image_src(attributes: Option<Attributes>, src: &str) -> Attributes {
    let mut attributes = merge_src(attributes, src);
    if !attributes.contains_key("alt") {
        attributes.insert("alt", "");
    }

    attributes
}

/// Inputs: `type`.
pub fn merge_input_type(attributes: Option<Attributes>, kind: &str) -> Attributes {
    merge(attributes, "type", kind)
}

/// Links: `rel`.
pub fn merge_rel(attributes: Attributes, rel: LinkRel) -> Attributes {
    merge(Some(attributes), "rel", rel.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_render_order() {
        let attributes = crate::attrs! { "b" => "2", "a" => "1", "c" => "3" };
        assert_eq!(attributes.to_string(), " b='2' a='1' c='3'");
        assert_eq!(Attributes::new().to_string(), "");
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut attributes = crate::attrs! { "src" => "old.png", "class" => "hero" };
        attributes.insert("src", "new.png");
        assert_eq!(attributes.to_string(), " src='new.png' class='hero'");
        assert_eq!(attributes.len(), 2);
    }

    #[test]
    fn merges() {
        assert_eq!(merge_href(None, "/a").to_string(), " href='/a'");
        let given = crate::attrs! { "class" => "stretched-link" };
        assert_eq!(merge_href(Some(given), "/a").to_string(), " class='stretched-link' href='/a'");

        assert_eq!(merge_src(None, "app.js").to_string(), " src='app.js'");
        assert_eq!(merge_input_type(None, "text").to_string(), " type='text'");

        let css = merge_rel(crate::attrs! { "href" => "site.css" }, LinkRel::Stylesheet);
        assert_eq!(css.to_string(), " href='site.css' rel='stylesheet'");
    }

    #[test]
    fn image_alt_defaults_to_empty() {
        assert_eq!(merge_image_src(None, "a.png").to_string(), " src='a.png' alt=''");

        let given = crate::attrs! { "alt" => "A cat", "class" => "rounded" };
        let merged = merge_image_src(Some(given), "cat.png");
        assert_eq!(merged.to_string(), " alt='A cat' class='rounded' src='cat.png'");
    }
}
