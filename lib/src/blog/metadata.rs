use std::path::Path;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::{MetadataError, Result};
use crate::io::{self, Source};
use crate::markdown::{Excerpt, Markdown, MarkerLines};

// Value grammars are intentionally narrow: a title with, say, `!` or `?` is
// not recognized at all.
const NAME: &str = r"[a-z]+(?:(?:[’',. -][a-z ])?[a-z]*)*";
const TITLE: &str = r"[a-z0-9]+(?:(?:[’',. -][a-z0-9 ])?[a-z0-9]*)*";
const IMAGE: &str = r"https?://[^\s/$.?#].[^\s]*";
const TAGS: &str = r"[a-z]+(?:, ?[a-z]+)*";
const TEMPLATE: &str = r"[a-z0-9_-]+";

/// Markers whose presence makes a document a blog entry.
const ENTRY_KEYS: &[&str] = &["author", "subtitle", "image", "tags"];

fn marker_regex(key: &str, value: &str) -> Regex {
    let pattern = format!(r"(?miR)^\[//\]: # \(z{key}: ({value})\)$");
    Regex::new(&pattern).expect("marker patterns are valid")
}

static AUTHOR: Lazy<Regex> = Lazy::new(|| marker_regex("author", NAME));
static TITLE_RE: Lazy<Regex> = Lazy::new(|| marker_regex("title", TITLE));
static SUBTITLE: Lazy<Regex> = Lazy::new(|| marker_regex("subtitle", TITLE));
static IMAGE_RE: Lazy<Regex> = Lazy::new(|| marker_regex("image", IMAGE));
static TAGS_RE: Lazy<Regex> = Lazy::new(|| marker_regex("tags", TAGS));
static TEMPLATE_RE: Lazy<Regex> = Lazy::new(|| marker_regex("template", TEMPLATE));

fn capture(regex: &Regex, content: &str) -> Option<String> {
    regex.captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Metadata declared by a blog entry's marker lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogMetadata {
    pub author: String,
    pub title: String,
    /// In declaration order, without duplicates.
    pub tags: Vec<String>,
    pub subtitle: Option<String>,
    pub image: Option<Url>,
    /// Name of the configured template to render into.
    pub template: Option<String>,
    pub first_paragraph: Option<String>,
    pub created: DateTime<Utc>,
}

impl BlogMetadata {
    /// Parses every marker in `content`. `author` and `title` are required.
    pub fn parse(content: &str, created: DateTime<Utc>) -> Result<Self, MetadataError> {
        Ok(BlogMetadata {
            author: parse_author(content).ok_or(MetadataError::MissingAuthor)?,
            title: parse_title(content).ok_or(MetadataError::MissingTitle)?,
            tags: parse_tags(content),
            subtitle: parse_subtitle(content),
            image: parse_image(content),
            template: parse_template(content),
            first_paragraph: first_paragraph(content),
            created,
        })
    }

    /// Reads and parses the entry at `path`, dated by the file's creation.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = path.read()?;
        Ok(Self::parse(&content, io::created(path))?)
    }
}

/// Whether `content` declares any marker only blog entries carry.
pub fn is_entry(content: &str) -> bool {
    content.lines()
        .filter_map(crate::markdown::marker)
        .any(|(key, _)| ENTRY_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key)))
}

pub fn parse_author(content: &str) -> Option<String> {
    capture(&AUTHOR, content)
}

pub fn parse_title(content: &str) -> Option<String> {
    capture(&TITLE_RE, content)
}

pub fn parse_subtitle(content: &str) -> Option<String> {
    capture(&SUBTITLE, content)
}

pub fn parse_template(content: &str) -> Option<String> {
    capture(&TEMPLATE_RE, content)
}

pub fn parse_image(content: &str) -> Option<Url> {
    capture(&IMAGE_RE, content).and_then(|url| Url::parse(&url).ok())
}

pub fn parse_tags(content: &str) -> Vec<String> {
    let Some(tags) = capture(&TAGS_RE, content) else {
        return vec![];
    };

    let mut unique: Vec<String> = Vec::new();
    for tag in tags.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !unique.iter().any(|t| t == tag) {
            unique.push(tag.to_owned());
        }
    }

    unique
}

pub fn first_paragraph(content: &str) -> Option<String> {
    let mut excerpt = Excerpt::new();
    Markdown::from(content)
        .plugin(MarkerLines)
        .plugin(&mut excerpt)
        .run()
        .ok()?;

    excerpt.text().map(|s| s.to_owned())
}
