//! A declarative builder for HTML documents.
//!
//! Documents are assembled with nested closures, one call per tag, and then
//! rendered to indented markup:
//!
//! ```rust
//! use zebec::attrs;
//! use zebec::html::html;
//!
//! let document = html("en", |html| {
//!     html.head(|head| { head.title("Zebec"); });
//!     html.body(|body| {
//!         body.div(attrs! { "class" => "container" }, |div| {
//!             div.h1("Hello", None);
//!         });
//!     });
//! });
//!
//! assert_eq!(document.render(), "\
//! <!doctype html>
//! <html lang='en'>
//!   <head>
//!     <title>Zebec</title>
//!   </head>
//!   <body>
//!     <div class='container'>
//!       <h1>Hello</h1>
//!     </div>
//!   </body>
//! </html>");
//! ```
//!
//! Nothing is validated or escaped: nesting rules are the caller's concern and
//! attribute values containing `'` produce broken markup.

mod attributes;
mod builder;

pub use attributes::*;
pub use builder::*;

use std::fmt;

pub const DOCTYPE: &str = "<!doctype html>";

/// Tag name of the template placeholder emitted by [`Builder::content()`].
pub const CONTENT_PLACEHOLDER: &str = "zebeccontent";

/// Columns added per level of nesting.
pub const INDENT: usize = 2;

/// A tag name and its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
}

impl Element {
    pub fn new<A: Into<Option<Attributes>>>(name: &str, attributes: A) -> Self {
        Element {
            name: name.to_owned(),
            attributes: attributes.into().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `<name>`, one child per line, `</name>`.
    Container(Element, Vec<Node>),
    /// `<name>text</name>` on a single line.
    Text(Element, String),
    /// `<name />`.
    SelfClosing(Element),
    /// `<!-- text -->`.
    Comment(String),
    /// `<!--[if condition]>`, one child per line, `<![endif]-->`.
    Conditional(String, Vec<Node>),
    /// Emitted verbatim after the indentation.
    Raw(String),
    /// The analytics loader for a site id.
    Analytics(String),
}

impl Node {
    pub fn render(&self, indent: usize) -> String {
        self.at(indent).to_string()
    }

    /// `self` as a [`Display`](fmt::Display) value rendered at `indent`.
    pub fn at(&self, indent: usize) -> Indented<'_> {
        Indented { node: self, indent }
    }

    pub fn render_to<W: fmt::Write>(&self, out: &mut W, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent);
        match self {
            Node::Container(Element { name, attributes }, children) => {
                write!(out, "{pad}<{name}{attributes}>")?;
                render_children(out, children, indent)?;
                write!(out, "\n{pad}</{name}>")
            }
            Node::Text(Element { name, attributes }, text) => {
                write!(out, "{pad}<{name}{attributes}>{text}</{name}>")
            }
            Node::SelfClosing(Element { name, attributes }) => {
                write!(out, "{pad}<{name}{attributes} />")
            }
            Node::Comment(comment) => write!(out, "{pad}<!-- {comment} -->"),
            Node::Conditional(condition, children) => {
                write!(out, "{pad}<!--[if {condition}]>")?;
                render_children(out, children, indent)?;
                write!(out, "\n{pad}<![endif]-->")
            }
            Node::Raw(content) => write!(out, "{pad}{content}"),
            Node::Analytics(site) => write!(out, "\
                {pad}<script async src='https://www.googletagmanager.com/gtag/js?id={site}'></script>\n\
                {pad}<script>\n\
                {pad}window.dataLayer = window.dataLayer || [];\n\
                {pad}function gtag(){{dataLayer.push(arguments);}}\n\
                {pad}gtag('js', new Date());\n\
                {pad}gtag('config', '{site}');\n\
                {pad}</script>"),
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container(_, children) | Node::Conditional(_, children) => children,
            _ => &[],
        }
    }
}

fn render_children<W: fmt::Write>(out: &mut W, children: &[Node], indent: usize) -> fmt::Result {
    for child in children {
        out.write_char('\n')?;
        child.render_to(out, indent + INDENT)?;
    }

    Ok(())
}

/// A node paired with the indent it renders at.
#[derive(Debug, Clone, Copy)]
pub struct Indented<'a> {
    node: &'a Node,
    indent: usize,
}

impl fmt::Display for Indented<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node.render_to(f, self.indent)
    }
}

/// A complete page: an `<html>` root preceded by the doctype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Node,
}

impl Document {
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn render(&self) -> String {
        format!("{DOCTYPE}\n{}", self.root.at(0))
    }
}

/// Builds a document whose root `<html>` has language `lang`.
pub fn html<F: FnOnce(&mut Builder)>(lang: &str, f: F) -> Document {
    let element = Element::new("html", crate::attrs! { "lang" => lang });
    Document { root: Node::Container(element, Builder::build(f)) }
}

#[cfg(test)]
mod tests {
    use crate::attrs;
    use super::*;

    #[test]
    fn empty_container_has_no_body_line() {
        let div = Node::Container(Element::new("div", attrs! { "id" => "x" }), vec![]);
        assert_eq!(div.render(0), "<div id='x'>\n</div>");
        assert_eq!(div.render(4), "    <div id='x'>\n    </div>");
        assert_eq!(format!("[{}]", div.at(2)), "[  <div id='x'>\n  </div>]");

        let ie = Node::Conditional("IE".into(), vec![]);
        assert_eq!(ie.render(2), "  <!--[if IE]>\n  <![endif]-->");
    }

    #[test]
    fn leaves() {
        let text = Node::Text(Element::new("p", None), "a <b>bold</b> move".into());
        assert_eq!(text.render(2), "  <p>a <b>bold</b> move</p>");

        let void = Node::SelfClosing(Element::new("br", None));
        assert_eq!(void.render(0), "<br />");
        assert!(void.children().is_empty());

        assert_eq!(Node::Comment("nav".into()).render(2), "  <!-- nav -->");
        assert_eq!(Node::Raw("<p>x</p>\n<p>y</p>".into()).render(2), "  <p>x</p>\n<p>y</p>");
    }

    #[test]
    fn analytics_snippet() {
        let rendered = Node::Analytics("UA-1".into()).render(2);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "  <script async src='https://www.googletagmanager.com/gtag/js?id=UA-1'></script>");
        assert_eq!(lines[3], "  function gtag(){dataLayer.push(arguments);}");
        assert_eq!(lines[5], "  gtag('config', 'UA-1');");
        assert!(lines.iter().all(|l| l.starts_with("  ")));
    }

    #[test]
    fn document_starts_with_doctype() {
        let document = html("fr", |html| { html.body(|_| {}); });
        assert_eq!(document.render(), "<!doctype html>\n<html lang='fr'>\n  <body>\n  </body>\n</html>");
        assert_eq!(document.root().children().len(), 1);
    }

    #[test]
    fn rendering_is_repeatable() {
        let document = html("en", |html| {
            html.head(|head| { head.comment("generated"); });
            html.body(|body| {
                body.ul(attrs! { "class" => "tags" }, |ul| {
                    for tag in ["rust", "web"] {
                        ul.li_text(tag, None);
                    }
                });
            });
        });

        assert_eq!(document.render(), document.render());
        assert_eq!(document.clone().render(), document.render());
    }
}
