use crate::html::{Attributes, Element, LinkRel, Node, CONTENT_PLACEHOLDER};
use crate::html::{merge_href, merge_image_src, merge_input_type, merge_rel, merge_src};

/// Collects the children of one container.
///
/// Every container method takes a closure that receives a fresh builder for
/// the new container's children; the finished container is appended to
/// `self` and returned for further changes.
#[derive(Debug, Default)]
pub struct Builder {
    children: Vec<Node>,
}

macro_rules! containers {
    ($($(#[$m:meta])* $name:ident),* $(,)?) => {$(
        $(#[$m])*
        pub fn $name<A, F>(&mut self, attributes: A, f: F) -> &mut Node
            where A: Into<Option<Attributes>>, F: FnOnce(&mut Builder)
        {
            self.tag(stringify!($name), attributes, f)
        }
    )*}
}

macro_rules! text_tags {
    ($($(#[$m:meta])* $name:ident),* $(,)?) => {$(
        $(#[$m])*
        pub fn $name<A>(&mut self, text: &str, attributes: A) -> &mut Node
            where A: Into<Option<Attributes>>
        {
            self.text(stringify!($name), text, attributes)
        }
    )*}
}

impl Builder {
    pub fn new() -> Self {
        Builder::default()
    }

    /// Runs `f` against a new builder and returns what it collected.
    pub fn build<F: FnOnce(&mut Builder)>(f: F) -> Vec<Node> {
        let mut builder = Builder::new();
        f(&mut builder);
        builder.children
    }

    pub fn push(&mut self, node: Node) -> &mut Node {
        let i = self.children.len();
        self.children.push(node);
        &mut self.children[i]
    }

    /// Appends every node in `nodes`.
    pub fn extend<I: IntoIterator<Item = Node>>(&mut self, nodes: I) {
        self.children.extend(nodes);
    }

    pub fn tag<A, F>(&mut self, name: &str, attributes: A, f: F) -> &mut Node
        where A: Into<Option<Attributes>>, F: FnOnce(&mut Builder)
    {
        let element = Element::new(name, attributes);
        self.push(Node::Container(element, Builder::build(f)))
    }

    pub fn text<A>(&mut self, name: &str, text: &str, attributes: A) -> &mut Node
        where A: Into<Option<Attributes>>
    {
        self.push(Node::Text(Element::new(name, attributes), text.into()))
    }

    pub fn void<A>(&mut self, name: &str, attributes: A) -> &mut Node
        where A: Into<Option<Attributes>>
    {
        self.push(Node::SelfClosing(Element::new(name, attributes)))
    }

    pub fn comment(&mut self, comment: &str) -> &mut Node {
        self.push(Node::Comment(comment.into()))
    }

    /// A browser conditional comment, e.g. `lt IE 9`, wrapping children.
    pub fn if_comment<F: FnOnce(&mut Builder)>(&mut self, condition: &str, f: F) -> &mut Node {
        self.push(Node::Conditional(condition.into(), Builder::build(f)))
    }

    pub fn raw(&mut self, content: &str) -> &mut Node {
        self.push(Node::Raw(content.into()))
    }

    pub fn head<F: FnOnce(&mut Builder)>(&mut self, f: F) -> &mut Node {
        self.tag("head", None, f)
    }

    pub fn body<F: FnOnce(&mut Builder)>(&mut self, f: F) -> &mut Node {
        self.tag("body", None, f)
    }

    containers!(div, nav, noscript, ul, li, p, button, span);

    text_tags!(h1, h2, h3, h4, h5, blockquote);

    pub fn title(&mut self, text: &str) -> &mut Node {
        self.text("title", text, None)
    }

    /// A `<p>` holding only text.
    pub fn p_text<A: Into<Option<Attributes>>>(&mut self, text: &str, attributes: A) -> &mut Node {
        self.text("p", text, attributes)
    }

    pub fn li_text<A: Into<Option<Attributes>>>(&mut self, text: &str, attributes: A) -> &mut Node {
        self.text("li", text, attributes)
    }

    pub fn span_text<A: Into<Option<Attributes>>>(&mut self, text: &str, attributes: A) -> &mut Node {
        self.text("span", text, attributes)
    }

    pub fn button_text<A: Into<Option<Attributes>>>(&mut self, text: &str, attributes: A) -> &mut Node {
        self.text("button", text, attributes)
    }

    pub fn meta(&mut self, attributes: Attributes) -> &mut Node {
        self.void("meta", attributes)
    }

    pub fn hr<A: Into<Option<Attributes>>>(&mut self, attributes: A) -> &mut Node {
        self.void("hr", attributes)
    }

    pub fn link(&mut self, rel: LinkRel, attributes: Attributes) -> &mut Node {
        self.void("link", merge_rel(attributes, rel))
    }

    pub fn script<A: Into<Option<Attributes>>>(&mut self, src: &str, attributes: A) -> &mut Node {
        self.text("script", "", merge_src(attributes.into(), src))
    }

    pub fn image<A: Into<Option<Attributes>>>(&mut self, src: &str, attributes: A) -> &mut Node {
        self.void("img", merge_image_src(attributes.into(), src))
    }

    pub fn input<A: Into<Option<Attributes>>>(&mut self, kind: &str, attributes: A) -> &mut Node {
        self.void("input", merge_input_type(attributes.into(), kind))
    }

    pub fn a<A>(&mut self, text: &str, href: &str, attributes: A) -> &mut Node
        where A: Into<Option<Attributes>>
    {
        self.text("a", text, merge_href(attributes.into(), href))
    }

    /// Marks where a template's content goes.
    pub fn content(&mut self) -> &mut Node {
        self.void(CONTENT_PLACEHOLDER, None)
    }

    /// The analytics loader for `site`.
    pub fn analytics(&mut self, site: &str) -> &mut Node {
        self.push(Node::Analytics(site.into()))
    }
}
