use pulldown_cmark::{Event, Tag, TagEnd};

use crate::markdown::Plugin;

/// Records the text of the first paragraph, without markup.
#[derive(Debug, Default, Clone)]
pub struct Excerpt {
    buffer: String,
    capturing: bool,
    done: bool,
}

impl Excerpt {
    pub fn new() -> Self {
        Excerpt::default()
    }

    /// The first paragraph's text, if the document had a non-empty one.
    pub fn text(&self) -> Option<&str> {
        let text = self.buffer.trim();
        (self.done && !text.is_empty()).then_some(text)
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.capturing = false;
        self.done = false;
    }
}

impl Plugin for Excerpt {
    fn remap<'a, I>(&'a mut self, events: I) -> impl Iterator<Item = Event<'a>> + 'a
        where I: Iterator<Item = Event<'a>> + 'a
    {
        self.reset();

        events.inspect(move |ev| match ev {
            _ if self.done => {}
            Event::Start(Tag::Paragraph) => self.capturing = true,
            Event::End(TagEnd::Paragraph) if self.capturing => {
                self.capturing = false;
                self.done = true;
            }
            Event::Text(text) | Event::Code(text) if self.capturing => self.buffer.push_str(text),
            Event::SoftBreak | Event::HardBreak if self.capturing => self.buffer.push(' '),
            _ => {}
        })
    }
}
