use std::borrow::Cow;

use pulldown_cmark::Event;

use crate::error::Result;

/// A stage of markdown rendering.
///
/// `preprocess` sees the source text, `remap` the parsed event stream, and
/// `finalize` runs once rendering is complete.
pub trait Plugin {
    #[inline(always)]
    fn preprocess<'a>(&self, input: &'a str) -> Result<Cow<'a, str>> {
        Ok(Cow::Borrowed(input))
    }

    #[inline(always)]
    fn remap<'a, I>(&'a mut self, events: I) -> impl Iterator<Item = Event<'a>> + 'a
        where I: Iterator<Item = Event<'a>> + 'a
    {
        events
    }

    #[inline(always)]
    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Plugin for () { }

/// Runs `.0` then `.1`.
impl<A: Plugin, B: Plugin> Plugin for (A, B) {
    fn preprocess<'a>(&self, input: &'a str) -> Result<Cow<'a, str>> {
        match self.0.preprocess(input)? {
            Cow::Borrowed(input) => self.1.preprocess(input),
            Cow::Owned(input) => Ok(Cow::Owned(self.1.preprocess(&input)?.into_owned())),
        }
    }

    fn remap<'a, I>(&'a mut self, events: I) -> impl Iterator<Item = Event<'a>> + 'a
        where I: Iterator<Item = Event<'a>> + 'a
    {
        let (first, second) = self;
        second.remap(first.remap(events))
    }

    fn finalize(&mut self) -> Result<()> {
        self.0.finalize()?;
        self.1.finalize()
    }
}

/// Lets a caller keep a plugin and inspect it once rendering finishes.
impl<P: Plugin> Plugin for &mut P {
    fn preprocess<'a>(&self, input: &'a str) -> Result<Cow<'a, str>> {
        (**self).preprocess(input)
    }

    fn remap<'a, I>(&'a mut self, events: I) -> impl Iterator<Item = Event<'a>> + 'a
        where I: Iterator<Item = Event<'a>> + 'a
    {
        (**self).remap(events)
    }

    fn finalize(&mut self) -> Result<()> {
        (**self).finalize()
    }
}
