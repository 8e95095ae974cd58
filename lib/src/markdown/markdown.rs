use pulldown_cmark::{html, Parser, Options};

use crate::markdown::Plugin;
use crate::error::{Chainable, Result};

#[derive(Debug, Clone)]
pub struct Markdown<'i, P = ()> {
    input: &'i str,
    options: Options,
    plugins: P,
}

impl<'i> Markdown<'i, ()> {
    pub fn from(input: &'i str) -> Self {
        Self {
            input,
            options: Options::all().difference(Options::ENABLE_SMART_PUNCTUATION),
            plugins: (),
        }
    }
}

impl<'i, P: Plugin> Markdown<'i, P> {
    /// Appends `plugin`; plugins run in the order they were added.
    pub fn plugin<T: Plugin>(self, plugin: T) -> Markdown<'i, (P, T)> {
        Markdown {
            input: self.input,
            options: self.options,
            plugins: (self.plugins, plugin),
        }
    }

    /// Renders the input to HTML.
    pub fn run(mut self) -> Result<String> {
        let input = self.plugins.preprocess(self.input)?;
        let mut output = String::with_capacity(input.len() + input.len() / 2);
        let parser = Parser::new_ext(&input, self.options);
        html::push_html(&mut output, self.plugins.remap(parser));

        self.plugins.finalize().chain(error!("markdown plugin failed"))?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[derive(Default)]
    struct Shout;

    impl Plugin for Shout {
        fn preprocess<'a>(&self, input: &'a str) -> Result<Cow<'a, str>> {
            Ok(Cow::Owned(input.replace("hello", "HELLO")))
        }
    }

    struct Broken;

    impl Plugin for Broken {
        fn finalize(&mut self) -> Result<()> {
            crate::err!("nothing to see")
        }
    }

    #[test]
    fn plain() {
        let html = Markdown::from("This is the **content**").run().unwrap();
        assert_eq!(html, "<p>This is the <strong>content</strong></p>\n");
    }

    #[test]
    fn plugins_run_in_order() {
        let html = Markdown::from("hello *world*")
            .plugin(Shout)
            .plugin(Shout)
            .run()
            .unwrap();

        assert_eq!(html, "<p>HELLO <em>world</em></p>\n");
    }

    #[test]
    fn finalize_failure_is_reported() {
        let error = Markdown::from("x").plugin(Broken).run().unwrap_err();
        assert_eq!(error.messages(), vec!["markdown plugin failed", "nothing to see"]);
    }
}
