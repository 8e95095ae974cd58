use crate::attrs;
use crate::blog::BlogMetadata;
use crate::html::Builder;

pub const AVATAR: &str = "/images/avatar.jpg";

impl BlogMetadata {
    /// The creation date as displayed, e.g. `March 7, 2021`.
    pub fn date(&self) -> String {
        self.created.format("%B %-d, %Y").to_string()
    }

    /// Title, subtitle, author block and hero image of the entry's own page.
    pub fn entry_header(&self, b: &mut Builder) {
        b.h1(&self.title, attrs! { "class" => "mt-4" });
        if let Some(subtitle) = &self.subtitle {
            b.h2(subtitle, attrs! { "class" => "subtitle" });
        }

        b.div(attrs! { "class" => "author" }, |div| {
            div.image(AVATAR, None);
            div.ul(None, |ul| {
                ul.li_text(&self.author, None);
                ul.li_text(&self.date(), None);
            });
        });

        if let Some(image) = &self.image {
            b.image(image.as_str(), attrs! { "class" => "img-fluid rounded" });
        }
    }

    /// A card linking to the entry at `href`, for index pages.
    pub fn preview(&self, b: &mut Builder, href: &str) {
        b.div(attrs! { "class" => "card mb-4" }, |card| {
            if let Some(image) = &self.image {
                card.image(image.as_str(), attrs! { "class" => "card-img-top" });
            }

            card.div(attrs! { "class" => "card-body p-3" }, |body| {
                body.h5(&self.title, attrs! { "class" => "card-title m-0" });
                if let Some(text) = &self.first_paragraph {
                    body.p_text(text, attrs! { "class" => "card-text" });
                }

                body.a("", href, attrs! { "class" => "stretched-link" });
            });
        });
    }
}
