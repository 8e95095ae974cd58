use std::path::Path;

use crate::attrs;
use crate::blog::{self, BlogMetadata};
use crate::error::{Chainable, Result};
use crate::html::{html, Builder, Node, CONTENT_PLACEHOLDER};
use crate::io::Source;
use crate::markdown;
use crate::transform::Context;

/// Renders a `ktml` document: a full page, or the named template filled in.
pub fn render(ctx: &Context<'_>, content: &str) -> Result<String> {
    let metadata = match blog::is_entry(content) {
        true => Some(BlogMetadata::parse(content, ctx.created).map_err(|e| {
            log::error!("{}: {e}", ctx.stem);
            e
        })?),
        false => None,
    };

    let body = markdown::render_body(content)?;
    let article = Builder::build(|b| {
        if let Some(metadata) = &metadata {
            metadata.entry_header(b);
        }

        b.raw(body.trim_end());
    });

    let template = match &metadata {
        Some(metadata) => metadata.template.clone(),
        None => blog::parse_template(content),
    };

    if let Some(name) = template {
        match ctx.config.template(&name) {
            Some(path) => return fill(path, &article),
            None => log::warn!("{}: unknown template '{name}', using the default page", ctx.stem),
        }
    }

    let title = match metadata {
        Some(metadata) => metadata.title,
        None => blog::parse_title(content).unwrap_or_else(|| ctx.stem.to_owned()),
    };

    let document = html("en", |html| {
        html.head(|head| {
            head.meta(attrs! { "charset" => "utf-8" });
            head.meta(attrs! {
                "name" => "viewport",
                "content" => "width=device-width, initial-scale=1",
            });
            head.title(&title);
        });

        html.body(|body| {
            body.extend(article);
            if let Some(site) = &ctx.config.analytics {
                body.analytics(site);
            }
        });
    });

    Ok(document.render())
}

/// Replaces the template's first content placeholder with `article`.
fn fill(template: &Path, article: &[Node]) -> Result<String> {
    let placeholder = format!("<{CONTENT_PLACEHOLDER} />");
    let source = template.read().chain_with(|| error! {
        "failed to read template",
        "template" => template.display(),
    })?;

    let Some(start) = source.find(&placeholder) else {
        return err! {
            "template is missing its content placeholder",
            "template" => template.display(),
            "placeholder" => &placeholder,
        };
    };

    // Children render at the placeholder's column.
    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    let lead = &source[line_start..start];
    let indent = match lead.bytes().all(|b| b == b' ') {
        true => lead.len(),
        false => 0,
    };

    let rendered = article.iter()
        .map(|node| node.render(indent))
        .collect::<Vec<_>>()
        .join("\n");

    let mut output = String::with_capacity(source.len() + rendered.len());
    output.push_str(&source[..start - indent]);
    output.push_str(&rendered);
    output.push_str(&source[start + placeholder.len()..]);
    Ok(output)
}
