//! Company story section: prose beside an image, with optional static stats.
//!
//! Content may come in as one markdown block (`content`) or pre-split plain
//! paragraphs (`content_paragraphs`); when both are set the markdown block
//! wins.

use crate::content::{AboutConfig, AboutLayout};
use crate::primitives::section_header;
use crate::registry::RenderContext;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

pub fn render(_ctx: &RenderContext, cfg: &AboutConfig) -> Option<Markup> {
    let has_prose = cfg.content.as_ref().is_some_and(|c| !c.is_empty())
        || !cfg.content_paragraphs.is_empty();
    if !has_prose {
        return None;
    }

    let layout_class = match cfg.layout {
        AboutLayout::TextLeft => "about-text-left",
        AboutLayout::TextRight => "about-text-right",
        AboutLayout::Centered => "about-centered",
        AboutLayout::TextOnly => "about-text-only",
    };
    let style = cfg
        .background_color
        .as_ref()
        .map(|c| format!("background-color: {c};"));

    let prose = match &cfg.content {
        Some(markdown) if !markdown.is_empty() => {
            let parser = Parser::new(markdown);
            let mut body_html = String::new();
            md_html::push_html(&mut body_html, parser);
            PreEscaped(body_html)
        }
        _ => html! {
            @for paragraph in &cfg.content_paragraphs {
                p { (paragraph) }
            }
        },
    };

    let show_image = cfg.layout != AboutLayout::TextOnly;

    Some(html! {
        section class={ "about " (layout_class) } style=[style] {
            (section_header(&cfg.title, &cfg.subtitle))
            div.about-body {
                div.about-prose { (prose) }
                @if show_image {
                    @if let Some(image) = &cfg.image {
                        img.about-image
                            src=(image.src)
                            alt=(image.alt)
                            width=[image.width]
                            height=[image.height]
                            loading="lazy";
                    }
                }
            }
            @if !cfg.stats.is_empty() {
                div.about-stats {
                    @for stat in &cfg.stats {
                        div.about-stat {
                            span.about-stat-number { (stat.number) (stat.suffix) }
                            span.about-stat-label { (stat.label) }
                        }
                    }
                }
            }
        }
    })
}
