//! Full-bleed hero banner: headline, subtitle, one call to action.

use crate::content::HeroConfig;
use crate::primitives::cta_button;
use crate::registry::RenderContext;
use maud::{Markup, html};

pub fn render(_ctx: &RenderContext, cfg: &HeroConfig) -> Option<Markup> {
    if cfg.title.is_empty() {
        return None;
    }

    let mut styles = Vec::new();
    if let Some(bg) = &cfg.background
        && !bg.image.is_empty()
    {
        styles.push(format!(
            "background-image: url('{}'); background-position: {};",
            bg.image, bg.position
        ));
    }
    if let Some(height) = &cfg.height {
        styles.push(format!("min-height: {height};"));
    }
    if let Some(align) = &cfg.text_align {
        styles.push(format!("text-align: {align};"));
    }
    let style = (!styles.is_empty()).then(|| styles.join(" "));
    let overlay = cfg.background.as_ref().is_some_and(|bg| bg.overlay);

    Some(html! {
        section.hero style=[style] {
            @if overlay {
                div.hero-overlay {}
            }
            div.hero-content {
                h1 { (cfg.title) }
                @if !cfg.subtitle.is_empty() {
                    p.hero-subtitle { (cfg.subtitle) }
                }
                @if let Some(cta) = &cfg.cta {
                    (cta_button(cta, "btn-primary btn-large"))
                }
            }
        }
    })
}
