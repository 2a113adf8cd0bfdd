//! Call-to-action banner.

use crate::content::{CtaConfig, CtaVariant};
use crate::primitives::cta_button;
use crate::registry::RenderContext;
use maud::{Markup, html};

pub fn render(_ctx: &RenderContext, cfg: &CtaConfig) -> Option<Markup> {
    if cfg.title.is_empty() && cfg.primary_cta.is_none() {
        return None;
    }

    let variant_class = match cfg.variant {
        CtaVariant::Gradient => "cta-gradient",
        CtaVariant::Solid => "cta-solid",
        CtaVariant::Outlined => "cta-outlined",
        CtaVariant::Image => "cta-image",
    };

    let mut styles = Vec::new();
    if let Some(color) = &cfg.background_color {
        styles.push(format!("background-color: {color};"));
    }
    if cfg.variant == CtaVariant::Image
        && let Some(image) = &cfg.background_image
    {
        styles.push(format!("background-image: url('{image}');"));
    }
    let style = (!styles.is_empty()).then(|| styles.join(" "));

    Some(html! {
        section class={ "cta " (variant_class) } style=[style] {
            @if !cfg.title.is_empty() {
                h2 { (cfg.title) }
            }
            @if !cfg.description.is_empty() {
                p { (cfg.description) }
            }
            div.cta-actions {
                @if let Some(primary) = &cfg.primary_cta {
                    (cta_button(primary, "btn-primary"))
                }
                @if let Some(secondary) = &cfg.secondary_cta {
                    (cta_button(secondary, "btn-outlined"))
                }
            }
        }
    })
}
