//! Icon-led feature grid ("why choose us").

use crate::content::{GridConfig, visible_items};
use crate::primitives::section_header;
use crate::registry::RenderContext;
use maud::{Markup, html};

pub fn render(ctx: &RenderContext, cfg: &GridConfig) -> Option<Markup> {
    let items: Vec<_> = visible_items(&cfg.items, cfg.hidden_item).collect();
    if items.is_empty() {
        return None;
    }

    let columns = cfg.columns.clone().unwrap_or_default();
    // Breakpoint column counts land as custom properties for the stylesheet.
    let style = format!(
        "--cols-xs: {}; --cols-sm: {}; --cols-md: {};",
        columns.xs, columns.sm, columns.md
    );

    Some(html! {
        section.feature-grid {
            (section_header(&cfg.title, ""))
            div.grid-items style=(style) {
                @for item in items {
                    div.grid-item {
                        span.grid-icon style=(format!("color: {};", ctx.theme.role(&item.icon_color).main)) {
                            (ctx.icons.resolve(&item.icon, "icon"))
                        }
                        h3 { (item.title) }
                        @if !item.subtitle.is_empty() {
                            p { (item.subtitle) }
                        }
                    }
                }
            }
        }
    })
}
