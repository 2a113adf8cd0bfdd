//! Service cards: image, title, description, link to the detail page.
//!
//! `hidden_item` suppresses exactly one card by index; a service detail page
//! uses it to drop its own entry from the shared payload. An out-of-range
//! index hides nothing.

use crate::content::{ServicesConfig, visible_items};
use crate::primitives::section_header;
use crate::registry::RenderContext;
use maud::{Markup, html};

pub fn render(_ctx: &RenderContext, cfg: &ServicesConfig) -> Option<Markup> {
    let cards: Vec<_> = visible_items(&cfg.items, cfg.hidden_item).collect();
    if cards.is_empty() {
        return None;
    }

    Some(html! {
        section.services {
            (section_header(&cfg.title, ""))
            div.service-grid {
                @for item in cards {
                    article.service-card {
                        @if !item.image.is_empty() {
                            img src=(item.image) alt=(item.title) loading="lazy";
                        }
                        div.service-card-body {
                            h3 { (item.title) }
                            @if !item.description.is_empty() {
                                p { (item.description) }
                            }
                            a.btn.btn-outlined href=(item.href) { "Learn More" }
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ServiceItem;
    use crate::sections::test_ctx::with_ctx;

    fn config(n: usize, hidden: Option<usize>) -> ServicesConfig {
        ServicesConfig {
            title: "WHAT WE OFFER".to_string(),
            items: (0..n)
                .map(|i| ServiceItem {
                    title: format!("Service {i}"),
                    href: format!("/services/s{i}/"),
                    ..Default::default()
                })
                .collect(),
            hidden_item: hidden,
        }
    }

    #[test]
    fn renders_all_cards() {
        with_ctx(|ctx| {
            let html = render(ctx, &config(3, None)).unwrap().into_string();
            assert!(html.contains("Service 0"));
            assert!(html.contains("Service 2"));
            assert!(html.contains("/services/s1/"));
        });
    }

    #[test]
    fn hidden_item_drops_one_card() {
        with_ctx(|ctx| {
            let html = render(ctx, &config(3, Some(1))).unwrap().into_string();
            assert!(html.contains("Service 0"));
            assert!(!html.contains("Service 1"));
            assert!(html.contains("Service 2"));
        });
    }

    #[test]
    fn out_of_range_hidden_item_is_ignored() {
        with_ctx(|ctx| {
            let html = render(ctx, &config(2, Some(9))).unwrap().into_string();
            assert!(html.contains("Service 0"));
            assert!(html.contains("Service 1"));
        });
    }

    #[test]
    fn no_items_disables_section() {
        with_ctx(|ctx| {
            assert!(render(ctx, &config(0, None)).is_none());
            // Hiding the only item leaves nothing to show either.
            assert!(render(ctx, &config(1, Some(0))).is_none());
        });
    }
}
