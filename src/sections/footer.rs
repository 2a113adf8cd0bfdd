//! Site footer: contact links, social links, optional newsletter signup.

use crate::content::{ContactLink, FooterConfig};
use crate::primitives::section_header;
use crate::registry::RenderContext;
use maud::{Markup, html};

pub fn render(ctx: &RenderContext, cfg: &FooterConfig) -> Option<Markup> {
    let (social, contact): (Vec<&ContactLink>, Vec<&ContactLink>) =
        cfg.contact_info.iter().partition(|link| link.kind == "social");

    Some(html! {
        footer.site-footer {
            @if !cfg.title.is_empty() {
                (section_header(&cfg.title, ""))
            }
            div.footer-columns {
                @if !contact.is_empty() {
                    div.footer-contact {
                        ul {
                            @for link in &contact {
                                li {
                                    a href=(link.href) {
                                        (ctx.icons.resolve(&link.icon, "footer-icon"))
                                        span { (link.label) }
                                    }
                                }
                            }
                        }
                    }
                }
                @if !social.is_empty() {
                    div.footer-social {
                        @for link in &social {
                            a href=(link.href) aria-label=(link.label) {
                                (ctx.icons.resolve(&link.icon, "footer-icon"))
                            }
                        }
                    }
                }
                @if cfg.newsletter {
                    (newsletter_form(cfg.newsletter_endpoint.as_deref()))
                }
            }
            p.footer-copyright {
                (ctx.site.name)
                @if !ctx.site.tagline.is_empty() {
                    " - " (ctx.site.tagline)
                }
            }
        }
    })
}

fn newsletter_form(endpoint: Option<&str>) -> Markup {
    let endpoint = endpoint.unwrap_or("/api/newsletter");
    html! {
        form.newsletter-form
            method="post"
            action=(endpoint)
            data-endpoint=(endpoint)
            novalidate
        {
            label for="newsletter-email" { "Subscribe to our newsletter" }
            div.newsletter-row {
                input id="newsletter-email" name="email" type="email"
                    required placeholder="you@example.com" autocomplete="email";
                button.btn.btn-secondary type="submit" { "Subscribe" }
            }
            span.field-error data-for="email" {}
            p.form-status role="status" {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_ctx::with_ctx;

    fn config() -> FooterConfig {
        FooterConfig {
            title: "Get In Touch".to_string(),
            contact_info: vec![
                ContactLink {
                    icon: "phone".to_string(),
                    kind: "contact".to_string(),
                    label: "+1 555 0100".to_string(),
                    href: "tel:+15550100".to_string(),
                },
                ContactLink {
                    icon: "facebook".to_string(),
                    kind: "social".to_string(),
                    label: "Facebook".to_string(),
                    href: "https://facebook.com/example".to_string(),
                },
            ],
            newsletter: false,
            newsletter_endpoint: None,
        }
    }

    #[test]
    fn splits_contact_and_social_links() {
        with_ctx(|ctx| {
            let html = render(ctx, &config()).unwrap().into_string();
            assert!(html.contains("footer-contact"));
            assert!(html.contains("+1 555 0100"));
            assert!(html.contains("footer-social"));
            assert!(html.contains(r#"aria-label="Facebook""#));
        });
    }

    #[test]
    fn newsletter_form_only_when_enabled() {
        with_ctx(|ctx| {
            let off = render(ctx, &config()).unwrap().into_string();
            assert!(!off.contains("newsletter-form"));

            let cfg = FooterConfig {
                newsletter: true,
                ..config()
            };
            let on = render(ctx, &cfg).unwrap().into_string();
            assert!(on.contains("newsletter-form"));
            assert!(on.contains(r#"data-endpoint="/api/newsletter""#));
        });
    }

    #[test]
    fn custom_newsletter_endpoint() {
        let cfg = FooterConfig {
            newsletter: true,
            newsletter_endpoint: Some("/api/subscribe".to_string()),
            ..config()
        };
        with_ctx(|ctx| {
            let html = render(ctx, &cfg).unwrap().into_string();
            assert!(html.contains(r#"action="/api/subscribe""#));
        });
    }

    #[test]
    fn empty_footer_still_renders_site_line() {
        with_ctx(|ctx| {
            let html = render(ctx, &FooterConfig::default()).unwrap().into_string();
            assert!(html.contains("footer-copyright"));
        });
    }
}
