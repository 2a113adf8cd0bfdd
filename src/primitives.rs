//! Shared markup primitives used by every page and section renderer.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/): templates are
//! type-checked Rust with automatic escaping, so content strings from TOML
//! can never inject markup.
//!
//! The primitives here are deliberately thin: the base document shell (with
//! SEO meta from `site.toml`), the app bar, and the small pieces — section
//! headers, CTA buttons — that keep section renderers visually consistent
//! without dictating their internal layout.

use crate::config::{MenuKind, NavigationConfig, SiteConfig};
use crate::content::CtaLink;
use crate::registry::RenderContext;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// The base HTML document shell shared by every generated page.
///
/// `title` is the full `<title>` text; `description` feeds the meta
/// description (SEO default or page override). CSS is inlined and the
/// runtime script is appended at the end of `<body>`.
pub fn base_document(
    site: &SiteConfig,
    title: &str,
    description: &str,
    css: &str,
    js: &str,
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if !description.is_empty() {
                    meta name="description" content=(description);
                }
                @if !site.seo.keywords.is_empty() {
                    meta name="keywords" content=(site.seo.keywords.join(", "));
                }
                style { (PreEscaped(css.to_string())) }
            }
            body {
                (body)
                script { (PreEscaped(js.to_string())) }
            }
        }
    }
}

/// Effective meta description for a page: the SEO override when present,
/// else the site description.
pub fn effective_description(site: &SiteConfig) -> &str {
    site.seo
        .description
        .as_deref()
        .unwrap_or(&site.description)
}

/// The fixed top app bar: brand logo + wordmark on the left, main menu on
/// the right, collapsing behind a checkbox-driven hamburger on small
/// screens (no JS required for the menu itself).
pub fn app_bar(ctx: &RenderContext, nav: &NavigationConfig) -> Markup {
    let brand = &ctx.theme.brand;
    let wordmark = if brand.logo.text.is_empty() {
        &brand.name
    } else {
        &brand.logo.text
    };
    html! {
        header.app-bar {
            a.brand href="/" {
                (ctx.icons.resolve(&brand.logo.icon, "brand-icon"))
                span.brand-text { (wordmark) }
            }
            input.nav-toggle type="checkbox" id="nav-toggle";
            label.nav-hamburger for="nav-toggle" aria-label="Menu" {
                span.hamburger-line {}
                span.hamburger-line {}
                span.hamburger-line {}
            }
            nav.main-nav {
                ul {
                    @for entry in &nav.main_menu {
                        li {
                            // Section links scroll smoothly to in-page anchors.
                            @if entry.kind == MenuKind::Section {
                                a.nav-section-link href=(entry.href) { (entry.label) }
                            } @else {
                                a href=(entry.href) { (entry.label) }
                            }
                        }
                    }
                }
            }
            // The runtime flips [data-theme] on <html> and persists the
            // choice under the `theme-mode` storage key.
            button.theme-toggle type="button" data-action="toggle-theme" aria-label="Toggle dark mode" {
                span.theme-toggle-moon { "\u{263d}" }
                span.theme-toggle-sun { "\u{2600}" }
            }
        }
    }
}

/// Centered section header: title plus optional subtitle.
pub fn section_header(title: &str, subtitle: &str) -> Markup {
    html! {
        header.section-header {
            h2 { (title) }
            @if !subtitle.is_empty() {
                p.section-subtitle { (subtitle) }
            }
        }
    }
}

/// A call-to-action button link. `class` picks the visual weight
/// (`btn-primary`, `btn-secondary`, `btn-outlined`).
pub fn cta_button(link: &CtaLink, class: &str) -> Markup {
    html! {
        a class={ "btn " (class) } href=(link.href) { (link.text) }
    }
}
