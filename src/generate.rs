//! Static site generation from a scan manifest.
//!
//! Stage 2 of the build pipeline. Reads the manifest produced by the scan
//! stage, resolves the theme, composes every page through the section
//! renderer registry and writes the output tree:
//!
//! ```text
//! dist/
//! ├── index.html                   # pages/home.toml
//! ├── contact/index.html           # every other page at <slug>/index.html
//! ├── services/
//! │   └── expeditions/index.html   # one detail page per service record
//! ├── 404.html
//! ├── 500.html
//! └── hero.jpg                     # content/assets/ copied verbatim
//! ```
//!
//! CSS is assembled from the resolved theme's custom properties plus the
//! static stylesheet, and inlined into every page along with the runtime
//! script. Pages are rendered in parallel; rendering is pure per page, so
//! order never matters.

use crate::compose::{ComposedPage, compose_page};
use crate::config::NavigationConfig;
use crate::content::{CtaLink, SectionEntry, ServiceItem, ServicesConfig};
use crate::icons::IconResolver;
use crate::primitives::{app_bar, base_document, cta_button, effective_description};
use crate::registry::{RenderContext, RendererRegistry, default_registry};
use crate::scan::{Manifest, ScanError};
use crate::sections;
use crate::services::{ServiceCatalog, ServiceDetail};
use crate::theme::{self, Theme, ThemeError};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Manifest error: {0}")]
    Manifest(#[from] ScanError),
    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// What was written, for build output.
#[derive(Debug, Default)]
pub struct GenerateSummary {
    /// Output-relative paths of every page written, in output order.
    pub pages: Vec<String>,
    pub assets_copied: usize,
    /// Scan warnings plus composition diagnostics.
    pub warnings: Vec<String>,
}

pub fn generate(
    manifest_path: &Path,
    content_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let manifest = Manifest::from_path(manifest_path)?;
    generate_from_manifest(&manifest, content_dir, output_dir)
}

pub fn generate_from_manifest(
    manifest: &Manifest,
    content_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let theme = Theme::resolve(&manifest.theme)?;
    let css = format!("{}\n\n{}", theme::generate_theme_css(&theme), CSS_STATIC);
    let registry = default_registry();
    let icons = IconResolver::new();
    let ctx = RenderContext {
        site: &manifest.site,
        theme: &theme,
        icons: &icons,
    };

    fs::create_dir_all(output_dir)?;
    let assets_copied = copy_assets(&content_dir.join("assets"), output_dir)?;

    let mut warnings = manifest.warnings.clone();

    // The home page's footer entry doubles as the shared footer on service
    // detail pages and error pages.
    let footer_entry = manifest
        .home_page()
        .and_then(|p| p.sections.iter().find(|s| s.type_tag == "footer"))
        .cloned();

    let shell = PageShell {
        manifest,
        registry: &registry,
        ctx: &ctx,
        css: &css,
        footer_entry,
    };

    // Content pages.
    let mut page_results: Vec<(String, Vec<String>)> = manifest
        .pages
        .par_iter()
        .map(|page| {
            let composed = compose_page(page, &registry, &ctx);
            let rel_path = if page.slug == "home" {
                "index.html".to_string()
            } else {
                format!("{}/index.html", page.slug)
            };
            let document = shell.document(&composed.title, page_body(&shell, &composed));
            write_page(output_dir, &rel_path, &document)?;
            let diags = composed
                .diagnostics
                .into_iter()
                .map(|d| d.message)
                .collect();
            Ok((rel_path, diags))
        })
        .collect::<Result<_, GenerateError>>()?;
    page_results.sort();

    let mut pages = Vec::new();
    for (rel_path, diags) in page_results {
        pages.push(rel_path);
        warnings.extend(diags);
    }

    // Service detail pages.
    let service_paths: Vec<String> = manifest
        .services
        .iter()
        .collect::<Vec<_>>()
        .par_iter()
        .map(|service| {
            let rel_path = format!("services/{}/index.html", service.slug);
            let body = service_page_body(&shell, service, &manifest.services);
            let title = &service.title;
            let document = shell.document(title, body);
            write_page(output_dir, &rel_path, &document)?;
            Ok(rel_path)
        })
        .collect::<Result<_, GenerateError>>()?;
    pages.extend(service_paths);

    // Error pages.
    for (rel_path, title, message) in [
        (
            "404.html",
            "Page Not Found",
            "The page you are looking for does not exist.",
        ),
        (
            "500.html",
            "Something Went Wrong",
            "An unexpected error occurred. Please try again.",
        ),
    ] {
        let document = shell.document(title, error_page_body(&shell, title, message));
        write_page(output_dir, rel_path, &document)?;
        pages.push(rel_path.to_string());
    }

    Ok(GenerateSummary {
        pages,
        assets_copied,
        warnings,
    })
}

/// Everything needed to wrap a page body in the full document.
struct PageShell<'a> {
    manifest: &'a Manifest,
    registry: &'a RendererRegistry,
    ctx: &'a RenderContext<'a>,
    css: &'a str,
    footer_entry: Option<SectionEntry>,
}

impl PageShell<'_> {
    fn document(&self, page_title: &str, body: Markup) -> Markup {
        let title = self.manifest.site.page_title(page_title);
        base_document(
            &self.manifest.site,
            &title,
            effective_description(&self.manifest.site),
            self.css,
            JS,
            body,
        )
    }

    /// The shared footer, composed from the home page's footer entry. Pages
    /// without one (service details, error pages) get the nav-only footer.
    fn footer(&self) -> Markup {
        let section = self.footer_entry.as_ref().and_then(|entry| {
            let payload = entry.config.clone()?;
            self.registry.resolve(&entry.type_tag)?(self.ctx, &payload).ok()?
        });
        html! {
            @if let Some(footer) = section {
                (footer)
            }
            (footer_nav(&self.manifest.navigation))
        }
    }
}

fn page_body(shell: &PageShell, composed: &ComposedPage) -> Markup {
    let style = composed
        .background_image
        .as_ref()
        .map(|img| format!("background-image: url('{img}');"));
    html! {
        (app_bar(shell.ctx, &shell.manifest.navigation))
        main.page style=[style] {
            (composed.body())
        }
        (footer_nav(&shell.manifest.navigation))
    }
}

fn footer_nav(nav: &NavigationConfig) -> Markup {
    html! {
        @if !nav.footer_menu.is_empty() {
            nav.footer-nav {
                ul {
                    @for entry in &nav.footer_menu {
                        li { a href=(entry.href) { (entry.label) } }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Service detail pages
// ============================================================================

fn service_page_body(
    shell: &PageShell,
    service: &ServiceDetail,
    catalog: &ServiceCatalog,
) -> Markup {
    let hero_style = (!service.hero_image.is_empty())
        .then(|| format!("background-image: url('{}');", service.hero_image));

    let description = {
        let parser = Parser::new(&service.full_description);
        let mut body_html = String::new();
        md_html::push_html(&mut body_html, parser);
        PreEscaped(body_html)
    };

    html! {
        (app_bar(shell.ctx, &shell.manifest.navigation))
        main.page.service-detail {
            section.service-hero style=[hero_style] {
                div.hero-content {
                    h1 { (service.title) }
                    @if !service.short_description.is_empty() {
                        p.hero-subtitle { (service.short_description) }
                    }
                }
            }
            section.service-info {
                div.service-description { (description) }
                @if let Some(pricing) = &service.pricing {
                    aside.service-pricing {
                        span.price { (pricing.price) " " (pricing.currency) }
                        span.price-unit { (pricing.unit) }
                        @if !service.duration.is_empty() {
                            span.duration { (service.duration) }
                        }
                    }
                }
            }
            @if !service.features.is_empty() {
                section.service-features {
                    h2 { "Highlights" }
                    ul {
                        @for feature in &service.features {
                            li { (feature) }
                        }
                    }
                }
            }
            @if !service.itinerary.is_empty() {
                section.service-itinerary {
                    h2 { "Itinerary" }
                    @for (i, day) in service.itinerary.iter().enumerate() {
                        details.itinerary-day open[i == 0] {
                            summary { (day.day) ": " (day.title) }
                            p { (day.activities) }
                        }
                    }
                }
            }
            @if !service.inclusions.is_empty() || !service.what_to_bring.is_empty() {
                section.service-lists {
                    @if !service.inclusions.is_empty() {
                        div.service-inclusions {
                            h2 { "What's Included" }
                            ul {
                                @for item in &service.inclusions {
                                    li { (item) }
                                }
                            }
                        }
                    }
                    @if !service.what_to_bring.is_empty() {
                        div.service-bring {
                            h2 { "What to Bring" }
                            ul {
                                @for item in &service.what_to_bring {
                                    li { (item) }
                                }
                            }
                        }
                    }
                }
            }
            section.service-book {
                (cta_button(
                    &CtaLink {
                        text: "Book This Trip".to_string(),
                        href: "/contact/".to_string(),
                    },
                    "btn-primary btn-large",
                ))
            }
            @if let Some(others) = other_services(shell, service, catalog) {
                (others)
            }
        }
        (shell.footer())
    }
}

/// The shared services section with this page's own entry hidden. `None`
/// when this service is the only one.
fn other_services(
    shell: &PageShell,
    current: &ServiceDetail,
    catalog: &ServiceCatalog,
) -> Option<Markup> {
    let items: Vec<ServiceItem> = catalog
        .iter()
        .map(|s| ServiceItem {
            title: s.title.clone(),
            image: s.hero_image.clone(),
            description: s.short_description.clone(),
            href: format!("/services/{}/", s.slug),
        })
        .collect();
    let hrefs: Vec<&str> = items.iter().map(|i| i.href.as_str()).collect();
    let hidden_item = ServiceCatalog::position_in_items(&current.slug, &hrefs);
    let cfg = ServicesConfig {
        title: "Other Services".to_string(),
        items,
        hidden_item,
    };
    sections::services::render(shell.ctx, &cfg)
}

fn error_page_body(shell: &PageShell, title: &str, message: &str) -> Markup {
    html! {
        (app_bar(shell.ctx, &shell.manifest.navigation))
        main.page.error-page {
            section.error-content {
                h1 { (title) }
                p { (message) }
                a.btn.btn-primary href="/" { "Go Home" }
            }
        }
        (shell.footer())
    }
}

// ============================================================================
// Output helpers
// ============================================================================

fn write_page(output_dir: &Path, rel_path: &str, document: &Markup) -> Result<(), GenerateError> {
    let path = output_dir.join(rel_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, document.clone().into_string())?;
    Ok(())
}

/// Copy the assets tree into the output root, preserving structure. A
/// missing assets directory copies nothing.
fn copy_assets(assets_dir: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    if !assets_dir.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(assets_dir) {
        let entry = entry.map_err(|e| GenerateError::Io(e.into()))?;
        let rel = entry
            .path()
            .strip_prefix(assets_dir)
            .expect("walkdir yields paths under its root");
        let dst = output_dir.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst)?;
        } else {
            if let Some(parent) = dst.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dst)?;
            copied += 1;
        }
    }
    Ok(copied)
}
