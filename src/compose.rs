//! Page composition: ordered section entries → rendered section sequence.
//!
//! The composer walks a page's section entries in input order and, for each
//! one, resolves the renderer for its `type` tag and invokes it with the
//! entry's opaque payload. Three things can happen per entry:
//!
//! - the tag resolves and the renderer produces markup → the section is
//!   wrapped in its anchor container and appended;
//! - the renderer declines (`Ok(None)`, guard clause on empty content) →
//!   the entry is silently skipped;
//! - the tag is unknown, or the renderer faults → the entry is skipped or
//!   substituted with a fallback block, and a diagnostic is collected for
//!   the operator. Composition of the remaining entries always continues —
//!   one broken section never blanks the page.
//!
//! Output order strictly matches input order; entries are never reordered
//! or deduplicated. The composer has no side effects: it never mutates the
//! page config and produces only markup and diagnostics.

use crate::content::{PageConfig, SectionEntry};
use crate::registry::{RenderContext, RenderFault, RendererRegistry};
use maud::{Markup, html};
use serde_json::Value;

/// A warning collected during composition, reported by `scan`/`build` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Page slug the warning belongs to.
    pub page: String,
    pub message: String,
}

/// One rendered section in its wrapping container.
pub struct ComposedSection {
    pub id: String,
    pub markup: Markup,
}

/// A fully composed page body, ready for the document shell.
pub struct ComposedPage {
    pub slug: String,
    pub title: String,
    /// Page-level background image, applied to the page wrapper.
    pub background_image: Option<String>,
    pub sections: Vec<ComposedSection>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ComposedPage {
    /// All section markup concatenated in order.
    pub fn body(&self) -> Markup {
        html! {
            @for section in &self.sections {
                (section.markup)
            }
        }
    }
}

/// Compose a page against a renderer registry.
pub fn compose_page(
    page: &PageConfig,
    registry: &RendererRegistry,
    ctx: &RenderContext,
) -> ComposedPage {
    let mut sections = Vec::with_capacity(page.sections.len());
    let mut diagnostics = Vec::new();

    for entry in &page.sections {
        let Some(renderer) = registry.resolve(&entry.type_tag) else {
            diagnostics.push(Diagnostic {
                page: page.slug.clone(),
                message: format!(
                    "unknown section type '{}' (entry '{}') - skipped",
                    entry.type_tag, entry.id
                ),
            });
            continue;
        };

        let empty = Value::Object(serde_json::Map::new());
        let payload = entry.config.as_ref().unwrap_or(&empty);
        match renderer(ctx, payload) {
            Ok(Some(markup)) => sections.push(wrap(entry, markup)),
            Ok(None) => {} // Section disabled for this page; nothing to show.
            Err(fault) => {
                diagnostics.push(Diagnostic {
                    page: page.slug.clone(),
                    message: format!("section '{}' failed: {fault}", entry.id),
                });
                sections.push(wrap(entry, fault_fallback(&fault)));
            }
        }
    }

    ComposedPage {
        slug: page.slug.clone(),
        title: page.title.clone(),
        background_image: page.background.as_ref().map(|b| b.image.clone()),
        sections,
        diagnostics,
    }
}

/// Wrap rendered section markup in the generic anchor container. Container
/// overrides apply here, on the wrapper, leaving the renderer's internal
/// layout untouched.
fn wrap(entry: &SectionEntry, markup: Markup) -> ComposedSection {
    let style = entry.container.as_ref().and_then(|c| c.style());
    ComposedSection {
        id: entry.id.clone(),
        markup: html! {
            div.section-container id=(entry.id) style=[style] {
                (markup)
            }
        },
    }
}

/// The substitute block for a faulted section: a generic apology with a
/// retry control and an escape hatch home. No internal detail reaches the
/// visitor.
fn fault_fallback(_fault: &RenderFault) -> Markup {
    html! {
        div.section-fault {
            h2 { "Something went wrong" }
            p { "This part of the page could not be displayed." }
            div.fault-actions {
                button.btn.btn-primary data-action="reload" { "Try Again" }
                a.btn.btn-outlined href="/" { "Go Home" }
            }
        }
    }
}
