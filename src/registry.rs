//! Section renderer registry.
//!
//! Maps a section `type` tag to the renderer that turns its opaque payload
//! into markup. The built-in set is closed — [`default_registry`] registers
//! a renderer for every [`SectionKind`] through an exhaustive match, so
//! adding a kind without wiring a renderer is a compile error — but the
//! registry itself stays open: `register` lets a caller add or replace
//! renderers (last registration wins), which is also how tests inject
//! failing renderers to exercise fault containment.
//!
//! Resolution is a pure lookup. An unknown tag is not an error here; the
//! composer treats a miss as "skip this entry and note it".

use crate::config::SiteConfig;
use crate::content::{SectionConfig, SectionKind};
use crate::icons::IconResolver;
use crate::sections;
use crate::theme::Theme;
use maud::Markup;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Everything a renderer may consume besides its own payload, threaded
/// through explicitly instead of looked up globally.
pub struct RenderContext<'a> {
    pub site: &'a SiteConfig,
    pub theme: &'a Theme,
    pub icons: &'a IconResolver,
}

/// A contained rendering failure. Faults are substituted with a fallback
/// block at composition; they never abort the rest of the page.
#[derive(Error, Debug, Clone)]
pub enum RenderFault {
    #[error("malformed '{kind}' payload: {detail}")]
    BadPayload { kind: String, detail: String },
    #[error("renderer for '{kind}' failed: {detail}")]
    Failed { kind: String, detail: String },
}

/// Renderer result: `Ok(None)` means the section is disabled for this page
/// (guard clause on missing/empty required data) and renders nothing.
pub type RenderOutcome = Result<Option<Markup>, RenderFault>;

/// A renderer for one section kind: `(context, opaque payload) -> outcome`.
pub type SectionRenderer = Box<dyn Fn(&RenderContext, &Value) -> RenderOutcome + Send + Sync>;

/// String-tag → renderer mapping.
pub struct RendererRegistry {
    renderers: HashMap<String, SectionRenderer>,
}

impl RendererRegistry {
    /// A registry with nothing registered. Prefer [`default_registry`].
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Add or replace the renderer for `tag`. Last registration wins;
    /// re-registering the same renderer is a no-op in effect.
    pub fn register(&mut self, tag: impl Into<String>, renderer: SectionRenderer) {
        self.renderers.insert(tag.into(), renderer);
    }

    /// Pure lookup; `None` for unregistered tags.
    pub fn resolve(&self, tag: &str) -> Option<&SectionRenderer> {
        self.renderers.get(tag)
    }
}

/// Registry with every built-in section renderer registered.
pub fn default_registry() -> RendererRegistry {
    let mut registry = RendererRegistry::empty();
    for kind in SectionKind::BUILT_IN {
        let renderer = built_in_renderer(kind.clone());
        registry.register(kind.tag().to_string(), renderer);
    }
    registry
}

/// Wrap a built-in kind as a registry renderer: parse the opaque payload
/// into the typed config, then dispatch to the section's render function.
fn built_in_renderer(kind: SectionKind) -> SectionRenderer {
    Box::new(move |ctx, payload| {
        let config = SectionConfig::parse(&kind, payload).map_err(|e| RenderFault::BadPayload {
            kind: kind.tag().to_string(),
            detail: e.to_string(),
        })?;
        let Some(config) = config else {
            // Unrecognized kinds never reach here via default_registry.
            return Ok(None);
        };
        let markup = match &config {
            SectionConfig::Hero(cfg) => sections::hero::render(ctx, cfg),
            SectionConfig::Services(cfg) => sections::services::render(ctx, cfg),
            SectionConfig::Grid(cfg) => sections::grid::render(ctx, cfg),
            SectionConfig::Stats(cfg) => sections::stats::render(ctx, cfg),
            SectionConfig::Testimonials(cfg) => sections::testimonials::render(ctx, cfg),
            SectionConfig::About(cfg) => sections::about::render(ctx, cfg),
            SectionConfig::Cta(cfg) => sections::cta::render(ctx, cfg),
            SectionConfig::Contact(cfg) => sections::contact::render(ctx, cfg),
            SectionConfig::Footer(cfg) => sections::footer::render(ctx, cfg),
        };
        Ok(markup)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeConfig;
    use maud::html;
    use serde_json::json;

    fn with_ctx<R>(f: impl FnOnce(&RenderContext) -> R) -> R {
        let site = SiteConfig::default();
        let theme = Theme::resolve(&ThemeConfig::default()).unwrap();
        let icons = IconResolver::new();
        f(&RenderContext {
            site: &site,
            theme: &theme,
            icons: &icons,
        })
    }

    #[test]
    fn default_registry_covers_all_built_in_kinds() {
        let registry = default_registry();
        for kind in SectionKind::BUILT_IN {
            assert!(
                registry.resolve(kind.tag()).is_some(),
                "no renderer for {kind}"
            );
        }
    }

    #[test]
    fn resolve_unknown_tag_is_none() {
        assert!(default_registry().resolve("masonry").is_none());
    }

    #[test]
    fn resolve_is_idempotent() {
        let registry = default_registry();
        with_ctx(|ctx| {
            let payload = json!({ "title": "Welcome" });
            let a = registry.resolve("hero").unwrap()(ctx, &payload)
                .unwrap()
                .unwrap()
                .into_string();
            let b = registry.resolve("hero").unwrap()(ctx, &payload)
                .unwrap()
                .unwrap()
                .into_string();
            assert_eq!(a, b);
        });
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = default_registry();
        registry.register(
            "hero",
            Box::new(|_, _| Ok(Some(html! { p { "replaced" } }))),
        );
        with_ctx(|ctx| {
            let markup = registry.resolve("hero").unwrap()(ctx, &json!({}))
                .unwrap()
                .unwrap();
            assert_eq!(markup.into_string(), "<p>replaced</p>");
        });
    }

    #[test]
    fn malformed_payload_becomes_bad_payload_fault() {
        let registry = default_registry();
        with_ctx(|ctx| {
            let outcome = registry.resolve("stats").unwrap()(ctx, &json!({ "stats": 7 }));
            match outcome {
                Err(RenderFault::BadPayload { kind, .. }) => assert_eq!(kind, "stats"),
                other => panic!("expected BadPayload, got {other:?}"),
            }
        });
    }

    #[test]
    fn empty_payload_disables_collection_sections() {
        let registry = default_registry();
        with_ctx(|ctx| {
            for tag in ["services", "grid", "stats", "testimonials"] {
                let outcome = registry.resolve(tag).unwrap()(ctx, &json!({})).unwrap();
                assert!(outcome.is_none(), "{tag} should be disabled when empty");
            }
        });
    }
}
