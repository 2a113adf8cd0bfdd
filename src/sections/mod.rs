//! Built-in section renderers.
//!
//! One module per section kind, each exposing a single
//! `render(ctx, config) -> Option<Markup>` function. Renderers are pure:
//! same context and config, same markup. They return `None` when the config
//! gives them nothing to show (no title, no items), which composition treats
//! as "section disabled on this page".
//!
//! Interactive behavior (stat count-ups, testimonial carousels, the contact
//! form) is expressed as data attributes that the runtime script picks up;
//! the emitted HTML always carries the final content so pages degrade to
//! fully readable documents without JavaScript.

pub mod about;
pub mod contact;
pub mod cta;
pub mod footer;
pub mod grid;
pub mod hero;
pub mod services;
pub mod stats;
pub mod testimonials;

#[cfg(test)]
pub(crate) mod test_ctx {
    use crate::config::SiteConfig;
    use crate::icons::IconResolver;
    use crate::registry::RenderContext;
    use crate::theme::{Theme, ThemeConfig};

    /// Run a closure with a default render context.
    pub fn with_ctx<R>(f: impl FnOnce(&RenderContext) -> R) -> R {
        let site = SiteConfig::default();
        let theme = Theme::resolve(&ThemeConfig::default()).unwrap();
        let icons = IconResolver::new();
        f(&RenderContext {
            site: &site,
            theme: &theme,
            icons: &icons,
        })
    }
}
