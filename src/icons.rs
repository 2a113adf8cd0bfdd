//! Icon resolution: string names → inline SVG markup.
//!
//! Section configs reference icons by name (`icon = "star"`). The resolver
//! maps those names onto a small built-in set of 24×24 path glyphs rendered
//! inline, so the output site needs no icon font or sprite sheet. An
//! unresolvable name falls back to the default glyph instead of failing —
//! a typo in content costs a generic icon, never a build.
//!
//! The resolver is constructed once and passed through the render context
//! rather than consulted as a global.

use maud::{Markup, html};
use std::collections::BTreeMap;

/// Name of the fallback glyph used for unknown icon names.
pub const DEFAULT_ICON: &str = "help";

// Path data for the built-in glyphs (24x24 viewBox, single filled path).
const GLYPHS: &[(&str, &str)] = &[
    ("anchor", "M17 15h2a5 5 0 0 1-5 5v-8h3V9h-3V7.8a3 3 0 1 0-4 0V9H7v3h3v8a5 5 0 0 1-5-5h2l-4-4-3 4h3a7 7 0 0 0 7 7h2a7 7 0 0 0 7-7h3l-3-4z"),
    ("calendar", "M19 4h-1V2h-2v2H8V2H6v2H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6a2 2 0 0 0-2-2zm0 16H5V10h14zM5 8V6h14v2z"),
    ("check-circle", "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm-2 15-5-5 1.4-1.4L10 14.2l7.6-7.6L19 8z"),
    ("compass", "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm2.2 12.2L6 18l3.8-8.2L18 6z"),
    ("email", "M20 4H4a2 2 0 0 0-2 2v12a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V6a2 2 0 0 0-2-2zm0 4-8 5-8-5V6l8 5 8-5z"),
    ("facebook", "M22 12a10 10 0 1 0-11.6 9.9v-7H7.9V12h2.5V9.8c0-2.5 1.5-3.9 3.8-3.9 1.1 0 2.2.2 2.2.2v2.5h-1.3c-1.2 0-1.6.8-1.6 1.6V12h2.8l-.4 2.9h-2.4v7A10 10 0 0 0 22 12z"),
    ("groups", "M12 12.8a3 3 0 1 0-3-3 3 3 0 0 0 3 3zm-7 1.4a2.4 2.4 0 1 0-2.4-2.4A2.4 2.4 0 0 0 5 14.2zm14 0a2.4 2.4 0 1 0-2.4-2.4 2.4 2.4 0 0 0 2.4 2.4zM12 14.5c-2.3 0-7 1.2-7 3.5V20h14v-2c0-2.3-4.7-3.5-7-3.5zM5 15.6c-1.9 0-5 .9-5 2.7V20h3v-2c0-.9.8-1.7 2-2.4zm14 0-.1 0c1.3.7 2.1 1.5 2.1 2.4v2h3v-1.7c0-1.8-3.1-2.7-5-2.7z"),
    ("help", "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm1 17h-2v-2h2zm2.1-7.7-.9.9c-.7.8-1.2 1.4-1.2 2.8h-2v-.5c0-1.1.5-2.1 1.2-2.8l1.2-1.3a2 2 0 1 0-3.4-1.4H8a4 4 0 1 1 7.1 2.3z"),
    ("instagram", "M12 2.2c3.2 0 3.6 0 4.9.1 3.3.1 4.8 1.7 4.9 4.9.1 1.3.1 1.6.1 4.8s0 3.6-.1 4.8c-.1 3.2-1.6 4.8-4.9 4.9-1.3.1-1.6.1-4.9.1s-3.6 0-4.8-.1c-3.3-.1-4.8-1.7-4.9-4.9-.1-1.3-.1-1.6-.1-4.8s0-3.6.1-4.8C2.4 4 4 2.4 7.2 2.3c1.3-.1 1.6-.1 4.8-.1zm0 3.6a6.2 6.2 0 1 0 0 12.4 6.2 6.2 0 0 0 0-12.4zm0 10.2a4 4 0 1 1 0-8 4 4 0 0 1 0 8zm6.4-10.4a1.4 1.4 0 1 1-2.9 0 1.4 1.4 0 0 1 2.9 0z"),
    ("phone", "M6.6 10.8a15.1 15.1 0 0 0 6.6 6.6l2.2-2.2a1 1 0 0 1 1-.2 11.4 11.4 0 0 0 3.6.6 1 1 0 0 1 1 1V20a1 1 0 0 1-1 1A17 17 0 0 1 3 4a1 1 0 0 1 1-1h3.5a1 1 0 0 1 1 1 11.4 11.4 0 0 0 .6 3.6 1 1 0 0 1-.3 1z"),
    ("place", "M12 2a7 7 0 0 0-7 7c0 5.2 7 13 7 13s7-7.8 7-13a7 7 0 0 0-7-7zm0 9.5A2.5 2.5 0 1 1 14.5 9 2.5 2.5 0 0 1 12 11.5z"),
    ("sailing", "M11 13.5V2S5.7 7.4 4.3 13.5zm9 0C20 7 13 2 13 2v11.5zM21.3 15H2.7a1 1 0 0 0-.9 1.4A9 9 0 0 0 6 20.5 8.9 8.9 0 0 0 12 22a8.9 8.9 0 0 0 6-1.5 9 9 0 0 0 4.2-4.1 1 1 0 0 0-.9-1.4z"),
    ("security", "M12 1 3 5v6c0 5.6 3.8 10.7 9 12 5.2-1.3 9-6.4 9-12V5zm0 10.99h7A9.8 9.8 0 0 1 12 21V12H5V6.3l7-3.1z"),
    ("star", "m12 17.3 6.2 3.7-1.6-7 5.4-4.7-7.2-.6L12 2 9.2 8.7 2 9.3l5.4 4.7-1.6 7z"),
    ("sun", "M12 7a5 5 0 1 0 0 10 5 5 0 0 0 0-10zM2 13h2a1 1 0 0 0 0-2H2a1 1 0 0 0 0 2zm18 0h2a1 1 0 0 0 0-2h-2a1 1 0 0 0 0 2zM11 2v2a1 1 0 0 0 2 0V2a1 1 0 0 0-2 0zm0 18v2a1 1 0 0 0 2 0v-2a1 1 0 0 0-2 0zM5.99 4.58a1 1 0 0 0-1.41 1.41l1.06 1.06a1 1 0 0 0 1.41-1.41zm12.37 12.37a1 1 0 0 0-1.41 1.41l1.06 1.06a1 1 0 0 0 1.41-1.41zm1.06-10.96a1 1 0 0 0-1.41-1.41l-1.06 1.06a1 1 0 0 0 1.41 1.41zM7.05 18.36a1 1 0 0 0-1.41-1.41l-1.06 1.06a1 1 0 0 0 1.41 1.41z"),
    ("verified-user", "M12 1 3 5v6c0 5.6 3.8 10.7 9 12 5.2-1.3 9-6.4 9-12V5zm-2 15-4-4 1.4-1.4L10 13.2l6.6-6.6L18 8z"),
];

/// Resolves icon names to inline SVG markup, with a default fallback.
pub struct IconResolver {
    glyphs: BTreeMap<&'static str, &'static str>,
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IconResolver {
    pub fn new() -> Self {
        Self {
            glyphs: GLYPHS.iter().copied().collect(),
        }
    }

    /// Whether `name` maps to a built-in glyph (used by `check` to warn about
    /// content that will render with the fallback icon).
    pub fn is_known(&self, name: &str) -> bool {
        self.glyphs.contains_key(name)
    }

    /// Render the named icon, falling back to [`DEFAULT_ICON`] for unknown
    /// names. `class` lands on the `<svg>` element for sizing/coloring.
    pub fn resolve(&self, name: &str, class: &str) -> Markup {
        let path = self
            .glyphs
            .get(name)
            .or_else(|| self.glyphs.get(DEFAULT_ICON))
            .copied()
            .unwrap_or_default();
        html! {
            svg class=(class) viewBox="0 0 24 24" fill="currentColor" aria-hidden="true" {
                path d=(path) {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_icon_renders_its_path() {
        let icons = IconResolver::new();
        let svg = icons.resolve("star", "icon").into_string();
        assert!(svg.contains("svg"));
        assert!(svg.contains("m12 17.3"));
    }

    #[test]
    fn unknown_icon_falls_back_to_default() {
        let icons = IconResolver::new();
        let unknown = icons.resolve("definitely-not-an-icon", "icon").into_string();
        let default = icons.resolve(DEFAULT_ICON, "icon").into_string();
        assert_eq!(unknown, default);
    }

    #[test]
    fn class_is_applied() {
        let icons = IconResolver::new();
        let svg = icons.resolve("phone", "stat-icon").into_string();
        assert!(svg.contains(r#"class="stat-icon""#));
    }

    #[test]
    fn is_known_distinguishes_names() {
        let icons = IconResolver::new();
        assert!(icons.is_known("sailing"));
        assert!(!icons.is_known("SailingIcon"));
    }
}
