//! # Tidemark
//!
//! A static site generator for small-business brochure sites. Content is
//! data, not code: a tree of TOML files describes the site identity, theme,
//! navigation and pages, and pages are declarative compositions of typed
//! sections. Adding a section to a page is a config edit, not a template
//! change.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Tidemark builds a site in two independent stages joined by a JSON
//! manifest:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (TOML tree → structured data)
//! 2. Generate  manifest  →  dist/            (final HTML site)
//! ```
//!
//! The separation exists for two reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON with every
//!   section payload resolved — inspect it to see exactly what the generator
//!   will render.
//! - **Testability**: generation is a pure function of the manifest, so
//!   tests can exercise composition without a content directory.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — loads the content TOML tree, resolves section payload references, produces the manifest |
//! | [`generate`] | Stage 2 — renders the HTML site from the manifest using Maud |
//! | [`config`] | Site, navigation and loading helpers for sparse TOML configs |
//! | [`theme`] | Brand/color/typography config, shade derivation, CSS custom property emission |
//! | [`content`] | Page model, section kinds and typed section payloads |
//! | [`compose`] | Page composer — ordered section entries through the registry, fault containment |
//! | [`registry`] | Section renderer registry: tag → renderer, open for replacement |
//! | [`sections`] | The built-in section renderers (hero, services, stats, ...) |
//! | [`services`] | Service detail records and slug lookup |
//! | [`primitives`] | Document shell, app bar and shared markup pieces |
//! | [`icons`] | Inline SVG icon set with fallback resolution |
//! | [`motion`] | Deterministic animation math: count-up easing, carousel stepping |
//! | [`validate`] | Contact and newsletter submission validation rules |
//! | [`output`] | CLI output formatting for both stages |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped, so content
//!   strings from TOML can never inject markup.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Sections Are Data
//!
//! A page is an ordered list of `{ id, type, config }` entries. The `type`
//! tag selects a renderer from the [`registry`]; the config payload stays an
//! opaque JSON value until that renderer parses it. A payload the renderer
//! cannot parse is a contained fault — the composer substitutes a fallback
//! block and keeps going, so one bad section never blanks a page.
//!
//! ## Progressive Enhancement
//!
//! Interactive behavior (stat count-ups, testimonial carousels, client-side
//! form validation) ships as a small vanilla script reading data attributes
//! the renderers emit. The generated HTML always carries the final content:
//! every carousel slide is in the markup, every stat shows its final number.
//! No JavaScript, no problem — the page is still complete.
//!
//! ## The "Forever Stack"
//!
//! The output is plain HTML, one inlined stylesheet driven by CSS custom
//! properties, and a small vanilla JavaScript runtime. The generated site
//! can be dropped on any file server — no Node, no PHP, no database.

pub mod compose;
pub mod config;
pub mod content;
pub mod generate;
pub mod icons;
pub mod motion;
pub mod output;
pub mod primitives;
pub mod registry;
pub mod scan;
pub mod sections;
pub mod services;
pub mod theme;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
