//! Page and section content model.
//!
//! Pages are declarative compositions: an ordered list of section entries,
//! each tagged with a `type` selecting a renderer and carrying an opaque
//! config payload that only that renderer interprets. The payload stays
//! opaque (a JSON value) all the way through the manifest; it is parsed into
//! a typed config at render time.
//!
//! ```toml
//! # pages/home.toml
//! title = "Home"
//!
//! [background]
//! image = "/app-bg.jpg"
//!
//! [[sections]]
//! id = "hero-container"
//! type = "hero"
//! section = "hero"            # payload from sections/hero.toml (defaults to the type tag)
//!
//! [[sections]]
//! id = "whychooseus-section"
//! type = "grid"
//! section = "why_choose_us"
//!
//! [sections.container]
//! min_height = "100vh"        # layout override on the wrapping container
//! ```
//!
//! The set of section kinds is a closed enum ([`SectionKind`]); a tag that
//! matches nothing becomes [`SectionKind::Unrecognized`], which composition
//! skips with a warning rather than failing the build. Section payload
//! shapes are lenient by design: optional fields simply render as absent,
//! and an empty required collection disables the section entirely.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// =============================================================================
// Section kinds
// =============================================================================

/// The closed set of section renderers, plus a carrier for unknown tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Services,
    Grid,
    Stats,
    Testimonials,
    About,
    Cta,
    Contact,
    Footer,
    /// A tag with no built-in renderer. Preserved so diagnostics can name it.
    Unrecognized(String),
}

impl SectionKind {
    /// Every built-in kind, in a stable order. Used to register defaults
    /// exhaustively.
    pub const BUILT_IN: [SectionKind; 9] = [
        SectionKind::Hero,
        SectionKind::Services,
        SectionKind::Grid,
        SectionKind::Stats,
        SectionKind::Testimonials,
        SectionKind::About,
        SectionKind::Cta,
        SectionKind::Contact,
        SectionKind::Footer,
    ];

    pub fn parse(tag: &str) -> SectionKind {
        match tag {
            "hero" => SectionKind::Hero,
            "services" => SectionKind::Services,
            "grid" => SectionKind::Grid,
            "stats" => SectionKind::Stats,
            "testimonials" => SectionKind::Testimonials,
            "about" => SectionKind::About,
            "cta" => SectionKind::Cta,
            "contact" => SectionKind::Contact,
            "footer" => SectionKind::Footer,
            other => SectionKind::Unrecognized(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Services => "services",
            SectionKind::Grid => "grid",
            SectionKind::Stats => "stats",
            SectionKind::Testimonials => "testimonials",
            SectionKind::About => "about",
            SectionKind::Cta => "cta",
            SectionKind::Contact => "contact",
            SectionKind::Footer => "footer",
            SectionKind::Unrecognized(tag) => tag,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// =============================================================================
// Pages
// =============================================================================

/// A page: title, optional page background, ordered section entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    /// URL slug, derived from the file stem (`pages/about.toml` → `about`).
    /// `home` becomes the site root.
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
}

/// Page- or section-level background image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Background {
    pub image: String,
    pub position: String,
    pub overlay: bool,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            image: String::new(),
            position: "center".to_string(),
            overlay: false,
        }
    }
}

/// One entry in a page's section list.
///
/// `config` is the opaque payload for the renderer selected by `type`. In
/// page files it may be inlined or referenced by name via `section`; after
/// the scan stage the manifest always carries the resolved payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionEntry {
    /// Stable anchor id on the wrapping container (e.g. `services-section`).
    pub id: String,
    /// Renderer tag.
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Name of a `sections/<name>.toml` payload file; defaults to the tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Inline or resolved payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    /// Layout overrides applied to the wrapping container only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerProps>,
}

impl SectionEntry {
    pub fn kind(&self) -> SectionKind {
        SectionKind::parse(&self.type_tag)
    }

    /// The payload file name this entry references when no inline config is
    /// given.
    pub fn payload_name(&self) -> &str {
        self.section.as_deref().unwrap_or(&self.type_tag)
    }
}

/// Container-level layout overrides. These wrap the rendered section without
/// reaching into its internal layout (forcing a full-viewport section, a
/// backdrop color behind it).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerProps {
    pub min_height: Option<String>,
    pub background_color: Option<String>,
}

impl ContainerProps {
    /// Inline style string for the container div, `None` when empty.
    pub fn style(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(h) = &self.min_height {
            parts.push(format!("min-height: {h};"));
        }
        if let Some(c) = &self.background_color {
            parts.push(format!("background-color: {c};"));
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

// =============================================================================
// Section payloads
// =============================================================================

/// A parsed, typed section payload — the input to exactly one renderer.
#[derive(Debug, Clone)]
pub enum SectionConfig {
    Hero(HeroConfig),
    Services(ServicesConfig),
    Grid(GridConfig),
    Stats(StatsConfig),
    Testimonials(TestimonialsConfig),
    About(AboutConfig),
    Cta(CtaConfig),
    Contact(ContactFormConfig),
    Footer(FooterConfig),
}

impl SectionConfig {
    /// Parse an opaque payload for a given kind. `Unrecognized` kinds have
    /// no payload shape and return `None`; malformed payloads (wrong types,
    /// not shape-sparse) surface the serde error to the caller.
    pub fn parse(kind: &SectionKind, payload: &Value) -> Result<Option<Self>, serde_json::Error> {
        let parsed = match kind {
            SectionKind::Hero => Self::Hero(from_value(payload)?),
            SectionKind::Services => Self::Services(from_value(payload)?),
            SectionKind::Grid => Self::Grid(from_value(payload)?),
            SectionKind::Stats => Self::Stats(from_value(payload)?),
            SectionKind::Testimonials => Self::Testimonials(from_value(payload)?),
            SectionKind::About => Self::About(from_value(payload)?),
            SectionKind::Cta => Self::Cta(from_value(payload)?),
            SectionKind::Contact => Self::Contact(from_value(payload)?),
            SectionKind::Footer => Self::Footer(from_value(payload)?),
            SectionKind::Unrecognized(_) => return Ok(None),
        };
        Ok(Some(parsed))
    }
}

fn from_value<T: serde::de::DeserializeOwned>(value: &Value) -> Result<T, serde_json::Error> {
    T::deserialize(value)
}

/// Hero section: headline, call to action, full-bleed background.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    pub cta: Option<CtaLink>,
    pub background: Option<Background>,
    pub height: Option<String>,
    pub text_align: Option<String>,
}

/// A call-to-action link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CtaLink {
    pub text: String,
    pub href: String,
}

/// Services section: cards linking to service pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServicesConfig {
    pub title: String,
    pub items: Vec<ServiceItem>,
    /// Index of one item to suppress (a service page hiding itself from the
    /// "other services" list). Out-of-range values hide nothing.
    pub hidden_item: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceItem {
    pub title: String,
    pub image: String,
    pub description: String,
    pub href: String,
}

impl Default for ServiceItem {
    fn default() -> Self {
        Self {
            title: String::new(),
            image: String::new(),
            description: String::new(),
            href: "#".to_string(),
        }
    }
}

/// Icon-led feature grid ("why choose us").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub title: String,
    pub items: Vec<GridItem>,
    pub hidden_item: Option<usize>,
    pub columns: Option<GridColumns>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridItem {
    pub title: String,
    pub icon: String,
    /// Color role name (`primary`, `secondary`, ...) for the icon.
    pub icon_color: String,
    pub subtitle: String,
}

/// Responsive column counts per breakpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridColumns {
    pub xs: u8,
    pub sm: u8,
    pub md: u8,
}

impl Default for GridColumns {
    fn default() -> Self {
        Self { xs: 1, sm: 2, md: 4 }
    }
}

/// Animated metric counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsConfig {
    pub title: String,
    pub subtitle: String,
    pub stats: Vec<Stat>,
    /// Count-up duration; falls back to the theme's motion token.
    pub animation_duration: Option<u32>,
    pub layout: StatsLayout,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Stat {
    pub number: f64,
    pub label: String,
    pub suffix: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsLayout {
    #[default]
    Row,
    Grid,
}

/// Customer testimonials in one of three arrangements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestimonialsConfig {
    pub title: String,
    pub testimonials: Vec<Testimonial>,
    pub autoplay: bool,
    /// Autoplay interval; falls back to the theme's motion token.
    pub interval: Option<u32>,
    pub layout: TestimonialLayout,
    pub variant: TestimonialVariant,
}

impl Default for TestimonialsConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            testimonials: Vec::new(),
            autoplay: true,
            interval: None,
            layout: TestimonialLayout::default(),
            variant: TestimonialVariant::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub company: String,
    /// Star rating, 0–5 in half steps.
    pub rating: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialLayout {
    #[default]
    Carousel,
    Grid,
    Single,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialVariant {
    #[default]
    Card,
    Quote,
    Minimal,
}

/// Company story section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AboutConfig {
    pub title: String,
    pub subtitle: String,
    /// Single content block; markdown allowed.
    pub content: Option<String>,
    /// Alternative to `content`: one string per paragraph.
    pub content_paragraphs: Vec<String>,
    pub image: Option<ImageRef>,
    pub layout: AboutLayout,
    pub stats: Vec<AboutStat>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageRef {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// A static (non-animated) stat shown beside about content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AboutStat {
    pub number: String,
    pub suffix: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AboutLayout {
    #[default]
    TextLeft,
    TextRight,
    Centered,
    TextOnly,
}

/// Call-to-action banner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CtaConfig {
    pub title: String,
    pub description: String,
    pub primary_cta: Option<CtaLink>,
    pub secondary_cta: Option<CtaLink>,
    pub variant: CtaVariant,
    pub background_color: Option<String>,
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaVariant {
    Gradient,
    #[default]
    Solid,
    Outlined,
    Image,
}

/// Contact form section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactFormConfig {
    pub title: String,
    pub subtitle: String,
    pub form: FormConfig,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            title: "Get in touch".to_string(),
            subtitle: String::new(),
            form: FormConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub submit_text: String,
    /// Endpoint the runtime script POSTs the JSON payload to.
    pub submit_endpoint: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_text: "Send Message".to_string(),
            submit_endpoint: "/api/contact".to_string(),
        }
    }
}

/// Footer: contact block, social/contact links, optional newsletter signup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    pub title: String,
    pub contact_info: Vec<ContactLink>,
    pub newsletter: bool,
    /// Endpoint for the newsletter form when enabled.
    pub newsletter_endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactLink {
    pub icon: String,
    /// `social`, `contact` or `website` — grouping hint only.
    pub kind: String,
    pub label: String,
    pub href: String,
}

impl Default for ContactLink {
    fn default() -> Self {
        Self {
            icon: String::new(),
            kind: "contact".to_string(),
            label: String::new(),
            href: "#".to_string(),
        }
    }
}

// =============================================================================
// Item visibility
// =============================================================================

/// Iterate items with at most one index hidden.
///
/// In-range `hidden` suppresses exactly that element and preserves the order
/// of the rest; `None` or out-of-range hides nothing.
pub fn visible_items<T>(items: &[T], hidden: Option<usize>) -> impl Iterator<Item = &T> {
    items
        .iter()
        .enumerate()
        .filter(move |(i, _)| hidden != Some(*i))
        .map(|(_, item)| item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_known_tags_round_trip() {
        for kind in SectionKind::BUILT_IN {
            assert_eq!(SectionKind::parse(kind.tag()), kind);
        }
    }

    #[test]
    fn unknown_tag_becomes_unrecognized() {
        let kind = SectionKind::parse("masonry");
        assert_eq!(kind, SectionKind::Unrecognized("masonry".to_string()));
        assert_eq!(kind.tag(), "masonry");
    }

    #[test]
    fn entry_payload_name_defaults_to_tag() {
        let entry: SectionEntry = toml::from_str(
            r#"
            id = "hero-container"
            type = "hero"
            "#,
        )
        .unwrap();
        assert_eq!(entry.payload_name(), "hero");
        assert_eq!(entry.kind(), SectionKind::Hero);
    }

    #[test]
    fn entry_honors_explicit_section_reference() {
        let entry: SectionEntry = toml::from_str(
            r#"
            id = "whychooseus-section"
            type = "grid"
            section = "why_choose_us"

            [container]
            min_height = "100vh"
            "#,
        )
        .unwrap();
        assert_eq!(entry.payload_name(), "why_choose_us");
        let style = entry.container.unwrap().style().unwrap();
        assert_eq!(style, "min-height: 100vh;");
    }

    #[test]
    fn empty_container_props_produce_no_style() {
        assert_eq!(ContainerProps::default().style(), None);
    }

    #[test]
    fn services_payload_parses_sparse() {
        let payload = json!({
            "title": "WHAT WE OFFER",
            "items": [
                { "title": "Ferry", "href": "/services/ferry/" },
            ],
        });
        let parsed = SectionConfig::parse(&SectionKind::Services, &payload)
            .unwrap()
            .unwrap();
        let SectionConfig::Services(cfg) = parsed else {
            panic!("wrong variant");
        };
        assert_eq!(cfg.items.len(), 1);
        assert_eq!(cfg.hidden_item, None);
        assert!(cfg.items[0].description.is_empty());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let payload = json!({ "items": "not-a-list" });
        assert!(SectionConfig::parse(&SectionKind::Services, &payload).is_err());
    }

    #[test]
    fn unrecognized_kind_has_no_payload() {
        let kind = SectionKind::parse("masonry");
        let parsed = SectionConfig::parse(&kind, &json!({})).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn variant_names_use_kebab_case() {
        let cfg: AboutConfig =
            serde_json::from_value(json!({ "layout": "text-right" })).unwrap();
        assert_eq!(cfg.layout, AboutLayout::TextRight);
        let cfg: TestimonialsConfig =
            serde_json::from_value(json!({ "layout": "single", "variant": "quote" })).unwrap();
        assert_eq!(cfg.layout, TestimonialLayout::Single);
        assert_eq!(cfg.variant, TestimonialVariant::Quote);
    }

    #[test]
    fn hidden_index_removes_exactly_one() {
        let items = vec!["a", "b", "c", "d"];
        let shown: Vec<_> = visible_items(&items, Some(2)).copied().collect();
        assert_eq!(shown, vec!["a", "b", "d"]);
    }

    #[test]
    fn out_of_range_hidden_index_is_ignored() {
        let items = vec!["a", "b"];
        let shown: Vec<_> = visible_items(&items, Some(4)).copied().collect();
        assert_eq!(shown, vec!["a", "b"]);
        let shown: Vec<_> = visible_items(&items, None).copied().collect();
        assert_eq!(shown, vec!["a", "b"]);
    }
}
