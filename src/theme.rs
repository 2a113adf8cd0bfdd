//! Theme configuration and derivation.
//!
//! `theme.toml` declares the brand identity and a sparse color palette: each
//! color role (primary, secondary, success, neutral) must provide at least a
//! `main` shade; `light`, `dark` and `contrast` are optional and derived when
//! absent — light/dark by mixing `main` toward white/black at a fixed tonal
//! offset, contrast by picking black or white against the shade's luminance.
//!
//! Deriving happens once, at load time, producing a fully resolved [`Theme`]
//! that is immutable afterwards. The resolved theme is emitted as CSS custom
//! properties consumed by the static stylesheet, so section markup never
//! carries raw color values.
//!
//! ```toml
//! [brand]
//! name = "Tidemark Tours"
//!
//! [brand.logo]
//! icon = "sailing"
//! text = "TIDEMARK"
//!
//! [colors.primary]
//! main = "#1f93b6"      # light/dark/contrast derived unless given
//!
//! [typography]
//! font_family = "Roboto"
//!
//! [layout]
//! max_width = "1200px"
//! spacing = 8
//! radius = "8px"
//!
//! [motion]
//! count_up_ms = 2000
//! carousel_interval_ms = 5000
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fraction by which derived light/dark shades move toward white/black.
const TONAL_OFFSET: f64 = 0.2;

/// Mix fractions for the derived color-mode tokens (surfaces and body text),
/// all relative to the neutral role's main shade.
const LIGHT_TEXT_OFFSET: f64 = 0.75;
const DARK_SURFACE_OFFSET: f64 = 0.88;
const DARK_RAISED_OFFSET: f64 = 0.8;
const DARK_TEXT_OFFSET: f64 = 0.7;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("invalid hex color '{0}' for {1}")]
    InvalidColor(String, &'static str),
}

/// Raw theme configuration as written in `theme.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Brand identity (site name rendered in the app bar, logo glyph).
    pub brand: BrandConfig,
    /// Sparse color palette; missing shades are derived.
    pub colors: ColorsConfig,
    /// Typography settings.
    pub typography: TypographyConfig,
    /// Layout tokens.
    pub layout: LayoutConfig,
    /// Animation timing tokens.
    pub motion: MotionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandConfig {
    pub name: String,
    pub logo: LogoConfig,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Brochure Site".to_string(),
            logo: LogoConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogoConfig {
    /// Icon name resolved through the icon set.
    pub icon: String,
    /// Wordmark text shown next to the icon.
    pub text: String,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            icon: "sailing".to_string(),
            text: String::new(),
        }
    }
}

/// The four named color roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorsConfig {
    pub primary: ColorRole,
    pub secondary: ColorRole,
    pub success: ColorRole,
    pub neutral: ColorRole,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            primary: ColorRole::main("#1f93b6"),
            secondary: ColorRole::main("#75804c"),
            success: ColorRole::main("#2e7d32"),
            neutral: ColorRole::main("#cebebc"),
        }
    }
}

/// A sparse color role: `main` is required, the rest derivable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorRole {
    pub main: String,
    pub light: Option<String>,
    pub dark: Option<String>,
    pub contrast: Option<String>,
}

impl ColorRole {
    fn main(hex: &str) -> Self {
        Self {
            main: hex.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypographyConfig {
    pub font_family: String,
    pub font_weights: Vec<u16>,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            font_family: "Roboto".to_string(),
            font_weights: vec![300, 400, 500, 700],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Max content width as a CSS length.
    pub max_width: String,
    /// Base spacing unit in pixels.
    pub spacing: u32,
    /// Border radius as a CSS length.
    pub radius: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_width: "1200px".to_string(),
            spacing: 8,
            radius: "8px".to_string(),
        }
    }
}

/// Animation timing defaults, overridable per section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Default stat count-up duration.
    pub count_up_ms: u32,
    /// Default carousel autoplay interval.
    pub carousel_interval_ms: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            count_up_ms: 2000,
            carousel_interval_ms: 5000,
        }
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// A color role with every shade resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRole {
    pub main: String,
    pub light: String,
    pub dark: String,
    pub contrast: String,
}

/// Surface and body-text colors for one color mode. The visitor's mode
/// choice persists as a single `theme-mode` key in browser storage; the
/// stylesheet switches between the two token sets via `[data-theme="dark"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeTokens {
    pub surface: String,
    pub surface_raised: String,
    pub text: String,
}

/// Fully resolved theme, derived once from [`ThemeConfig`].
#[derive(Debug, Clone)]
pub struct Theme {
    pub brand: BrandConfig,
    pub primary: ResolvedRole,
    pub secondary: ResolvedRole,
    pub success: ResolvedRole,
    pub neutral: ResolvedRole,
    pub light_mode: ModeTokens,
    pub dark_mode: ModeTokens,
    pub typography: TypographyConfig,
    pub layout: LayoutConfig,
    pub motion: MotionConfig,
}

impl Theme {
    /// Derive a fully resolved theme. Fails only on unparseable hex values.
    pub fn resolve(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let (light_mode, dark_mode) = derive_modes(&config.colors.neutral)?;
        Ok(Self {
            brand: config.brand.clone(),
            primary: resolve_role(&config.colors.primary, "colors.primary")?,
            secondary: resolve_role(&config.colors.secondary, "colors.secondary")?,
            success: resolve_role(&config.colors.success, "colors.success")?,
            neutral: resolve_role(&config.colors.neutral, "colors.neutral")?,
            light_mode,
            dark_mode,
            typography: config.typography.clone(),
            layout: config.layout.clone(),
            motion: config.motion.clone(),
        })
    }

    /// Look up a resolved role by the name content uses (`icon_color = "primary"`).
    /// Unknown names fall back to primary — a content typo should not change
    /// semantics, only styling.
    pub fn role(&self, name: &str) -> &ResolvedRole {
        match name {
            "secondary" => &self.secondary,
            "success" => &self.success,
            "neutral" => &self.neutral,
            _ => &self.primary,
        }
    }
}

fn resolve_role(role: &ColorRole, context: &'static str) -> Result<ResolvedRole, ThemeError> {
    let main = parse_hex(&role.main).ok_or_else(|| invalid(&role.main, context))?;
    let light = match &role.light {
        Some(hex) => parse_hex(hex).ok_or_else(|| invalid(hex, context))?,
        None => mix(main, (255, 255, 255), TONAL_OFFSET),
    };
    let dark = match &role.dark {
        Some(hex) => parse_hex(hex).ok_or_else(|| invalid(hex, context))?,
        None => mix(main, (0, 0, 0), TONAL_OFFSET),
    };
    let contrast = match &role.contrast {
        Some(hex) => parse_hex(hex).ok_or_else(|| invalid(hex, context))?,
        None => contrast_for(main),
    };
    Ok(ResolvedRole {
        main: format_hex(main),
        light: format_hex(light),
        dark: format_hex(dark),
        contrast: format_hex(contrast),
    })
}

/// Light and dark mode tokens, both mixed from the neutral role's main
/// shade the same way light/dark color shades are derived.
fn derive_modes(neutral: &ColorRole) -> Result<(ModeTokens, ModeTokens), ThemeError> {
    let main = parse_hex(&neutral.main).ok_or_else(|| invalid(&neutral.main, "colors.neutral"))?;
    let light = ModeTokens {
        surface: "#ffffff".to_string(),
        surface_raised: "#ffffff".to_string(),
        text: format_hex(mix(main, (0, 0, 0), LIGHT_TEXT_OFFSET)),
    };
    let dark = ModeTokens {
        surface: format_hex(mix(main, (0, 0, 0), DARK_SURFACE_OFFSET)),
        surface_raised: format_hex(mix(main, (0, 0, 0), DARK_RAISED_OFFSET)),
        text: format_hex(mix(main, (255, 255, 255), DARK_TEXT_OFFSET)),
    };
    Ok((light, dark))
}

fn invalid(hex: &str, context: &'static str) -> ThemeError {
    ThemeError::InvalidColor(hex.to_string(), context)
}

type Rgb = (u8, u8, u8);

/// Parse `#rgb` or `#rrggbb`.
fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#')?;
    match digits.len() {
        3 => {
            let mut chans = digits.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some((chans.next()??, chans.next()??, chans.next()??))
        }
        6 => {
            let parse = |s: &str| u8::from_str_radix(s, 16).ok();
            Some((
                parse(&digits[0..2])?,
                parse(&digits[2..4])?,
                parse(&digits[4..6])?,
            ))
        }
        _ => None,
    }
}

fn format_hex((r, g, b): Rgb) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Linear mix of `base` toward `target` by `amount` in [0, 1].
fn mix(base: Rgb, target: Rgb, amount: f64) -> Rgb {
    let channel = |b: u8, t: u8| {
        let v = f64::from(b) + (f64::from(t) - f64::from(b)) * amount;
        v.round().clamp(0.0, 255.0) as u8
    };
    (
        channel(base.0, target.0),
        channel(base.1, target.1),
        channel(base.2, target.2),
    )
}

/// Black or white text, whichever contrasts better (relative luminance cut).
fn contrast_for(rgb: Rgb) -> Rgb {
    let lum = 0.299 * f64::from(rgb.0) + 0.587 * f64::from(rgb.1) + 0.114 * f64::from(rgb.2);
    if lum > 150.0 { (0, 0, 0) } else { (255, 255, 255) }
}

// =============================================================================
// CSS generation
// =============================================================================

/// Render the resolved theme as CSS custom properties on `:root`.
///
/// The static stylesheet references only these variables, so the entire
/// visual identity of a site is controlled from `theme.toml`.
pub fn generate_theme_css(theme: &Theme) -> String {
    let mut css = String::from(":root {\n");
    for (name, role) in [
        ("primary", &theme.primary),
        ("secondary", &theme.secondary),
        ("success", &theme.success),
        ("neutral", &theme.neutral),
    ] {
        css.push_str(&format!("  --color-{name}: {};\n", role.main));
        css.push_str(&format!("  --color-{name}-light: {};\n", role.light));
        css.push_str(&format!("  --color-{name}-dark: {};\n", role.dark));
        css.push_str(&format!("  --color-{name}-contrast: {};\n", role.contrast));
    }
    push_mode_tokens(&mut css, &theme.light_mode);
    css.push_str(&format!(
        "  --font-family: \"{}\", sans-serif;\n",
        theme.typography.font_family
    ));
    css.push_str(&format!("  --max-width: {};\n", theme.layout.max_width));
    css.push_str(&format!("  --spacing: {}px;\n", theme.layout.spacing));
    css.push_str(&format!("  --radius: {};\n", theme.layout.radius));
    css.push_str("}\n");
    css.push_str("[data-theme=\"dark\"] {\n");
    push_mode_tokens(&mut css, &theme.dark_mode);
    css.push_str("}\n");
    css
}

fn push_mode_tokens(css: &mut String, mode: &ModeTokens) {
    css.push_str(&format!("  --color-surface: {};\n", mode.surface));
    css.push_str(&format!(
        "  --color-surface-raised: {};\n",
        mode.surface_raised
    ));
    css.push_str(&format!("  --color-text: {};\n", mode.text));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_missing_shades_from_main() {
        let theme = Theme::resolve(&ThemeConfig::default()).unwrap();
        // #1f93b6 mixed 20% toward white / black.
        assert_eq!(theme.primary.main, "#1f93b6");
        assert_eq!(theme.primary.light, "#4ca9c5");
        assert_eq!(theme.primary.dark, "#197692");
        // Mid-dark blue gets white contrast text.
        assert_eq!(theme.primary.contrast, "#ffffff");
    }

    #[test]
    fn explicit_shades_win_over_derivation() {
        let mut config = ThemeConfig::default();
        config.colors.primary.light = Some("#65b2ca".to_string());
        config.colors.primary.dark = Some("#186690".to_string());
        let theme = Theme::resolve(&config).unwrap();
        assert_eq!(theme.primary.light, "#65b2ca");
        assert_eq!(theme.primary.dark, "#186690");
    }

    #[test]
    fn light_color_gets_black_contrast() {
        let mut config = ThemeConfig::default();
        config.colors.neutral.main = "#cebebc".to_string();
        let theme = Theme::resolve(&config).unwrap();
        assert_eq!(theme.neutral.contrast, "#000000");
    }

    #[test]
    fn invalid_hex_is_rejected() {
        let mut config = ThemeConfig::default();
        config.colors.secondary.main = "teal".to_string();
        let err = Theme::resolve(&config).unwrap_err();
        assert!(err.to_string().contains("colors.secondary"));
    }

    #[test]
    fn short_hex_form_is_accepted() {
        assert_eq!(parse_hex("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex("#a0b"), Some((0xaa, 0x00, 0xbb)));
    }

    #[test]
    fn role_lookup_falls_back_to_primary() {
        let theme = Theme::resolve(&ThemeConfig::default()).unwrap();
        assert_eq!(theme.role("success"), &theme.success);
        assert_eq!(theme.role("warning"), &theme.primary);
    }

    #[test]
    fn css_exposes_all_tokens() {
        let theme = Theme::resolve(&ThemeConfig::default()).unwrap();
        let css = generate_theme_css(&theme);
        assert!(css.contains("--color-primary: #1f93b6;"));
        assert!(css.contains("--color-neutral-contrast:"));
        assert!(css.contains("--font-family: \"Roboto\", sans-serif;"));
        assert!(css.contains("--max-width: 1200px;"));
        assert!(css.contains("--spacing: 8px;"));
    }

    #[test]
    fn mode_tokens_are_derived_from_neutral() {
        let theme = Theme::resolve(&ThemeConfig::default()).unwrap();
        // Light mode: white surfaces, near-black text from neutral #cebebc.
        assert_eq!(theme.light_mode.surface, "#ffffff");
        assert_eq!(theme.light_mode.text, "#34302f");
        // Dark mode: deep surfaces, light text, all mixed from the same role.
        assert_eq!(theme.dark_mode.surface, "#191717");
        assert_eq!(theme.dark_mode.surface_raised, "#292626");
        assert_eq!(theme.dark_mode.text, "#f0eceb");
    }

    #[test]
    fn css_carries_a_dark_mode_block() {
        let theme = Theme::resolve(&ThemeConfig::default()).unwrap();
        let css = generate_theme_css(&theme);
        assert!(css.contains("--color-surface: #ffffff;"));
        let dark = css
            .split("[data-theme=\"dark\"]")
            .nth(1)
            .expect("no dark block");
        assert!(dark.contains("--color-surface: #191717;"));
        assert!(dark.contains("--color-text: #f0eceb;"));
    }
}
