//! Site-wide configuration: identity, contact details and navigation.
//!
//! Two files at the content root feed this module:
//!
//! - `site.toml` — global identity (name, tagline), contact info, social
//!   links, SEO defaults. Read once at scan time; every page reads from it.
//! - `navigation.toml` — the ordered main menu and footer menu.
//!
//! ```toml
//! # site.toml
//! name = "Tidemark Tours"
//! tagline = "Island expeditions off the beaten path"
//! description = "Small-group sailing expeditions"
//!
//! [contact]
//! email = "hello@example.com"
//! phone = "+1 (555) 123-4567"
//! address = "Harbor Town"
//!
//! [social]
//! facebook = "https://facebook.com/example"
//!
//! [seo]
//! title = "Tidemark Tours - Island Expeditions"
//! description = "Under 160 characters for best results"
//! keywords = ["sailing", "expeditions"]
//! ```
//!
//! ```toml
//! # navigation.toml
//! [[main_menu]]
//! label = "Home"
//! href = "/"
//! kind = "page"
//!
//! [[main_menu]]
//! label = "Services"
//! href = "/#services-section"
//! kind = "section"      # smooth-scroll anchor into a composed section id
//!
//! [[footer_menu]]
//! label = "About"
//! href = "/about/"
//! ```
//!
//! All fields are optional with sensible defaults; unknown keys are rejected
//! to catch typos early. Configuration is immutable after load.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error in {0}: {1}")]
    Toml(String, toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Global site identity loaded from `site.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site/company name.
    pub name: String,
    /// Short tagline shown beneath the name where sections want it.
    pub tagline: String,
    /// Longer description used as the SEO fallback.
    pub description: String,
    /// Contact details, reused by footer and contact sections.
    pub contact: ContactConfig,
    /// Social links, `platform = url`.
    pub social: SocialConfig,
    /// SEO defaults merged into every page `<head>`.
    pub seo: SeoConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Brochure Site".to_string(),
            tagline: String::new(),
            description: String::new(),
            contact: ContactConfig::default(),
            social: SocialConfig::default(),
            seo: SeoConfig::default(),
        }
    }
}

impl SiteConfig {
    /// The `<title>` for a page: explicit SEO title for the home page,
    /// else `name - page title`.
    pub fn page_title(&self, page_title: &str) -> String {
        if page_title.is_empty() {
            self.seo.title.clone().unwrap_or_else(|| self.name.clone())
        } else {
            format!("{} - {}", self.name, page_title)
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site name must not be empty".into(),
            ));
        }
        if let Some(desc) = &self.seo.description
            && desc.chars().count() > 160
        {
            return Err(ConfigError::Validation(
                "seo.description must be at most 160 characters".into(),
            ));
        }
        Ok(())
    }
}

/// Contact information block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Social media profile links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialConfig {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
}

/// SEO defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeoConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
}

// =============================================================================
// Navigation
// =============================================================================

/// Menu structure loaded from `navigation.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    pub main_menu: Vec<MenuEntry>,
    pub footer_menu: Vec<FooterEntry>,
}

impl NavigationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for entry in &self.main_menu {
            if entry.label.trim().is_empty() || entry.href.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "main_menu entries need both label and href".into(),
                ));
            }
        }
        Ok(())
    }
}

/// A main menu entry. `kind` distinguishes full pages from in-page anchors
/// (section links get smooth-scroll behavior in the output).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuEntry {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub kind: MenuKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuKind {
    #[default]
    Page,
    Section,
}

/// A footer menu entry — label and href only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterEntry {
    pub label: String,
    pub href: String,
}

// =============================================================================
// Loading
// =============================================================================

/// Load and deserialize a TOML file into `T`. Returns `Ok(None)` when the
/// file does not exist — every config file is optional.
pub fn load_optional<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> Result<Option<T>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value =
        toml::from_str(&content).map_err(|e| ConfigError::Toml(path.display().to_string(), e))?;
    Ok(Some(value))
}

/// Returns a fully-commented stock `site.toml` with all keys explained.
///
/// Used by the `gen-config` CLI command.
pub fn stock_site_toml() -> &'static str {
    r##"# Tidemark Site Configuration (site.toml)
# ========================================
# All settings are optional. Remove or comment out any you don't need.
# Unknown keys will cause an error.

# Site/company name, shown in the app bar and every page title.
name = "Brochure Site"

# Short tagline, shown where sections want it (footer, about).
tagline = ""

# Longer description. Used as the meta description when seo.description
# is not set.
description = ""

# ---------------------------------------------------------------------------
# Contact details, reused by footer and contact sections
# ---------------------------------------------------------------------------
[contact]
email = ""
phone = ""
address = ""

# ---------------------------------------------------------------------------
# Social profile links (omit any you don't have)
# ---------------------------------------------------------------------------
[social]
# facebook = "https://facebook.com/example"
# instagram = "https://instagram.com/example"
# twitter = "https://twitter.com/example"

# ---------------------------------------------------------------------------
# SEO defaults merged into every page <head>
# ---------------------------------------------------------------------------
[seo]
# title = "Override for the home page <title>"
# description = "At most 160 characters"
keywords = []
"##
}
