//! Content scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Reads the content directory tree into a
//! structured [`Manifest`] that the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── site.toml                    # Site identity, contact, SEO (optional)
//! ├── theme.toml                   # Brand, colors, typography, motion (optional)
//! ├── navigation.toml              # Main and footer menus (optional)
//! ├── pages/
//! │   ├── home.toml                # Page composition ('home' = site root)
//! │   └── contact.toml
//! ├── sections/
//! │   ├── hero.toml                # Named section payloads, referenced by pages
//! │   ├── services.toml
//! │   └── why_choose_us.toml
//! ├── services/
//! │   ├── expeditions.toml         # One detail record per service page
//! │   └── ferry.toml
//! └── assets/                      # Copied to the output root verbatim
//!     └── hero.jpg
//! ```
//!
//! Every file is optional; a missing config falls back to its defaults. Page
//! entries may inline their section payload under `[sections.config]` or
//! reference a `sections/<name>.toml` file; the manifest always carries the
//! resolved payload, so the generate stage never touches `sections/`.
//!
//! ## Leniency
//!
//! The scanner fails only on malformed files and invalid required fields.
//! Everything recoverable becomes a warning in the manifest instead: an
//! unknown section type (kept so `check` can report it), or a section
//! reference with no payload file behind it.

use crate::config::{self, NavigationConfig, SiteConfig};
use crate::content::{PageConfig, SectionKind};
use crate::services::{ServiceCatalog, ServiceDetail};
use crate::theme::ThemeConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Manifest error in {0}: {1}")]
    Manifest(PathBuf, serde_json::Error),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub site: SiteConfig,
    pub theme: ThemeConfig,
    pub navigation: NavigationConfig,
    pub pages: Vec<PageConfig>,
    pub services: ServiceCatalog,
    /// Recoverable problems found while scanning, for `check` and build output.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Manifest {
    /// Read a manifest previously written by [`write_manifest`].
    pub fn from_path(path: &Path) -> Result<Self, ScanError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ScanError::Manifest(path.to_path_buf(), e))
    }

    /// The page rendered at the site root, when one exists.
    pub fn home_page(&self) -> Option<&PageConfig> {
        self.pages.iter().find(|p| p.slug == "home")
    }
}

/// Serialize a manifest to pretty JSON on disk. The manifest stays human
/// readable on purpose; it is the debugging seam between the two stages.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<(), ScanError> {
    let json = serde_json::to_string_pretty(manifest)
        .map_err(|e| ScanError::Manifest(path.to_path_buf(), e))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    Ok(())
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let mut warnings = Vec::new();

    let site: SiteConfig = config::load_optional(&root.join("site.toml"))?.unwrap_or_default();
    site.validate()?;

    let theme: ThemeConfig = config::load_optional(&root.join("theme.toml"))?.unwrap_or_default();

    let navigation: NavigationConfig =
        config::load_optional(&root.join("navigation.toml"))?.unwrap_or_default();
    navigation.validate()?;

    let pages = scan_pages(root, &mut warnings)?;
    let services = scan_services(root)?;

    Ok(Manifest {
        site,
        theme,
        navigation,
        pages,
        services,
        warnings,
    })
}

/// Load every page file, resolving section payload references against
/// `sections/`.
fn scan_pages(root: &Path, warnings: &mut Vec<String>) -> Result<Vec<PageConfig>, ScanError> {
    let mut pages = Vec::new();
    for path in toml_files(&root.join("pages"))? {
        let Some(mut page) = config::load_optional::<PageConfig>(&path)? else {
            continue;
        };
        page.slug = file_stem(&path);

        for entry in &mut page.sections {
            if let SectionKind::Unrecognized(tag) = entry.kind() {
                warnings.push(format!(
                    "page '{}': unknown section type '{}' (entry '{}')",
                    page.slug, tag, entry.id
                ));
                // No payload schema behind an unknown tag; one warning is enough.
                continue;
            }
            if entry.config.is_some() {
                continue; // inline payload wins over the reference
            }
            let payload_path = root.join("sections").join(format!("{}.toml", entry.payload_name()));
            match config::load_optional::<serde_json::Value>(&payload_path)? {
                Some(payload) => entry.config = Some(payload),
                None => warnings.push(format!(
                    "page '{}': no payload file for section '{}' (expected {})",
                    page.slug,
                    entry.id,
                    payload_path.display()
                )),
            }
        }
        pages.push(page);
    }

    // Stable page order regardless of directory iteration order.
    pages.sort_by(|a, b| a.slug.cmp(&b.slug));
    Ok(pages)
}

fn scan_services(root: &Path) -> Result<ServiceCatalog, ScanError> {
    let mut services = Vec::new();
    for path in toml_files(&root.join("services"))? {
        let Some(mut detail) = config::load_optional::<ServiceDetail>(&path)? else {
            continue;
        };
        detail.slug = file_stem(&path);
        services.push(detail);
    }
    Ok(ServiceCatalog::new(services))
}

/// All `.toml` files directly under `dir`, sorted by name. A missing
/// directory is just empty.
fn toml_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("toml"))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
