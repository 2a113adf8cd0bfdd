//! CLI output formatting for both pipeline stages.
//!
//! Output is information-centric: every entity leads with its identity
//! (title, section count) and filesystem paths appear as indented `Source:`
//! context lines underneath.
//!
//! ## Scan
//!
//! ```text
//! Site
//!     Tidemark Tours
//!
//! Pages
//! 001 Home (7 sections)
//!     Source: pages/home.toml
//!     hero        #hero-container
//!     services    #services-section
//!
//! Services
//! 001 Island Expeditions
//!     Source: services/island-expeditions.toml
//!
//! Warnings
//!     page 'home': unknown section type 'masonry' (entry 'mystery')
//! ```
//!
//! ## Generate
//!
//! ```text
//! 001 Home → index.html
//! 002 Contact → contact/index.html
//! ...
//! Generated 6 pages, copied 3 assets
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::generate::GenerateSummary;
use crate::scan::Manifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn section_noun(n: usize) -> &'static str {
    if n == 1 { "section" } else { "sections" }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the discovered content inventory.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Site".to_string());
    if manifest.site.tagline.is_empty() {
        lines.push(format!("    {}", manifest.site.name));
    } else {
        lines.push(format!(
            "    {} - {}",
            manifest.site.name, manifest.site.tagline
        ));
    }

    lines.push(String::new());
    lines.push("Pages".to_string());
    for (i, page) in manifest.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} {})",
            format_index(i + 1),
            page.title,
            page.sections.len(),
            section_noun(page.sections.len())
        ));
        lines.push(format!("    Source: pages/{}.toml", page.slug));
        for entry in &page.sections {
            lines.push(format!("    {:<12} #{}", entry.type_tag, entry.id));
        }
    }

    if !manifest.services.is_empty() {
        lines.push(String::new());
        lines.push("Services".to_string());
        for (i, service) in manifest.services.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), service.title));
            lines.push(format!("    Source: services/{}.toml", service.slug));
        }
    }

    if !manifest.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for warning in &manifest.warnings {
            lines.push(format!("    {warning}"));
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{line}");
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output: one line per written page, then totals.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, page) in summary.pages.iter().enumerate() {
        lines.push(format!("{} \u{2192} {}", format_index(i + 1), page));
    }

    if !summary.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for warning in &summary.warnings {
            lines.push(format!("    {warning}"));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} pages, copied {} assets",
        summary.pages.len(),
        summary.assets_copied
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{line}");
    }
}
