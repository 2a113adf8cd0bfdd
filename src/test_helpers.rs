//! Shared test utilities for the tidemark test suite.
//!
//! Provides fixture setup and lookup helpers that work with scan-phase data
//! structures (`Manifest`, `PageConfig`, `SectionEntry`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let home = find_page(&manifest, "home");
//! let hero = find_section(home, "hero-container");
//! assert_eq!(hero.type_tag, "hero");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::{PageConfig, SectionEntry};
use crate::scan::Manifest;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a page by slug. Panics if not found.
pub fn find_page<'a>(manifest: &'a Manifest, slug: &str) -> &'a PageConfig {
    manifest
        .pages
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = manifest.pages.iter().map(|p| p.slug.as_str()).collect();
            panic!("page '{slug}' not found. Available: {slugs:?}")
        })
}

/// Find a section entry by id within a page. Panics if not found.
pub fn find_section<'a>(page: &'a PageConfig, id: &str) -> &'a SectionEntry {
    page.sections
        .iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| {
            let ids: Vec<&str> = page.sections.iter().map(|s| s.id.as_str()).collect();
            panic!(
                "section '{id}' not found in page '{}'. Available: {ids:?}",
                page.slug
            )
        })
}

/// All section type tags of a page, in order.
pub fn section_tags(page: &PageConfig) -> Vec<&str> {
    page.sections.iter().map(|s| s.type_tag.as_str()).collect()
}
