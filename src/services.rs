//! Service detail records and slug lookup.
//!
//! Each `services/<slug>.toml` file describes one service in full: hero
//! image, descriptions, features, pricing, day-by-day itinerary, inclusions
//! and packing list. The scan stage loads them all into a [`ServiceCatalog`];
//! the generate stage renders one detail page per record at
//! `services/<slug>/index.html`.
//!
//! Lookups by unknown slug return `None` — a missing service is a routing
//! outcome (the 404 page), never a fault.
//!
//! ```toml
//! # services/expeditions.toml
//! title = "Island Expeditions"
//! hero_image = "/services/expeditions.jpg"
//! short_description = "Multi-day sailing expeditions"
//! full_description = "..."
//! features = ["Licensed crew", "All meals"]
//! duration = "3 days"
//!
//! [pricing]
//! price = "450"
//! currency = "USD"
//! unit = "per person"
//!
//! [[itinerary]]
//! day = "Day 1"
//! title = "Departure"
//! activities = "Board at the harbor, safety briefing, first crossing."
//! ```

use serde::{Deserialize, Serialize};

/// Full detail record for one service, keyed by slug.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceDetail {
    /// URL-safe unique identifier; filled from the file stem when omitted.
    pub slug: String,
    pub title: String,
    pub hero_image: String,
    pub short_description: String,
    pub full_description: String,
    pub features: Vec<String>,
    pub pricing: Option<Pricing>,
    pub duration: String,
    pub itinerary: Vec<ItineraryDay>,
    pub inclusions: Vec<String>,
    pub what_to_bring: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Pricing {
    pub price: String,
    pub currency: String,
    pub unit: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ItineraryDay {
    pub day: String,
    pub title: String,
    pub activities: String,
}

/// All loaded service details, ordered by slug for stable output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceCatalog {
    services: Vec<ServiceDetail>,
}

impl ServiceCatalog {
    pub fn new(mut services: Vec<ServiceDetail>) -> Self {
        services.sort_by(|a, b| a.slug.cmp(&b.slug));
        Self { services }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceDetail> {
        self.services.iter()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Look up a service by slug. Unknown slugs are `None`, not an error.
    pub fn get_by_slug(&self, slug: &str) -> Option<&ServiceDetail> {
        self.services.iter().find(|s| s.slug == slug)
    }

    /// Position of a slug within a list of service items, matched by href.
    ///
    /// Used by service detail pages to hide themselves from the shared
    /// "other services" section: the services payload lists hrefs like
    /// `/services/expeditions/`, so the item whose href contains this slug
    /// as a path segment is the page's own entry.
    pub fn position_in_items(slug: &str, hrefs: &[&str]) -> Option<usize> {
        hrefs
            .iter()
            .position(|href| href.split('/').any(|segment| segment == slug))
    }
}
