// crates/sumbu-core/src/db.rs
use crate::category::Category;
use crate::common::DbStats;
use crate::model::{Article, Business, Destination, Event, PointOfInterest};
use serde::Serialize;

/// The immutable content repository.
///
/// Holds one vector per content collection, in dataset order. Built once by
/// the loader (or by hand in tests) and shared by reference with every query;
/// nothing in the crate mutates it after construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PoiDb {
    /// Points shown on the interactive map.
    pub locations: Vec<PointOfInterest>,
    pub destinations: Vec<Destination>,
    pub events: Vec<Event>,
    /// Local small businesses (UMKM).
    pub businesses: Vec<Business>,
    /// Encyclopedia articles.
    pub articles: Vec<Article>,
}

impl PoiDb {
    /// A repository containing only map locations.
    pub fn from_locations(locations: Vec<PointOfInterest>) -> Self {
        PoiDb {
            locations,
            ..Default::default()
        }
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            locations: self.locations.len(),
            destinations: self.destinations.len(),
            events: self.events.len(),
            businesses: self.businesses.len(),
            articles: self.articles.len(),
        }
    }

    pub fn locations(&self) -> &[PointOfInterest] {
        &self.locations
    }

    /// Map location by id (exact match).
    pub fn find_location(&self, id: &str) -> Option<&PointOfInterest> {
        self.locations.iter().find(|p| p.id == id)
    }

    /// Map location by id or slug, case-insensitive.
    pub fn find_location_by_code(&self, code: &str) -> Option<&PointOfInterest> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.find_location(code).or_else(|| {
            self.locations.iter().find(|p| {
                p.id.eq_ignore_ascii_case(code) || p.slug.eq_ignore_ascii_case(code)
            })
        })
    }

    pub fn find_destination_by_slug(&self, slug: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.slug == slug)
    }

    pub fn find_event_by_slug(&self, slug: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.slug == slug)
    }

    pub fn find_business_by_slug(&self, slug: &str) -> Option<&Business> {
        self.businesses.iter().find(|b| b.slug == slug)
    }

    pub fn find_article_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    /// Number of map locations per category, in [`Category::ALL`] order.
    /// Categories without locations are omitted.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.locations.iter().filter(|p| p.category == c).count()))
            .filter(|(_, n)| *n > 0)
            .collect()
    }
}
