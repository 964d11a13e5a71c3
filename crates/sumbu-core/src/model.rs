// crates/sumbu-core/src/model.rs

//! Domain records held by [`crate::PoiDb`].
//!
//! All records are immutable once built. Localizable attributes are
//! [`Localized`] pairs and are read through [`crate::locale::resolve_field`].

use crate::category::Category;
use crate::geo::{Coordinates, Located};
use crate::locale::{Localize, Localized};
use crate::text::slugify;
use serde::{Deserialize, Serialize};

/// Entry fee in rupiah, split between domestic and foreign visitors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFee {
    pub local: u32,
    pub foreign: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// A geo-tagged point on the interactive map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointOfInterest {
    pub id: String,
    pub slug: String,
    pub category: Category,
    pub subcategory: Option<String>,
    pub coordinates: Coordinates,
    pub name: Localized<String>,
    pub description: Localized<String>,
    pub address: Localized<String>,
    pub district: Option<String>,
    pub opening_hours: Option<String>,
    pub entry_fee: Option<EntryFee>,
    pub facilities: Localized<Vec<String>>,
    pub products: Vec<String>,
    pub price_range: Option<String>,
    pub contact: Option<Contact>,
    pub images: Vec<String>,
    pub map_url: Option<String>,
}

impl PointOfInterest {
    /// Minimal constructor; the slug is derived from the primary name.
    pub fn new(
        id: impl Into<String>,
        category: Category,
        coordinates: Coordinates,
        name: Localized<String>,
    ) -> Self {
        PointOfInterest {
            id: id.into(),
            slug: slugify(&name.id),
            category,
            subcategory: None,
            coordinates,
            name,
            description: Localized::default(),
            address: Localized::default(),
            district: None,
            opening_hours: None,
            entry_fee: None,
            facilities: Localized::default(),
            products: Vec::new(),
            price_range: None,
            contact: None,
            images: Vec::new(),
            map_url: None,
        }
    }

    pub fn with_description(mut self, description: Localized<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_address(mut self, address: Localized<String>) -> Self {
        self.address = address;
        self
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn with_products<I, S>(mut self, products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.products = products.into_iter().map(Into::into).collect();
        self
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A curated tourist destination page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Destination {
    pub id: String,
    pub slug: String,
    pub category: Category,
    pub name: Localized<String>,
    pub description: Localized<String>,
    pub address: Localized<String>,
    pub district: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub opening_hours: Option<String>,
    pub entry_fee: Option<EntryFee>,
    pub facilities: Localized<Vec<String>>,
    pub images: Vec<String>,
}

/// A cultural event or ceremony.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Event {
    pub id: String,
    pub slug: String,
    /// Free-form event type (e.g. "upacara", "festival").
    pub category: String,
    pub title: Localized<String>,
    pub description: Localized<String>,
    pub venue: Localized<String>,
    /// Date as displayed (ISO 8601 where known).
    pub date: Option<String>,
    pub image: Option<String>,
}

/// A local small business (UMKM).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Business {
    pub id: String,
    pub slug: String,
    pub category: Category,
    pub name: Localized<String>,
    pub description: Localized<String>,
    pub owner: Option<String>,
    pub products: Localized<Vec<String>>,
    pub price_range: Option<String>,
    pub address: Localized<String>,
    pub coordinates: Option<Coordinates>,
    pub contact: Option<Contact>,
    pub image: Option<String>,
}

/// An encyclopedia article.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub category: String,
    pub title: Localized<String>,
    pub excerpt: Localized<String>,
    pub content: Localized<String>,
    pub tags: Localized<Vec<String>>,
    pub image: Option<String>,
}

impl Localize for PointOfInterest {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn text_field(&self, base: &str) -> Option<&Localized<String>> {
        match base {
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "address" => Some(&self.address),
            _ => None,
        }
    }

    fn list_field(&self, base: &str) -> Option<&Localized<Vec<String>>> {
        (base == "facilities").then_some(&self.facilities)
    }
}

impl Localize for Destination {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn text_field(&self, base: &str) -> Option<&Localized<String>> {
        match base {
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "address" => Some(&self.address),
            _ => None,
        }
    }

    fn list_field(&self, base: &str) -> Option<&Localized<Vec<String>>> {
        (base == "facilities").then_some(&self.facilities)
    }
}

impl Localize for Event {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn text_field(&self, base: &str) -> Option<&Localized<String>> {
        match base {
            "title" => Some(&self.title),
            "description" => Some(&self.description),
            "venue" => Some(&self.venue),
            _ => None,
        }
    }
}

impl Localize for Business {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn text_field(&self, base: &str) -> Option<&Localized<String>> {
        match base {
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "address" => Some(&self.address),
            _ => None,
        }
    }

    fn list_field(&self, base: &str) -> Option<&Localized<Vec<String>>> {
        (base == "products").then_some(&self.products)
    }
}

impl Localize for Article {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn text_field(&self, base: &str) -> Option<&Localized<String>> {
        match base {
            "title" => Some(&self.title),
            "excerpt" => Some(&self.excerpt),
            "content" => Some(&self.content),
            _ => None,
        }
    }

    fn list_field(&self, base: &str) -> Option<&Localized<Vec<String>>> {
        (base == "tags").then_some(&self.tags)
    }
}

impl Located for PointOfInterest {
    fn location_id(&self) -> &str {
        &self.id
    }
    fn coordinates(&self) -> Option<Coordinates> {
        Some(self.coordinates)
    }
}

impl Located for Destination {
    fn location_id(&self) -> &str {
        &self.id
    }
    fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }
}

impl Located for Business {
    fn location_id(&self) -> &str {
        &self.id
    }
    fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }
}
