// crates/sumbu-core/src/raw.rs
//! Raw dataset records as they appear in the JSON source.
//!
//! Localizable attributes keep the `<field>_id` / `<field>_en` pairs of the
//! content files; [`crate::convert`] folds them into [`crate::Localized`]
//! values and validates everything else.

use crate::category::Category;
use crate::model::{Contact, EntryFee};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct DatasetRaw {
    #[serde(default)]
    pub locations: Vec<LocationRaw>,
    #[serde(default)]
    pub destinations: Vec<DestinationRaw>,
    #[serde(default)]
    pub events: Vec<EventRaw>,
    #[serde(default)]
    pub umkm: Vec<BusinessRaw>,
    #[serde(default)]
    pub articles: Vec<ArticleRaw>,
}

#[derive(Debug, Deserialize)]
pub struct LocationRaw {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub name_id: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub description_id: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub address_id: Option<String>,
    #[serde(default)]
    pub address_en: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub entry_fee: Option<EntryFee>,
    #[serde(default)]
    pub facilities_id: Vec<String>,
    #[serde(default)]
    pub facilities_en: Option<Vec<String>>,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub map_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DestinationRaw {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub category: Category,
    pub name_id: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub description_id: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub address_id: Option<String>,
    #[serde(default)]
    pub address_en: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub entry_fee: Option<EntryFee>,
    #[serde(default)]
    pub facilities_id: Vec<String>,
    #[serde(default)]
    pub facilities_en: Option<Vec<String>>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EventRaw {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub category: String,
    pub title_id: String,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub description_id: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub venue_id: Option<String>,
    #[serde(default)]
    pub venue_en: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BusinessRaw {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub category: Category,
    pub name_id: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub description_id: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub products_id: Vec<String>,
    #[serde(default)]
    pub products_en: Option<Vec<String>>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub address_id: Option<String>,
    #[serde(default)]
    pub address_en: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleRaw {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub category: String,
    pub title_id: String,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub excerpt_id: Option<String>,
    #[serde(default)]
    pub excerpt_en: Option<String>,
    #[serde(default)]
    pub content_id: Option<String>,
    #[serde(default)]
    pub content_en: Option<String>,
    #[serde(default)]
    pub tags_id: Vec<String>,
    #[serde(default)]
    pub tags_en: Option<Vec<String>>,
    #[serde(default)]
    pub image: Option<String>,
}
