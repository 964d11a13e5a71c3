// crates/sumbu-core/src/api.rs

//! Flat, locale-resolved views for JSON consumers (CLI `--json`, WASM).
//!
//! Views borrow from the repository and serialize the already resolved
//! strings, so callers never see `Localized` pairs.

use crate::category::Category;
use crate::geo::{format_distance, Ranked};
use crate::locale::Locale;
use crate::model::{EntryFee, PointOfInterest};
use crate::query::MapView;
use crate::search::{result_url, SearchType};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PoiView<'a> {
    pub id: &'a str,
    pub slug: &'a str,
    pub category: &'a str,
    pub category_label: &'static str,
    pub color: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub name: &'a str,
    pub description: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub address: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_fee: Option<&'a EntryFee>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    pub facilities: &'a [String],
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    pub products: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<&'a str>,
    pub url: String,
}

impl<'a> PoiView<'a> {
    pub fn new(poi: &'a PointOfInterest, locale: Locale) -> Self {
        let meta = poi.category.meta();
        PoiView {
            id: &poi.id,
            slug: &poi.slug,
            category: poi.category.tag(),
            category_label: meta.label(locale),
            color: meta.color,
            lat: poi.coordinates.lat(),
            lng: poi.coordinates.lng(),
            name: poi.name.resolve_str(locale),
            description: poi.description.resolve_str(locale),
            address: poi.address.resolve_str(locale),
            district: poi.district.as_deref(),
            opening_hours: poi.opening_hours.as_deref(),
            entry_fee: poi.entry_fee.as_ref(),
            facilities: poi.facilities.resolve_slice(locale),
            products: &poi.products,
            thumbnail: poi.thumbnail(),
            url: result_url(locale, SearchType::Location, &poi.slug),
        }
    }
}

/// A proximity hit with its distance, raw and formatted.
#[derive(Debug, Clone, Serialize)]
pub struct RankedView<'a> {
    #[serde(flatten)]
    pub poi: PoiView<'a>,
    pub distance_km: f64,
    pub distance: String,
}

impl<'a> RankedView<'a> {
    pub fn new(ranked: &Ranked<'a, PointOfInterest>, locale: Locale) -> Self {
        RankedView {
            poi: PoiView::new(ranked.item, locale),
            distance_km: ranked.distance_km,
            distance: format_distance(ranked.distance_km),
        }
    }
}

/// Category legend entry for map UIs.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub tag: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub count: usize,
}

impl CategoryView {
    pub fn new(category: Category, count: usize, locale: Locale) -> Self {
        let meta = category.meta();
        CategoryView {
            tag: category.tag(),
            label: meta.label(locale),
            color: meta.color,
            icon: meta.icon,
            count,
        }
    }
}

/// Serializable form of a [`MapView`]: plain list or distance-ranked list.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MapViewJson<'a> {
    Plain(Vec<PoiView<'a>>),
    Ranked(Vec<RankedView<'a>>),
}

impl<'a> MapViewJson<'a> {
    pub fn new(view: &MapView<'a>, locale: Locale) -> Self {
        match view {
            MapView::Listed(v) | MapView::Matched(v) => {
                MapViewJson::Plain(v.iter().map(|&p| PoiView::new(p, locale)).collect())
            }
            MapView::Nearby(v) => {
                MapViewJson::Ranked(v.iter().map(|r| RankedView::new(r, locale)).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinates;
    use crate::locale::Localized;

    #[test]
    fn view_resolves_locale_and_skips_empty_fields() {
        let poi = PointOfInterest::new(
            "keraton",
            Category::Heritage,
            Coordinates::new(-7.8053, 110.3643).unwrap(),
            Localized::from("Keraton Yogyakarta").with_en("Yogyakarta Palace".to_string()),
        );
        let json = serde_json::to_value(PoiView::new(&poi, Locale::En)).unwrap();

        assert_eq!(json["name"], "Yogyakarta Palace");
        assert_eq!(json["category"], "heritage");
        assert_eq!(json["url"], "/en/peta/keraton-yogyakarta");
        assert!(json.get("address").is_none());
        assert!(json.get("facilities").is_none());
    }

    #[test]
    fn ranked_view_flattens_poi() {
        let poi = PointOfInterest::new(
            "tugu",
            Category::Monument,
            Coordinates::new(-7.7829, 110.3671).unwrap(),
            "Tugu".into(),
        );
        let ranked = Ranked {
            item: &poi,
            distance_km: 0.25,
        };
        let json = serde_json::to_value(RankedView::new(&ranked, Locale::Id)).unwrap();
        assert_eq!(json["id"], "tugu");
        assert_eq!(json["distance"], "250 m");
    }
}
