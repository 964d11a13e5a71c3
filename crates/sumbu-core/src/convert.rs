// crates/sumbu-core/src/convert.rs
use crate::db::PoiDb;
use crate::error::{Result, SumbuError};
use crate::geo::Coordinates;
use crate::locale::Localized;
use crate::model::{Article, Business, Destination, Event, PointOfInterest};
use crate::raw::{ArticleRaw, BusinessRaw, DatasetRaw, DestinationRaw, EventRaw, LocationRaw};
use crate::text::slugify;
use std::collections::HashSet;

/// **Standard Converter:** Raw -> PoiDb.
///
/// Rejects records that break repository invariants: blank or duplicate ids
/// or slugs within a collection, a blank primary-locale name/title, or
/// coordinates outside WGS84 bounds. Ids are stored trimmed.
pub fn from_raw(raw: DatasetRaw) -> Result<PoiDb> {
    Ok(PoiDb {
        locations: convert_all("locations", raw.locations, |r| &mut r.id, location, |p| &p.slug)?,
        destinations: convert_all(
            "destinations",
            raw.destinations,
            |r| &mut r.id,
            destination,
            |d| &d.slug,
        )?,
        events: convert_all("events", raw.events, |r| &mut r.id, event, |e| &e.slug)?,
        businesses: convert_all("umkm", raw.umkm, |r| &mut r.id, business, |b| &b.slug)?,
        articles: convert_all("articles", raw.articles, |r| &mut r.id, article, |a| &a.slug)?,
    })
}

fn convert_all<R, T>(
    collection: &str,
    raws: Vec<R>,
    id_of: impl Fn(&mut R) -> &mut String,
    convert: impl Fn(R) -> Result<T>,
    slug_of: impl Fn(&T) -> &String,
) -> Result<Vec<T>> {
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_slugs: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(raws.len());

    for mut r in raws {
        let id = id_of(&mut r);
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(SumbuError::InvalidData(format!(
                "{collection}: record without id"
            )));
        }
        if trimmed.len() != id.len() {
            *id = trimmed.to_string();
        }
        if !seen_ids.insert(id.clone()) {
            return Err(SumbuError::InvalidData(format!(
                "{collection}: duplicate id {id:?}"
            )));
        }

        let record = convert(r)?;
        let slug = slug_of(&record);
        if !seen_slugs.insert(slug.clone()) {
            return Err(SumbuError::InvalidData(format!(
                "{collection}: duplicate slug {slug:?}"
            )));
        }
        out.push(record);
    }
    Ok(out)
}

fn text(id: Option<String>, en: Option<String>) -> Localized<String> {
    Localized {
        id: id.unwrap_or_default(),
        en,
    }
}

fn list(id: Vec<String>, en: Option<Vec<String>>) -> Localized<Vec<String>> {
    Localized { id, en }
}

fn required_text(record: &str, field: &str, id: String, en: Option<String>) -> Result<Localized<String>> {
    if id.trim().is_empty() {
        return Err(SumbuError::InvalidData(format!(
            "{record}: {field}_id must not be empty"
        )));
    }
    Ok(Localized { id, en })
}

fn slug_for(slug: Option<String>, title: &str, id: &str) -> String {
    match slug {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => {
            let s = slugify(title);
            if s.is_empty() {
                slugify(id)
            } else {
                s
            }
        }
    }
}

fn optional_point(lat: Option<f64>, lng: Option<f64>) -> Result<Option<Coordinates>> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Coordinates::new(lat, lng).map(Some),
        _ => Ok(None),
    }
}

fn location(r: LocationRaw) -> Result<PointOfInterest> {
    let name = required_text(&r.id, "name", r.name_id, r.name_en)?;
    let coordinates = Coordinates::new(r.lat, r.lng)?;
    Ok(PointOfInterest {
        slug: slug_for(r.slug, &name.id, &r.id),
        id: r.id,
        category: r.category,
        subcategory: r.subcategory,
        coordinates,
        name,
        description: text(r.description_id, r.description_en),
        address: text(r.address_id, r.address_en),
        district: r.district,
        opening_hours: r.opening_hours,
        entry_fee: r.entry_fee,
        facilities: list(r.facilities_id, r.facilities_en),
        products: r.products,
        price_range: r.price_range,
        contact: r.contact,
        images: r.images,
        map_url: r.map_url,
    })
}

fn destination(r: DestinationRaw) -> Result<Destination> {
    let name = required_text(&r.id, "name", r.name_id, r.name_en)?;
    Ok(Destination {
        slug: slug_for(r.slug, &name.id, &r.id),
        coordinates: optional_point(r.lat, r.lng)?,
        id: r.id,
        category: r.category,
        name,
        description: text(r.description_id, r.description_en),
        address: text(r.address_id, r.address_en),
        district: r.district,
        opening_hours: r.opening_hours,
        entry_fee: r.entry_fee,
        facilities: list(r.facilities_id, r.facilities_en),
        images: r.images,
    })
}

fn event(r: EventRaw) -> Result<Event> {
    let title = required_text(&r.id, "title", r.title_id, r.title_en)?;
    Ok(Event {
        slug: slug_for(r.slug, &title.id, &r.id),
        id: r.id,
        category: r.category,
        title,
        description: text(r.description_id, r.description_en),
        venue: text(r.venue_id, r.venue_en),
        date: r.date,
        image: r.image,
    })
}

fn business(r: BusinessRaw) -> Result<Business> {
    let name = required_text(&r.id, "name", r.name_id, r.name_en)?;
    Ok(Business {
        slug: slug_for(r.slug, &name.id, &r.id),
        coordinates: optional_point(r.lat, r.lng)?,
        id: r.id,
        category: r.category,
        name,
        description: text(r.description_id, r.description_en),
        owner: r.owner,
        products: list(r.products_id, r.products_en),
        price_range: r.price_range,
        address: text(r.address_id, r.address_en),
        contact: r.contact,
        image: r.image,
    })
}

fn article(r: ArticleRaw) -> Result<Article> {
    let title = required_text(&r.id, "title", r.title_id, r.title_en)?;
    Ok(Article {
        slug: slug_for(r.slug, &title.id, &r.id),
        id: r.id,
        category: r.category,
        title,
        excerpt: text(r.excerpt_id, r.excerpt_en),
        content: text(r.content_id, r.content_en),
        tags: list(r.tags_id, r.tags_en),
        image: r.image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::locale::Locale;

    fn parse(json: &str) -> Result<PoiDb> {
        let raw: DatasetRaw = serde_json::from_str(json)?;
        from_raw(raw)
    }

    #[test]
    fn builds_localized_pairs_and_slugs() {
        let db = parse(
            r#"{"locations":[{"id":"tugu","category":"monument","lat":-7.7829,"lng":110.3671,
                "name_id":"Tugu Yogyakarta","description_id":"Penanda utara",
                "description_en":"Northern marker","facilities_id":["Parkir"]}]}"#,
        )
        .unwrap();

        let tugu = &db.locations[0];
        assert_eq!(tugu.slug, "tugu-yogyakarta");
        assert_eq!(tugu.category, Category::Monument);
        assert_eq!(tugu.description.get(Locale::En).unwrap(), "Northern marker");
        assert_eq!(tugu.name.en, None);
        assert_eq!(tugu.facilities.resolve(Locale::En).unwrap(), &["Parkir"]);
    }

    #[test]
    fn explicit_slug_wins() {
        let db = parse(
            r#"{"events":[{"id":"e1","slug":"sekaten-2025","category":"upacara","title_id":"Sekaten"}]}"#,
        )
        .unwrap();
        assert_eq!(db.events[0].slug, "sekaten-2025");
    }

    #[test]
    fn rejects_unknown_category() {
        let err = parse(
            r#"{"locations":[{"id":"x","category":"volcano","lat":0,"lng":0,"name_id":"X"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SumbuError::Json(_)));
    }

    #[test]
    fn rejects_invalid_coordinates() {
        let err = parse(
            r#"{"locations":[{"id":"x","category":"park","lat":-97.0,"lng":0,"name_id":"X"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SumbuError::InvalidCoordinates { .. }));
    }

    #[test]
    fn rejects_blank_primary_name_and_duplicate_ids() {
        let blank = parse(
            r#"{"umkm":[{"id":"b1","category":"umkm","name_id":"  ","name_en":"Shop"}]}"#,
        );
        assert!(matches!(blank, Err(SumbuError::InvalidData(_))));

        let dup = parse(
            r#"{"articles":[{"id":"a","category":"sejarah","title_id":"A"},
                            {"id":"a","category":"sejarah","title_id":"B"}]}"#,
        );
        assert!(matches!(dup, Err(SumbuError::InvalidData(_))));
    }

    #[test]
    fn ids_are_stored_trimmed() {
        let db = parse(
            r#"{"locations":[{"id":" tugu ","category":"monument","lat":-7.7829,"lng":110.3671,
                "name_id":"Tugu Yogyakarta"}]}"#,
        )
        .unwrap();
        assert_eq!(db.locations[0].id, "tugu");
        assert!(db.find_location("tugu").is_some());

        let dup = parse(
            r#"{"events":[{"id":"e1","category":"upacara","title_id":"Sekaten"},
                          {"id":" e1","category":"upacara","title_id":"Grebeg"}]}"#,
        );
        assert!(matches!(dup, Err(SumbuError::InvalidData(_))));
    }

    #[test]
    fn rejects_duplicate_slugs_within_a_collection() {
        let err = parse(
            r#"{"destinations":[{"id":"d1","category":"tourism","name_id":"Malioboro"},
                                {"id":"d2","category":"tourism","name_id":"malioboro!"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate slug"), "{err}");

        // Same slug in different collections is fine: the URL sections differ.
        let ok = parse(
            r#"{"destinations":[{"id":"d1","category":"tourism","name_id":"Malioboro"}],
                "events":[{"id":"e1","category":"festival","title_id":"Malioboro"}]}"#,
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn half_specified_point_is_treated_as_missing() {
        let db = parse(
            r#"{"destinations":[{"id":"d","category":"tourism","name_id":"Malioboro","lat":-7.79}]}"#,
        )
        .unwrap();
        assert_eq!(db.destinations[0].coordinates, None);
    }
}
