// crates/sumbu-core/src/query.rs

//! # Query Facade
//!
//! Composes the category filter with one of the two ranking modes. Ranking
//! always runs on the post-filter subset, so an active category filter
//! constrains both "nearby" and "search" results.

use crate::category::{filter_by_category, CategoryTag};
use crate::db::PoiDb;
use crate::geo::{rank_by_distance, Coordinates, Ranked};
use crate::locale::Locale;
use crate::model::PointOfInterest;
use crate::search::search_records;
use tracing::debug;

/// Where a proximity query is measured from.
#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    /// A map location, by id. The location itself is excluded from results.
    Place(String),
    /// A resolved position, e.g. the user's live geolocation.
    Point(Coordinates),
}

/// Ranking applied after filtering. The modes are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Ranking {
    /// Keep repository order.
    #[default]
    None,
    /// Nearest first. `origin: None` (geolocation unavailable) yields no results.
    Nearby { origin: Option<Origin>, limit: usize },
    /// Bilingual substring search, in repository order.
    Text { query: String, limit: usize },
}

/// A map query: category selection plus ranking mode.
#[derive(Debug, Clone, PartialEq)]
pub struct MapQuery {
    pub categories: Vec<CategoryTag>,
    pub ranking: Ranking,
}

impl Default for MapQuery {
    fn default() -> Self {
        MapQuery {
            categories: vec![CategoryTag::All],
            ranking: Ranking::None,
        }
    }
}

impl MapQuery {
    pub fn new(categories: Vec<CategoryTag>) -> Self {
        MapQuery {
            categories,
            ranking: Ranking::None,
        }
    }

    pub fn nearby(mut self, origin: Option<Origin>, limit: usize) -> Self {
        self.ranking = Ranking::Nearby { origin, limit };
        self
    }

    pub fn text(mut self, query: impl Into<String>, limit: usize) -> Self {
        self.ranking = Ranking::Text {
            query: query.into(),
            limit,
        };
        self
    }
}

/// Result of [`PoiDb::query`], shaped by the ranking mode.
#[derive(Debug, Clone)]
pub enum MapView<'a> {
    Listed(Vec<&'a PointOfInterest>),
    Nearby(Vec<Ranked<'a, PointOfInterest>>),
    Matched(Vec<&'a PointOfInterest>),
}

impl<'a> MapView<'a> {
    pub fn len(&self) -> usize {
        match self {
            MapView::Listed(v) | MapView::Matched(v) => v.len(),
            MapView::Nearby(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The locations in result order, without distances.
    pub fn pois(&self) -> Vec<&'a PointOfInterest> {
        match self {
            MapView::Listed(v) | MapView::Matched(v) => v.clone(),
            MapView::Nearby(v) => v.iter().map(|r| r.item).collect(),
        }
    }
}

impl PoiDb {
    /// Runs a map query: filter by category, then rank.
    ///
    /// ```
    /// use sumbu_core::{Category, CategoryTag, Coordinates, Locale, MapQuery, MapView, PoiDb, PointOfInterest};
    ///
    /// let at = |lat, lng| Coordinates::new(lat, lng).unwrap();
    /// let db = PoiDb::from_locations(vec![
    ///     PointOfInterest::new("tugu", Category::Monument, at(-7.7826, 110.3671), "Tugu".into()),
    ///     PointOfInterest::new("keraton", Category::Heritage, at(-7.8053, 110.3643), "Keraton".into()),
    ///     PointOfInterest::new("bakpia", Category::Umkm, at(-7.7900, 110.3660), "Bakpia 25".into()),
    /// ]);
    ///
    /// let query = MapQuery::new(vec![CategoryTag::Only(Category::Heritage)])
    ///     .nearby(Some(sumbu_core::Origin::Place("tugu".into())), 5);
    /// match db.query(&query, Locale::Id) {
    ///     MapView::Nearby(ranked) => {
    ///         assert_eq!(ranked.len(), 1);
    ///         assert_eq!(ranked[0].item.id, "keraton");
    ///     }
    ///     other => panic!("unexpected view: {other:?}"),
    /// }
    /// ```
    pub fn query(&self, query: &MapQuery, locale: Locale) -> MapView<'_> {
        let candidates = filter_by_category(&self.locations, &query.categories);

        match &query.ranking {
            Ranking::None => MapView::Listed(candidates),
            Ranking::Nearby { origin, limit } => {
                let (point, exclude) = self.resolve_origin(origin.as_ref());
                MapView::Nearby(rank_by_distance(point, candidates, exclude, *limit))
            }
            Ranking::Text { query, limit } => {
                MapView::Matched(search_records(candidates, query, locale, *limit))
            }
        }
    }

    /// Map location selected by id or slug.
    pub fn select(&self, code: &str) -> Option<&PointOfInterest> {
        self.find_location_by_code(code)
    }

    /// Nearest map locations to the location `id`, excluding itself.
    /// Unknown ids yield an empty list.
    pub fn nearby(&self, id: &str, limit: usize) -> Vec<Ranked<'_, PointOfInterest>> {
        let (point, exclude) = self.resolve_origin(Some(&Origin::Place(id.to_string())));
        rank_by_distance(point, &self.locations, exclude, limit)
    }

    /// Nearest map locations to an already resolved position.
    pub fn nearest_to(
        &self,
        origin: Option<Coordinates>,
        limit: usize,
    ) -> Vec<Ranked<'_, PointOfInterest>> {
        rank_by_distance(origin, &self.locations, None, limit)
    }

    fn resolve_origin(&self, origin: Option<&Origin>) -> (Option<Coordinates>, Option<&str>) {
        match origin {
            Some(Origin::Point(p)) => (Some(*p), None),
            Some(Origin::Place(id)) => match self.select(id) {
                Some(poi) => (Some(poi.coordinates), Some(poi.id.as_str())),
                None => {
                    debug!(id = %id, "origin location not found");
                    (None, None)
                }
            },
            None => (None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn db() -> PoiDb {
        let at = |lat, lng| Coordinates::new(lat, lng).unwrap();
        PoiDb::from_locations(vec![
            PointOfInterest::new("tugu", Category::Monument, at(-7.7826, 110.3671), "Tugu Yogyakarta".into()),
            PointOfInterest::new("bakpia", Category::Umkm, at(-7.7930, 110.3600), "Bakpia Tugu".into()),
            PointOfInterest::new("keraton", Category::Heritage, at(-7.8053, 110.3643), "Keraton".into()),
            PointOfInterest::new("gudeg", Category::Culinary, at(-7.8010, 110.3700), "Gudeg Yu Djum".into()),
        ])
    }

    fn ids(v: &[&PointOfInterest]) -> Vec<String> {
        v.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn default_query_lists_everything() {
        let db = db();
        let view = db.query(&MapQuery::default(), Locale::Id);
        assert!(matches!(view, MapView::Listed(_)));
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn text_search_respects_category_filter() {
        let db = db();
        let all = db.query(&MapQuery::default().text("tugu", 10), Locale::Id);
        assert_eq!(ids(&all.pois()), ["tugu", "bakpia"]);

        let umkm = MapQuery::new(vec![CategoryTag::Only(Category::Umkm)]).text("tugu", 10);
        assert_eq!(ids(&db.query(&umkm, Locale::Id).pois()), ["bakpia"]);
    }

    #[test]
    fn nearby_respects_category_filter_and_excludes_origin() {
        let db = db();
        let q = MapQuery::new(vec![
            CategoryTag::Only(Category::Heritage),
            CategoryTag::Only(Category::Culinary),
            CategoryTag::Only(Category::Monument),
        ])
        .nearby(Some(Origin::Place("tugu".into())), 10);

        let view = db.query(&q, Locale::Id);
        let MapView::Nearby(ranked) = &view else {
            panic!("expected nearby view");
        };
        assert_eq!(ids(&view.pois()), ["gudeg", "keraton"]);
        assert!(ranked.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
    }

    #[test]
    fn unavailable_origin_yields_empty_view() {
        let db = db();
        let denied = db.query(&MapQuery::default().nearby(None, 5), Locale::Id);
        assert!(denied.is_empty());
        let unknown = db.query(
            &MapQuery::default().nearby(Some(Origin::Place("nope".into())), 5),
            Locale::Id,
        );
        assert!(unknown.is_empty());
    }

    #[test]
    fn live_position_does_not_exclude_anything() {
        let db = db();
        let here = Coordinates::new(-7.7826, 110.3671).unwrap();
        let ranked = db.nearest_to(Some(here), 2);
        assert_eq!(ranked[0].item.id, "tugu");
        assert_eq!(ranked[0].distance_km, 0.0);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn nearby_by_id_skips_self() {
        let db = db();
        let ranked = db.nearby("keraton", 10);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|r| r.item.id != "keraton"));
        assert!(db.nearby("missing", 10).is_empty());
    }

    #[test]
    fn select_accepts_id_or_slug() {
        let db = db();
        assert_eq!(db.select("tugu-yogyakarta").map(|p| p.id.as_str()), Some("tugu"));
        assert_eq!(db.select("KERATON").map(|p| p.id.as_str()), Some("keraton"));
        assert!(db.select(" ").is_none());
    }
}
