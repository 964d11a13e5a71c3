//! sumbu-wasm: WebAssembly bindings for sumbu-core
//!
//! Exposes the map and search queries of `sumbu-core` to JavaScript. The
//! Sumbu Filosofi dataset is compiled into the binary and parsed once, on
//! first use.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Basic queries: `get_location_count()`, `get_location_name(id, locale)`
//! - Map helpers returning JSON-serializable arrays:
//!   - `filter_locations("heritage,umkm", "en")`
//!   - `nearby_locations("tugu", "all", 5, "id")`
//!   - `nearby_point(-7.80, 110.36, "culinary", 5, "id")`
//! - Site search: `search("keraton", "id", 10)`, `suggest("ker", "id", 5)`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { nearby_locations, search } from 'sumbu-wasm';
//!
//! async function main() {
//!   await init();
//!   console.log(nearby_locations('tugu', 'heritage', 3, 'en'));
//!   console.log(search('malioboro', 'id', 10));
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - `locale` is `"id"` or `"en"`; an empty string selects Indonesian.
//! - Functions that can fail return a rejected `JsValue` with the error text.
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use sumbu_core::api::{CategoryView, MapViewJson, PoiView};
use sumbu_core::{
    format_distance, haversine_distance_km, parse_tags, resolve_field, CategoryTag, Coordinates,
    Locale, MapQuery, Origin, PoiDb, SearchOptions, SumbuError,
};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing Sumbu WASM module...".into());

    match PoiDb::bundled() {
        Ok(db) => {
            let stats = db.stats();
            web_sys::console::log_1(&format!("Loaded {} map locations", stats.locations).into());
        }
        Err(e) => web_sys::console::error_1(&format!("Dataset failed to load: {e}").into()),
    }
}

fn db() -> Result<&'static PoiDb, JsValue> {
    PoiDb::bundled().map_err(js_error)
}

fn js_error(e: SumbuError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn locale(tag: &str) -> Result<Locale, JsValue> {
    if tag.trim().is_empty() {
        return Ok(Locale::PRIMARY);
    }
    tag.parse().map_err(js_error)
}

fn tags(list: &str) -> Result<Vec<CategoryTag>, JsValue> {
    parse_tags(list).map_err(js_error)
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    Ok(to_value(value)?)
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_location_count() -> Result<usize, JsValue> {
    Ok(db()?.locations().len())
}

#[wasm_bindgen]
pub fn get_location_name(code: &str, locale_tag: &str) -> Result<Option<String>, JsValue> {
    let locale = locale(locale_tag)?;
    Ok(db()?
        .select(code)
        .map(|p| resolve_field(p, "name", locale).to_string()))
}

#[wasm_bindgen]
pub fn get_location(code: &str, locale_tag: &str) -> Result<JsValue, JsValue> {
    let locale = locale(locale_tag)?;
    match db()?.select(code) {
        Some(poi) => json(&PoiView::new(poi, locale)),
        None => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen]
pub fn get_categories(locale_tag: &str) -> Result<JsValue, JsValue> {
    let locale = locale(locale_tag)?;
    let views: Vec<_> = db()?
        .category_counts()
        .into_iter()
        .map(|(c, n)| CategoryView::new(c, n, locale))
        .collect();
    json(&views)
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    json(&db()?.stats())
}

/* --------------------------------------------------------------------------
   Map Queries
-------------------------------------------------------------------------- */

/// Locations in the given categories (`"all"` for everything).
#[wasm_bindgen]
pub fn filter_locations(categories: &str, locale_tag: &str) -> Result<JsValue, JsValue> {
    let locale = locale(locale_tag)?;
    let view = db()?.query(&MapQuery::new(tags(categories)?), locale);
    json(&MapViewJson::new(&view, locale))
}

/// Locations in the given categories matching `query`.
#[wasm_bindgen]
pub fn search_locations(
    query: &str,
    categories: &str,
    limit: usize,
    locale_tag: &str,
) -> Result<JsValue, JsValue> {
    let locale = locale(locale_tag)?;
    let q = MapQuery::new(tags(categories)?).text(query, limit);
    json(&MapViewJson::new(&db()?.query(&q, locale), locale))
}

/// Nearest locations to the location `code`, which is itself excluded.
#[wasm_bindgen]
pub fn nearby_locations(
    code: &str,
    categories: &str,
    limit: usize,
    locale_tag: &str,
) -> Result<JsValue, JsValue> {
    let locale = locale(locale_tag)?;
    let q = MapQuery::new(tags(categories)?).nearby(Some(Origin::Place(code.to_string())), limit);
    json(&MapViewJson::new(&db()?.query(&q, locale), locale))
}

/// Nearest locations to the browser's geolocation fix.
#[wasm_bindgen]
pub fn nearby_point(
    lat: f64,
    lng: f64,
    categories: &str,
    limit: usize,
    locale_tag: &str,
) -> Result<JsValue, JsValue> {
    let locale = locale(locale_tag)?;
    let origin = Coordinates::new(lat, lng).map_err(js_error)?;
    let q = MapQuery::new(tags(categories)?).nearby(Some(Origin::Point(origin)), limit);
    json(&MapViewJson::new(&db()?.query(&q, locale), locale))
}

#[wasm_bindgen]
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    haversine_distance_km(lat1, lng1, lat2, lng2)
}

#[wasm_bindgen]
pub fn format_distance_km(km: f64) -> String {
    format_distance(km)
}

/* --------------------------------------------------------------------------
   Site Search
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn search(query: &str, locale_tag: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
    let locale = locale(locale_tag)?;
    let mut opts = SearchOptions::default();
    if let Some(n) = limit {
        opts = opts.with_limit(n);
    }
    json(&db()?.search(query, locale, &opts))
}

#[wasm_bindgen]
pub fn suggest(query: &str, locale_tag: &str, limit: usize) -> Result<JsValue, JsValue> {
    let locale = locale(locale_tag)?;
    let titles = db()?.suggest(query, locale, limit);
    let array = js_sys::Array::new();
    for t in titles {
        array.push(&JsValue::from_str(&t));
    }
    Ok(array.into())
}
