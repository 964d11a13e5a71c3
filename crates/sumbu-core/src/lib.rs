// crates/sumbu-core/src/lib.rs

//! # sumbu-core
//!
//! Query engine behind a bilingual (Indonesian / English) guide to
//! Yogyakarta's Sumbu Filosofi, the philosophical axis running from Tugu
//! through the Keraton to Panggung Krapyak.
//!
//! - [`locale`]: locale-aware field resolution with primary-locale fallback.
//! - [`category`]: multi-select category filtering of map locations.
//! - [`geo`]: great-circle (haversine) distance and nearest-first ranking.
//! - [`search`]: case-insensitive bilingual search and title suggestions.
//! - [`query`]: filter + rank facade used by map front-ends.
//!
//! ```
//! use sumbu_core::prelude::*;
//!
//! # fn main() -> sumbu_core::Result<()> {
//! let db = PoiDb::load()?;
//! let heritage = filter_by_category(db.locations(), &[CategoryTag::Only(Category::Heritage)]);
//! assert!(heritage.iter().all(|p| p.category == Category::Heritage));
//!
//! let near_tugu = db.nearby("tugu", 3);
//! assert!(near_tugu.len() <= 3);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod category;
pub mod common;
pub mod config;
pub mod convert;
pub mod db;
pub mod error;
pub mod geo;
pub mod loader;
pub mod locale;
pub mod model;
pub mod query;
#[doc(hidden)]
pub mod raw;
pub mod search;
pub mod text;

pub use crate::category::{filter_by_category, parse_tags, Category, CategoryMeta, CategoryTag};
pub use crate::common::DbStats;
pub use crate::config::EngineConfig;
pub use crate::db::PoiDb;
pub use crate::error::{Result, SumbuError};
pub use crate::geo::{format_distance, haversine_distance_km, rank_by_distance, Coordinates, Located, Ranked};
pub use crate::locale::{resolve_array_field, resolve_field, Locale, Localize, Localized};
pub use crate::model::{Article, Business, Contact, Destination, EntryFee, Event, PointOfInterest};
pub use crate::query::{MapQuery, MapView, Origin, Ranking};
pub use crate::search::{search_records, SearchOptions, SearchResult, SearchType, Searchable};
pub use crate::text::{excerpt, slugify};

/// Common types and traits in one import.
pub mod prelude {
    pub use crate::api::{CategoryView, MapViewJson, PoiView, RankedView};
    pub use crate::category::{filter_by_category, Category, CategoryTag};
    pub use crate::config::EngineConfig;
    pub use crate::db::PoiDb;
    pub use crate::error::{Result, SumbuError};
    pub use crate::geo::{haversine_distance_km, rank_by_distance, Coordinates, Located, Ranked};
    pub use crate::locale::{resolve_array_field, resolve_field, Locale, Localize, Localized};
    pub use crate::model::PointOfInterest;
    pub use crate::query::{MapQuery, MapView, Origin, Ranking};
    pub use crate::search::{SearchOptions, SearchResult, SearchType, Searchable};
}
