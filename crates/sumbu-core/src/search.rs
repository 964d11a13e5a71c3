// crates/sumbu-core/src/search.rs

//! # Bilingual Search Index
//!
//! Case-insensitive substring search over the content collections.
//!
//! - The query is trimmed and lowercased; a blank query matches nothing.
//! - A record matches when any of its searchable fields, resolved for the
//!   requested locale (with fallback to the primary locale), contains the
//!   query. No tokenizing, stemming or fuzzy matching.
//! - Collections are scanned one after another in [`SearchType::ORDER`] and
//!   hits are concatenated in that order. There is no cross-collection
//!   relevance scoring.
//! - The overall `limit` applies to the concatenated list.

use crate::db::PoiDb;
use crate::error::{Result, SumbuError};
use crate::locale::{resolve_field, Locale, Localize};
use crate::model::{Article, Business, Destination, Event, PointOfInterest};
use crate::text::{contains_lower, excerpt, normalize_query, DEFAULT_EXCERPT_CHARS};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SEARCH_LIMIT: usize = 10;
pub const DEFAULT_SUGGEST_LIMIT: usize = 5;
/// Suggestions need at least this many query characters.
pub const MIN_SUGGEST_CHARS: usize = 2;

/// The content collection a [`SearchResult`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Destination,
    Event,
    Umkm,
    Article,
    Location,
}

impl SearchType {
    /// Fixed scan order for multi-source search and suggestions.
    pub const ORDER: [SearchType; 5] = [
        SearchType::Destination,
        SearchType::Event,
        SearchType::Umkm,
        SearchType::Article,
        SearchType::Location,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            SearchType::Destination => "destination",
            SearchType::Event => "event",
            SearchType::Umkm => "umkm",
            SearchType::Article => "article",
            SearchType::Location => "location",
        }
    }

    /// Site section that hosts detail pages of this type.
    pub fn section(self) -> &'static str {
        match self {
            SearchType::Destination => "destinasi",
            SearchType::Event => "agenda",
            SearchType::Umkm => "umkm",
            SearchType::Article => "ensiklopedia",
            SearchType::Location => "peta",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

impl FromStr for SearchType {
    type Err = SumbuError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        SearchType::ORDER
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| SumbuError::InvalidData(format!("unknown search type {s:?}")))
    }
}

/// Locale-prefixed detail page path: `/<locale>/<section>/<slug>`.
pub fn result_url(locale: Locale, kind: SearchType, slug: &str) -> String {
    format!("/{}/{}/{}", locale.code(), kind.section(), slug)
}

/// One search hit, resolved for a locale. Recomputed on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: SearchType,
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Restrict to these collections; `None` searches all of them.
    pub types: Option<Vec<SearchType>>,
    /// Overall cap on results; `None` means [`DEFAULT_SEARCH_LIMIT`].
    pub limit: Option<usize>,
    pub excerpt_chars: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            types: None,
            limit: None,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

impl SearchOptions {
    pub fn with_types(mut self, types: Vec<SearchType>) -> Self {
        self.types = Some(types);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn includes(&self, kind: SearchType) -> bool {
        self.types.as_ref().map_or(true, |t| t.contains(&kind))
    }
}

/// Per-collection search configuration.
pub trait Searchable: Localize {
    const KIND: SearchType;
    /// Localized attribute shown as the result title and used for suggestions.
    const TITLE_FIELD: &'static str;
    /// Localized attribute the result excerpt is cut from.
    const EXCERPT_FIELD: &'static str;

    fn id(&self) -> &str;
    fn slug(&self) -> &str;
    fn category_tag(&self) -> &str;
    fn thumbnail(&self) -> Option<&str>;

    /// The searchable fields, resolved for `locale`.
    fn search_fields(&self, locale: Locale) -> Vec<&str>;

    fn title(&self, locale: Locale) -> &str {
        resolve_field(self, Self::TITLE_FIELD, locale)
    }

    fn matches(&self, needle: &str, locale: Locale) -> bool {
        self.search_fields(locale)
            .into_iter()
            .any(|field| contains_lower(field, needle))
    }

    fn to_result(&self, locale: Locale, excerpt_chars: usize) -> SearchResult {
        let slug = self.slug();
        SearchResult {
            kind: Self::KIND,
            id: self.id().to_string(),
            slug: slug.to_string(),
            title: self.title(locale).to_string(),
            excerpt: excerpt(
                resolve_field(self, Self::EXCERPT_FIELD, locale),
                excerpt_chars,
            )
            .into_owned(),
            category: self.category_tag().to_string(),
            thumbnail: self.thumbnail().map(str::to_string),
            url: result_url(locale, Self::KIND, slug),
        }
    }
}

/// Records of one collection matching `query`, in input order, at most `limit`.
///
/// This is the single-source building block used by [`PoiDb::search`] and by
/// the map facade on a pre-filtered candidate set.
pub fn search_records<'a, T, I>(items: I, query: &str, locale: Locale, limit: usize) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter(|item| item.matches(&needle, locale))
        .take(limit)
        .collect()
}

fn scan<T: Searchable>(
    items: &[T],
    needle: &str,
    locale: Locale,
    opts: &SearchOptions,
    limit: usize,
    out: &mut Vec<SearchResult>,
) {
    if !opts.includes(T::KIND) {
        return;
    }
    for item in items {
        if out.len() >= limit {
            return;
        }
        if item.matches(needle, locale) {
            out.push(item.to_result(locale, opts.excerpt_chars));
        }
    }
}

impl PoiDb {
    /// Multi-source search.
    ///
    /// # Examples
    ///
    /// ```
    /// use sumbu_core::{Category, Coordinates, Locale, PoiDb, PointOfInterest, SearchOptions};
    ///
    /// let db = PoiDb::from_locations(vec![
    ///     PointOfInterest::new("tugu", Category::Monument,
    ///         Coordinates::new(-7.7829, 110.3671).unwrap(), "Tugu Yogyakarta".into()),
    ///     PointOfInterest::new("monjali", Category::Monument,
    ///         Coordinates::new(-7.7496, 110.3697).unwrap(), "Monumen Jogja Kembali".into()),
    /// ]);
    ///
    /// let hits = db.search("tugu", Locale::Id, &SearchOptions::default());
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].url, "/id/peta/tugu-yogyakarta");
    /// ```
    pub fn search(&self, query: &str, locale: Locale, opts: &SearchOptions) -> Vec<SearchResult> {
        let Some(needle) = normalize_query(query) else {
            return Vec::new();
        };
        let limit = opts.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        let mut out = Vec::new();

        for kind in SearchType::ORDER {
            match kind {
                SearchType::Destination => scan(&self.destinations, &needle, locale, opts, limit, &mut out),
                SearchType::Event => scan(&self.events, &needle, locale, opts, limit, &mut out),
                SearchType::Umkm => scan(&self.businesses, &needle, locale, opts, limit, &mut out),
                SearchType::Article => scan(&self.articles, &needle, locale, opts, limit, &mut out),
                SearchType::Location => scan(&self.locations, &needle, locale, opts, limit, &mut out),
            }
        }
        out
    }

    /// Title suggestions for a partial query.
    ///
    /// Walks the collections in [`SearchType::ORDER`], keeps titles that
    /// contain the query, drops repeated titles (first occurrence wins) and
    /// stops at `limit`. Queries shorter than [`MIN_SUGGEST_CHARS`] yield
    /// nothing.
    pub fn suggest(&self, query: &str, locale: Locale, limit: usize) -> Vec<String> {
        let Some(needle) = normalize_query(query) else {
            return Vec::new();
        };
        if needle.chars().count() < MIN_SUGGEST_CHARS {
            return Vec::new();
        }

        let titles = self
            .destinations
            .iter()
            .map(|d| d.title(locale))
            .chain(self.events.iter().map(|e| e.title(locale)))
            .chain(self.businesses.iter().map(|b| b.title(locale)))
            .chain(self.articles.iter().map(|a| a.title(locale)))
            .chain(self.locations.iter().map(|p| p.title(locale)));

        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::new();
        for title in titles {
            if out.len() >= limit {
                break;
            }
            if contains_lower(title, &needle) && seen.insert(title) {
                out.push(title.to_string());
            }
        }
        out
    }
}

impl Searchable for Destination {
    const KIND: SearchType = SearchType::Destination;
    const TITLE_FIELD: &'static str = "name";
    const EXCERPT_FIELD: &'static str = "description";

    fn id(&self) -> &str {
        &self.id
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn category_tag(&self) -> &str {
        self.category.tag()
    }
    fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    fn search_fields(&self, locale: Locale) -> Vec<&str> {
        vec![
            self.name.resolve_str(locale),
            self.description.resolve_str(locale),
            self.category.tag(),
            self.district.as_deref().unwrap_or(""),
            self.address.resolve_str(locale),
        ]
    }
}

impl Searchable for Event {
    const KIND: SearchType = SearchType::Event;
    const TITLE_FIELD: &'static str = "title";
    const EXCERPT_FIELD: &'static str = "description";

    fn id(&self) -> &str {
        &self.id
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn category_tag(&self) -> &str {
        &self.category
    }
    fn thumbnail(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn search_fields(&self, locale: Locale) -> Vec<&str> {
        vec![
            self.title.resolve_str(locale),
            self.description.resolve_str(locale),
            self.category.as_str(),
            self.venue.resolve_str(locale),
        ]
    }
}

impl Searchable for Business {
    const KIND: SearchType = SearchType::Umkm;
    const TITLE_FIELD: &'static str = "name";
    const EXCERPT_FIELD: &'static str = "description";

    fn id(&self) -> &str {
        &self.id
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn category_tag(&self) -> &str {
        self.category.tag()
    }
    fn thumbnail(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn search_fields(&self, locale: Locale) -> Vec<&str> {
        let mut fields = vec![
            self.name.resolve_str(locale),
            self.description.resolve_str(locale),
            self.category.tag(),
            self.owner.as_deref().unwrap_or(""),
        ];
        fields.extend(self.products.resolve_slice(locale).iter().map(String::as_str));
        fields
    }
}

impl Searchable for Article {
    const KIND: SearchType = SearchType::Article;
    const TITLE_FIELD: &'static str = "title";
    const EXCERPT_FIELD: &'static str = "excerpt";

    fn id(&self) -> &str {
        &self.id
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn category_tag(&self) -> &str {
        &self.category
    }
    fn thumbnail(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn search_fields(&self, locale: Locale) -> Vec<&str> {
        let mut fields = vec![
            self.title.resolve_str(locale),
            self.excerpt.resolve_str(locale),
            self.category.as_str(),
        ];
        fields.extend(self.tags.resolve_slice(locale).iter().map(String::as_str));
        fields
    }
}

impl Searchable for PointOfInterest {
    const KIND: SearchType = SearchType::Location;
    const TITLE_FIELD: &'static str = "name";
    const EXCERPT_FIELD: &'static str = "description";

    fn id(&self) -> &str {
        &self.id
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn category_tag(&self) -> &str {
        self.category.tag()
    }
    fn thumbnail(&self) -> Option<&str> {
        PointOfInterest::thumbnail(self)
    }

    fn search_fields(&self, locale: Locale) -> Vec<&str> {
        let mut fields = vec![
            self.name.resolve_str(locale),
            self.description.resolve_str(locale),
            self.category.tag(),
            self.district.as_deref().unwrap_or(""),
            self.address.resolve_str(locale),
        ];
        fields.extend(self.products.iter().map(String::as_str));
        fields
    }
}
