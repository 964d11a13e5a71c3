// crates/sumbu-core/src/category.rs

//! # Categories & Category Filter
//!
//! Category tags form a closed enumeration. Display metadata (color, icon,
//! bilingual label) is attached to each variant, so an unrecognized tag is a
//! parse error at dataset construction rather than a silent fallback.

use crate::error::{Result, SumbuError};
use crate::locale::Locale;
use crate::model::PointOfInterest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Heritage,
    Monument,
    Religious,
    Tourism,
    Museum,
    Umkm,
    Culinary,
    Market,
    Park,
}

/// Display metadata for a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryMeta {
    /// CSS hex color used for map markers and badges.
    pub color: &'static str,
    /// Icon identifier understood by the presentation layer.
    pub icon: &'static str,
    pub label_id: &'static str,
    pub label_en: &'static str,
}

impl CategoryMeta {
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Id => self.label_id,
            Locale::En => self.label_en,
        }
    }
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Heritage,
        Category::Monument,
        Category::Religious,
        Category::Tourism,
        Category::Museum,
        Category::Umkm,
        Category::Culinary,
        Category::Market,
        Category::Park,
    ];

    /// Lowercase tag as used in the dataset and on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Heritage => "heritage",
            Category::Monument => "monument",
            Category::Religious => "religious",
            Category::Tourism => "tourism",
            Category::Museum => "museum",
            Category::Umkm => "umkm",
            Category::Culinary => "culinary",
            Category::Market => "market",
            Category::Park => "park",
        }
    }

    pub fn meta(self) -> CategoryMeta {
        let (color, icon, label_id, label_en) = match self {
            Category::Heritage => ("#8B4513", "landmark", "Cagar Budaya", "Heritage"),
            Category::Monument => ("#B8860B", "monument", "Monumen", "Monument"),
            Category::Religious => ("#2E8B57", "mosque", "Religi", "Religious"),
            Category::Tourism => ("#1E90FF", "camera", "Wisata", "Tourism"),
            Category::Museum => ("#6A5ACD", "museum", "Museum", "Museum"),
            Category::Umkm => ("#FF8C00", "store", "UMKM", "Local Business"),
            Category::Culinary => ("#DC143C", "utensils", "Kuliner", "Culinary"),
            Category::Market => ("#DAA520", "shopping-basket", "Pasar", "Market"),
            Category::Park => ("#228B22", "tree", "Taman", "Park"),
        };
        CategoryMeta {
            color,
            icon,
            label_id,
            label_en,
        }
    }

    #[inline]
    pub fn label(self, locale: Locale) -> &'static str {
        self.meta().label(locale)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

impl FromStr for Category {
    type Err = SumbuError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| SumbuError::UnknownCategory(s.to_string()))
    }
}

/// A filter selection: a concrete category or the `all` wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryTag {
    All,
    Only(Category),
}

impl CategoryTag {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryTag::All => true,
            CategoryTag::Only(c) => c == category,
        }
    }
}

impl From<Category> for CategoryTag {
    fn from(c: Category) -> Self {
        CategoryTag::Only(c)
    }
}

impl FromStr for CategoryTag {
    type Err = SumbuError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryTag::All)
        } else {
            s.parse().map(CategoryTag::Only)
        }
    }
}

/// Parses a comma-separated tag list such as `"heritage,umkm"` or `"all"`.
pub fn parse_tags(list: &str) -> Result<Vec<CategoryTag>> {
    list.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Selects the points whose category is in `tags`, keeping input order.
///
/// `CategoryTag::All` anywhere in `tags` returns every input record. An empty
/// `tags` slice selects nothing.
///
/// Accepts both the repository slice and an already filtered `Vec<&_>`, so
/// filters can be chained.
pub fn filter_by_category<'a, I>(pois: I, tags: &[CategoryTag]) -> Vec<&'a PointOfInterest>
where
    I: IntoIterator<Item = &'a PointOfInterest>,
{
    if tags.contains(&CategoryTag::All) {
        return pois.into_iter().collect();
    }
    pois.into_iter()
        .filter(|p| tags.iter().any(|t| t.matches(p.category)))
        .collect()
}
