// crates/sumbu-core/src/locale.rs

//! # Locale Resolver
//!
//! Every localizable attribute of a record is a [`Localized`] pair: a value in
//! the primary locale (Indonesian) and an optional value in the secondary
//! locale (English). Reads go through [`resolve_field`] /
//! [`resolve_array_field`], which fall back to the primary locale and never
//! fail; missing content is an editorial problem and is only logged.

use crate::error::{Result, SumbuError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// The two supported content locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Bahasa Indonesia, the primary locale. Every record must carry it.
    #[default]
    Id,
    /// English, the secondary locale.
    En,
}

impl Locale {
    pub const PRIMARY: Locale = Locale::Id;
    pub const ALL: [Locale; 2] = [Locale::Id, Locale::En];

    /// Two-letter tag used in URLs and dataset field suffixes.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Id => "id",
            Locale::En => "en",
        }
    }

    #[inline]
    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Locale {
    type Err = SumbuError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        Locale::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(tag))
            .ok_or_else(|| SumbuError::UnknownLocale(s.to_string()))
    }
}

/// Values that can be "absent" without being `None` (empty strings, empty lists).
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for Vec<String> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// A localizable attribute: primary value plus optional secondary value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub id: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<T>,
}

impl<T: Blank> Localized<T> {
    pub fn new(primary: T) -> Self {
        Localized {
            id: primary,
            en: None,
        }
    }

    pub fn with_en(mut self, secondary: T) -> Self {
        self.en = Some(secondary);
        self
    }

    /// Value stored for exactly `locale`, if present and non-blank.
    pub fn get(&self, locale: Locale) -> Option<&T> {
        let v = match locale {
            Locale::Id => Some(&self.id),
            Locale::En => self.en.as_ref(),
        };
        v.filter(|v| !v.is_blank())
    }

    /// Value for `locale`, falling back to the primary locale.
    pub fn resolve(&self, locale: Locale) -> Option<&T> {
        self.get(locale).or_else(|| {
            if locale.is_primary() {
                None
            } else {
                self.get(Locale::PRIMARY)
            }
        })
    }
}

impl Localized<String> {
    /// Quiet variant of [`resolve_field`] for optional attributes: same
    /// fallback, `""` when unresolved, nothing logged.
    pub fn resolve_str(&self, locale: Locale) -> &str {
        self.resolve(locale).map(String::as_str).unwrap_or("")
    }
}

impl Localized<Vec<String>> {
    pub fn resolve_slice(&self, locale: Locale) -> &[String] {
        self.resolve(locale).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl From<&str> for Localized<String> {
    fn from(s: &str) -> Self {
        Localized::new(s.to_string())
    }
}

/// Records whose localizable attributes can be looked up by base name
/// (`"name"`, `"description"`, `"facilities"`, ...).
pub trait Localize {
    /// Stable identifier used in log messages.
    fn record_id(&self) -> &str;

    fn text_field(&self, base: &str) -> Option<&Localized<String>>;

    fn list_field(&self, _base: &str) -> Option<&Localized<Vec<String>>> {
        None
    }
}

fn pick<'a, T: Blank>(
    field: &'a Localized<T>,
    record: &str,
    base: &str,
    locale: Locale,
) -> Option<&'a T> {
    if let Some(v) = field.get(locale) {
        return Some(v);
    }
    if locale.is_primary() {
        return None;
    }
    let v = field.get(Locale::PRIMARY)?;
    debug!(record, field = base, %locale, "falling back to primary locale");
    Some(v)
}

/// Reads the text attribute `base` of `record` in `locale`.
///
/// Falls back to the primary locale when the secondary value is missing;
/// returns `""` (and logs a warning) when nothing can be resolved, including
/// when `record` has no attribute named `base`.
///
/// # Examples
/// ```rust
/// use sumbu_core::locale::{resolve_field, Locale};
/// use sumbu_core::{Category, Coordinates, PointOfInterest};
///
/// let tugu = PointOfInterest::new(
///     "tugu",
///     Category::Monument,
///     Coordinates::new(-7.7829, 110.3671).unwrap(),
///     "Tugu Yogyakarta".into(),
/// );
/// assert_eq!(resolve_field(&tugu, "name", Locale::En), "Tugu Yogyakarta");
/// assert_eq!(resolve_field(&tugu, "no_such_field", Locale::Id), "");
/// ```
pub fn resolve_field<'a, R: Localize + ?Sized>(record: &'a R, base: &str, locale: Locale) -> &'a str {
    let id = record.record_id();
    match record
        .text_field(base)
        .and_then(|f| pick(f, id, base, locale))
    {
        Some(s) => s.as_str(),
        None => {
            warn!(record = id, field = base, %locale, "localized field is missing");
            ""
        }
    }
}

/// List-valued counterpart of [`resolve_field`]; unresolved lists are empty.
pub fn resolve_array_field<'a, R: Localize + ?Sized>(
    record: &'a R,
    base: &str,
    locale: Locale,
) -> &'a [String] {
    let id = record.record_id();
    match record
        .list_field(base)
        .and_then(|f| pick(f, id, base, locale))
    {
        Some(v) => v.as_slice(),
        None => {
            warn!(record = id, field = base, %locale, "localized list is missing");
            &[]
        }
    }
}
