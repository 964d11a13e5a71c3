// crates/sumbu-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (files, decompression) and delegates parsing to
//! `serde_json` and validation to [`crate::convert`].

use crate::convert::from_raw;
use crate::db::PoiDb;
use crate::error::{Result, SumbuError};
use crate::raw::DatasetRaw;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::debug;

#[cfg(feature = "bundled")]
use once_cell::sync::OnceCell;

/// The Sumbu Filosofi dataset compiled into the library.
#[cfg(feature = "bundled")]
pub const BUNDLED_DATASET: &str = include_str!("../data/sumbu-filosofi.json");

// Single in-process copy so the bundled dataset is parsed once per process.
#[cfg(feature = "bundled")]
static BUNDLED_DB: OnceCell<PoiDb> = OnceCell::new();

impl PoiDb {
    /// Load the bundled dataset (parsed once, then cloned).
    #[cfg(feature = "bundled")]
    pub fn load() -> Result<Self> {
        Self::bundled().cloned()
    }

    /// Shared reference to the bundled dataset, parsed on first use.
    #[cfg(feature = "bundled")]
    pub fn bundled() -> Result<&'static PoiDb> {
        BUNDLED_DB.get_or_try_init(|| Self::from_json_str(BUNDLED_DATASET))
    }

    /// Load a dataset from a JSON file. Paths ending in `.gz` are gunzipped
    /// (requires the `compact` feature).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let db = Self::from_reader(reader)?;
        debug!(path = %path.display(), "dataset loaded from file");
        Ok(db)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: DatasetRaw = serde_json::from_reader(reader)?;
        Self::from_dataset(raw)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: DatasetRaw = serde_json::from_str(json)?;
        Self::from_dataset(raw)
    }

    fn from_dataset(raw: DatasetRaw) -> Result<Self> {
        let db = from_raw(raw)?;
        let stats = db.stats();
        debug!(
            locations = stats.locations,
            destinations = stats.destinations,
            events = stats.events,
            businesses = stats.businesses,
            articles = stats.articles,
            "dataset built"
        );
        Ok(db)
    }
}

/// Opens a file, buffers it, and wraps `.gz` files in a Gzip decoder.
/// The caller gets a plain reader regardless of compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            SumbuError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        }
        _ => SumbuError::Io(e),
    })?;
    let reader = BufReader::new(file);

    let gzipped = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(SumbuError::InvalidData(format!(
            "{} is gzipped but the 'compact' feature is disabled",
            path.display()
        )))
    }
}
