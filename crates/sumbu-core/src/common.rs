// crates/sumbu-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`crate::PoiDb::stats`]; one count per content collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DbStats {
    pub locations: usize,
    pub destinations: usize,
    pub events: usize,
    pub businesses: usize,
    pub articles: usize,
}

impl DbStats {
    pub fn total(&self) -> usize {
        self.locations + self.destinations + self.events + self.businesses + self.articles
    }
}
