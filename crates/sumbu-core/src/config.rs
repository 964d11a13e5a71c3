// crates/sumbu-core/src/config.rs

//! Engine configuration.
//!
//! Figment merges built-in defaults, then `sumbu.toml` in the working
//! directory, then `SUMBU_*` environment variables (`SUMBU_LOCALE=en`,
//! `SUMBU_SEARCH_LIMIT=20`, ...). Later layers win.

use crate::error::Result;
use crate::locale::Locale;
use crate::search::{SearchOptions, DEFAULT_SEARCH_LIMIT, DEFAULT_SUGGEST_LIMIT};
use crate::text::DEFAULT_EXCERPT_CHARS;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "sumbu.toml";
pub const ENV_PREFIX: &str = "SUMBU_";
pub const DEFAULT_NEARBY_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Dataset file to load instead of the bundled one.
    pub dataset: Option<PathBuf>,
    pub locale: Locale,
    pub search_limit: usize,
    pub suggest_limit: usize,
    pub nearby_limit: usize,
    pub excerpt_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            dataset: None,
            locale: Locale::PRIMARY,
            search_limit: DEFAULT_SEARCH_LIMIT,
            suggest_limit: DEFAULT_SUGGEST_LIMIT,
            nearby_limit: DEFAULT_NEARBY_LIMIT,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

impl EngineConfig {
    /// Defaults + `sumbu.toml` + `SUMBU_*`.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Same layering with an explicit TOML file. A missing file is skipped.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_figment(Self::figment(path.as_ref()))
    }

    pub fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(EngineConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::from(self)
    }
}

impl From<&EngineConfig> for SearchOptions {
    fn from(cfg: &EngineConfig) -> Self {
        SearchOptions {
            types: None,
            limit: Some(cfg.search_limit),
            excerpt_chars: cfg.excerpt_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SumbuError;

    fn from_toml(toml: &str) -> Result<EngineConfig> {
        EngineConfig::from_figment(
            Figment::new()
                .merge(Serialized::defaults(EngineConfig::default()))
                .merge(Toml::string(toml)),
        )
    }

    #[test]
    fn defaults_match_engine_constants() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.locale, Locale::Id);
        assert_eq!(cfg.search_limit, 10);
        assert_eq!(cfg.suggest_limit, 5);
        assert_eq!(cfg.excerpt_chars, 150);
        assert_eq!(cfg.search_options(), SearchOptions::default().with_limit(10));
    }

    #[test]
    fn toml_overrides_defaults() {
        let cfg = from_toml("locale = \"en\"\nsearch_limit = 3\ndataset = \"data/alt.json\"").unwrap();
        assert_eq!(cfg.locale, Locale::En);
        assert_eq!(cfg.search_limit, 3);
        assert_eq!(cfg.suggest_limit, 5);
        assert_eq!(cfg.dataset.as_deref(), Some(Path::new("data/alt.json")));
    }

    #[test]
    fn bad_values_are_config_errors() {
        let err = from_toml("locale = \"fr\"").unwrap_err();
        assert!(matches!(err, SumbuError::Config(_)));
    }

    #[test]
    fn missing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = EngineConfig::from_figment(
            Figment::new()
                .merge(Serialized::defaults(EngineConfig::default()))
                .merge(Toml::file(dir.path().join("absent.toml"))),
        )
        .unwrap();
        assert_eq!(cfg, EngineConfig::default());
    }
}
