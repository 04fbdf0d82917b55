//! Layered configuration loaded with figment.
//!
//! Sources, highest priority first:
//! 1. Environment variables (`PONENCIA_*`, `__` separating sections)
//! 2. Project-local `ponencia.toml`
//! 3. User-global `<config_dir>/ponencia/config.toml`
//! 4. Built-in defaults
//!
//! `PONENCIA_SEGMENT__MIN_LENGTH=200` maps to `segment.min_length`.

use std::path::PathBuf;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::segment::{DEFAULT_MIN_LENGTH, Segmenter};

const LOCAL_CONFIG: &str = "ponencia.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PonenciaConfig {
    #[serde(default)]
    pub segment: SegmentConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SegmentConfig {
    /// Minimum characters for a cleaned unit to be kept.
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_true")]
    pub strip_inline_footnotes: bool,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            strip_inline_footnotes: true,
        }
    }
}

impl SegmentConfig {
    pub fn segmenter(&self) -> Segmenter {
        Segmenter::new(self.min_length).with_inline_footnotes_stripped(self.strip_inline_footnotes)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreConfig {
    /// DuckDB file. In-memory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Build a full-text index over segment text after loading.
    #[serde(default)]
    pub full_text: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Default justices source file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_true() -> bool {
    true
}

impl PonenciaConfig {
    pub fn load() -> Result<Self, CoreError> {
        Ok(Self::figment().extract()?)
    }

    /// The provider chain, exposed so callers can merge extra layers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global) = Self::global_config_path()
            && global.exists()
        {
            figment = figment.merge(Toml::file(global));
        }

        let local = PathBuf::from(LOCAL_CONFIG);
        if local.exists() {
            figment = figment.merge(Toml::file(local));
        }

        figment.merge(Env::prefixed("PONENCIA_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ponencia").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_operating_point() {
        let config = PonenciaConfig::default();
        assert_eq!(config.segment.min_length, 500);
        assert!(config.segment.strip_inline_footnotes);
        assert_eq!(config.store.path, None);
        assert!(!config.store.full_text);
    }

    #[test]
    fn segmenter_carries_settings() {
        let config = SegmentConfig {
            min_length: 42,
            strip_inline_footnotes: false,
        };
        assert_eq!(config.segmenter(), Segmenter::new(42).with_inline_footnotes_stripped(false));
    }
}
