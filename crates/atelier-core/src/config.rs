//! Runtime configuration
//!
//! Timing values are kept in milliseconds so the struct maps directly onto
//! command-line flags and JSON.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::selection::DEFAULT_HOLD;
use crate::warmup::DEFAULT_WARMUP;

/// File name looked up in the per-user config directory
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// Gallery settings shared by the desktop app and the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// How long a clicked card stays highlighted
    pub hold_ms: u64,
    /// Delay before cards fade in
    pub warmup_ms: u64,
    /// Catalog file; `None` uses the default location or the built-in catalog
    pub catalog_path: Option<PathBuf>,
}

impl GalleryConfig {
    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    pub fn warmup(&self) -> Duration {
        Duration::from_millis(self.warmup_ms)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            hold_ms: DEFAULT_HOLD.as_millis() as u64,
            warmup_ms: DEFAULT_WARMUP.as_millis() as u64,
            catalog_path: None,
        }
    }
}

/// `<config_dir>/atelier/catalog.json`, if the platform has a config dir
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("atelier").join(CATALOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let config = GalleryConfig::default();
        assert_eq!(config.hold(), Duration::from_millis(5000));
        assert_eq!(config.warmup(), Duration::from_millis(500));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GalleryConfig = serde_json::from_str(r#"{"hold_ms": 1200}"#).unwrap();
        assert_eq!(config.hold_ms, 1200);
        assert_eq!(config.warmup_ms, 500);
    }

    #[test]
    fn test_default_catalog_path_file_name() {
        if let Some(path) = default_catalog_path() {
            assert!(path.ends_with("atelier/catalog.json"));
        }
    }
}
