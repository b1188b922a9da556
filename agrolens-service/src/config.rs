//! Service configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the market service.
///
/// Every field has a default so a config file only needs to override what
/// differs from the stock deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Directory holding the region CSV sources.
    pub data_dir: PathBuf,
    /// Region used when a caller or profile supplies none.
    pub default_region: String,
    /// Commodity used when a caller or profile supplies none.
    pub default_commodity: String,
    /// Trend window used for dashboards.
    pub default_days: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            default_region: "Kerala_Kottayam".into(),
            default_commodity: "Banana".into(),
            default_days: 14,
        }
    }
}

impl ServiceConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("read config file: {e}"))?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("parse config TOML: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_deployment() {
        let config = ServiceConfig::default();
        assert_eq!(config.default_region, "Kerala_Kottayam");
        assert_eq!(config.default_commodity, "Banana");
        assert_eq!(config.default_days, 14);
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn partial_toml_keeps_defaults_for_the_rest() {
        let config = ServiceConfig::from_toml(
            "data_dir = \"/srv/mandi\"\ndefault_commodity = \"Wheat\"\n",
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/mandi"));
        assert_eq!(config.default_commodity, "Wheat");
        assert_eq!(config.default_region, "Kerala_Kottayam");
    }

    #[test]
    fn toml_roundtrip() {
        let config = ServiceConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert_eq!(ServiceConfig::from_toml(&toml).unwrap(), config);
    }
}
