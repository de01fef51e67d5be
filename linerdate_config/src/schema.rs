use std::path::PathBuf;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExtractorConfig {
    /// IANA timezone name used when a date expression carries no year.
    #[serde(default = "ExtractorConfig::default_reference_timezone")]
    pub reference_timezone: String,

    /// Override for the phrase cue words. `None` keeps the built-in set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cue_words: Option<Vec<String>>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            reference_timezone: Self::default_reference_timezone(),
            cue_words: None,
        }
    }
}

impl ExtractorConfig {
    fn default_reference_timezone() -> String {
        "Asia/Tokyo".to_string()
    }

    /// Parse the configured timezone name.
    pub fn reference_timezone(&self) -> anyhow::Result<Tz> {
        self.reference_timezone.parse().map_err(|e| {
            anyhow::anyhow!(
                "Invalid reference_timezone {:?}: {e}",
                self.reference_timezone
            )
        })
    }
}

impl Config {
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("linerdate");

        Ok(config_dir.join("config.json"))
    }

    /// Load `~/linerdate/config.json`, falling back to defaults when the
    /// file does not exist. A file that exists but fails to parse is an
    /// error, never silently ignored.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }
}
