use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Roster API root, without the cohort segment.
pub const DEFAULT_BASE_URL: &str = "https://fsa-puppy-bowl.herokuapp.com/api";

/// Cohort segment appended to the base URL.
pub const DEFAULT_COHORT: &str = "2308-FTB-MT-WEB-PT";

/// Environment variable that overrides the full endpoint.
pub const ENDPOINT_ENV: &str = "PAWDECK_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_cohort")]
    pub cohort: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_cohort() -> String {
    DEFAULT_COHORT.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cohort: default_cohort(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// A missing file yields the defaults; a present-but-invalid file is a
    /// configuration error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pawdeck").join("config.toml"))
    }

    /// API root including the cohort segment.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.api.base_url.trim_end_matches('/'),
            self.api.cohort.trim_matches('/')
        )
    }
}

/// Resolve the roster endpoint by priority:
/// 1. Explicit `--api-url` value
/// 2. `PAWDECK_API_URL` environment variable
/// 3. Config file under the platform config directory
/// 4. Built-in default (base URL + cohort)
pub fn resolve_endpoint(explicit: Option<&str>) -> Result<String> {
    if let Some(url) = explicit {
        return Ok(url.trim_end_matches('/').to_string());
    }

    if let Ok(url) = std::env::var(ENDPOINT_ENV) {
        return Ok(url.trim_end_matches('/').to_string());
    }

    Ok(Config::load()?.endpoint())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.cohort, DEFAULT_COHORT);
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pawdeck").join("config.toml");

        let mut config = Config::default();
        config.api.cohort = "2401-FTB-ET-WEB-PT".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api.cohort, "2401-FTB-ET-WEB-PT");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "api = [not toml").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn endpoint_joins_base_and_cohort_without_doubled_slashes() {
        let mut config = Config::default();
        config.api.base_url = "https://roster.example.dev/api/".to_string();
        config.api.cohort = "demo".to_string();
        assert_eq!(config.endpoint(), "https://roster.example.dev/api/demo");
    }

    #[test]
    fn explicit_url_wins_over_everything() {
        let endpoint = resolve_endpoint(Some("http://localhost:9000/api/test/")).unwrap();
        assert_eq!(endpoint, "http://localhost:9000/api/test");
    }
}
