//! Crawler configuration.
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! YAML file, then command-line flags or environment variables.
//!
//! ```yaml
//! listing_url_template: "https://feed.mix.sina.com.cn/api/roll/get?pageid=153&lid={lid}&k=&num={num}&page={page}&r={r}"
//! cache_dir: "./cache"
//! user_agent: "Mozilla/5.0"
//! ```

use crate::error::ConfigError;
use crate::scrapers::listing::DEFAULT_LISTING_TEMPLATE;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

pub const DEFAULT_CACHE_DIR: &str = "cache";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Listing API URL with `{lid}`, `{num}`, `{page}` and `{r}` placeholders.
    pub listing_url_template: String,
    /// Root directory of the article page cache.
    pub cache_dir: PathBuf,
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            listing_url_template: DEFAULT_LISTING_TEMPLATE.to_string(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CrawlerConfig {
    /// Load a YAML config file. Missing keys keep their defaults.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CrawlerConfig::default();
        assert_eq!(config.listing_url_template, DEFAULT_LISTING_TEMPLATE);
        assert_eq!(config.cache_dir, PathBuf::from("cache"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = CrawlerConfig::from_yaml_str("cache_dir: /var/cache/sina\n").unwrap();
        assert_eq!(config.cache_dir, PathBuf::from("/var/cache/sina"));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "listing_url_template: \"http://localhost/roll?lid={{lid}}\"").unwrap();
        writeln!(file, "user_agent: test-agent").unwrap();

        let config = CrawlerConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.listing_url_template, "http://localhost/roll?lid={lid}");
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = CrawlerConfig::from_yaml_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_bad_yaml_is_a_yaml_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cache_dir: [unclosed").unwrap();
        let err = CrawlerConfig::from_yaml_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }
}
