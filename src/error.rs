//! Error types for the crawler.
//!
//! Errors are split by how far they are allowed to travel:
//!
//! - [`FetchError`]: a single download failed (transport, HTTP status, cache IO).
//! - [`ExtractError`]: an article page could not be turned into text. These never
//!   leave the article extractor; they are logged and the item gets empty content.
//! - [`CrawlerError`]: what callers of the public entry points see. An invalid
//!   category or any listing failure aborts the whole operation.
//! - [`ConfigError`]: loading the YAML configuration failed.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CrawlerError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Cache IO error at {}: {source}", .path.display())]
    CacheIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Article download failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("No paragraphs under #artibody or #article")]
    MissingContainer,
}

#[derive(Debug, Error)]
pub enum CrawlerError {
    #[error("Invalid category '{label}'; expected one of: {allowed}")]
    InvalidCategory { label: String, allowed: String },

    #[error("Listing page {page} could not be fetched: {source}")]
    ListingFetch {
        page: u32,
        #[source]
        source: FetchError,
    },

    #[error("Listing page {page} has an unexpected shape: {source}")]
    ListingDecode {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("Item '{title}' has a non-integer ctime '{raw}'")]
    InvalidTimestamp { title: String, raw: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_category_names_allowed_set() {
        let err = CrawlerError::InvalidCategory {
            label: "Weather".to_string(),
            allowed: "All, Finance".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid category 'Weather'; expected one of: All, Finance"
        );
    }

    #[test]
    fn test_listing_fetch_keeps_source() {
        use std::error::Error;

        let err = CrawlerError::ListingFetch {
            page: 3,
            source: FetchError::Status {
                url: "https://example.com/roll".to_string(),
                status: 502,
            },
        };
        assert!(err.to_string().starts_with("Listing page 3"));
        assert!(err.source().is_some());
    }
}
