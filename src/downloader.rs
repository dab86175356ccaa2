//! Downloading pages, with an optional cache in front of the network.
//!
//! A [`Downloader`] pairs a [`Transport`] (how bytes are fetched) with an
//! optional [`Cache`] strategy. Listing pages go through a downloader without
//! a cache, because every listing URL carries a random cache-busting value.
//! Article pages go through one backed by [`DiskCache`], because a published
//! article does not change.

use crate::error::FetchError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument, warn};
use url::Url;

/// Fetch a URL and return the response body as text.
pub trait Transport {
    async fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// A URL-keyed text store consulted before the network.
pub trait Cache {
    /// Returns `None` on a miss. Unreadable entries count as misses.
    async fn get(&self, url: &str) -> Option<String>;

    async fn put(&self, url: &str, body: &str) -> Result<(), FetchError>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

static UNSAFE_PATH_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^/0-9A-Za-z\-.,;_]").expect("valid regex"));

const MAX_SEGMENT_LEN: usize = 255;

/// Cache that stores each page as a file under a root directory.
///
/// `https://news.sina.com.cn/c/2019-10-19/doc-1.shtml` is stored at
/// `<root>/news.sina.com.cn/c/2019-10-19/doc-1.shtml`. Entries never expire.
#[derive(Debug, Clone)]
pub struct DiskCache {
    root: PathBuf,
}

impl DiskCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a URL to its file path under the cache root.
    pub fn path_for(&self, url: &str) -> Result<PathBuf, FetchError> {
        let parsed = Url::parse(url)?;
        let mut relative = format!("{}{}", parsed.host_str().unwrap_or("_"), parsed.path());
        if relative.ends_with('/') {
            relative.push_str("index.html");
        }
        if let Some(query) = parsed.query() {
            relative.push('?');
            relative.push_str(query);
        }

        let cleaned = UNSAFE_PATH_CHARS.replace_all(&relative, "_");
        let mut path = self.root.clone();
        for segment in cleaned.split('/').filter(|s| !s.is_empty() && *s != "." && *s != "..") {
            // Cleaned segments are ASCII, so byte slicing is safe.
            path.push(&segment[..segment.len().min(MAX_SEGMENT_LEN)]);
        }
        Ok(path)
    }
}

impl Cache for DiskCache {
    async fn get(&self, url: &str) -> Option<String> {
        let path = self.path_for(url).ok()?;
        match fs::read_to_string(&path).await {
            Ok(body) => Some(body),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Cache miss");
                None
            }
        }
    }

    async fn put(&self, url: &str, body: &str) -> Result<(), FetchError> {
        let path = self.path_for(url)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| FetchError::CacheIo {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        if let Err(source) = fs::write(&path, body).await {
            return Err(FetchError::CacheIo { path, source });
        }
        Ok(())
    }
}

/// A transport with an optional cache strategy.
#[derive(Debug, Clone)]
pub struct Downloader<T, C = DiskCache> {
    transport: T,
    cache: Option<C>,
}

impl<T, C> Downloader<T, C>
where
    T: Transport,
    C: Cache,
{
    pub fn new(transport: T, cache: Option<C>) -> Self {
        Self { transport, cache }
    }

    /// A downloader that always goes to the network.
    pub fn uncached(transport: T) -> Self {
        Self::new(transport, None)
    }

    pub fn cached(transport: T, cache: C) -> Self {
        Self::new(transport, Some(cache))
    }

    /// Return the body for `url`, from the cache when present.
    ///
    /// A body fetched from the network is written back to the cache. A failed
    /// cache write is logged and does not fail the fetch.
    #[instrument(level = "debug", skip_all, fields(%url, cached = self.cache.is_some()))]
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if let Some(cache) = &self.cache {
            if let Some(body) = cache.get(url).await {
                debug!(bytes = body.len(), "Cache hit");
                return Ok(body);
            }
        }

        let body = self.transport.get(url).await?;
        debug!(bytes = body.len(), "Downloaded");

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.put(url, &body).await {
                warn!(error = %e, "Failed to write cache entry");
            }
        }
        Ok(body)
    }
}
