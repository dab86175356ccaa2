//! Sina article body extraction.
//!
//! Article pages put their body paragraphs under `#artibody` (older layout) or
//! `#article` (newer layout). Only those `<p>` elements are kept; everything
//! else on the page is navigation, ads and scripts.
//!
//! Extraction is best effort. A failed download or a page without either
//! container yields an empty string and a warning, never an error.

use crate::downloader::{Cache, Downloader, Transport};
use crate::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, instrument, warn};

static PARAGRAPHS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#artibody p, #article p").expect("valid selector"));

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \u{a0}?]+").expect("valid regex"));
static NEWLINE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\n\s*").expect("valid regex"));
static WS_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*(\s)").expect("valid regex"));

/// Fetches article pages through a cached [`Downloader`] and extracts their text.
#[derive(Debug, Clone)]
pub struct ArticleExtractor<T, C> {
    downloader: Downloader<T, C>,
}

impl<T, C> ArticleExtractor<T, C>
where
    T: Transport,
    C: Cache,
{
    pub fn new(downloader: Downloader<T, C>) -> Self {
        Self { downloader }
    }

    /// Download `url` and return its body text, or `""` on any failure.
    #[instrument(level = "debug", skip_all, fields(%url))]
    pub async fn extract(&self, url: &str) -> String {
        match self.try_extract(url).await {
            Ok(text) => {
                debug!(chars = text.chars().count(), "Extracted article text");
                text
            }
            Err(e) => {
                warn!(%url, error = %e, "Article extraction failed; using empty content");
                String::new()
            }
        }
    }

    async fn try_extract(&self, url: &str) -> Result<String, ExtractError> {
        let html = self.downloader.fetch(url).await?;
        extract_text(&html)
    }
}

/// Pull the normalised body text out of an article page.
pub fn extract_text(html: &str) -> Result<String, ExtractError> {
    let document = Html::parse_document(html);
    let paragraphs: Vec<String> = document
        .select(&PARAGRAPHS)
        .map(|p| p.text().collect::<String>())
        .collect();

    if paragraphs.is_empty() {
        return Err(ExtractError::MissingContainer);
    }
    Ok(normalize_text(&paragraphs.join("\n")))
}

/// Clean whitespace and stray characters from extracted text.
///
/// In order: drop U+3000, collapse runs of spaces, NBSPs and `?` into one
/// space, collapse whitespace around newlines into one newline, collapse any
/// other whitespace run into its last character, trim.
pub fn normalize_text(text: &str) -> String {
    let text = text.replace('\u{3000}', "");
    let text = SPACE_RUNS.replace_all(&text, " ");
    let text = NEWLINE_WS.replace_all(&text, "\n");
    let text = WS_RUNS.replace_all(&text, "$1");
    text.trim().to_string()
}
