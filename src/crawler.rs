//! Public entry points for crawling the rolling-news feed.
//!
//! [`SinaNewsCrawler`] ties the page planner, category resolver and listing
//! fetcher together. It owns two downloaders over the same transport: an
//! uncached one for listing pages and a disk-cached one for article pages.
//! Tables are returned as fetched, without sorting, filtering or dedup.

use crate::categories;
use crate::config::CrawlerConfig;
use crate::downloader::{Cache, DiskCache, Downloader, HttpTransport, Transport};
use crate::error::Result;
use crate::models::NewsTable;
use crate::pagination::PagePlan;
use crate::scrapers::article::ArticleExtractor;
use crate::scrapers::listing::ListingFetcher;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct SinaNewsCrawler<T = HttpTransport, C = DiskCache> {
    fetcher: ListingFetcher<T, C>,
}

impl SinaNewsCrawler {
    /// Build a crawler over HTTP with the article cache at `config.cache_dir`.
    pub fn from_config(config: &CrawlerConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.user_agent)?;
        info!(cache_dir = %config.cache_dir.display(), "Article cache");
        Ok(Self::new(
            transport,
            DiskCache::new(&config.cache_dir),
            &config.listing_url_template,
        ))
    }
}

impl<T, C> SinaNewsCrawler<T, C>
where
    T: Transport + Clone,
    C: Cache,
{
    pub fn new(transport: T, article_cache: C, listing_template: &str) -> Self {
        let listings = Downloader::uncached(transport.clone());
        let articles = ArticleExtractor::new(Downloader::cached(transport, article_cache));
        Self {
            fetcher: ListingFetcher::new(listings, articles, listing_template),
        }
    }

    /// Rolling news for pages `page_from..page_to` (end exclusive), 50 per page.
    #[instrument(level = "info", skip(self))]
    pub async fn get_rolling_news_bypage(
        &self,
        page_from: u32,
        page_to: u32,
        include_content: bool,
        category: Option<&str>,
    ) -> Result<NewsTable> {
        let plan = PagePlan::by_range(page_from, page_to);
        self.fetcher.fetch(category, &plan, include_content).await
    }

    /// The latest `count` rolling news items.
    ///
    /// Article content is always fetched: `include_content` is accepted for
    /// symmetry with [`get_rolling_news_bypage`](Self::get_rolling_news_bypage)
    /// but ignored.
    #[instrument(level = "info", skip(self))]
    pub async fn get_rolling_news_bycount(
        &self,
        count: u32,
        include_content: bool,
        category: Option<&str>,
    ) -> Result<NewsTable> {
        let plan = PagePlan::by_count(count);
        self.fetcher.fetch(category, &plan, true).await
    }

    /// The latest `count` items of each `(category, count)` pair, concatenated
    /// in the given order. Every label is validated before anything is fetched.
    #[instrument(level = "info", skip(self))]
    pub async fn get_rolling_news_by_categories(
        &self,
        requests: &[(&str, u32)],
        include_content: bool,
    ) -> Result<NewsTable> {
        for (label, _) in requests {
            categories::validate(label)?;
        }

        let mut table = NewsTable::new(include_content);
        for &(label, count) in requests {
            let plan = PagePlan::by_count(count);
            table.append(self.fetcher.fetch(Some(label), &plan, include_content).await?);
        }
        Ok(table)
    }

    /// Article URLs of the latest `count` items, without fetching the articles.
    #[instrument(level = "info", skip(self))]
    pub async fn get_rolling_news_urls(
        &self,
        count: u32,
        category: Option<&str>,
    ) -> Result<Vec<String>> {
        let plan = PagePlan::by_count(count);
        self.fetcher.fetch_urls(category, &plan).await
    }
}
