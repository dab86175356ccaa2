//! Rolling-news listing fetcher.
//!
//! Walks a [`PagePlan`] in page order, calls the listing API once per page
//! through an uncached downloader, and turns each item of `result.data` into a
//! [`NewsRow`]. Any listing failure aborts the whole fetch; only article
//! extraction is allowed to degrade.

use crate::categories;
use crate::downloader::{Cache, Downloader, Transport};
use crate::error::{CrawlerError, Result};
use crate::models::{ListingEnvelope, NewsRow, NewsTable, RawNewsItem};
use crate::pagination::PagePlan;
use crate::scrapers::article::ArticleExtractor;
use crate::utils::format_ctime;
use futures::stream::{self, StreamExt, TryStreamExt};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Default listing URL template. `{lid}`, `{num}`, `{page}` and `{r}` are substituted.
pub const DEFAULT_LISTING_TEMPLATE: &str =
    "https://feed.mix.sina.com.cn/api/roll/get?pageid=153&lid={lid}&k=&num={num}&page={page}&r={r}";

/// Fill in the listing template for one page.
pub fn listing_url(template: &str, lid: u32, num: u32, page: u32, cache_buster: f64) -> String {
    template
        .replace("{lid}", &lid.to_string())
        .replace("{num}", &num.to_string())
        .replace("{page}", &page.to_string())
        .replace("{r}", &cache_buster.to_string())
}

#[derive(Debug, Clone)]
pub struct ListingFetcher<T, C> {
    listings: Downloader<T, C>,
    articles: ArticleExtractor<T, C>,
    template: String,
}

impl<T, C> ListingFetcher<T, C>
where
    T: Transport,
    C: Cache,
{
    /// `listings` should be uncached: every listing URL is unique anyway.
    pub fn new(
        listings: Downloader<T, C>,
        articles: ArticleExtractor<T, C>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            listings,
            articles,
            template: template.into(),
        }
    }

    /// Fetch every page of `plan` for `category` and collect the rows.
    ///
    /// An explicit `category` must be a known label. With `include_content`
    /// each row also carries the article text (empty if extraction failed).
    #[instrument(level = "info", skip_all, fields(category = ?category, pages = plan.len(), include_content = include_content))]
    pub async fn fetch(
        &self,
        category: Option<&str>,
        plan: &PagePlan,
        include_content: bool,
    ) -> Result<NewsTable> {
        let (lid, label) = categories::resolve(category)?;

        let mut table = NewsTable::new(include_content);
        for (page, num) in plan.iter() {
            let items = self.fetch_page(lid, page, num).await?;
            let rows: Vec<NewsRow> = stream::iter(items)
                .then(|item| self.build_row(label, item, include_content))
                .try_collect()
                .await?;
            info!(page, rows = rows.len(), "Collected listing page");
            for row in rows {
                table.push(row);
            }
        }

        info!(lid, label, rows = table.len(), "Listing fetch complete");
        Ok(table)
    }

    /// Fetch only the article URLs of every page in `plan`.
    #[instrument(level = "info", skip_all, fields(category = ?category, pages = plan.len()))]
    pub async fn fetch_urls(&self, category: Option<&str>, plan: &PagePlan) -> Result<Vec<String>> {
        let (lid, _) = categories::resolve(category)?;

        let mut urls = Vec::new();
        for (page, num) in plan.iter() {
            let items = self.fetch_page(lid, page, num).await?;
            urls.extend(items.into_iter().map(|item| item.url));
        }
        info!(count = urls.len(), "Collected article URLs");
        Ok(urls)
    }

    #[instrument(level = "debug", skip(self))]
    async fn fetch_page(&self, lid: u32, page: u32, num: u32) -> Result<Vec<RawNewsItem>> {
        let cache_buster: f64 = rand::rng().random();
        let url = listing_url(&self.template, lid, num, page, cache_buster);
        debug!(%url, "Requesting listing page");

        let body = self
            .listings
            .fetch(&url)
            .await
            .map_err(|source| CrawlerError::ListingFetch { page, source })?;
        let envelope: ListingEnvelope = serde_json::from_str(&body)
            .map_err(|source| CrawlerError::ListingDecode { page, source })?;
        Ok(envelope.result.data)
    }

    async fn build_row(
        &self,
        label: &str,
        item: RawNewsItem,
        include_content: bool,
    ) -> Result<NewsRow> {
        let ctime = format_ctime(&item.ctime).ok_or_else(|| CrawlerError::InvalidTimestamp {
            title: item.title.clone(),
            raw: item.ctime.clone(),
        })?;
        let content = if include_content {
            Some(self.articles.extract(&item.url).await)
        } else {
            None
        };

        Ok(NewsRow {
            category: label.to_string(),
            title: item.title,
            ctime_raw: item.ctime,
            ctime,
            url: item.url,
            wapurl: item.wapurl,
            media_name: item.media_name,
            keywords: item.keywords,
            intro: item.intro,
            content,
        })
    }
}
