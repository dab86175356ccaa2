//! # Sina Rolling News
//!
//! Crawls the Sina rolling-news API into a [`NewsTable`], optionally with the
//! full text of every article scraped from its page.
//!
//! ## Architecture
//!
//! 1. **Planning**: [`PagePlan`] turns a page range or item count into
//!    `{page → items}` with at most 50 items per page.
//! 2. **Listing**: [`scrapers::listing`] fetches each page through an uncached
//!    [`Downloader`] and builds one [`NewsRow`] per item.
//! 3. **Articles**: [`scrapers::article`] fetches article pages through a
//!    disk-cached [`Downloader`] and extracts the body text.
//!
//! Everything runs sequentially: one request is finished before the next
//! starts.
//!
//! ## Usage
//!
//! ```no_run
//! use sina_rolling_news::{CrawlerConfig, SinaNewsCrawler};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let crawler = SinaNewsCrawler::from_config(&CrawlerConfig::default())?;
//! let table = crawler.get_rolling_news_bypage(1, 3, false, Some("Finance")).await?;
//! println!("{table}");
//! # Ok(())
//! # }
//! ```

pub mod categories;
pub mod config;
pub mod crawler;
pub mod downloader;
pub mod error;
pub mod models;
pub mod pagination;
pub mod scrapers;
pub mod utils;

#[cfg(test)]
mod testing;

pub use categories::Category;
pub use config::CrawlerConfig;
pub use crawler::SinaNewsCrawler;
pub use downloader::{Cache, DiskCache, Downloader, HttpTransport, Transport};
pub use error::{ConfigError, CrawlerError, ExtractError, FetchError, Result};
pub use models::{NewsRow, NewsTable};
pub use pagination::{MAX_PER_PAGE, PagePlan};
