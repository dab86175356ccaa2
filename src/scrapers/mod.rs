//! Scrapers for the Sina rolling-news feed.
//!
//! Collection happens in two phases:
//!
//! 1. **Listing**: [`listing`] calls the rolling-news JSON API page by page and
//!    builds one row per item.
//! 2. **Article**: when content is requested, [`article`] downloads each item's
//!    page (through the disk cache) and extracts the body text.
//!
//! | Phase | Module | Downloader | Failure |
//! |-------|--------|------------|---------|
//! | Listing | [`listing`] | uncached | aborts the fetch |
//! | Article | [`article`] | disk-cached | empty content for that item |

pub mod article;
pub mod listing;
