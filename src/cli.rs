//! Command-line interface definitions.
//!
//! Global options may also come from environment variables or a YAML config
//! file; flags win over the file, the file wins over built-in defaults.

use sina_rolling_news::config::CrawlerConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Crawl the Sina rolling-news feed and print the rows as tab-separated text.
///
/// # Examples
///
/// ```sh
/// # First three pages of finance news, without article text
/// sina_rolling_news by-page --from 1 --to 4 --category Finance --no-content
///
/// # Latest 120 items (article text is always fetched)
/// sina_rolling_news by-count --count 120
///
/// # 3 finance and 3 stock items
/// sina_rolling_news by-categories Finance=3 Stocks=3
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a config.yaml file
    #[arg(short, long, env = "SINA_NEWS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for cached article pages
    #[arg(long, env = "SINA_NEWS_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Listing API URL template with {lid}, {num}, {page} and {r} placeholders
    #[arg(long, env = "SINA_NEWS_LISTING_TEMPLATE")]
    pub listing_url_template: Option<String>,

    /// User-Agent header sent with every request
    #[arg(long, env = "SINA_NEWS_USER_AGENT")]
    pub user_agent: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fetch pages FROM..TO (TO excluded), 50 items per page
    ByPage {
        #[arg(long, default_value_t = 1)]
        from: u32,
        #[arg(long)]
        to: u32,
        #[command(flatten)]
        filter: Filter,
        /// Skip article text
        #[arg(long)]
        no_content: bool,
    },
    /// Fetch the latest COUNT items with article text
    ByCount {
        #[arg(long, default_value_t = 50)]
        count: u32,
        #[command(flatten)]
        filter: Filter,
    },
    /// Fetch the latest items of several categories, given as LABEL=COUNT
    ByCategories {
        #[arg(required = true, value_parser = parse_category_count)]
        requests: Vec<(String, u32)>,
        /// Skip article text
        #[arg(long)]
        no_content: bool,
    },
    /// Print only the article URLs of the latest COUNT items
    Urls {
        #[arg(long, default_value_t = 50)]
        count: u32,
        #[command(flatten)]
        filter: Filter,
    },
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct Filter {
    /// Category label, e.g. Finance or 财经 (default: All)
    #[arg(long)]
    pub category: Option<String>,
}

fn parse_category_count(s: &str) -> Result<(String, u32), String> {
    let (label, count) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=COUNT, got '{s}'"))?;
    let count = count
        .parse::<u32>()
        .map_err(|e| format!("invalid count in '{s}': {e}"))?;
    Ok((label.to_string(), count))
}

impl Cli {
    /// Apply flag overrides on top of `base`.
    pub fn apply_overrides(&self, mut base: CrawlerConfig) -> CrawlerConfig {
        if let Some(dir) = &self.cache_dir {
            base.cache_dir = dir.clone();
        }
        if let Some(template) = &self.listing_url_template {
            base.listing_url_template = template.clone();
        }
        if let Some(agent) = &self.user_agent {
            base.user_agent = agent.clone();
        }
        base
    }
}
