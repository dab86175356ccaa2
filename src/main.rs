//! # Sina Rolling News CLI
//!
//! Fetches rolling news from Sina and prints the resulting table to stdout as
//! tab-separated text. Logs go to stderr.
//!
//! ```sh
//! RUST_LOG=debug sina_rolling_news by-count --count 120 --category Finance
//! ```

use clap::Parser;
use sina_rolling_news::{CrawlerConfig, SinaNewsCrawler};
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let base = match &args.config {
        Some(path) => CrawlerConfig::from_yaml_file(path)?,
        None => CrawlerConfig::default(),
    };
    let config = args.apply_overrides(base);
    let crawler = SinaNewsCrawler::from_config(&config)?;

    let result = match &args.command {
        Command::ByPage {
            from,
            to,
            filter,
            no_content,
        } => crawler
            .get_rolling_news_bypage(*from, *to, !no_content, filter.category.as_deref())
            .await
            .map(|table| print!("{table}")),
        Command::ByCount { count, filter } => crawler
            .get_rolling_news_bycount(*count, true, filter.category.as_deref())
            .await
            .map(|table| print!("{table}")),
        Command::ByCategories {
            requests,
            no_content,
        } => {
            let requests: Vec<(&str, u32)> = requests
                .iter()
                .map(|(label, count)| (label.as_str(), *count))
                .collect();
            crawler
                .get_rolling_news_by_categories(&requests, !no_content)
                .await
                .map(|table| print!("{table}"))
        }
        Command::Urls { count, filter } => crawler
            .get_rolling_news_urls(*count, filter.category.as_deref())
            .await
            .map(|urls| urls.iter().for_each(|url| println!("{url}"))),
    };

    if let Err(e) = result {
        error!(error = %e, "Crawl failed");
        return Err(e.into());
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}
