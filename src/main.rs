//! # Garnet Insights
//!
//! Fetches the latest Medium articles for the Garnet Big Data account through
//! an RSS-to-JSON proxy, turns each post into a display-ready article card and
//! writes the result as JSON for the website's resources page.
//!
//! ## Usage
//!
//! ```sh
//! NEXT_PUBLIC_MEDIUM_USERNAME=garnetbigdata garnet_insights -j ./public/api
//! ```
//!
//! ## Pipeline
//!
//! 1. **Fetching**: one GET to the proxy for the configured handle
//! 2. **Sanitizing**: strip markup and photo credits from each description
//! 3. **Deriving**: publication date, reading time and card image
//! 4. **Output**: live articles, or the static fallback list if fetching failed
//!
//! An empty live feed is written as-is (`"source": "live"`, no articles) so
//! the site can show its "no content" state instead of the fallback.

use chrono::{SecondsFormat, Utc};
use clap::Parser;
use reqwest::Client;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod fallback;
mod fetcher;
mod fields;
mod models;
mod normalize;
mod outputs;
mod sanitize;
mod utils;

use cli::Cli;
use config::FeedConfig;
use fallback::fallback_articles;
use fetcher::MediumFetcher;
use models::{ArticleFeed, FeedSource};
use outputs::json;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // logs go to stderr so stdout stays clean JSON
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
    info!("garnet_insights starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // Early check: ensure JSON output dir is writable
    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    let config = FeedConfig::from_cli(&args);
    let fetcher = if args.timeout_secs == 0 {
        MediumFetcher::new(config)
    } else {
        let client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .build()?;
        MediumFetcher::with_client(config, client)
    };
    info!(
        username = fetcher.config().username().unwrap_or("<unset>"),
        count = args.count,
        "Fetching latest articles"
    );

    let feed = build_feed(&fetcher, args.count, !args.no_fallback).await?;

    match &args.json_output_dir {
        Some(dir) => {
            json::write_feed(&feed, dir).await?;
        }
        None => println!("{}", json::feed_to_json(&feed)?),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        source = ?feed.source,
        articles = feed.articles.len(),
        "Execution complete"
    );
    Ok(())
}

/// Fetch live articles, substituting the static list on failure when allowed.
#[instrument(level = "info", skip(fetcher))]
async fn build_feed(
    fetcher: &MediumFetcher,
    count: usize,
    allow_fallback: bool,
) -> Result<ArticleFeed, Box<dyn Error>> {
    let (source, articles) = match fetcher.fetch_latest(count).await {
        Ok(articles) => {
            if articles.is_empty() {
                info!("Feed has no articles");
            }
            (FeedSource::Live, articles)
        }
        Err(e) if allow_fallback => {
            warn!(error = %e, "Using static fallback articles");
            (FeedSource::Fallback, fallback_articles())
        }
        Err(e) => return Err(e.into()),
    };

    Ok(ArticleFeed {
        source,
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        articles,
    })
}
