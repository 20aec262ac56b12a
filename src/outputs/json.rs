//! JSON output generation for the website.
//!
//! The site reads a single document:
//! ```text
//! json_output_dir/
//! └── articles.json
//! ```

use crate::models::ArticleFeed;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

pub const ARTICLES_FILENAME: &str = "articles.json";

/// Serialize an [`ArticleFeed`] as pretty-printed JSON.
pub fn feed_to_json(feed: &ArticleFeed) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(feed)
}

/// Write an [`ArticleFeed`] to `{json_output_dir}/articles.json`.
///
/// Creates the directory if needed. Returns the path written.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_feed(
    feed: &ArticleFeed,
    json_output_dir: &str,
) -> Result<String, Box<dyn Error>> {
    let json = feed_to_json(feed)?;

    if let Err(e) = fs::create_dir_all(json_output_dir).await {
        error!(error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = format!(
        "{}/{}",
        json_output_dir.trim_end_matches('/'),
        ARTICLES_FILENAME
    );

    info!(path = %output_json_filename, "Writing JSON");
    fs::write(&output_json_filename, json).await?;
    info!(path = %output_json_filename, articles = feed.articles.len(), "Wrote articles JSON");

    Ok(output_json_filename)
}
