//! Medium feed fetcher.
//!
//! One call, one GET to the RSS-to-JSON proxy:
//!
//! ```text
//! GET {api_base_url}?rss_url=https://medium.com/feed/@{username}
//! ```
//!
//! The response's `items` are capped to the requested count and normalized
//! in source order. Failures are logged here and then handed back to the
//! caller, which decides whether to show the static fallback list. There is
//! no retry and no caching.

use crate::config::FeedConfig;
use crate::error::{FeedError, Result};
use crate::models::{FeedEnvelope, NormalizedArticle, RawFeedItem};
use crate::normalize::normalize_item;
use crate::utils::truncate_for_log;
use reqwest::Client;
use reqwest::header::ACCEPT;
use std::time::Instant;
use tracing::{error, info, instrument, warn};

/// Default number of articles shown on the resources page.
pub const DEFAULT_ARTICLE_COUNT: usize = 2;

/// Fetches and normalizes the latest articles for one Medium account.
#[derive(Debug, Clone)]
pub struct MediumFetcher {
    client: Client,
    config: FeedConfig,
}

impl MediumFetcher {
    /// Create a fetcher with a default HTTP client.
    ///
    /// The default client has no timeout; use [`MediumFetcher::with_client`]
    /// to apply one.
    pub fn new(config: FeedConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: FeedConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Fetch up to `count` articles, newest first as the feed orders them.
    ///
    /// # Errors
    ///
    /// - [`FeedError::MissingUsername`] / [`FeedError::InvalidBaseUrl`] before
    ///   any request is made
    /// - [`FeedError::Http`] / [`FeedError::Status`] when the proxy cannot be reached
    ///   or answers with a non-success status
    /// - [`FeedError::Decode`] when the body is not JSON
    ///
    /// A JSON body without an `items` array is not an error and yields an
    /// empty list.
    #[instrument(level = "info", skip(self))]
    pub async fn fetch_latest(&self, count: usize) -> Result<Vec<NormalizedArticle>> {
        let result = self.fetch_inner(count).await;
        if let Err(e) = &result {
            error!(error = %e, config_error = e.is_config(), "Error fetching Medium articles");
        }
        result
    }

    async fn fetch_inner(&self, count: usize) -> Result<Vec<NormalizedArticle>> {
        let url = self.config.request_url()?;
        let t0 = Instant::now();
        info!(url = %url, "Requesting Medium feed");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body).inspect_err(|e| {
            warn!(error = %e, body_preview = %truncate_for_log(&body, 200), "Feed proxy body is not JSON");
        })?;
        let envelope = FeedEnvelope::from_value(&value);

        if envelope.is_error() {
            warn!(
                proxy_message = envelope.message.as_deref().unwrap_or(""),
                "Feed proxy reported an error; treating as no content"
            );
        }

        let articles: Vec<NormalizedArticle> = envelope
            .items
            .into_iter()
            .take(count)
            .map(RawFeedItem::from_value)
            .map(|item| normalize_item(&item, &self.config))
            .collect();

        info!(
            count = articles.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched Medium articles"
        );
        Ok(articles)
    }
}
