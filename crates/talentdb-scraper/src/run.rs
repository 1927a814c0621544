//! Sequential scrape of the listing page and every profile it links to.

use std::time::Duration;

use talentdb_core::{AppConfig, ProfileRecord};

use crate::client::TalentClient;
use crate::error::ScraperError;
use crate::listing::collect_candidates;
use crate::profile::extract_profile;

/// Inputs for one scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    pub base_url: String,
    pub listing_url: String,
    /// Pause after every profile attempt, success or failure.
    pub inter_request_delay_ms: u64,
}

impl ScrapeSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            listing_url: config.listing_url.clone(),
            inter_request_delay_ms: config.scraper_inter_request_delay_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub candidates: usize,
    pub scraped: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub struct ScrapeOutcome {
    /// One record per successfully fetched profile, in listing order.
    pub records: Vec<ProfileRecord>,
    pub summary: ScrapeSummary,
}

/// Scrapes the listing page, then each discovered profile in listing order.
///
/// Profiles are fetched one at a time with a single attempt each. A failed
/// profile (network error, timeout, non-2xx status) is logged and skipped.
///
/// # Errors
///
/// Returns an error only when the listing page cannot be fetched or the base
/// URL is invalid; without the listing there is nothing to scrape.
pub async fn scrape_profiles(
    client: &TalentClient,
    settings: &ScrapeSettings,
) -> Result<ScrapeOutcome, ScraperError> {
    tracing::info!(url = %settings.listing_url, "fetching listing page");
    let listing_html = client.fetch_listing(&settings.listing_url).await?;
    let candidates = collect_candidates(&listing_html, &settings.base_url)?;

    let total = candidates.len();
    tracing::info!(profiles = total, "found profiles to process");

    let delay = Duration::from_millis(settings.inter_request_delay_ms);
    let mut records = Vec::with_capacity(total);
    let mut failed = 0usize;

    for (i, candidate) in candidates.iter().enumerate() {
        let index = i + 1;
        tracing::info!(index, total, url = %candidate.url, "scraping profile");

        match client.fetch_profile(&candidate.url).await {
            Ok(html) => records.push(extract_profile(&html, candidate)),
            Err(e) => {
                failed += 1;
                tracing::warn!(
                    url = %candidate.url,
                    error = %e,
                    "skipping profile: fetch failed"
                );
            }
        }

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    let summary = ScrapeSummary {
        candidates: total,
        scraped: records.len(),
        failed,
    };
    Ok(ScrapeOutcome { records, summary })
}
