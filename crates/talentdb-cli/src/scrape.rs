//! `scrape` command handler.

use std::path::Path;

use talentdb_scraper::{scrape_profiles, write_records_csv_file, ScrapeSettings, TalentClient};

/// Scrapes every profile linked from the listing page and writes them to `path`.
///
/// Per-profile failures are logged and skipped inside the scraper; only a
/// listing failure or a CSV write failure ends the command with an error.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the listing page cannot be
/// fetched, or the CSV file cannot be written.
pub(crate) async fn run_scrape(
    config: &talentdb_core::AppConfig,
    path: &Path,
) -> anyhow::Result<()> {
    let client = TalentClient::new(
        &config.scraper_user_agent,
        config.scraper_request_timeout_secs,
    )
    .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;

    let settings = ScrapeSettings::from_app_config(config);
    let outcome = scrape_profiles(&client, &settings)
        .await
        .map_err(|e| anyhow::anyhow!("failed to scrape listing {}: {e}", settings.listing_url))?;

    write_records_csv_file(path, &outcome.records)?;

    tracing::info!(
        records = outcome.summary.scraped,
        failed = outcome.summary.failed,
        candidates = outcome.summary.candidates,
        path = %path.display(),
        "scrape complete"
    );
    println!(
        "scraped {} profiles ({} failed); saved to {}",
        outcome.summary.scraped,
        outcome.summary.failed,
        path.display()
    );

    Ok(())
}
