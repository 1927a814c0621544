use std::path::PathBuf;

use uuid::Uuid;

/// Runtime settings for the scraper and the SQL generator.
///
/// Every field has a default matching the directory site the tool was built
/// against, so an empty environment produces a working configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Origin every profile link must share, e.g. `"https://www.liquorice.co.nz"`.
    pub base_url: String,
    /// Directory page linking to the individual profiles.
    pub listing_url: String,
    /// Constant `user_id` written into every generated row.
    pub owner_id: Uuid,
    /// Destination table, schema-qualified.
    pub table: String,
    /// CSV file written by `scrape` and read by `sql`.
    pub csv_path: PathBuf,
    pub log_level: String,
    pub scraper_user_agent: String,
    /// Timeout applied to each profile fetch. The listing fetch has none.
    pub scraper_request_timeout_secs: u64,
    /// Constant pause after every profile attempt, success or not.
    pub scraper_inter_request_delay_ms: u64,
}
