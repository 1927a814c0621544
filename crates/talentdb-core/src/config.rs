use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_BASE_URL: &str = "https://www.liquorice.co.nz";
const DEFAULT_LISTING_URL: &str = "https://www.liquorice.co.nz/influencers-nz";
const DEFAULT_OWNER_ID: &str = "eff94470-6759-4490-9c94-8277546e8ea9";
const DEFAULT_TABLE: &str = "public.talents";
const DEFAULT_CSV_PATH: &str = "influencers_data.csv";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        validate_http_url(&raw).map_err(|reason| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason,
        })?;
        Ok(raw)
    };

    let base_url = parse_url("TALENTDB_BASE_URL", DEFAULT_BASE_URL)?;
    let listing_url = parse_url("TALENTDB_LISTING_URL", DEFAULT_LISTING_URL)?;

    let owner_raw = or_default("TALENTDB_OWNER_ID", DEFAULT_OWNER_ID);
    let owner_id = uuid::Uuid::parse_str(owner_raw.trim()).map_err(|e| {
        ConfigError::InvalidEnvVar {
            var: "TALENTDB_OWNER_ID".to_string(),
            reason: e.to_string(),
        }
    })?;

    let table = or_default("TALENTDB_TABLE", DEFAULT_TABLE);
    if table.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "TALENTDB_TABLE".to_string(),
            reason: "table name must be non-empty".to_string(),
        });
    }

    let csv_path = PathBuf::from(or_default("TALENTDB_CSV_PATH", DEFAULT_CSV_PATH));
    let log_level = or_default("TALENTDB_LOG_LEVEL", "info");
    let scraper_user_agent = or_default("TALENTDB_SCRAPER_USER_AGENT", DEFAULT_USER_AGENT);
    let scraper_request_timeout_secs = parse_u64("TALENTDB_SCRAPER_REQUEST_TIMEOUT_SECS", "10")?;
    let scraper_inter_request_delay_ms =
        parse_u64("TALENTDB_SCRAPER_INTER_REQUEST_DELAY_MS", "500")?;

    Ok(AppConfig {
        base_url,
        listing_url,
        owner_id,
        table,
        csv_path,
        log_level,
        scraper_user_agent,
        scraper_request_timeout_secs,
        scraper_inter_request_delay_ms,
    })
}

/// Accepts absolute `http`/`https` URLs with a host.
fn validate_http_url(raw: &str) -> Result<(), String> {
    let url = url::Url::parse(raw).map_err(|e| format!("\"{raw}\" is not a valid URL: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme \"{}\"", url.scheme()));
    }
    if url.host_str().filter(|h| !h.is_empty()).is_none() {
        return Err(format!("\"{raw}\" has no host"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
