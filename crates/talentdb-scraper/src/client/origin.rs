//! URL parsing shared by the listing collector.

use reqwest::Url;

use crate::error::ScraperError;

/// Parses `raw` as an absolute URL.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if `raw` is relative or malformed.
pub fn parse_absolute_url(raw: &str) -> Result<Url, ScraperError> {
    Url::parse(raw).map_err(|e| ScraperError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}
