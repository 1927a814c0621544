//! HTTP client for the talent directory's listing and profile pages.

mod origin;

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

pub use origin::parse_absolute_url;

/// Fetches HTML pages with a fixed `User-Agent`.
///
/// Makes exactly one attempt per page. Non-2xx responses come back as
/// [`ScraperError::UnexpectedStatus`]; the caller decides whether that is
/// fatal (listing) or skippable (profile).
pub struct TalentClient {
    pub(crate) client: Client,
    /// Per-request timeout for profile pages.
    pub(crate) profile_timeout: Duration,
}

impl TalentClient {
    /// Creates a `TalentClient` with the given `User-Agent` and profile timeout.
    ///
    /// The listing fetch carries no timeout of its own.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(user_agent: &str, profile_timeout_secs: u64) -> Result<Self, ScraperError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            client,
            profile_timeout: Duration::from_secs(profile_timeout_secs),
        })
    }

    /// Fetches the listing page body.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx status.
    /// - [`ScraperError::Http`] for network or TLS failures.
    pub async fn fetch_listing(&self, url: &str) -> Result<String, ScraperError> {
        self.get_html(url, None).await
    }

    /// Fetches one profile page body, bounded by the profile timeout.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx status.
    /// - [`ScraperError::Http`] for network failures, including the timeout.
    pub async fn fetch_profile(&self, url: &str) -> Result<String, ScraperError> {
        self.get_html(url, Some(self.profile_timeout)).await
    }

    async fn get_html(&self, url: &str, timeout: Option<Duration>) -> Result<String, ScraperError> {
        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml");
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
