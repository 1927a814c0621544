pub mod client;
pub mod error;
pub mod export;
pub mod followers;
mod html;
pub mod listing;
pub mod nearest_text;
pub mod profile;
pub mod run;

pub use client::TalentClient;
pub use error::ScraperError;
pub use export::{write_records_csv, write_records_csv_file};
pub use followers::recognize_follower_count;
pub use listing::collect_candidates;
pub use nearest_text::NearestTextAfter;
pub use profile::{extract_profile, Platform};
pub use run::{scrape_profiles, ScrapeOutcome, ScrapeSettings, ScrapeSummary};
