use serde::{Deserialize, Serialize};

/// Column order of the tabular file shared by the scraper and the SQL generator.
pub const CSV_HEADERS: [&str; 8] = [
    "Name",
    "Page URL",
    "Image URL",
    "Bio",
    "Instagram",
    "Instagram Followers",
    "TikTok",
    "TikTok Followers",
];

/// A profile link discovered on the listing page, paired with its thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCandidate {
    /// Absolute profile URL; unique within one listing.
    pub url: String,
    /// Preview image from the listing tile, protocol-relative URLs already
    /// upgraded to `https:`.
    pub preview_image_url: String,
}

/// One scraped profile, exactly as it is written to and read from the CSV.
///
/// Field order matches [`CSV_HEADERS`]. Follower counts stay as the displayed
/// text (`"12.3k"`, `"12,345"`); social refs are the raw `href` captured on the
/// page and may be full URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Page URL")]
    pub page_url: String,
    #[serde(rename = "Image URL")]
    pub image_url: String,
    #[serde(rename = "Bio")]
    pub bio: String,
    #[serde(rename = "Instagram")]
    pub instagram_ref: String,
    #[serde(rename = "Instagram Followers")]
    pub instagram_followers: String,
    #[serde(rename = "TikTok")]
    pub tiktok_ref: String,
    #[serde(rename = "TikTok Followers")]
    pub tiktok_followers: String,
}
