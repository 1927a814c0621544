//! Field extraction for a single profile page.
//!
//! Everything here is a best-effort heuristic over loosely structured markup:
//! a missing heading degrades to a placeholder, an unrecognized follower count
//! or an absent platform link degrades to an empty string. Nothing in this
//! module fails.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use talentdb_core::{ProfileCandidate, ProfileRecord};

use crate::followers::recognize_follower_count;
use crate::html::stripped_text;
use crate::nearest_text::NearestTextAfter;

/// Name used when the page has no `<h1>`.
pub const NAME_PLACEHOLDER: &str = "Unknown";

/// Paragraphs joined into the bio.
const MAX_BIO_PARAGRAPHS: usize = 5;

/// Case-insensitive markers of social call-to-action lines next to the bio.
const BIO_NOISE_MARKERS: [&str; 4] = ["TIKTOK", "INSTAGRAM", "FOLLOWERS", "CONTACT"];

static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").expect("valid selector"));
static RICH_TEXT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".sqs-html-content").expect("valid selector"));
static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid selector"));
static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid selector"));
static BARE_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9,.]+[kKmM]?$").expect("valid regex"));

/// A social platform, identified by the domain its links point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub domain: &'static str,
}

impl Platform {
    pub const INSTAGRAM: Platform = Platform {
        domain: "instagram.com",
    };
    pub const TIKTOK: Platform = Platform {
        domain: "tiktok.com",
    };

    fn matches(self, href: &str) -> bool {
        href.to_ascii_lowercase().contains(self.domain)
    }
}

/// The link and follower count captured for one platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLink {
    /// Raw `href` of the chosen anchor.
    pub href: String,
    pub followers: String,
}

/// Builds a [`ProfileRecord`] from one profile page.
#[must_use]
pub fn extract_profile(html: &str, candidate: &ProfileCandidate) -> ProfileRecord {
    let document = Html::parse_document(html);
    let strategy = NearestTextAfter::default();
    let anchors: Vec<ElementRef<'_>> = document.select(&ANCHOR).collect();

    let instagram = extract_social(&anchors, Platform::INSTAGRAM, &strategy);
    let tiktok = extract_social(&anchors, Platform::TIKTOK, &strategy);

    ProfileRecord {
        name: extract_name(&document),
        page_url: candidate.url.clone(),
        image_url: candidate.preview_image_url.clone(),
        bio: extract_bio(&document),
        instagram_ref: instagram.href,
        instagram_followers: instagram.followers,
        tiktok_ref: tiktok.href,
        tiktok_followers: tiktok.followers,
    }
}

/// Stripped text of the first `<h1>`, or [`NAME_PLACEHOLDER`].
pub(crate) fn extract_name(document: &Html) -> String {
    document
        .select(&H1)
        .next()
        .map_or_else(|| NAME_PLACEHOLDER.to_owned(), stripped_text)
}

/// Joins the first five bio-like paragraphs found in rich-text blocks.
pub(crate) fn extract_bio(document: &Html) -> String {
    let paragraphs: Vec<String> = document
        .select(&RICH_TEXT)
        .flat_map(|block| block.select(&PARAGRAPH))
        .map(stripped_text)
        .filter(|text| is_bio_paragraph(text))
        .take(MAX_BIO_PARAGRAPHS)
        .collect();
    paragraphs.join(" ")
}

/// Keeps non-empty paragraphs that are neither social call-to-action lines
/// nor a bare follower number.
pub(crate) fn is_bio_paragraph(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    let upper = text.to_uppercase();
    if BIO_NOISE_MARKERS.iter().any(|marker| upper.contains(marker)) {
        return false;
    }
    !BARE_COUNT_RE.is_match(text)
}

/// Picks the link and follower count for `platform`.
///
/// The first matching anchor with a recognizable count nearby wins, and later
/// anchors are ignored once a count is attached. If no anchor has a count, the
/// first matching anchor's `href` is kept with an empty count.
pub(crate) fn extract_social(
    anchors: &[ElementRef<'_>],
    platform: Platform,
    strategy: &NearestTextAfter,
) -> SocialLink {
    let mut link = SocialLink::default();

    for anchor in anchors {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !platform.matches(href) {
            continue;
        }

        if let Some(followers) = strategy.find(*anchor, recognize_follower_count) {
            return SocialLink {
                href: href.to_owned(),
                followers,
            };
        }
        if link.href.is_empty() {
            link.href = href.to_owned();
        }
    }

    link
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
