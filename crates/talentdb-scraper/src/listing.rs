//! Profile link discovery on the directory listing page.

use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use talentdb_core::ProfileCandidate;

use crate::client::parse_absolute_url;
use crate::error::ScraperError;

/// Same-origin paths that are never profiles.
const NON_PROFILE_PATHS: [&str; 6] = [
    "",
    "/",
    "/influencers-nz",
    "/contact",
    "/who-are-we",
    "/how-influencer-marketing-works",
];

/// Landmark tags whose links are site chrome, not profile tiles.
const CHROME_TAGS: [&str; 3] = ["header", "footer", "nav"];

/// Landmark ids used by the directory theme for the same regions.
const CHROME_IDS: [&str; 3] = ["header", "footer", "mobileNav"];

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid selector"));
static IMG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").expect("valid selector"));

/// Collects profile candidates from the listing page.
///
/// A link survives when it resolves to the same origin as `base_url`, is not a
/// known non-profile path or a `mailto:`/`tel:` link, sits outside the
/// header/footer/navigation, and wraps an `<img>` with a usable source. Tiles
/// without a thumbnail are dropped.
///
/// Candidates keep first-seen order; a repeated URL keeps its position and
/// takes the later image.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if `base_url` is not an absolute URL.
pub fn collect_candidates(
    html: &str,
    base_url: &str,
) -> Result<Vec<ProfileCandidate>, ScraperError> {
    let base = parse_absolute_url(base_url)?;
    let origin = base.origin();
    let origin_prefix = origin.ascii_serialization();

    let document = Html::parse_document(html);
    let mut candidates: Vec<ProfileCandidate> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for anchor in document.select(&ANCHOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if href.contains("mailto:") || href.contains("tel:") {
            continue;
        }

        let Ok(mut resolved) = base.join(href) else {
            tracing::debug!(href, "skipping unresolvable link");
            continue;
        };
        if resolved.origin() != origin {
            continue;
        }
        // A bare `#` points at the page itself.
        if resolved.fragment() == Some("") {
            resolved.set_fragment(None);
        }

        let url = resolved.to_string();
        let path = url.strip_prefix(&origin_prefix).unwrap_or(resolved.path());
        if NON_PROFILE_PATHS.contains(&path) {
            continue;
        }

        if is_in_site_chrome(anchor) {
            continue;
        }

        let Some(image) = preview_image(anchor) else {
            continue;
        };

        if let Some(&idx) = positions.get(&url) {
            candidates[idx].preview_image_url = image;
        } else {
            positions.insert(url.clone(), candidates.len());
            candidates.push(ProfileCandidate {
                url,
                preview_image_url: image,
            });
        }
    }

    Ok(candidates)
}

fn is_in_site_chrome(anchor: ElementRef<'_>) -> bool {
    anchor
        .ancestors()
        .filter_map(|node| node.value().as_element())
        .any(|el| {
            CHROME_TAGS.contains(&el.name()) || el.id().is_some_and(|id| CHROME_IDS.contains(&id))
        })
}

/// First descendant image source, preferring the lazy-load `data-src`.
fn preview_image(anchor: ElementRef<'_>) -> Option<String> {
    let img = anchor.select(&IMG).next()?;
    let src = [img.value().attr("data-src"), img.value().attr("src")]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())?;
    Some(normalize_protocol_relative(src))
}

/// Upgrades `//host/path` to `https://host/path`.
pub(crate) fn normalize_protocol_relative(src: &str) -> String {
    if src.starts_with("//") {
        format!("https:{src}")
    } else {
        src.to_owned()
    }
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;
