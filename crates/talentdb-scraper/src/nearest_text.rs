//! "Nearest text after" search used to pair a social link with the follower
//! count displayed next to it.
//!
//! Directory pages render follower counts either as a bare text node right
//! after the link (`<a>IG</a> 12.3k`) or as a sibling block of the link's
//! wrapper (`<p><a>IG</a></p><p>12.3k</p>`). Both layouts are covered here so
//! call sites only supply the recognizer.

use scraper::{ElementRef, Node};

use crate::html::stripped_text;

/// Extra condition that ends the sibling walk when it returns `true` for a
/// sibling's text.
pub type StopPredicate = fn(&str) -> bool;

/// Default sibling-text length past which the walk assumes it has left the
/// link's region.
pub const DEFAULT_MAX_SIBLING_CHARS: usize = 20;

#[derive(Debug, Clone)]
pub struct NearestTextAfter {
    max_sibling_chars: usize,
    stop_predicates: Vec<StopPredicate>,
}

impl Default for NearestTextAfter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIBLING_CHARS)
    }
}

impl NearestTextAfter {
    #[must_use]
    pub fn new(max_sibling_chars: usize) -> Self {
        Self {
            max_sibling_chars,
            stop_predicates: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_stop_predicate(mut self, predicate: StopPredicate) -> Self {
        self.stop_predicates.push(predicate);
        self
    }

    /// Searches the text following `anchor` for the first value `recognize`
    /// accepts.
    ///
    /// 1. The anchor's immediate next sibling, if it is a text node.
    /// 2. The following siblings of the anchor's parent, in document order.
    ///    Elements contribute their stripped text, text nodes their trimmed
    ///    value. The walk stops at the first recognized value, or without a
    ///    match once a sibling's text is longer than the configured cutoff or
    ///    trips a stop predicate.
    pub fn find<F>(&self, anchor: ElementRef<'_>, recognize: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(found) = anchor
            .next_sibling()
            .and_then(|node| node.value().as_text().map(|t| recognize(t)))
            .flatten()
        {
            return Some(found);
        }

        let parent = anchor.parent()?;
        for sibling in parent.next_siblings() {
            let text = match sibling.value() {
                Node::Element(_) => {
                    ElementRef::wrap(sibling).map_or_else(String::new, stripped_text)
                }
                Node::Text(t) => t.trim().to_owned(),
                _ => continue,
            };

            if let Some(found) = recognize(&text) {
                return Some(found);
            }
            if self.should_stop(&text) {
                break;
            }
        }

        None
    }

    fn should_stop(&self, text: &str) -> bool {
        text.chars().count() > self.max_sibling_chars
            || self.stop_predicates.iter().any(|stop| stop(text))
    }
}

#[cfg(test)]
#[path = "nearest_text_test.rs"]
mod tests;
