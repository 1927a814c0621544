//! Small DOM text helpers over `scraper`.

use scraper::ElementRef;

/// Concatenates the element's text nodes, each trimmed, with no separator.
///
/// `<p> Jane <b>Doe</b> </p>` yields `"JaneDoe"`; whitespace-only nodes are
/// dropped.
pub(crate) fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
