//! In-page anchor scrolling

/// Element id an in-page link should scroll to
///
/// Only `#something` hrefs qualify, and their clicks are always taken over,
/// even when no element has that id. A bare `#` and external links keep the
/// browser's default behavior.
///
/// ```
/// # use leadpage::core::scroll::anchor_target;
/// assert_eq!(anchor_target("#descarga"), Some("descarga"));
/// assert_eq!(anchor_target("#"), None);
/// assert_eq!(anchor_target("https://example.com/#x"), None);
/// ```
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#faq"), Some("faq"));
        assert_eq!(anchor_target("#a"), Some("a"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/faq"), None);
        assert_eq!(anchor_target("page#faq"), None);
    }

    #[test]
    fn test_anchor_without_target_is_still_in_page() {
        // No element needs to exist for the link to stay on the page.
        assert_eq!(anchor_target("#no-such-section"), Some("no-such-section"));
    }
}
