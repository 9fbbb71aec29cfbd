//! Pagination cursor extraction.
//!
//! List responses carry a `links.next` URL such as
//! `https://app.orbit.love/api/v1/ws/members?items=10&page=3`. The cursor is
//! the `page` parameter of that URL.

/// The page number of the next page, or `None` when there are no further pages.
pub type PageCursor = Option<u32>;

/// Extracts the next page number from a pagination link.
///
/// Returns `None` when the link is absent, has no query string, or its
/// `page` parameter is missing, not a positive integer, or out of range.
///
/// ## Example
///
/// ```rust
/// use orbit_members::types::next_page_from_url;
///
/// let next = next_page_from_url(Some("https://app.orbit.love/api/v1/ws/members?items=10&page=3"));
/// assert_eq!(next, Some(3));
/// assert_eq!(next_page_from_url(None), None);
/// assert_eq!(next_page_from_url(Some("/members?page=abc")), None);
/// ```
pub fn next_page_from_url(url: Option<&str>) -> PageCursor {
    let (_, query) = url?.split_once('?')?;
    let query = query.split_once('#').map_or(query, |(query, _)| query);

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.trim().parse::<u32>().ok())
        .filter(|page| *page > 0)
}
