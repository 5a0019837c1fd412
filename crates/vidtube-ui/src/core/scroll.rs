//! Infinite scroll trigger.

/// Whether the sentinel becoming visible should request another page.
///
/// `busy` is the caller's own in-flight flag; without one, repeated
/// intersections may request the same page more than once.
#[must_use]
pub const fn should_fetch_more(intersecting: bool, has_next_page: bool, busy: bool) -> bool {
    intersecting && has_next_page && !busy
}

/// Next page to request after `loaded` pages.
#[must_use]
pub const fn next_page(loaded: u32) -> u32 {
    loaded.saturating_add(1)
}
