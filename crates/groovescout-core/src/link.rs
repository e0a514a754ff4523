//! Discogs release URL resolution.
//!
//! Identifier rows arrive from an external ingestion process with
//! inconsistent shapes: a correct web URL, an API-only URL, a bare
//! numeric release id, or an API URL buried in a metadata blob. This
//! module derives one canonical, browsable URL from whatever is
//! present, and refuses to surface anything that does not match the
//! canonical pattern exactly. A malformed candidate is discarded
//! silently; an absent link is a normal, displayable state rather
//! than a fault.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::identifier::ReleaseIdentifier;

/// Canonical web URL prefix. The contract is bit-exact:
/// `https://www.discogs.com/release/<decimal-id>` with no query
/// string, no trailing slash, and no alternate host.
const RELEASE_URL_BASE: &str = "https://www.discogs.com/release/";

static API_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://api\.discogs\.com/releases/(\d+)").expect("valid regex")
});

static WEB_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://www\.discogs\.com/release/(\d+)").expect("valid regex")
});

static CANONICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://www\.discogs\.com/release/\d+$").expect("valid regex")
});

/// Derive the canonical release URL for an identifier, if any.
///
/// The fallback chain is evaluated in order, first success wins:
///
/// 1. An API-host `external_url` is rewritten to the web URL.
/// 2. An `external_url` already on the canonical pattern is accepted
///    (normalized to the bare release path).
/// 3. A bare `external_id` synthesizes the URL.
/// 4. An `api_url` embedded in the metadata blob synthesizes the URL.
///
/// Whatever the chain produces is validated against the canonical
/// pattern before being returned; a non-conforming candidate yields
/// `None` rather than leaking an unusable link.
pub fn resolve_release_url(identifier: Option<&ReleaseIdentifier>) -> Option<String> {
    let identifier = identifier?;
    let candidate = candidate_url(identifier)?;

    if CANONICAL_RE.is_match(&candidate) {
        Some(candidate)
    } else {
        log::debug!("discarding non-canonical release URL candidate: {candidate}");
        None
    }
}

fn candidate_url(identifier: &ReleaseIdentifier) -> Option<String> {
    if let Some(url) = identifier.external_url.as_deref() {
        if let Some(id) = capture_id(&API_URL_RE, url) {
            return Some(release_url(id));
        }
        if let Some(id) = capture_id(&WEB_URL_RE, url) {
            return Some(release_url(id));
        }
        // An unrecognized URL falls through to the remaining sources.
    }

    if let Some(id) = identifier.external_id.as_deref() {
        return Some(release_url(id.trim()));
    }

    if let Some(api_url) = identifier
        .metadata
        .as_ref()
        .and_then(|m| m.api_url.as_deref())
    {
        if let Some(id) = capture_id(&API_URL_RE, api_url) {
            return Some(release_url(id));
        }
    }

    None
}

fn capture_id<'a>(re: &Regex, url: &'a str) -> Option<&'a str> {
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn release_url(id: &str) -> String {
    format!("{RELEASE_URL_BASE}{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_rewrites_api_url() {
        let identifier = ReleaseIdentifier::discogs()
            .with_external_url("https://api.discogs.com/releases/12345");
        assert_eq!(
            resolve_release_url(Some(&identifier)).as_deref(),
            Some("https://www.discogs.com/release/12345")
        );
    }

    #[test]
    fn test_resolve_accepts_canonical_url() {
        let identifier = ReleaseIdentifier::discogs()
            .with_external_url("https://www.discogs.com/release/249504");
        assert_eq!(
            resolve_release_url(Some(&identifier)).as_deref(),
            Some("https://www.discogs.com/release/249504")
        );
    }

    #[test]
    fn test_resolve_strips_trailing_junk_from_web_url() {
        let identifier = ReleaseIdentifier::discogs()
            .with_external_url("https://www.discogs.com/release/249504-Daft-Punk-Homework");
        assert_eq!(
            resolve_release_url(Some(&identifier)).as_deref(),
            Some("https://www.discogs.com/release/249504")
        );
    }

    #[test]
    fn test_resolve_synthesizes_from_external_id() {
        let identifier = ReleaseIdentifier::discogs().with_external_id("777");
        assert_eq!(
            resolve_release_url(Some(&identifier)).as_deref(),
            Some("https://www.discogs.com/release/777")
        );
    }

    #[test]
    fn test_resolve_extracts_from_metadata_api_url() {
        let identifier =
            ReleaseIdentifier::discogs().with_api_url("https://api.discogs.com/releases/888");
        assert_eq!(
            resolve_release_url(Some(&identifier)).as_deref(),
            Some("https://www.discogs.com/release/888")
        );
    }

    #[test]
    fn test_resolve_none_identifier() {
        assert!(resolve_release_url(None).is_none());
    }

    #[test]
    fn test_resolve_empty_identifier() {
        let identifier = ReleaseIdentifier::discogs();
        assert!(resolve_release_url(Some(&identifier)).is_none());
    }

    #[test]
    fn test_resolve_rejects_non_numeric_external_id() {
        let identifier = ReleaseIdentifier::discogs().with_external_id("not-a-release-id");
        assert!(resolve_release_url(Some(&identifier)).is_none());
    }

    #[test]
    fn test_resolve_rejects_foreign_host() {
        let identifier = ReleaseIdentifier::discogs()
            .with_external_url("https://www.example.com/release/123");
        assert!(resolve_release_url(Some(&identifier)).is_none());
    }

    #[test]
    fn test_unrecognized_url_falls_through_to_external_id() {
        let identifier = ReleaseIdentifier::discogs()
            .with_external_url("https://shop.example.com/item/9")
            .with_external_id("42");
        assert_eq!(
            resolve_release_url(Some(&identifier)).as_deref(),
            Some("https://www.discogs.com/release/42")
        );
    }

    #[test]
    fn test_resolved_urls_always_match_canonical_pattern() {
        let identifiers = vec![
            ReleaseIdentifier::discogs().with_external_url("https://api.discogs.com/releases/1"),
            ReleaseIdentifier::discogs().with_external_url("https://www.discogs.com/release/2"),
            ReleaseIdentifier::discogs().with_external_id(" 3 "),
            ReleaseIdentifier::discogs().with_api_url("http://api.discogs.com/releases/4"),
        ];
        for identifier in identifiers {
            let url = resolve_release_url(Some(&identifier)).unwrap();
            assert!(CANONICAL_RE.is_match(&url), "non-canonical: {url}");
        }
    }
}
