//! Field reconciliation into the canonical release shape.
//!
//! Merges a catalog row with its optional identifier and marketplace
//! sub-records, applying a fixed precedence per field. The merge is
//! pure and total: any combination of present/absent sub-records
//! yields a complete [`CanonicalRelease`].

use crate::link;
use crate::model::catalog::CatalogRow;
use crate::model::identifier::{ReleaseIdentifier, DISCOGS_SOURCE};
use crate::model::listing::{ListingStats, UserListing};
use crate::model::release::CanonicalRelease;

/// Literal fallback when a catalog row has no title. Never rendered
/// as an empty string so text matching and display always have a
/// value to work with.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Literal fallback when a catalog row has no artist.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Currency assumed when the marketplace snapshot carries none.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Source label for releases backed by user listings rather than the
/// ingested catalog.
pub const USER_SOURCE: &str = "user";

/// Merge a catalog row with zero-or-one identifier and zero-or-one
/// marketplace snapshot.
///
/// Precedence, each field independent, first non-null wins:
///
/// - `price`: listing, then row, then none.
/// - `currency`: listing, then `"USD"`.
/// - `external_url`: the resolver's output for the identifier.
/// - `is_available`: listing, then `true` (optimistic).
/// - `quantity`: listing, then `0`.
/// - `title`/`artist`: row, then the literal unknown fallback.
/// - Remaining descriptive fields pass through from the row.
#[must_use]
pub fn reconcile(
    row: &CatalogRow,
    identifier: Option<&ReleaseIdentifier>,
    listing: Option<&ListingStats>,
) -> CanonicalRelease {
    CanonicalRelease {
        id: row.r_id.to_string(),
        title: text_or(row.title.as_deref(), UNKNOWN_TITLE),
        artist: text_or(row.artist.as_deref(), UNKNOWN_ARTIST),
        price: listing.and_then(|l| l.price).or(row.price),
        currency: listing
            .and_then(|l| l.currency.clone())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        image_url: row.image.clone(),
        external_url: link::resolve_release_url(identifier),
        external_source: DISCOGS_SOURCE.to_string(),
        genre: row.genre.clone(),
        release_year: row.release_year,
        record_label: row.record_label.clone(),
        format: row.format.clone(),
        is_available: listing.and_then(|l| l.is_available).unwrap_or(true),
        quantity: listing.and_then(|l| l.quantity).unwrap_or(0),
    }
}

/// Build the canonical shape for a user listing.
///
/// User listings arrive already complete for display: the name is the
/// title, the submitted URL passes through unresolved, and fields the
/// listing cannot carry (artist, genre, year) take their defaults.
#[must_use]
pub fn reconcile_user_listing(listing: &UserListing) -> CanonicalRelease {
    CanonicalRelease {
        id: listing.synthetic_id(),
        title: text_or(Some(&listing.name), UNKNOWN_TITLE),
        artist: UNKNOWN_ARTIST.to_string(),
        price: listing.price,
        currency: DEFAULT_CURRENCY.to_string(),
        image_url: None,
        external_url: listing.external_url.clone(),
        external_source: USER_SOURCE.to_string(),
        genre: None,
        release_year: None,
        record_label: None,
        format: None,
        is_available: true,
        quantity: 1,
    }
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_row() -> CatalogRow {
        CatalogRow::new(42)
            .with_title("Bleach")
            .with_artist("Nirvana")
            .with_genre("Rock")
            .with_price(20.0)
            .with_release_year(1989)
    }

    #[test]
    fn test_listing_price_wins_over_row_price() {
        let listing = ListingStats::new().with_price(15.0);
        let release = reconcile(&sample_row(), None, Some(&listing));
        assert_eq!(release.price, Some(15.0));
    }

    #[test]
    fn test_row_price_used_when_listing_absent() {
        let release = reconcile(&sample_row(), None, None);
        assert_eq!(release.price, Some(20.0));
    }

    #[test]
    fn test_row_price_used_when_listing_price_null() {
        let listing = ListingStats::new().with_quantity(2);
        let release = reconcile(&sample_row(), None, Some(&listing));
        assert_eq!(release.price, Some(20.0));
        assert_eq!(release.quantity, 2);
    }

    #[test]
    fn test_defaults_with_everything_absent() {
        let release = reconcile(&CatalogRow::new(1), None, None);
        assert_eq!(release.id, "1");
        assert_eq!(release.title, UNKNOWN_TITLE);
        assert_eq!(release.artist, UNKNOWN_ARTIST);
        assert!(release.price.is_none());
        assert_eq!(release.currency, DEFAULT_CURRENCY);
        assert!(release.image_url.is_none());
        assert!(release.external_url.is_none());
        assert!(release.is_available);
        assert_eq!(release.quantity, 0);
    }

    #[test]
    fn test_listing_availability_overrides_default() {
        let listing = ListingStats {
            price: None,
            currency: Some("GBP".to_string()),
            is_available: Some(false),
            quantity: Some(0),
        };
        let release = reconcile(&sample_row(), None, Some(&listing));
        assert!(!release.is_available);
        assert_eq!(release.currency, "GBP");
    }

    #[test]
    fn test_external_url_comes_from_resolver() {
        let identifier = ReleaseIdentifier::discogs()
            .with_external_url("https://api.discogs.com/releases/42");
        let release = reconcile(&sample_row(), Some(&identifier), None);
        assert_eq!(
            release.external_url.as_deref(),
            Some("https://www.discogs.com/release/42")
        );
        assert_eq!(release.external_source, DISCOGS_SOURCE);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let row = sample_row();
        let identifier = ReleaseIdentifier::discogs().with_external_id("42");
        let listing = ListingStats::new().with_price(15.0).with_quantity(3);

        let first = reconcile(&row, Some(&identifier), Some(&listing));
        let second = reconcile(&row, Some(&identifier), Some(&listing));
        assert_eq!(first, second);
    }

    #[test]
    fn test_reconcile_user_listing() {
        let listing = UserListing {
            name: "Nevermind LP, near mint".to_string(),
            external_url: Some("https://example.com/listing/1".to_string()),
            price: Some(25.0),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        };
        let release = reconcile_user_listing(&listing);
        assert!(release.id.starts_with("ml-"));
        assert_eq!(release.title, "Nevermind LP, near mint");
        assert_eq!(release.artist, UNKNOWN_ARTIST);
        assert_eq!(release.price, Some(25.0));
        assert_eq!(
            release.external_url.as_deref(),
            Some("https://example.com/listing/1")
        );
        assert_eq!(release.external_source, USER_SOURCE);
        assert_eq!(release.quantity, 1);
    }
}
