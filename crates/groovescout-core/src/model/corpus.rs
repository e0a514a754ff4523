use serde::{Deserialize, Serialize};

use crate::model::catalog::CatalogRow;
use crate::model::listing::UserListing;
use crate::reconcile::{UNKNOWN_ARTIST, UNKNOWN_TITLE};

/// The minimal projection of a record that the fuzzy matcher indexes.
///
/// One entry per catalog row, plus one per user listing with a
/// non-empty name. User-listing entries carry an empty artist; the
/// matcher scores them on title alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub user_listing: bool,
}

impl CorpusEntry {
    /// Project a catalog row for indexing.
    ///
    /// Title and artist fall back to the reconciler's literal defaults
    /// so the matcher never scores against an empty field.
    #[must_use]
    pub fn from_catalog(row: &CatalogRow) -> Self {
        Self {
            id: row.r_id.to_string(),
            title: non_empty(row.title.as_deref()).unwrap_or(UNKNOWN_TITLE).to_string(),
            artist: non_empty(row.artist.as_deref())
                .unwrap_or(UNKNOWN_ARTIST)
                .to_string(),
            user_listing: false,
        }
    }

    /// Project a user listing for indexing. Callers skip listings with
    /// an empty name before getting here.
    #[must_use]
    pub fn from_user_listing(listing: &UserListing) -> Self {
        Self {
            id: listing.synthetic_id(),
            title: listing.name.trim().to_string(),
            artist: String::new(),
            user_listing: true,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
