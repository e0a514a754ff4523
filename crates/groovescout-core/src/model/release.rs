use serde::{Deserialize, Serialize};

/// The fully reconciled, display-ready release shape returned by
/// search and detail queries.
///
/// Constructed fresh per query by the reconciler; never persisted.
/// Every field has a defined default when its source is absent, so
/// consumers never see a half-populated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRelease {
    /// Either a catalog row id in decimal, or an `ml-` synthetic id
    /// for a user listing. The two spaces never overlap.
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: Option<f64>,
    pub currency: String,
    pub image_url: Option<String>,
    pub external_url: Option<String>,
    pub external_source: String,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub record_label: Option<String>,
    pub format: Option<String>,
    pub is_available: bool,
    pub quantity: i64,
}
