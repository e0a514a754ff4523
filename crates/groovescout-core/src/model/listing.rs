use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate marketplace snapshot for a catalog row.
///
/// Zero or one per row; rows with nothing for sale at ingestion time
/// have no snapshot at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingStats {
    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub is_available: Option<bool>,

    /// Number of copies currently for sale.
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl ListingStats {
    #[must_use]
    pub fn new() -> Self {
        Self {
            price: None,
            currency: None,
            is_available: None,
            quantity: None,
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

impl Default for ListingStats {
    fn default() -> Self {
        Self::new()
    }
}

/// An independently submitted sale record, not tied to a catalog row.
///
/// User listings lack artist, genre, and year; only the free-text name
/// participates in search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserListing {
    pub name: String,

    #[serde(default)]
    pub external_url: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,

    pub created_at: DateTime<Utc>,
}

impl UserListing {
    /// Synthesize the stable id used for this listing in search
    /// results: `ml-<created_at>-<external_url>`.
    ///
    /// Catalog ids are bare decimal row ids, so the `ml-` prefix keeps
    /// the two id spaces disjoint.
    #[must_use]
    pub fn synthetic_id(&self) -> String {
        format!(
            "ml-{}-{}",
            self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.external_url.as_deref().unwrap_or_default()
        )
    }
}
