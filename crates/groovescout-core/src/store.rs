//! The storage boundary.
//!
//! The persistent store (releases, identifiers, marketplace stats,
//! user listings) lives outside this core and is consumed read-only
//! through the [`Store`] trait: simple equality/range filters in,
//! loosely-typed rows out. [`MemoryStore`] implements the trait over
//! in-memory maps and can be loaded from a JSON dump in the join
//! shape the backing service produces; it backs the CLI and the test
//! suites.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::model::catalog::CatalogRow;
use crate::model::identifier::ReleaseIdentifier;
use crate::model::listing::{ListingStats, UserListing};
use crate::model::related::zero_or_one;

/// Read-only access to the release store.
///
/// Every method is a single request/response fetch; retry and timeout
/// policy belong to the implementation, not to callers.
#[async_trait]
pub trait Store: Send + Sync {
    /// Fetch a bounded window of catalog rows, newest first, optionally
    /// filtered by exact genre.
    async fn catalog_window(&self, limit: usize, genre: Option<&str>) -> Result<Vec<CatalogRow>>;

    /// Fetch a single catalog row by id.
    async fn catalog_row(&self, r_id: i64) -> Result<Option<CatalogRow>>;

    /// Fetch the zero-or-one identifier for a row and external source.
    async fn identifier(&self, r_id: i64, source: &str) -> Result<Option<ReleaseIdentifier>>;

    /// Fetch the zero-or-one marketplace snapshot for a row.
    async fn listing_stats(&self, r_id: i64) -> Result<Option<ListingStats>>;

    /// Fetch a bounded window of user listings, newest first.
    async fn user_listings(&self, limit: usize) -> Result<Vec<UserListing>>;
}

/// A catalog row together with its joined sub-records, as produced by
/// the backing service. Sub-records may arrive as an object or a
/// single-element array depending on the join shape; both normalize
/// to `Option` here and nowhere else.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    #[serde(flatten)]
    pub row: CatalogRow,

    #[serde(
        default,
        alias = "release_identifiers",
        deserialize_with = "zero_or_one"
    )]
    pub identifier: Option<ReleaseIdentifier>,

    #[serde(
        default,
        alias = "marketplace_listings",
        deserialize_with = "zero_or_one"
    )]
    pub listing: Option<ListingStats>,
}

/// Top-level shape of a catalog dump file.
#[derive(Debug, Deserialize)]
struct CatalogDump {
    releases: Vec<CatalogRecord>,

    #[serde(default)]
    user_listings: Vec<UserListing>,
}

/// In-memory [`Store`] implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<CatalogRow>,
    identifiers: HashMap<i64, ReleaseIdentifier>,
    listings: HashMap<i64, ListingStats>,
    user_listings: Vec<UserListing>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a JSON catalog dump.
    pub fn from_json(json: &str) -> Result<Self> {
        let dump: CatalogDump = serde_json::from_str(json)?;
        let mut store = Self::new();
        for record in dump.releases {
            let r_id = record.row.r_id;
            store.rows.push(record.row);
            if let Some(identifier) = record.identifier {
                store.identifiers.insert(r_id, identifier);
            }
            if let Some(listing) = record.listing {
                store.listings.insert(r_id, listing);
            }
        }
        store.user_listings = dump.user_listings;
        Ok(store)
    }

    pub fn push_row(&mut self, row: CatalogRow) {
        self.rows.push(row);
    }

    pub fn insert_identifier(&mut self, r_id: i64, identifier: ReleaseIdentifier) {
        self.identifiers.insert(r_id, identifier);
    }

    pub fn insert_listing(&mut self, r_id: i64, listing: ListingStats) {
        self.listings.insert(r_id, listing);
    }

    pub fn push_user_listing(&mut self, listing: UserListing) {
        self.user_listings.push(listing);
    }

    #[must_use]
    pub fn catalog_len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn user_listing_len(&self) -> usize {
        self.user_listings.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn catalog_window(&self, limit: usize, genre: Option<&str>) -> Result<Vec<CatalogRow>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| match genre {
                Some(g) => row.genre.as_deref() == Some(g),
                None => true,
            })
            .take(limit)
            .cloned()
            .collect())
    }

    async fn catalog_row(&self, r_id: i64) -> Result<Option<CatalogRow>> {
        Ok(self.rows.iter().find(|row| row.r_id == r_id).cloned())
    }

    async fn identifier(&self, r_id: i64, source: &str) -> Result<Option<ReleaseIdentifier>> {
        Ok(self
            .identifiers
            .get(&r_id)
            .filter(|identifier| identifier.source == source)
            .cloned())
    }

    async fn listing_stats(&self, r_id: i64) -> Result<Option<ListingStats>> {
        Ok(self.listings.get(&r_id).cloned())
    }

    async fn user_listings(&self, limit: usize) -> Result<Vec<UserListing>> {
        Ok(self.user_listings.iter().take(limit).cloned().collect())
    }
}
