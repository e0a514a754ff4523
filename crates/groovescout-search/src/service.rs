//! The search pipeline: fetch window, index, match, enrich, dedupe.
//!
//! Each query runs as one flow over a freshly fetched corpus; no index
//! or state is shared between queries. The catalog window fetch is
//! fatal on failure; the user-listing fetch fails open (the search
//! degrades to catalog-only); per-entry enrichment lookups fail open
//! per entry, degrading only that entry's fields to their defaults.
//! No step retries.

use std::collections::HashMap;

use futures::future::join_all;

use groovescout_core::dedupe::dedupe;
use groovescout_core::model::{
    CanonicalRelease, CatalogRow, CorpusEntry, UserListing, DISCOGS_SOURCE,
};
use groovescout_core::reconcile::{reconcile, reconcile_user_listing};
use groovescout_core::store::Store;
use groovescout_core::{Error, Result};

use crate::index::{ScoredHit, SearchIndex};

/// Catalog rows fetched per query. Search operates over this bounded
/// window, not the full catalog.
pub const DEFAULT_CATALOG_WINDOW: usize = 250;

/// User listings fetched per query.
pub const DEFAULT_LISTING_WINDOW: usize = 100;

/// Composes the store, the fuzzy index, and the reconciler into the
/// search and detail operations exposed to the presentation layer.
#[derive(Debug)]
pub struct SearchService<S> {
    store: S,
    catalog_window: usize,
    listing_window: usize,
}

impl<S: Store> SearchService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            catalog_window: DEFAULT_CATALOG_WINDOW,
            listing_window: DEFAULT_LISTING_WINDOW,
        }
    }

    /// Override the fetch windows (mainly for tests).
    #[must_use]
    pub fn with_windows(mut self, catalog: usize, listings: usize) -> Self {
        self.catalog_window = catalog;
        self.listing_window = listings;
        self
    }

    /// Fuzzy-search the catalog and user listings.
    ///
    /// Returns at most `limit` canonical releases, best match first,
    /// deduplicated on normalized (title, artist). A catalog window
    /// fetch failure fails the whole query; everything downstream
    /// degrades per entry instead of failing.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<CanonicalRelease>> {
        let rows = self
            .store
            .catalog_window(self.catalog_window, None)
            .await
            .map_err(|e| Error::Fetch(format!("catalog window: {e}")))?;

        let user_listings = match self.store.user_listings(self.listing_window).await {
            Ok(listings) => listings,
            Err(e) => {
                log::warn!("user listing fetch failed, searching catalog only: {e}");
                Vec::new()
            }
        };

        let rows_by_id: HashMap<String, &CatalogRow> =
            rows.iter().map(|row| (row.r_id.to_string(), row)).collect();
        let listings_by_id: HashMap<String, &UserListing> = user_listings
            .iter()
            .map(|listing| (listing.synthetic_id(), listing))
            .collect();

        let mut corpus: Vec<CorpusEntry> = rows.iter().map(CorpusEntry::from_catalog).collect();
        corpus.extend(
            user_listings
                .iter()
                .filter(|listing| !listing.name.trim().is_empty())
                .map(CorpusEntry::from_user_listing),
        );

        let index = SearchIndex::build(corpus);
        let hits: Vec<ScoredHit> = index.query(query).into_iter().take(limit).collect();

        log::debug!(
            "query matched {} of {} corpus entries (limit {})",
            hits.len(),
            index.len(),
            limit
        );

        let enriched = join_all(
            hits.iter()
                .map(|hit| self.enrich_hit(hit, &rows_by_id, &listings_by_id)),
        )
        .await;

        // Dedupe last: it can only shrink the ranked list, never
        // re-sort it.
        Ok(dedupe(enriched.into_iter().flatten().collect()))
    }

    /// Fetch and reconcile a single release.
    ///
    /// A row that exists but has no Discogs identifier is reported as
    /// not found for this source, distinct from a storage failure.
    pub async fn get_by_id(&self, r_id: i64) -> Result<CanonicalRelease> {
        let row = self
            .store
            .catalog_row(r_id)
            .await?
            .ok_or_else(|| Error::NotFound {
                entity: "release",
                id: r_id.to_string(),
            })?;

        let identifier = self
            .store
            .identifier(r_id, DISCOGS_SOURCE)
            .await?
            .ok_or_else(|| Error::NotFound {
                entity: "discogs release",
                id: r_id.to_string(),
            })?;

        let listing = match self.store.listing_stats(r_id).await {
            Ok(listing) => listing,
            Err(e) => {
                log::warn!("listing stats lookup failed for release {r_id}: {e}");
                None
            }
        };

        Ok(reconcile(&row, Some(&identifier), listing.as_ref()))
    }

    /// Reconcile a window of catalog rows without fuzzy matching,
    /// optionally filtered by genre. Backs the browse/genre views.
    pub async fn browse(
        &self,
        limit: usize,
        genre: Option<&str>,
    ) -> Result<Vec<CanonicalRelease>> {
        let rows = self
            .store
            .catalog_window(limit, genre)
            .await
            .map_err(|e| Error::Fetch(format!("catalog window: {e}")))?;

        let enriched = join_all(rows.iter().map(|row| self.enrich_row(row))).await;
        Ok(enriched)
    }

    async fn enrich_hit(
        &self,
        hit: &ScoredHit,
        rows_by_id: &HashMap<String, &CatalogRow>,
        listings_by_id: &HashMap<String, &UserListing>,
    ) -> Option<CanonicalRelease> {
        if hit.entry.user_listing {
            listings_by_id
                .get(&hit.entry.id)
                .map(|listing| reconcile_user_listing(listing))
        } else {
            let row = rows_by_id.get(&hit.entry.id)?;
            Some(self.enrich_row(row).await)
        }
    }

    /// Fetch a row's sub-records and reconcile. Either lookup may fail
    /// without affecting the other or the row itself; failures degrade
    /// the dependent fields to their defaults.
    async fn enrich_row(&self, row: &CatalogRow) -> CanonicalRelease {
        let r_id = row.r_id;
        let (identifier, listing) = tokio::join!(
            self.store.identifier(r_id, DISCOGS_SOURCE),
            self.store.listing_stats(r_id),
        );

        let identifier = identifier.unwrap_or_else(|e| {
            log::warn!("identifier lookup failed for release {r_id}: {e}");
            None
        });
        let listing = listing.unwrap_or_else(|e| {
            log::warn!("listing stats lookup failed for release {r_id}: {e}");
            None
        });

        reconcile(row, identifier.as_ref(), listing.as_ref())
    }
}
