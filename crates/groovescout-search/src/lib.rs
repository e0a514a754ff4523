//! Fuzzy release search for groovescout.
//!
//! Builds a weighted, typo-tolerant index over the catalog and
//! user-listing corpus and orchestrates the full query pipeline:
//! fetch window, index, match, enrich, dedupe, truncate.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod index;
pub mod service;

pub use index::{ScoredHit, SearchIndex};
pub use service::SearchService;
