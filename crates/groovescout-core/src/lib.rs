//! Core domain model for groovescout.
//!
//! This crate defines the raw record shapes fetched from storage
//! (catalog rows, release identifiers, marketplace stats, user
//! listings), the canonical release entity returned to callers, and
//! the normalization primitives that turn one into the other: the
//! Discogs URL resolver, the field reconciler, and the result
//! deduplicator. The storage collaborator itself sits behind the
//! read-only [`store::Store`] trait.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod dedupe;
pub mod error;
pub mod link;
pub mod model;
pub mod reconcile;
pub mod store;

pub use error::{Error, Result};
