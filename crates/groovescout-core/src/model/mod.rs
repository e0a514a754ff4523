pub mod catalog;
pub mod corpus;
pub mod identifier;
pub mod listing;
pub mod related;
pub mod release;

pub use catalog::CatalogRow;
pub use corpus::CorpusEntry;
pub use identifier::{IdentifierMetadata, ReleaseIdentifier, DISCOGS_SOURCE};
pub use listing::{ListingStats, UserListing};
pub use related::zero_or_one;
pub use release::CanonicalRelease;
