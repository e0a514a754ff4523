use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A storage fetch failed. Fatal for the query that issued it.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The requested record does not exist, or lacks the identifier
    /// required to serve it. Distinct from a storage failure.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` when the error indicates the record was not found,
    /// as opposed to the storage layer failing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
