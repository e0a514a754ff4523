use serde::{Deserialize, Serialize};

/// The external source this core links releases to.
pub const DISCOGS_SOURCE: &str = "discogs";

/// A sub-record linking a catalog row to an external marketplace
/// source.
///
/// Identifier rows arrive from an external ingestion process whose
/// shape has drifted across versions: some carry a browsable web URL,
/// some only a bare numeric release id, some neither but a metadata
/// blob with an API-style URL. The [`link`](crate::link) resolver
/// reconciles these into one validated URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseIdentifier {
    pub source: String,

    #[serde(default)]
    pub external_id: Option<String>,

    #[serde(default)]
    pub external_url: Option<String>,

    #[serde(default)]
    pub metadata: Option<IdentifierMetadata>,
}

/// Free-form metadata attached to an identifier row.
///
/// Only `api_url` is meaningful to this core; anything else the
/// ingestion process wrote is carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentifierMetadata {
    #[serde(default)]
    pub api_url: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ReleaseIdentifier {
    /// An empty identifier for the Discogs source.
    #[must_use]
    pub fn discogs() -> Self {
        Self {
            source: DISCOGS_SOURCE.to_string(),
            external_id: None,
            external_url: None,
            metadata: None,
        }
    }

    #[must_use]
    pub fn with_external_url(mut self, url: impl Into<String>) -> Self {
        self.external_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_external_id(mut self, id: impl Into<String>) -> Self {
        self.external_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        let metadata = self.metadata.get_or_insert_with(IdentifierMetadata::default);
        metadata.api_url = Some(url.into());
        self
    }
}
