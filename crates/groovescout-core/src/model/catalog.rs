use serde::{Deserialize, Serialize};

/// A pre-ingested release record from the primary store.
///
/// Field names mirror the storage schema (`r_id`, `image`,
/// `record_label`, ...). Everything except the row id is optional;
/// ingestion runs at different times have left rows in varying states
/// of completeness, and the reconciler owns the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub r_id: i64,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub artist: Option<String>,

    #[serde(default)]
    pub genre: Option<String>,

    /// Cover image URL, populated from the source's thumb/cover art.
    #[serde(default)]
    pub image: Option<String>,

    /// Lowest known price at ingestion time.
    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub release_year: Option<i32>,

    #[serde(default)]
    pub record_label: Option<String>,

    /// Media format: "Vinyl", "LP", "7\"", etc.
    #[serde(default)]
    pub format: Option<String>,
}

impl CatalogRow {
    #[must_use]
    pub fn new(r_id: i64) -> Self {
        Self {
            r_id,
            title: None,
            artist: None,
            genre: None,
            image: None,
            price: None,
            release_year: None,
            record_label: None,
            format: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_release_year(mut self, year: i32) -> Self {
        self.release_year = Some(year);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_row_new() {
        let row = CatalogRow::new(42);
        assert_eq!(row.r_id, 42);
        assert!(row.title.is_none());
        assert!(row.price.is_none());
    }

    #[test]
    fn test_catalog_row_builder() {
        let row = CatalogRow::new(7)
            .with_title("Bleach")
            .with_artist("Nirvana")
            .with_release_year(1989);

        assert_eq!(row.title.as_deref(), Some("Bleach"));
        assert_eq!(row.artist.as_deref(), Some("Nirvana"));
        assert_eq!(row.release_year, Some(1989));
    }

    #[test]
    fn test_catalog_row_deserialize_sparse() {
        let json = r#"{"r_id": 9, "title": "Abbey Road"}"#;
        let row: CatalogRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.r_id, 9);
        assert_eq!(row.title.as_deref(), Some("Abbey Road"));
        assert!(row.artist.is_none());
        assert!(row.format.is_none());
    }

    #[test]
    fn test_catalog_row_deserialize_full() {
        let json = r#"{
            "r_id": 1,
            "title": "Kind of Blue",
            "artist": "Miles Davis",
            "genre": "Jazz",
            "image": "https://img.example/kob.jpg",
            "price": 29.99,
            "release_year": 1959,
            "record_label": "Columbia",
            "format": "Vinyl"
        }"#;
        let row: CatalogRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.price, Some(29.99));
        assert_eq!(row.record_label.as_deref(), Some("Columbia"));
    }
}
