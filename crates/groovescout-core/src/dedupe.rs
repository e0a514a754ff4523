//! Result deduplication.
//!
//! The catalog contains near-identical entries for the same logical
//! release (re-ingestions, overlapping fetch windows), and there is no
//! database-level unique constraint to lean on. Callers feed a
//! relevance-ordered list; the first occurrence of each normalized
//! (title, artist) key wins.

use std::collections::HashSet;

use crate::model::release::CanonicalRelease;

/// Collapse entries sharing the same normalized (title, artist) key,
/// keeping the first by input order. Never re-sorts.
#[must_use]
pub fn dedupe(results: Vec<CanonicalRelease>) -> Vec<CanonicalRelease> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|release| seen.insert(dedupe_key(&release.title, &release.artist)))
        .collect()
}

/// The normalized key: `lowercase(trim(title)) + "_" + lowercase(trim(artist))`.
#[must_use]
pub fn dedupe_key(title: &str, artist: &str) -> String {
    format!(
        "{}_{}",
        title.trim().to_lowercase(),
        artist.trim().to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(id: &str, title: &str, artist: &str) -> CanonicalRelease {
        CanonicalRelease {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            price: None,
            currency: "USD".to_string(),
            image_url: None,
            external_url: None,
            external_source: "discogs".to_string(),
            genre: None,
            release_year: None,
            record_label: None,
            format: None,
            is_available: true,
            quantity: 0,
        }
    }

    #[test]
    fn test_dedupe_collapses_case_insensitive_duplicates() {
        let results = vec![
            release("1", "Abbey Road", "The Beatles"),
            release("2", "abbey road", "THE BEATLES"),
        ];
        let deduped = dedupe(results);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].id, "1");
    }

    #[test]
    fn test_dedupe_keeps_first_by_input_order() {
        let results = vec![
            release("first", "In Rainbows", "Radiohead"),
            release("other", "OK Computer", "Radiohead"),
            release("second", "  In Rainbows ", "Radiohead"),
        ];
        let deduped = dedupe(results);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].id, "first");
        assert_eq!(deduped[1].id, "other");
    }

    #[test]
    fn test_dedupe_distinguishes_same_title_different_artist() {
        let results = vec![
            release("1", "Greatest Hits", "Queen"),
            release("2", "Greatest Hits", "ABBA"),
        ];
        assert_eq!(dedupe(results).len(), 2);
    }

    #[test]
    fn test_dedupe_empty_input() {
        assert!(dedupe(Vec::new()).is_empty());
    }

    #[test]
    fn test_dedupe_key_normalization() {
        assert_eq!(
            dedupe_key("  Abbey Road ", "The Beatles"),
            "abbey road_the beatles"
        );
    }

    #[test]
    fn test_dedupe_output_has_unique_keys() {
        let results = vec![
            release("1", "A", "X"),
            release("2", "a", "x"),
            release("3", "B", "X"),
            release("4", "b ", " x"),
        ];
        let deduped = dedupe(results);
        let mut keys: Vec<String> = deduped
            .iter()
            .map(|r| dedupe_key(&r.title, &r.artist))
            .collect();
        let before = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), before);
    }
}
