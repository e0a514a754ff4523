//! Weighted, typo-tolerant text index.
//!
//! Catalog titles and artists carry inconsistent punctuation and
//! abbreviations, and users search from approximate memory, so
//! matching is edit-distance based rather than substring based. Every
//! entry is scored (no short-circuiting), a hit anywhere in a field
//! counts, and results come back best-first with ties kept in corpus
//! order.

use std::cmp::Ordering;

use strsim::normalized_levenshtein;

use groovescout_core::model::CorpusEntry;

/// Weight of the title field in the combined score.
pub const TITLE_WEIGHT: f64 = 0.6;

/// Weight of the artist field in the combined score. Entries with an
/// empty artist (user listings) are scored on title alone.
pub const ARTIST_WEIGHT: f64 = 0.4;

/// Minimum combined score for an entry to appear in results.
/// Permissive by design: a query with a typo or two, or partial token
/// overlap, should still land; unrelated strings score well below.
pub const SCORE_THRESHOLD: f64 = 0.45;

/// One scored match from a query.
#[derive(Debug, Clone)]
pub struct ScoredHit {
    pub entry: CorpusEntry,
    pub score: f64,
}

#[derive(Debug)]
struct IndexedEntry {
    entry: CorpusEntry,
    title_norm: String,
    title_tokens: Vec<String>,
    artist_norm: String,
    artist_tokens: Vec<String>,
}

/// A per-query index over one fetched corpus window.
///
/// Rebuilt for every query; nothing is shared or cached across
/// queries, so concurrent searches never contend.
#[derive(Debug)]
pub struct SearchIndex {
    entries: Vec<IndexedEntry>,
}

impl SearchIndex {
    /// Build an index over the given corpus, preserving corpus order.
    #[must_use]
    pub fn build(corpus: Vec<CorpusEntry>) -> Self {
        let entries = corpus
            .into_iter()
            .map(|entry| {
                let title_norm = normalize(&entry.title);
                let artist_norm = normalize(&entry.artist);
                IndexedEntry {
                    title_tokens: tokenize(&title_norm),
                    artist_tokens: tokenize(&artist_norm),
                    title_norm,
                    artist_norm,
                    entry,
                }
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score every entry against the query and return those above the
    /// threshold, best first. The sort is stable, so tied scores keep
    /// their corpus order.
    #[must_use]
    pub fn query(&self, text: &str) -> Vec<ScoredHit> {
        let query_norm = normalize(text);
        if query_norm.is_empty() {
            return Vec::new();
        }
        let query_tokens = tokenize(&query_norm);

        let mut hits: Vec<ScoredHit> = self
            .entries
            .iter()
            .filter_map(|indexed| {
                let score = score_entry(indexed, &query_norm, &query_tokens);
                (score >= SCORE_THRESHOLD).then(|| ScoredHit {
                    entry: indexed.entry.clone(),
                    score,
                })
            })
            .collect();

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits
    }
}

fn score_entry(indexed: &IndexedEntry, query: &str, query_tokens: &[String]) -> f64 {
    let title = field_score(query, query_tokens, &indexed.title_norm, &indexed.title_tokens);
    if indexed.artist_norm.is_empty() {
        return title;
    }
    let artist = field_score(
        query,
        query_tokens,
        &indexed.artist_norm,
        &indexed.artist_tokens,
    );
    TITLE_WEIGHT * title + ARTIST_WEIGHT * artist
}

/// Similarity of the query to one field, in `0.0..=1.0`.
///
/// Takes the better of a whole-string comparison and a token-level
/// comparison (average over query tokens of the best-matching field
/// token), so a hit anywhere in the field counts regardless of
/// position.
fn field_score(query: &str, query_tokens: &[String], field: &str, field_tokens: &[String]) -> f64 {
    if field.is_empty() {
        return 0.0;
    }

    let whole = normalized_levenshtein(query, field);

    let token_avg = if query_tokens.is_empty() {
        0.0
    } else {
        let sum: f64 = query_tokens
            .iter()
            .map(|token| best_token_similarity(token, field_tokens))
            .sum();
        sum / query_tokens.len() as f64
    };

    whole.max(token_avg)
}

fn best_token_similarity(query_token: &str, field_tokens: &[String]) -> f64 {
    field_tokens
        .iter()
        .map(|token| normalized_levenshtein(query_token, token))
        .fold(0.0, f64::max)
}

/// Lowercase, strip punctuation to spaces, collapse whitespace.
fn normalize(text: &str) -> String {
    let lowered: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn tokenize(normalized: &str) -> Vec<String> {
    normalized.split_whitespace().map(str::to_string).collect()
}
