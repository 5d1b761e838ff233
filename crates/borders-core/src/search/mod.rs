//! Typo-tolerant country search for the guess input box.
//!
//! [`CountryMatcher::search`] turns free text into at most [`MAX_RESULTS`]
//! canonical country names, best first, in two passes:
//!
//! 1. **Exact alias pass.**  The query is compared (case- and
//!    accent-insensitively) with every country's canonical name, display name
//!    and aliases.  Hits come first, in catalog order.  This is what makes two
//!    letter initialisms such as "UK" or "US" resolve deterministically.
//! 2. **Fuzzy pass.**  Every country is scored on three fields: the localized
//!    display name, the locale's aliases, and the canonical English name, in
//!    decreasing weight.  The per-field similarity is the best
//!    Damerau-Levenshtein match of the query against any window of the field
//!    (so the position inside the name does not matter), and multi-word
//!    queries are also scored word by word.
//!
//! The matcher is built for one locale.  Build a new one when the player
//! switches language.

use std::cmp::Ordering;

use tracing::trace;

use crate::catalog::{same_name, Catalog};
use crate::locale::LocaleTable;

/// Maximum number of candidates returned by a search.
pub const MAX_RESULTS: usize = 8;

/// Minimum per-field similarity (0..=1) for a fuzzy hit.
pub const SIMILARITY_THRESHOLD: f64 = 0.6;

const DISPLAY_WEIGHT: f64 = 1.0;
const ALIAS_WEIGHT: f64 = 0.8;
const ENGLISH_WEIGHT: f64 = 0.6;

/// Pre-folded search fields of one country.
#[derive(Debug, Clone)]
struct SearchEntry {
    canonical: String,
    display: String,
    aliases: Vec<String>,
    english: String,
}

impl SearchEntry {
    fn matches_exactly(&self, folded_query: &str) -> bool {
        self.english == folded_query
            || self.display == folded_query
            || self.aliases.iter().any(|a| a == folded_query)
    }

    /// Weighted fuzzy score and a tie-break score, or `None` below threshold.
    fn score(&self, folded_query: &str) -> Option<(f64, f64)> {
        let mut best: Option<(f64, f64)> = None;
        let mut consider = |field: &str, weight: f64| {
            let sim = similarity(folded_query, field);
            if sim < SIMILARITY_THRESHOLD {
                return;
            }
            let candidate = (
                sim * weight,
                strsim::jaro_winkler(folded_query, field) * weight,
            );
            if best.map_or(true, |b| compare_scores(candidate, b) == Ordering::Greater) {
                best = Some(candidate);
            }
        };

        consider(&self.display, DISPLAY_WEIGHT);
        for alias in &self.aliases {
            consider(alias, ALIAS_WEIGHT);
        }
        consider(&self.english, ENGLISH_WEIGHT);
        best
    }
}

fn compare_scores(a: (f64, f64), b: (f64, f64)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1))
}

/// Locale-bound country search index.
#[derive(Debug, Clone)]
pub struct CountryMatcher {
    locale: String,
    entries: Vec<SearchEntry>,
}

impl CountryMatcher {
    /// Builds the search index for `catalog` in the language of `locale`.
    pub fn new(catalog: &Catalog, locale: &LocaleTable) -> Self {
        let entries = catalog
            .countries()
            .iter()
            .map(|c| SearchEntry {
                canonical: c.name.clone(),
                display: fold(locale.display_name(&c.name)),
                aliases: locale.aliases(&c.name).iter().map(|a| fold(a)).collect(),
                english: fold(&c.name),
            })
            .collect();
        Self {
            locale: locale.locale().to_string(),
            entries,
        }
    }

    /// Locale this index was built for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Canonical name of the country `input` names exactly.
    ///
    /// Uses the same case- and accent-insensitive test as the exact alias pass
    /// of [`CountryMatcher::search`]: canonical name, display name or alias.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let folded = fold(input);
        if folded.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|e| e.matches_exactly(&folded))
            .map(|e| e.canonical.as_str())
    }

    /// Returns up to [`MAX_RESULTS`] canonical names matching `query`.
    ///
    /// Countries named in `exclude` (any case) never appear.  An empty or
    /// whitespace-only query yields no results.
    pub fn search<S: AsRef<str>>(&self, query: &str, exclude: &[S]) -> Vec<String> {
        let folded = fold(query);
        if folded.is_empty() {
            return Vec::new();
        }

        let allowed = |entry: &SearchEntry| {
            !exclude
                .iter()
                .any(|e| same_name(e.as_ref(), &entry.canonical))
        };

        let mut results: Vec<String> = self
            .entries
            .iter()
            .filter(|e| allowed(*e) && e.matches_exactly(&folded))
            .map(|e| e.canonical.clone())
            .collect();

        let mut scored: Vec<((f64, f64), &SearchEntry)> = self
            .entries
            .iter()
            .filter(|e| allowed(*e))
            .filter_map(|e| e.score(&folded).map(|s| (s, e)))
            .collect();
        // Stable sort keeps catalog order among equal scores.
        scored.sort_by(|a, b| compare_scores(b.0, a.0));

        for (_, entry) in scored {
            if results.len() >= MAX_RESULTS {
                break;
            }
            if !results.contains(&entry.canonical) {
                results.push(entry.canonical.clone());
            }
        }
        results.truncate(MAX_RESULTS);

        trace!("search {query:?} ({}) -> {results:?}", self.locale);
        results
    }
}

// ── Similarity ────────────────────────────────────────────────────────────────

/// Similarity in `0.0..=1.0` of `query` to the best-matching part of `target`.
///
/// Both inputs must already be folded.  Multi-word queries also get a
/// word-by-word score (mean of each word's best match), so word order and
/// partial words are tolerated.
pub(crate) fn similarity(query: &str, target: &str) -> f64 {
    let whole = window_similarity(query, target);
    if !query.contains(' ') {
        return whole;
    }
    let words: Vec<&str> = query.split(' ').filter(|w| !w.is_empty()).collect();
    let per_word =
        words.iter().map(|w| window_similarity(w, target)).sum::<f64>() / words.len() as f64;
    whole.max(per_word)
}

/// Best `1 - distance / length` of `query` against any window of `target`
/// whose length is within one character of the query's.
fn window_similarity(query: &str, target: &str) -> f64 {
    if query.is_empty() || target.is_empty() {
        return 0.0;
    }
    if target.contains(query) {
        return 1.0;
    }

    let q_len = query.chars().count();
    let t: Vec<char> = target.chars().collect();

    if t.len() <= q_len {
        let distance = strsim::damerau_levenshtein(query, target);
        return 1.0 - distance as f64 / q_len as f64;
    }

    let mut best = 0.0_f64;
    for len in [q_len.saturating_sub(1), q_len, q_len + 1] {
        if len == 0 || len > t.len() {
            continue;
        }
        for start in 0..=t.len() - len {
            let window: String = t[start..start + len].iter().collect();
            let distance = strsim::damerau_levenshtein(query, &window);
            let sim = 1.0 - distance as f64 / q_len.max(len) as f64;
            best = best.max(sim);
        }
    }
    best
}

/// Lower-cases, strips common Latin diacritics and collapses whitespace.
pub(crate) fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        for c in word.chars().flat_map(char::to_lowercase) {
            match c {
                'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => out.push('a'),
                'ç' => out.push('c'),
                'è' | 'é' | 'ê' | 'ë' => out.push('e'),
                'ì' | 'í' | 'î' | 'ï' => out.push('i'),
                'ñ' => out.push('n'),
                'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => out.push('o'),
                'ù' | 'ú' | 'û' | 'ü' => out.push('u'),
                'ý' | 'ÿ' => out.push('y'),
                'ß' => out.push_str("ss"),
                '’' => out.push('\''),
                other => out.push(other),
            }
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
