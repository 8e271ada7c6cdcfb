//! Fixed lexical tables used by every analysis component.
//!
//! Stop words, pseudo-POS suffix lists, and the Bloom's-taxonomy verb tiers
//! are built once behind a `LazyLock` and shared read-only across requests.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English stop words (expanded list).
const STOP_WORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "a", "an", "as", "are", "was", "were", "been", "be", "have",
    "has", "had", "do", "does", "did", "will", "would", "should", "could", "may", "might", "must",
    "can", "of", "for", "to", "in", "and", "or", "but", "not", "with", "by", "from", "this",
    "that", "these", "those", "it", "its", "they", "them", "their", "about", "into", "through",
    "during", "before", "after", "above", "below", "between", "under", "again", "further", "then",
    "once", "here", "there", "when", "where", "why", "how", "all", "both", "each", "few", "more",
    "most", "other", "some", "such", "only", "own", "same", "so", "than", "too", "very", "just",
    "also", "being", "having", "doing",
];

/// Word endings that suggest a noun (simplified POS).
const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ology", "ance", "ence",
];

/// Word endings that suggest an adjective (simplified POS).
const ADJ_SUFFIXES: &[&str] = &[
    "ful", "less", "ous", "ive", "able", "ible", "al", "ic", "ical",
];

/// Bloom's-taxonomy verbs for recall-level questions.
const EASY_VERBS: &[&str] = &[
    "what", "who", "when", "where", "list", "define", "name", "identify", "recall",
];

/// Bloom's-taxonomy verbs for comprehension/application-level questions.
const MEDIUM_VERBS: &[&str] = &[
    "how", "why", "explain", "describe", "compare", "contrast", "classify", "demonstrate",
];

/// Bloom's-taxonomy verbs for analysis/synthesis-level questions.
const HARD_VERBS: &[&str] = &[
    "analyze", "evaluate", "design", "create", "synthesize", "justify", "critique", "assess",
    "develop",
];

/// Markers that make a question harder to answer correctly.
const NEGATION_MARKERS: &[&str] = &["not", "n't", "never", "neither", "nor", "except"];

/// The process-wide lexical tables. Immutable after construction.
pub struct Lexicon {
    stop_words: HashSet<&'static str>,
    noun_suffixes: &'static [&'static str],
    adj_suffixes: &'static [&'static str],
    easy_verbs: &'static [&'static str],
    medium_verbs: &'static [&'static str],
    hard_verbs: &'static [&'static str],
    negation_markers: &'static [&'static str],
}

static LEXICON: LazyLock<Lexicon> = LazyLock::new(|| Lexicon {
    stop_words: STOP_WORDS.iter().copied().collect(),
    noun_suffixes: NOUN_SUFFIXES,
    adj_suffixes: ADJ_SUFFIXES,
    easy_verbs: EASY_VERBS,
    medium_verbs: MEDIUM_VERBS,
    hard_verbs: HARD_VERBS,
    negation_markers: NEGATION_MARKERS,
});

impl Lexicon {
    /// Returns the shared lexicon, building it on first use.
    pub fn global() -> &'static Lexicon {
        &LEXICON
    }

    /// Lowercase membership test against the stop-word table.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word.to_lowercase().as_str())
    }

    /// Membership test for an already-lowercased word, avoiding the allocation.
    pub fn is_stop_word_lower(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn noun_suffixes(&self) -> &'static [&'static str] {
        self.noun_suffixes
    }

    pub fn adj_suffixes(&self) -> &'static [&'static str] {
        self.adj_suffixes
    }

    pub fn easy_verbs(&self) -> &'static [&'static str] {
        self.easy_verbs
    }

    pub fn medium_verbs(&self) -> &'static [&'static str] {
        self.medium_verbs
    }

    pub fn hard_verbs(&self) -> &'static [&'static str] {
        self.hard_verbs
    }

    pub fn negation_markers(&self) -> &'static [&'static str] {
        self.negation_markers
    }
}
