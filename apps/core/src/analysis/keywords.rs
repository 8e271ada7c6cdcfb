//! Keyword and phrase extraction.
//!
//! Scores single words with a TF-inspired formula (frequency, length,
//! position, pseudo-POS and capitalization bonuses), extracts multi-word
//! phrases RAKE-style by splitting on stop words, merges both candidate sets
//! into one ranked list, and selects results under a dynamic threshold with
//! substring deduplication.

use std::collections::HashMap;

use tracing::debug;

use super::lexicon::Lexicon;
use super::text::{is_likely_noun_or_adjective, tokenize};

/// Minimum trimmed input length worth analyzing.
const MIN_TEXT_LEN: usize = 10;
/// Single-word candidates must be at least this long.
const MIN_WORD_LEN: usize = 4;
/// Phrases longer than this (in characters) are discarded.
const MAX_PHRASE_LEN: usize = 20;
/// A candidate must score at least this fraction of the top score.
const SCORE_THRESHOLD_RATIO: f64 = 0.2;

/// Keyword extractor with configurable result bounds.
pub struct KeywordExtractor {
    min_keywords: usize,
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create a new keyword extractor with default bounds (5..=12 results).
    pub fn new() -> Self {
        Self::with_config(5, 12)
    }

    /// Create a keyword extractor with custom result bounds.
    pub fn with_config(min_keywords: usize, max_keywords: usize) -> Self {
        Self {
            min_keywords,
            max_keywords,
        }
    }

    /// Extracts the ranked keyword/phrase list for `text`.
    ///
    /// Returns lowercase entries in acceptance order. The result is empty for
    /// degenerate input (trimmed length < 10, no alphabetic tokens of length
    /// >= 3, or nothing left after stop-word filtering).
    pub fn extract(&self, text: &str) -> Vec<String> {
        let lexicon = Lexicon::global();

        if text.trim().len() < MIN_TEXT_LEN {
            return vec![];
        }

        let words = tokenize(text, 3);
        if words.is_empty() {
            return vec![];
        }

        let filtered: Vec<&str> = words
            .iter()
            .copied()
            .filter(|w| !lexicon.is_stop_word(w))
            .collect();
        if filtered.is_empty() {
            return vec![];
        }

        let total_words = filtered.len();

        // Frequency, first-occurrence position, and first-seen original
        // casing, keyed by lowercase form. `order` keeps first-occurrence
        // order so that ties later sort deterministically.
        let mut freq: HashMap<String, usize> = HashMap::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut originals: HashMap<String, &str> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for (idx, word) in filtered.iter().enumerate() {
            let lower = word.to_lowercase();
            *freq.entry(lower.clone()).or_insert(0) += 1;
            if !positions.contains_key(&lower) {
                positions.insert(lower.clone(), idx);
                originals.insert(lower.clone(), word);
                order.push(lower);
            }
        }

        // Single-word scores, in first-occurrence order.
        let mut word_scores: HashMap<String, f64> = HashMap::new();
        let mut candidates: Vec<(String, f64)> = Vec::new();
        let mut candidate_index: HashMap<String, usize> = HashMap::new();

        for lower in &order {
            if lower.len() < MIN_WORD_LEN {
                continue;
            }
            let position_factor = 1.0 - positions[lower] as f64 / total_words as f64;
            let score = word_score(originals[lower], freq[lower], total_words, position_factor);
            word_scores.insert(lower.clone(), score);
            candidate_index.insert(lower.clone(), candidates.len());
            candidates.push((lower.clone(), score));
        }

        // Phrase scores. A phrase colliding with an existing candidate key
        // overwrites that candidate's score in place, keeping its rank slot.
        for phrase in extract_phrases(text) {
            if phrase.len() > MAX_PHRASE_LEN {
                continue;
            }
            let lower = phrase.to_lowercase();
            let phrase_words: Vec<&str> = lower.split(' ').collect();
            let base: f64 = phrase_words
                .iter()
                .map(|w| word_scores.get(*w).copied().unwrap_or(0.0))
                .sum();
            let score = base * (1.0 + phrase_words.len() as f64 * 0.2);

            match candidate_index.get(&lower) {
                Some(&i) => candidates[i].1 = score,
                None => {
                    candidate_index.insert(lower.clone(), candidates.len());
                    candidates.push((lower, score));
                }
            }
        }

        if candidates.is_empty() {
            return vec![];
        }

        // Stable sort: ties keep first-seen candidate order.
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let threshold = candidates[0].1 * SCORE_THRESHOLD_RATIO;
        debug!(candidates = candidates.len(), threshold, "ranking keyword candidates");

        let mut accepted: Vec<String> = Vec::new();

        for (keyword, score) in &candidates {
            if *score < threshold {
                break;
            }
            if !is_redundant(keyword, &accepted) {
                accepted.push(keyword.clone());
            }
            if accepted.len() >= self.max_keywords {
                break;
            }
        }

        // Backfill below the threshold when the text has enough candidates
        // but too few survived it.
        if accepted.len() < self.min_keywords && candidates.len() >= self.min_keywords {
            for (keyword, _) in &candidates {
                if !is_redundant(keyword, &accepted) {
                    accepted.push(keyword.clone());
                }
                if accepted.len() >= self.min_keywords {
                    break;
                }
            }
        }

        accepted
    }
}

/// Combined importance score for a single word.
///
/// `original` is the first-seen original-case form; the capitalization
/// bonuses look at it, while frequency is keyed by the lowercase form.
fn word_score(original: &str, frequency: usize, total_words: usize, position_factor: f64) -> f64 {
    let tf = frequency as f64 / total_words as f64;
    let length_score = (original.len() as f64 / 15.0).min(1.5);
    let position_score = 1.0 + position_factor * 0.3;
    let pos_bonus = if is_likely_noun_or_adjective(original) {
        1.5
    } else {
        1.0
    };
    let starts_upper = original.chars().next().is_some_and(|c| c.is_uppercase());
    let cap_bonus = if starts_upper && original.len() > 3 {
        1.3
    } else {
        1.0
    };

    tf * length_score * position_score * pos_bonus * cap_bonus
}

/// Splits the raw text on stop words and short tokens, emitting every run of
/// two or more content words as a candidate phrase.
fn extract_phrases(text: &str) -> Vec<String> {
    let lexicon = Lexicon::global();
    let mut phrases = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in tokenize(text, 1) {
        if lexicon.is_stop_word(word) || word.len() < 3 {
            if current.len() >= 2 {
                phrases.push(current.join(" "));
            }
            current.clear();
        } else {
            current.push(word);
        }
    }
    if current.len() >= 2 {
        phrases.push(current.join(" "));
    }

    phrases
}

/// True when `keyword` duplicates, contains, or is contained in an already
/// accepted entry.
fn is_redundant(keyword: &str, accepted: &[String]) -> bool {
    accepted
        .iter()
        .any(|k| k.contains(keyword) || keyword.contains(k))
}
