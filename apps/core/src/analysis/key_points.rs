//! Key-point selection.
//!
//! Scores sentences by lexical density (content words, long words,
//! noun/adjective-like words) and returns a bounded top-N, highest first.

use super::lexicon::Lexicon;
use super::text::{is_likely_noun_or_adjective, split_sentences, tokenize};

/// Sentences with this many words or fewer are not key-point material.
const MIN_SENTENCE_WORDS: usize = 5;
/// Long sentences are penalized as less focused.
const LONG_SENTENCE_WORDS: usize = 30;

/// Extracts the most information-dense sentences from a text.
pub struct KeyPointSelector;

impl Default for KeyPointSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyPointSelector {
    pub fn new() -> Self {
        Self
    }

    /// Returns between 3 and 8 key sentences (fewer if the text does not have
    /// enough qualifying sentences), in score-descending order with original
    /// casing preserved.
    pub fn select(&self, text: &str) -> Vec<String> {
        let sentences: Vec<&str> = split_sentences(text.trim())
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty() && s.split_whitespace().count() > MIN_SENTENCE_WORDS)
            .collect();

        if sentences.is_empty() {
            return vec![];
        }

        let mut scored: Vec<(&str, f64)> = sentences
            .iter()
            .map(|s| (*s, score_sentence(s)))
            .collect();

        // Stable sort keeps document order on ties.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let num_points = (sentences.len() / 3).clamp(3, 8).min(sentences.len());

        scored
            .into_iter()
            .take(num_points)
            .map(|(s, _)| s.to_string())
            .collect()
    }
}

fn score_sentence(sentence: &str) -> f64 {
    let lexicon = Lexicon::global();
    let lower = sentence.to_lowercase();
    let words = tokenize(&lower, 4);

    let important: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| !lexicon.is_stop_word_lower(w))
        .collect();

    let technical = important.iter().filter(|w| w.len() > 8).count();
    let pos_like = important
        .iter()
        .filter(|w| is_likely_noun_or_adjective(w))
        .count();

    let mut score = 2.0 * important.len() as f64 + 3.0 * technical as f64 + 1.5 * pos_like as f64;

    if words.len() > LONG_SENTENCE_WORDS {
        score *= 0.8;
    }

    score
}
