//! Lexical utilities: tokenization, sentence splitting, pseudo part-of-speech
//! detection, and syllable estimation.
//!
//! Everything here is a pure function over the input string plus the shared
//! [`Lexicon`](super::lexicon::Lexicon). Non-alphabetic characters are pure
//! separators; there is no real linguistic parsing anywhere.

use std::sync::LazyLock;

use regex::Regex;

use super::lexicon::Lexicon;

// Compiled once at startup.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("Invalid regex: word pattern"));

static SENTENCE_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid regex: sentence run pattern"));

const VOWELS: &str = "aeiouy";

/// Returns the maximal alphabetic runs of length >= `min_len`, in order of
/// appearance, with their original casing preserved.
pub fn tokenize(text: &str, min_len: usize) -> Vec<&str> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|w| w.len() >= min_len)
        .collect()
}

/// Splits text into sentences after `.`, `!` or `?` followed by whitespace.
///
/// The terminating punctuation stays attached to its sentence; the whitespace
/// between sentences is consumed. Whitespace-only segments are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if matches!(bytes[i], b'.' | b'!' | b'?')
            && bytes.get(i + 1).is_some_and(|b| b.is_ascii_whitespace())
        {
            let sentence = &text[start..=i];
            if !sentence.trim().is_empty() {
                sentences.push(sentence);
            }
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            start = i;
        } else {
            i += 1;
        }
    }

    if start < text.len() {
        let tail = &text[start..];
        if !tail.trim().is_empty() {
            sentences.push(tail);
        }
    }

    sentences
}

/// Splits text on runs of sentence-ending punctuation, discarding the
/// separators. Used by the difficulty classifiers, which only need counts.
pub fn split_sentence_runs(text: &str) -> Vec<&str> {
    SENTENCE_RUN_PATTERN
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Heuristic noun/adjective detector.
///
/// True when the lowercased word carries a noun- or adjective-suggestive
/// suffix, or when the original form starts with an uppercase letter and is
/// longer than three characters (proper nouns, technical terms).
pub fn is_likely_noun_or_adjective(word: &str) -> bool {
    let lexicon = Lexicon::global();
    let lower = word.to_lowercase();

    if lexicon.noun_suffixes().iter().any(|s| lower.ends_with(s)) {
        return true;
    }
    if lexicon.adj_suffixes().iter().any(|s| lower.ends_with(s)) {
        return true;
    }
    word.chars().next().is_some_and(|c| c.is_uppercase()) && word.len() > 3
}

/// Estimates the syllable count of a word.
///
/// Counts transitions into a vowel run (`a e i o u y`), subtracts one for a
/// trailing `e`, and floors the result at 1.
pub fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let mut count: isize = 0;
    let mut previous_was_vowel = false;

    for c in lower.chars() {
        let is_vowel = VOWELS.contains(c);
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if lower.ends_with('e') {
        count -= 1;
    }

    count.max(1) as usize
}
