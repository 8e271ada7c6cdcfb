//! Extractive summarization.
//!
//! Builds a 2-3 sentence summary out of the original sentences: the first,
//! the densest interior sentence, and the last. Nothing is paraphrased.

use super::lexicon::Lexicon;
use super::text::{split_sentences, tokenize};

pub struct Summarizer;

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    pub fn new() -> Self {
        Self
    }

    /// Produces the extractive summary.
    ///
    /// Texts of up to two sentences come back unchanged. Three-sentence texts
    /// keep the first and last. Longer texts additionally splice in the
    /// highest-scoring interior sentence (first wins on ties); when every
    /// interior sentence scores zero the summary is just first + last.
    pub fn summarize(&self, text: &str) -> String {
        let sentences: Vec<&str> = split_sentences(text.trim())
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect();

        if sentences.len() <= 2 {
            return text.to_string();
        }

        let first = sentences[0];
        let last = sentences[sentences.len() - 1];

        if sentences.len() == 3 {
            return format!("{} {}", first, last);
        }

        let mut best: Option<(usize, &str)> = None;
        for &sentence in &sentences[1..sentences.len() - 1] {
            let score = content_word_count(sentence);
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, sentence));
            }
        }

        match best {
            Some((score, interior)) if score > 0 => format!("{} {} {}", first, interior, last),
            _ => format!("{} {}", first, last),
        }
    }
}

/// Number of non-stop-words of length >= 4 in the sentence.
fn content_word_count(sentence: &str) -> usize {
    let lexicon = Lexicon::global();
    let lower = sentence.to_lowercase();
    tokenize(&lower, 4)
        .into_iter()
        .filter(|w| !lexicon.is_stop_word_lower(w))
        .count()
}
