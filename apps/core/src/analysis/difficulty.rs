//! Difficulty classification.
//!
//! Two heuristic classifiers share one output enum: a text classifier driven
//! by word/sentence statistics, and a question classifier combining a
//! simplified Flesch Reading Ease score, Bloom's-taxonomy verb tiers, and
//! negation/multi-topic detection.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lexicon::Lexicon;
use super::text::{count_syllables, split_sentence_runs, tokenize};

/// Difficulty rating for a text or question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Returns a human-readable label for the difficulty.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Heuristic difficulty classifier for answers and questions.
pub struct DifficultyClassifier;

impl Default for DifficultyClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DifficultyClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Rates a text by word length, sentence length, and complex/technical
    /// word ratios. Degenerate input (no words or no sentences) is Beginner.
    pub fn predict(&self, text: &str) -> Difficulty {
        let words = tokenize(text, 1);
        let sentences = split_sentence_runs(text);

        if words.is_empty() || sentences.is_empty() {
            return Difficulty::Beginner;
        }

        let word_count = words.len();
        let total_chars: usize = words.iter().map(|w| w.len()).sum();
        let avg_word_length = total_chars as f64 / word_count as f64;
        let avg_sentence_length = word_count as f64 / sentences.len() as f64;

        let complex_words = words
            .iter()
            .filter(|w| w.len() > 7 || count_syllables(w) > 3)
            .count();
        let complex_ratio = complex_words as f64 / word_count as f64;

        let technical_words = words.iter().filter(|w| w.len() > 10).count();
        let technical_ratio = technical_words as f64 / word_count as f64;

        let mut score = 0u32;

        // Word length (0-3 points)
        if avg_word_length > 6.5 {
            score += 3;
        } else if avg_word_length > 5.5 {
            score += 2;
        } else if avg_word_length > 4.5 {
            score += 1;
        }

        // Sentence length (0-3 points)
        if avg_sentence_length > 25.0 {
            score += 3;
        } else if avg_sentence_length > 18.0 {
            score += 2;
        } else if avg_sentence_length > 12.0 {
            score += 1;
        }

        // Complex words (0-2 points)
        if complex_ratio > 0.20 {
            score += 2;
        } else if complex_ratio > 0.12 {
            score += 1;
        }

        // Technical words (0-2 points)
        if technical_ratio > 0.08 {
            score += 2;
        } else if technical_ratio > 0.04 {
            score += 1;
        }

        debug!(
            avg_word_length,
            avg_sentence_length, complex_ratio, technical_ratio, score, "text difficulty metrics"
        );

        if score >= 7 {
            Difficulty::Advanced
        } else if score >= 4 {
            Difficulty::Intermediate
        } else {
            Difficulty::Beginner
        }
    }

    /// Rates a question by readability, verb tier, concept density, and
    /// negation/multi-topic structure. Empty input is Beginner.
    pub fn analyze_question(&self, question: &str) -> Difficulty {
        let lexicon = Lexicon::global();
        let question = question.trim();

        if question.is_empty() {
            return Difficulty::Beginner;
        }

        let words = tokenize(question, 1);
        let word_count = words.len();
        if word_count == 0 {
            return Difficulty::Beginner;
        }

        let total_chars: usize = words.iter().map(|w| w.len()).sum();
        let avg_word_length = total_chars as f64 / word_count as f64;

        let complex_words = words
            .iter()
            .filter(|w| w.len() > 8 || count_syllables(w) > 3)
            .count();
        let complex_ratio = complex_words as f64 / word_count as f64;

        let sentences = split_sentence_runs(question);
        let avg_sentence_length = word_count as f64 / sentences.len().max(1) as f64;

        // Simplified Flesch Reading Ease, clamped to [0, 100].
        let total_syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
        let syllables_per_word = total_syllables as f64 / word_count as f64;
        let flesch_score =
            (206.835 - 1.015 * avg_sentence_length - 84.6 * syllables_per_word).clamp(0.0, 100.0);

        let technical_terms = words.iter().filter(|w| w.len() > 10).count();
        let potential_concepts = words
            .iter()
            .filter(|w| w.len() > 5 && !lexicon.is_stop_word(w))
            .count();

        let question_lower = question.to_lowercase();

        // Bloom's taxonomy tier: easy verbs checked first and win on overlap.
        let question_type_score = if contains_any(&question_lower, lexicon.easy_verbs()) {
            1
        } else if contains_any(&question_lower, lexicon.medium_verbs()) {
            2
        } else if contains_any(&question_lower, lexicon.hard_verbs()) {
            3
        } else {
            2
        };

        let has_negation = contains_any(&question_lower, lexicon.negation_markers());
        let has_multiple_topics = question_lower.matches(" and ").count() > 0
            || question_lower.matches(" or ").count() > 1;

        let mut score = 0u32;

        // Readability, inverted: lower Flesch = harder.
        if flesch_score > 70.0 {
            score += 10;
        } else if flesch_score > 50.0 {
            score += 30;
        } else {
            score += 50;
        }

        if complex_ratio > 0.3 {
            score += 20;
        } else if complex_ratio > 0.15 {
            score += 10;
        }

        if avg_sentence_length > 20.0 {
            score += 15;
        } else if avg_sentence_length > 12.0 {
            score += 8;
        }

        score += question_type_score * 10;

        if potential_concepts > 5 || technical_terms > 2 {
            score += 15;
        } else if potential_concepts > 3 {
            score += 8;
        }

        if has_negation {
            score += 10;
        }
        if has_multiple_topics {
            score += 10;
        }

        debug!(
            avg_word_length,
            flesch_score,
            complex_ratio,
            question_type_score,
            has_negation,
            has_multiple_topics,
            score,
            "question difficulty metrics"
        );

        if score >= 65 {
            Difficulty::Advanced
        } else if score >= 35 {
            Difficulty::Intermediate
        } else {
            Difficulty::Beginner
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
