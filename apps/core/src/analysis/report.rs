//! Analysis Report - output structure for answer analysis.
//!
//! Everything the analysis pipeline derives from one answer (and optionally
//! its question), assembled fresh per request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// Complete analysis of one generated answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The full answer text, unmodified.
    pub full_answer: String,

    /// Extractive 2-3 sentence summary.
    pub summary: String,

    /// Ranked keywords and phrases, lowercase.
    pub keywords: Vec<String>,
    pub keyword_count: usize,

    /// Most information-dense sentences, highest first.
    pub key_points: Vec<String>,
    pub key_points_count: usize,

    /// Paragraph segmentation of the answer.
    pub paragraphs: Vec<String>,

    /// Difficulty rating. For question-and-answer processing this rates the
    /// question; otherwise it rates the answer text itself.
    pub difficulty: Difficulty,

    /// Difficulty of the answer text, present only when `difficulty` was
    /// computed from the question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_complexity: Option<Difficulty>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,

    /// Timestamp of analysis.
    pub timestamp: DateTime<Utc>,
}

impl AnalysisReport {
    /// Create a new empty report for the given answer text.
    pub fn new(full_answer: String) -> Self {
        Self {
            full_answer,
            summary: String::new(),
            keywords: vec![],
            keyword_count: 0,
            key_points: vec![],
            key_points_count: 0,
            paragraphs: vec![],
            difficulty: Difficulty::Beginner,
            answer_complexity: None,
            processing_time_ms: 0,
            timestamp: Utc::now(),
        }
    }

    /// Get a one-line summary for logging.
    pub fn summary_line(&self) -> String {
        format!(
            "Keywords: {}, Key points: {}, Paragraphs: {}, Difficulty: {}",
            self.keyword_count,
            self.key_points_count,
            self.paragraphs.len(),
            self.difficulty
        )
    }
}
