//! Answer Analyzer - orchestrates the analysis pipeline.
//!
//! Owns one instance of each component and assembles their outputs into a
//! single report. Stateless between calls.

use std::time::Instant;

use tracing::debug;

use super::difficulty::DifficultyClassifier;
use super::key_points::KeyPointSelector;
use super::keywords::KeywordExtractor;
use super::paragraphs::ParagraphSegmenter;
use super::report::AnalysisReport;
use super::summary::Summarizer;

/// Runs every analysis component over an answer and collects the results.
pub struct AnswerAnalyzer {
    keywords: KeywordExtractor,
    key_points: KeyPointSelector,
    summarizer: Summarizer,
    paragraphs: ParagraphSegmenter,
    difficulty: DifficultyClassifier,
}

impl Default for AnswerAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerAnalyzer {
    pub fn new() -> Self {
        Self {
            keywords: KeywordExtractor::new(),
            key_points: KeyPointSelector::new(),
            summarizer: Summarizer::new(),
            paragraphs: ParagraphSegmenter::new(),
            difficulty: DifficultyClassifier::new(),
        }
    }

    /// Analyzes an answer on its own. The difficulty rating comes from the
    /// answer text.
    pub fn process_answer(&self, answer: &str) -> AnalysisReport {
        let started = Instant::now();
        let mut report = self.build_report(answer);
        report.difficulty = self.difficulty.predict(answer);
        report.processing_time_ms = started.elapsed().as_millis() as u64;

        debug!(summary = %report.summary_line(), "answer analysis complete");
        report
    }

    /// Analyzes an answer in the context of the question that produced it.
    /// The difficulty rating comes from the question; the answer's own rating
    /// is carried separately as `answer_complexity`.
    pub fn process_question_and_answer(&self, question: &str, answer: &str) -> AnalysisReport {
        let started = Instant::now();
        let mut report = self.build_report(answer);
        report.difficulty = self.difficulty.analyze_question(question);
        report.answer_complexity = Some(self.difficulty.predict(answer));
        report.processing_time_ms = started.elapsed().as_millis() as u64;

        debug!(summary = %report.summary_line(), "question-and-answer analysis complete");
        report
    }

    fn build_report(&self, answer: &str) -> AnalysisReport {
        let mut report = AnalysisReport::new(answer.to_string());

        report.summary = self.summarizer.summarize(answer);
        report.keywords = self.keywords.extract(answer);
        report.keyword_count = report.keywords.len();
        report.key_points = self.key_points.select(answer);
        report.key_points_count = report.key_points.len();
        report.paragraphs = self.paragraphs.segment(answer);

        report
    }
}
