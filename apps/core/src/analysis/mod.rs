//! Answer analysis pipeline.
//!
//! Heuristic, dependency-light text analysis run over generated answers:
//! keyword extraction, key-point selection, extractive summarization,
//! paragraph segmentation, and difficulty classification.

pub mod analyzer;
pub mod difficulty;
pub mod key_points;
pub mod keywords;
pub mod lexicon;
pub mod paragraphs;
pub mod report;
pub mod summary;
pub mod text;

pub use analyzer::AnswerAnalyzer;
pub use difficulty::{Difficulty, DifficultyClassifier};
pub use key_points::KeyPointSelector;
pub use keywords::KeywordExtractor;
pub use paragraphs::ParagraphSegmenter;
pub use report::AnalysisReport;
pub use summary::Summarizer;
