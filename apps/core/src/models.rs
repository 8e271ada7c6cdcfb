use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::analysis::AnalysisReport;

/// An incoming question, validated at the service boundary before any
/// analysis code runs. The analysis functions themselves are total and never
/// reject input; malformed requests are stopped here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionRequest {
    #[validate(length(min = 1, max = 2000, message = "question must be between 1 and 2000 characters"))]
    pub question: String,
}

impl QuestionRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// The complete response for one answered question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerEnvelope {
    pub success: bool,
    /// The question as received.
    pub question: String,
    /// Full analysis of the generated answer.
    pub result: AnalysisReport,
}
