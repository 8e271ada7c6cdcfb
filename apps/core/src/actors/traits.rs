use async_trait::async_trait;

use crate::error::AppError;

/// Defines the public interface for an answer generator.
///
/// This trait abstracts the specific implementation of answer generation,
/// allowing different backends (remote provider chain, local fallback, test
/// mocks) to be used interchangeably.
#[async_trait]
pub trait AnswerGenerator: Send + Sync + 'static {
    /// Produces a complete answer for the given question.
    async fn generate(&self, question: String) -> Result<String, AppError>;
}
