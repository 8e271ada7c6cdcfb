use tokio::sync::oneshot;

use crate::models::AnswerEnvelope;

// Re-export AppError for convenience
pub use crate::error::AppError;

/// Messages that can be sent to the generator actor.
#[derive(Debug)]
pub enum GeneratorMessage {
    /// A request to produce an answer for a question.
    Generate {
        question: String,
        /// A channel to send the final answer text back.
        responder: oneshot::Sender<Result<String, AppError>>,
    },
}

/// Messages that can be sent to the supervisor actor.
#[derive(Debug)]
pub enum SupervisorMessage {
    /// A request to answer a question and analyze the result.
    AnswerQuestion {
        question: String,
        /// A channel to send the final envelope back.
        responder: oneshot::Sender<Result<AnswerEnvelope, AppError>>,
    },
    /// A command to shut down the supervisor.
    #[allow(dead_code)]
    Shutdown,
}
