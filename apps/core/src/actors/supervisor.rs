use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{timeout, Duration};
use tracing::{error, info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::actors::generator::GeneratorHandle;
use crate::actors::messages::{AppError, SupervisorMessage};
use crate::actors::traits::AnswerGenerator;
use crate::analysis::AnswerAnalyzer;
use crate::config::Config;
use crate::models::{AnswerEnvelope, QuestionRequest};

/// A handle to the supervisor actor.
///
/// This is the primary entry point for all business logic: it orchestrates the
/// generator actor and the analysis pipeline to turn a question into a fully
/// analyzed answer.
#[derive(Clone)]
pub struct SupervisorHandle {
    sender: mpsc::Sender<SupervisorMessage>,
}

impl SupervisorHandle {
    /// Creates a new supervisor actor and returns a handle to it.
    ///
    /// This spawns the supervisor and its generator child actor.
    pub fn new(config: Config) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let actor = SupervisorRunner::new(receiver, Arc::new(GeneratorHandle::new(config)));
        tokio::spawn(async move { actor.run().await });
        Self { sender }
    }

    /// Answers a question and analyzes the result.
    ///
    /// The question is validated, delegated to the generator actor, and the
    /// returned answer is run through the full analysis pipeline.
    #[instrument(skip(self))]
    pub async fn answer_question(&self, question: String) -> Result<AnswerEnvelope, AppError> {
        QuestionRequest::new(question.clone()).validate()?;

        let (send, recv) = oneshot::channel();
        let msg = SupervisorMessage::AnswerQuestion {
            question,
            responder: send,
        };
        self.sender
            .send(msg)
            .await
            .map_err(|e| AppError::Actor(e.to_string()))?;
        timeout(Duration::from_secs(120), recv)
            .await?
            .map_err(|e| AppError::Actor(e.to_string()))?
    }
}

// --- Actor Runner ---
struct SupervisorRunner<G>
where
    G: AnswerGenerator,
{
    receiver: mpsc::Receiver<SupervisorMessage>,
    generator: Arc<G>,
    analyzer: AnswerAnalyzer,
}

impl<G> SupervisorRunner<G>
where
    G: AnswerGenerator,
{
    fn new(receiver: mpsc::Receiver<SupervisorMessage>, generator: Arc<G>) -> Self {
        Self {
            receiver,
            generator,
            analyzer: AnswerAnalyzer::new(),
        }
    }

    async fn run(mut self) {
        info!("Supervisor started");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SupervisorMessage::AnswerQuestion {
                    question,
                    responder,
                } => {
                    let result = self.handle_question(question).await;
                    if let Err(e) = &result {
                        error!("Error answering question: {:?}", e);
                    }
                    let _ = responder.send(result);
                }
                SupervisorMessage::Shutdown => {
                    info!("Supervisor shutting down...");
                    break;
                }
            }
        }
        info!("Supervisor stopped");
    }

    #[instrument(skip(self), fields(request_id = %Uuid::new_v4()))]
    async fn handle_question(&mut self, question: String) -> Result<AnswerEnvelope, AppError> {
        info!("Supervisor received question: {}", question);

        let answer = self.generator.generate(question.clone()).await?;
        let report = self.analyzer.process_question_and_answer(&question, &answer);

        info!(summary = %report.summary_line(), "question answered");

        Ok(AnswerEnvelope {
            success: true,
            question,
            result: report,
        })
    }
}
