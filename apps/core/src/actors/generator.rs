use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;
use tracing::{info, warn};

use crate::actors::messages::{AppError, GeneratorMessage};
use crate::actors::traits::AnswerGenerator;
use crate::config::Config;
use crate::fallback::FallbackAnswerer;

/// Ceiling on a full generate round-trip through the actor, covering both
/// provider attempts plus channel overhead.
const GENERATE_TIMEOUT: Duration = Duration::from_secs(90);

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// A handle to the generator actor.
///
/// This struct provides a public, cloneable interface for sending messages to
/// the running generator actor. It abstracts away the `mpsc::Sender`.
#[derive(Clone)]
pub struct GeneratorHandle {
    sender: mpsc::Sender<GeneratorMessage>,
}

impl GeneratorHandle {
    /// Creates a new generator actor and returns a handle to it.
    ///
    /// This will spawn the `GeneratorRunner` in a new Tokio task.
    pub fn new(config: Config) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let actor = GeneratorRunner::new(receiver, config);
        tokio::spawn(async move { actor.run().await });
        Self { sender }
    }
}

#[async_trait]
impl AnswerGenerator for GeneratorHandle {
    async fn generate(&self, question: String) -> Result<String, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = GeneratorMessage::Generate {
            question,
            responder: send,
        };

        self.sender
            .send(msg)
            .await
            .map_err(|e| AppError::Actor(e.to_string()))?;
        timeout(GENERATE_TIMEOUT, recv)
            .await?
            .map_err(|e| AppError::Actor(e.to_string()))?
    }
}

// --- Actor Runner (Internal Logic) ---
struct GeneratorRunner {
    receiver: mpsc::Receiver<GeneratorMessage>,
    config: Config,
    client: Client,
    fallback: FallbackAnswerer,
}

impl GeneratorRunner {
    fn new(receiver: mpsc::Receiver<GeneratorMessage>, config: Config) -> Self {
        let client = Client::builder()
            .timeout(config.api_timeout)
            .build()
            .unwrap_or_default();

        Self {
            receiver,
            config,
            client,
            fallback: FallbackAnswerer::new(),
        }
    }

    async fn run(mut self) {
        info!("Generator actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle_message(msg).await;
        }

        info!("Generator actor stopped");
    }

    async fn handle_message(&mut self, msg: GeneratorMessage) {
        match msg {
            GeneratorMessage::Generate {
                question,
                responder,
            } => {
                let result = self.generate_answer(&question).await;
                let _ = responder.send(result);
            }
        }
    }

    /// Walks the provider chain: Anthropic first, then OpenAI, then the local
    /// fallback. A provider is skipped when its key is absent; a provider
    /// failure is logged and the chain moves on, so this never errors.
    async fn generate_answer(&self, question: &str) -> Result<String, AppError> {
        let prompt = build_prompt(question);

        if self.config.anthropic_api_key.is_some() {
            match self.ask_anthropic(&prompt).await {
                Ok(answer) => return Ok(answer),
                Err(e) => warn!("Anthropic request failed, trying next provider: {}", e),
            }
        }

        if self.config.openai_api_key.is_some() {
            match self.ask_openai(&prompt).await {
                Ok(answer) => return Ok(answer),
                Err(e) => warn!("OpenAI request failed, trying next provider: {}", e),
            }
        }

        info!("No provider available, using fallback answer");
        Ok(self.fallback.generate(question))
    }

    async fn ask_anthropic(&self, prompt: &str) -> Result<String, AppError> {
        let api_key = self
            .config
            .anthropic_api_key
            .as_deref()
            .ok_or_else(|| AppError::Config("Anthropic API key not set".to_string()))?;

        let payload = serde_json::json!({
            "model": self.config.anthropic_model,
            "max_tokens": self.config.max_tokens,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let res = self
            .client
            .post(self.config.anthropic_url.clone())
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Generation(format!(
                "Anthropic request failed with status {}: {}",
                status, body
            )));
        }

        let json: serde_json::Value = res.json().await?;
        json["content"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::Generation("Anthropic response missing content text".to_string())
            })
    }

    async fn ask_openai(&self, prompt: &str) -> Result<String, AppError> {
        let api_key = self
            .config
            .openai_api_key
            .as_deref()
            .ok_or_else(|| AppError::Config("OpenAI API key not set".to_string()))?;

        let payload = serde_json::json!({
            "model": self.config.openai_model,
            "max_tokens": self.config.max_tokens,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let res = self
            .client
            .post(self.config.openai_url.clone())
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Generation(format!(
                "OpenAI request failed with status {}: {}",
                status, body
            )));
        }

        let json: serde_json::Value = res.json().await?;
        json["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::Generation("OpenAI response missing message content".to_string())
            })
    }
}

fn build_prompt(question: &str) -> String {
    format!(
        "Answer this question in a clear, informative way (200-300 words): {}",
        question
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(
        anthropic_url: Option<String>,
        openai_url: Option<String>,
        anthropic_key: Option<&str>,
        openai_key: Option<&str>,
    ) -> Config {
        let mut config = Config::default();
        if let Some(url) = anthropic_url {
            config.anthropic_url = Url::parse(&url).unwrap();
        }
        if let Some(url) = openai_url {
            config.openai_url = Url::parse(&url).unwrap();
        }
        config.anthropic_api_key = anthropic_key.map(str::to_string);
        config.openai_api_key = openai_key.map(str::to_string);
        config.api_timeout = Duration::from_secs(5);
        config
    }

    #[tokio::test]
    async fn test_anthropic_success() {
        // 1. Arrange
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "anthropic-test-key"))
            .and(header_exists("anthropic-version"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{ "type": "text", "text": "Anthropic answer." }]
            })))
            .mount(&mock_server)
            .await;

        let config = test_config(
            Some(format!("{}/v1/messages", mock_server.uri())),
            None,
            Some("anthropic-test-key"),
            None,
        );
        let handle = GeneratorHandle::new(config);

        // 2. Act
        let result = handle.generate("What is rust?".to_string()).await;

        // 3. Assert
        assert_eq!(result.unwrap(), "Anthropic answer.");
    }

    #[tokio::test]
    async fn test_anthropic_failure_falls_back_to_openai() {
        // 1. Arrange
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer openai-test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "OpenAI answer." } }]
            })))
            .mount(&mock_server)
            .await;

        let config = test_config(
            Some(format!("{}/v1/messages", mock_server.uri())),
            Some(format!("{}/v1/chat/completions", mock_server.uri())),
            Some("anthropic-test-key"),
            Some("openai-test-key"),
        );
        let handle = GeneratorHandle::new(config);

        // 2. Act
        let result = handle.generate("What is rust?".to_string()).await;

        // 3. Assert
        assert_eq!(result.unwrap(), "OpenAI answer.");
    }

    #[tokio::test]
    async fn test_no_keys_uses_fallback() {
        // No providers configured: the local template answers.
        let config = test_config(None, None, None, None);
        let handle = GeneratorHandle::new(config);

        let result = handle
            .generate("What is photosynthesis?".to_string())
            .await;

        let answer = result.unwrap();
        assert!(answer.contains("photosynthesis"));
    }

    #[tokio::test]
    async fn test_all_providers_failing_uses_fallback() {
        // 1. Arrange
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&mock_server)
            .await;

        let config = test_config(
            Some(format!("{}/v1/messages", mock_server.uri())),
            Some(format!("{}/v1/chat/completions", mock_server.uri())),
            Some("anthropic-test-key"),
            Some("openai-test-key"),
        );
        let handle = GeneratorHandle::new(config);

        // 2. Act
        let result = handle.generate("Explain gravity.".to_string()).await;

        // 3. Assert
        let answer = result.unwrap();
        assert!(answer.contains("gravity"));
    }

    #[tokio::test]
    async fn test_malformed_provider_body_moves_chain_forward() {
        // Anthropic returns 200 with an unexpected shape; the chain should
        // still end in a usable fallback answer.
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "oops": true })))
            .mount(&mock_server)
            .await;

        let config = test_config(
            Some(format!("{}/v1/messages", mock_server.uri())),
            None,
            Some("anthropic-test-key"),
            None,
        );
        let handle = GeneratorHandle::new(config);

        let result = handle.generate("Describe entropy.".to_string()).await;
        assert!(result.unwrap().contains("entropy"));
    }

    #[tokio::test]
    async fn test_prompt_wraps_question() {
        let prompt = build_prompt("What is a cat?");
        assert!(prompt.contains("200-300 words"));
        assert!(prompt.ends_with("What is a cat?"));
    }
}
