//! Actor Tests
//!
//! Provider-chain behavior of the generator actor, exercised against mocked
//! HTTP providers.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::actors::generator::GeneratorHandle;
use crate::actors::traits::AnswerGenerator;
use crate::config::Config;

fn config_with_mock(server: &MockServer, anthropic_key: Option<&str>, openai_key: Option<&str>) -> Config {
    let mut config = Config::default();
    config.anthropic_url = Url::parse(&format!("{}/v1/messages", server.uri())).unwrap();
    config.openai_url = Url::parse(&format!("{}/v1/chat/completions", server.uri())).unwrap();
    config.anthropic_api_key = anthropic_key.map(str::to_string);
    config.openai_api_key = openai_key.map(str::to_string);
    config
}

#[cfg(test)]
mod provider_chain_tests {
    use super::*;

    #[tokio::test]
    async fn test_openai_only_configuration_skips_anthropic() {
        // 1. Arrange: only the OpenAI endpoint is mounted. With no Anthropic
        // key, nothing should ever hit the messages path.
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "From OpenAI." } }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let handle = GeneratorHandle::new(config_with_mock(&mock_server, None, Some("sk-test")));

        // 2. Act
        let answer = handle.generate("What is entropy?".to_string()).await.unwrap();

        // 3. Assert
        assert_eq!(answer, "From OpenAI.");
    }

    #[tokio::test]
    async fn test_anthropic_request_carries_model_and_prompt() {
        // 1. Arrange: the mock only matches when the payload carries the
        // configured model and a messages array wrapping the question.
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "ak-test"))
            .and(body_partial_json(json!({
                "model": "claude-3-sonnet-20240229",
                "max_tokens": 1000,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{ "type": "text", "text": "From Anthropic." }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let handle = GeneratorHandle::new(config_with_mock(&mock_server, Some("ak-test"), None));

        // 2. Act
        let answer = handle.generate("What is entropy?".to_string()).await.unwrap();

        // 3. Assert
        assert_eq!(answer, "From Anthropic.");
    }

    #[tokio::test]
    async fn test_handle_is_cloneable_and_shareable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "shared" } }]
            })))
            .mount(&mock_server)
            .await;

        let handle = GeneratorHandle::new(config_with_mock(&mock_server, None, Some("sk-test")));
        let clone = handle.clone();

        let (a, b) = tokio::join!(
            handle.generate("First question?".to_string()),
            clone.generate("Second question?".to_string()),
        );
        assert_eq!(a.unwrap(), "shared");
        assert_eq!(b.unwrap(), "shared");
    }
}
