//! Application configuration.
//!
//! All settings come from the environment (optionally via a `.env` file loaded
//! at startup). Provider API keys are optional: when none is set the generator
//! falls back to canned answers, so a developer can run the whole pipeline
//! without credentials.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::AppError;

const DEFAULT_ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-sonnet-20240229";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Runtime configuration for the generation providers.
#[derive(Debug, Clone)]
pub struct Config {
    /// Anthropic API key (`ANTHROPIC_API_KEY`), tried first when present.
    pub anthropic_api_key: Option<String>,
    /// OpenAI API key (`OPENAI_API_KEY`), tried second when present.
    pub openai_api_key: Option<String>,
    /// Anthropic messages endpoint; overridable for tests.
    pub anthropic_url: Url,
    /// OpenAI chat-completions endpoint; overridable for tests.
    pub openai_url: Url,
    pub anthropic_model: String,
    pub openai_model: String,
    /// Upper bound on a single provider request.
    pub api_timeout: Duration,
    /// Token budget passed to the providers.
    pub max_tokens: u32,
}

impl Config {
    /// Loads the configuration from the process environment.
    ///
    /// Missing variables fall back to defaults; malformed ones (bad URL,
    /// non-numeric timeout) are reported as `AppError::Config` rather than
    /// silently ignored.
    pub fn from_env() -> Result<Self, AppError> {
        let anthropic_api_key = non_empty_var("ANTHROPIC_API_KEY");
        let openai_api_key = non_empty_var("OPENAI_API_KEY");

        let anthropic_url = url_var("ANSWERLENS_ANTHROPIC_URL", DEFAULT_ANTHROPIC_URL)?;
        let openai_url = url_var("ANSWERLENS_OPENAI_URL", DEFAULT_OPENAI_URL)?;

        let anthropic_model = non_empty_var("ANSWERLENS_ANTHROPIC_MODEL")
            .unwrap_or_else(|| DEFAULT_ANTHROPIC_MODEL.to_string());
        let openai_model = non_empty_var("ANSWERLENS_OPENAI_MODEL")
            .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());

        let api_timeout = Duration::from_secs(numeric_var(
            "ANSWERLENS_API_TIMEOUT_SECS",
            DEFAULT_API_TIMEOUT_SECS,
        )?);
        let max_tokens = numeric_var("ANSWERLENS_MAX_TOKENS", u64::from(DEFAULT_MAX_TOKENS))? as u32;

        Ok(Self {
            anthropic_api_key,
            openai_api_key,
            anthropic_url,
            openai_url,
            anthropic_model,
            openai_model,
            api_timeout,
            max_tokens,
        })
    }
}

impl Default for Config {
    /// Offline defaults: no API keys, public endpoints, standard limits.
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            openai_api_key: None,
            anthropic_url: Url::parse(DEFAULT_ANTHROPIC_URL)
                .expect("default Anthropic URL is valid"),
            openai_url: Url::parse(DEFAULT_OPENAI_URL).expect("default OpenAI URL is valid"),
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            api_timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn url_var(name: &str, default: &str) -> Result<Url, AppError> {
    let raw = non_empty_var(name).unwrap_or_else(|| default.to_string());
    Url::parse(&raw).map_err(|e| AppError::Config(format!("{}: invalid URL '{}': {}", name, raw, e)))
}

fn numeric_var(name: &str, default: u64) -> Result<u64, AppError> {
    match non_empty_var(name) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| AppError::Config(format!("{}: invalid number '{}': {}", name, raw, e))),
        None => Ok(default),
    }
}
