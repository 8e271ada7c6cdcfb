// AnswerLens Backend Entry Point
// Question answering with heuristic answer analysis.

mod actors;
mod analysis;
mod config;
mod error;
mod fallback;
mod models;

#[cfg(test)]
mod tests;

use anyhow::Context;
use tracing::info;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use actors::supervisor::SupervisorHandle;
use config::Config;

fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let formatting_layer = BunyanFormattingLayer::new("answerlens".into(), std::io::stderr);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    // Logs go to stderr so stdout stays clean for the JSON result.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_telemetry();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: answerlens-core <question>");
        std::process::exit(2);
    }
    let question = args.join(" ");

    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        anthropic = config.anthropic_api_key.is_some(),
        openai = config.openai_api_key.is_some(),
        "starting with provider availability"
    );

    let supervisor = SupervisorHandle::new(config);
    let envelope = supervisor
        .answer_question(question)
        .await
        .context("failed to answer question")?;

    let output =
        serde_json::to_string_pretty(&envelope).context("failed to serialize result")?;
    println!("{}", output);

    Ok(())
}
