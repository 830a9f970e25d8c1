//! flokkrd — flokkr web daemon.
//!
//! Serves the single-page classification UI and the JSON API over HTTP.

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use flokkr::config::resolve_api_key;
use flokkr::server::config::Config;
use flokkr::{
    Classifier, ClassifierConfig, DEFAULT_MODEL, OpenAiClient, RetryConfig,
    RetryingCompletionProvider,
};

/// Flokkr web daemon.
#[derive(Parser)]
#[command(name = "flokkrd")]
#[command(version)]
#[command(about = "Flokkr text classification web daemon")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: info for the daemon; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    let classifier = build_classifier(&config)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        model = classifier.model(),
        "flokkrd starting"
    );

    flokkr::server::run(classifier, config).await?;

    Ok(())
}

/// Build the classifier from daemon configuration and the environment.
fn build_classifier(config: &Config) -> Result<Classifier, Box<dyn std::error::Error>> {
    let api_key = resolve_api_key(None)?;
    let provider = Arc::new(RetryingCompletionProvider::new(
        Arc::new(OpenAiClient::new(api_key)),
        RetryConfig::default(),
    ));

    let model = config
        .classifier
        .model
        .clone()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let mut builder = Classifier::builder().provider(provider).model(model);
    if let Some(path) = &config.classifier.config_file {
        builder = builder.config(&ClassifierConfig::load(path)?)?;
    }
    Ok(builder.build()?)
}
