//! flokkr — text classification CLI.
//!
//! Classifies a single text, a batch file, piped stdin, or runs an
//! interactive loop when no input is given on a terminal.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use flokkr::config::resolve_api_key;
use flokkr::input::{read_texts, to_pretty_json, write_records};
use flokkr::{
    Classifier, ClassifierConfig, DEFAULT_MODEL, LabelSet, OpenAiClient, RetryConfig,
    RetryingCompletionProvider,
};

/// Text classification with a hosted LLM.
#[derive(Parser)]
#[command(name = "flokkr")]
#[command(version)]
#[command(about = "Classify text into configured labels using a hosted LLM")]
struct Args {
    /// Text to classify (or use --file for batch processing)
    input: Option<String>,

    /// Path to a file containing texts (one per line or a JSON array)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Path to a JSON config file with labels and prompt template
    #[arg(long)]
    config: Option<PathBuf>,

    /// Model to use
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Output file path (default: stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Custom labels (overrides the config file)
    #[arg(long, num_args = 1..)]
    labels: Option<Vec<String>>,

    /// API key (default: the OPENAI_API_KEY environment variable)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let classifier = build_classifier(&args)?;

    let results = if let Some(path) = &args.file {
        let texts = read_texts(path)?;
        classifier.classify_batch(&texts).await
    } else if let Some(input) = &args.input {
        vec![classifier.classify(input).await]
    } else if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        let text = buf.trim();
        if text.is_empty() {
            return Err("no input provided (pass text as argument, via stdin, or with --file)".into());
        }
        vec![classifier.classify(text).await]
    } else {
        return interactive(&classifier).await;
    };

    match &args.output {
        Some(path) => {
            write_records(&results, path)?;
            println!("results written to {}", path.display());
        }
        None => println!("{}", to_pretty_json(&results)?),
    }

    Ok(())
}

/// Build the classifier from CLI flags, config file, and environment.
fn build_classifier(args: &Args) -> Result<Classifier, Box<dyn std::error::Error>> {
    let api_key = resolve_api_key(args.api_key.as_deref())?;
    let provider = Arc::new(RetryingCompletionProvider::new(
        Arc::new(OpenAiClient::new(api_key)),
        RetryConfig::default(),
    ));

    let mut builder = Classifier::builder().provider(provider).model(&args.model);
    if let Some(path) = &args.config {
        builder = builder.config(&ClassifierConfig::load(path)?)?;
    }
    if let Some(labels) = &args.labels {
        builder = builder.labels(LabelSet::new(labels.clone())?);
    }
    Ok(builder.build()?)
}

/// Interactive classification loop.
async fn interactive(classifier: &Classifier) -> Result<(), Box<dyn std::error::Error>> {
    println!("flokkr — interactive mode (enter 'quit' to exit)");
    println!("labels: {}", classifier.labels().join(", "));

    loop {
        let text: String = dialoguer::Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()?;
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        if matches!(text.to_lowercase().as_str(), "quit" | "exit" | "q") {
            break;
        }
        let record = classifier.classify(text).await;
        println!("{}", serde_json::to_string_pretty(&record)?);
    }

    Ok(())
}
