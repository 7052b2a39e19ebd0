//! poker-vision — describe a poker table screenshot with a local vision model
//!
//! Usage:
//!   poker-vision [IMAGE_PATH] [MODEL_ID]
//!
//! Without IMAGE_PATH the path is read from stdin. Configuration comes from
//! `POKER_VISION_CONFIG` (YAML file) and `POKER_VISION_*` overrides.

use anyhow::Context;
use poker_vision::input::request_from_args;
use poker_vision::{AnalyzerConfig, ConsoleInput, InputProvider, PokerAnalyzer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Failed to analyze screenshot: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AnalyzerConfig::from_env().context("loading configuration")?;
    let analyzer = PokerAnalyzer::new(config)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = match request_from_args(&args) {
        Some(request) => request,
        None => match ConsoleInput::stdio().next_request().await? {
            Some(request) => request,
            None => anyhow::bail!("no screenshot path given"),
        },
    };

    println!(
        "Analyzing poker screenshot: {}",
        request.image_path().display()
    );
    let result = analyzer.analyze(&request).await?;
    println!("{}", result);
    println!("\nAnalysis complete!");
    Ok(())
}
